//! Token Vault program
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;
mod signer;
pub mod state;

use solana_pubkey::Pubkey;

solana_pubkey::declare_id!("FBFEBPLQXvvrZYbnjvbaW2ZoQoytL6tGx57a9Tcb8Dh5");

const OWNER_AUTHORITY_SEED: &[u8] = br"token_account_owner_pda";

pub(crate) fn get_owner_authority_seeds() -> [&'static [u8]; 1] {
    [OWNER_AUTHORITY_SEED]
}

/// Derive the owner authority and its bump seed for a program deployment
pub fn get_owner_authority_with_seed_for_program(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&get_owner_authority_seeds(), program_id)
}

/// Derive the authority that owns every vault token account
pub fn get_owner_authority_address() -> Pubkey {
    get_owner_authority_address_for_program(&id())
}

/// Derive the vault owner authority for a specific Token Vault program
/// deployment.
pub fn get_owner_authority_address_for_program(program_id: &Pubkey) -> Pubkey {
    get_owner_authority_with_seed_for_program(program_id).0
}

const VAULT_SEED: &[u8] = br"token_vault";

pub(crate) fn get_vault_seeds(mint: &Pubkey) -> [&[u8]; 2] {
    [VAULT_SEED, mint.as_ref()]
}

pub(crate) fn get_vault_signer_seeds<'a>(mint: &'a Pubkey, bump_seed: &'a [u8]) -> [&'a [u8]; 3] {
    [VAULT_SEED, mint.as_ref(), bump_seed]
}

/// Derive the vault address and its bump seed for a program deployment
pub fn get_vault_address_with_seed_for_program(
    mint: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&get_vault_seeds(mint), program_id)
}

/// Derive the vault token account address holding custody of a mint's tokens
pub fn get_vault_address(mint: &Pubkey) -> Pubkey {
    get_vault_address_for_program(mint, &id())
}

/// Derive the vault token account address for a specific Token Vault program
/// deployment.
pub fn get_vault_address_for_program(mint: &Pubkey, program_id: &Pubkey) -> Pubkey {
    get_vault_address_with_seed_for_program(mint, program_id).0
}
