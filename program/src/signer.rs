//! Program-derived signing authority
//!
//! A [`PdaSigner`] can only be obtained by re-deriving a PDA and comparing it
//! against the address the caller supplied. It borrows its seeds for the
//! lifetime of the instruction being processed and is the only way the
//! processor produces signer seeds for `invoke_signed`.

use {
    crate::{
        error::TokenVaultError, get_owner_authority_with_seed_for_program,
        get_vault_address_with_seed_for_program, get_vault_signer_seeds,
    },
    solana_msg::msg,
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
};

/// Verified owner authority PDA for this program deployment
pub(crate) struct OwnerAuthority {
    address: Pubkey,
}

impl OwnerAuthority {
    /// Re-derive the owner authority and check it against `supplied`
    pub(crate) fn verify(program_id: &Pubkey, supplied: &Pubkey) -> Result<Self, ProgramError> {
        let (address, _bump) = get_owner_authority_with_seed_for_program(program_id);
        if *supplied != address {
            msg!(
                "Owner authority {} does not match expected PDA {}",
                supplied,
                address
            );
            return Err(TokenVaultError::AddressMismatch.into());
        }
        Ok(Self { address })
    }

    pub(crate) fn address(&self) -> &Pubkey {
        &self.address
    }
}

/// Right to sign as the vault PDA of one mint, scoped to the current
/// instruction.
pub(crate) struct PdaSigner<'a> {
    mint: &'a Pubkey,
    bump_seed: [u8; 1],
}

impl<'a> PdaSigner<'a> {
    /// Re-derive the vault address for `mint` and check it against `supplied`
    pub(crate) fn for_vault(
        program_id: &Pubkey,
        mint: &'a Pubkey,
        supplied: &Pubkey,
    ) -> Result<Self, ProgramError> {
        let (address, bump) = get_vault_address_with_seed_for_program(mint, program_id);
        if *supplied != address {
            msg!(
                "Vault account {} does not match expected PDA {} for mint {}",
                supplied,
                address,
                mint
            );
            return Err(TokenVaultError::AddressMismatch.into());
        }
        Ok(Self {
            mint,
            bump_seed: [bump],
        })
    }

    pub(crate) fn signer_seeds(&self) -> [&[u8]; 3] {
        get_vault_signer_seeds(self.mint, &self.bump_seed)
    }
}
