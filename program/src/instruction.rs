//! Program instructions

use {
    solana_instruction::{AccountMeta, Instruction},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
    std::convert::TryInto,
};

/// Instructions supported by the Token Vault program
#[derive(Clone, Debug, PartialEq)]
#[repr(u8)]
pub enum TokenVaultInstruction {
    /// Create the vault token account for a mint and move an initial balance
    /// into it.
    ///
    /// The vault is owned by the program's owner authority PDA, so its funds
    /// can only move through this program. Rent for the vault is paid by the
    /// signer. Fails if the vault already exists.
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[]` Owner authority, address must be:
    ///    `get_owner_authority_address()`
    /// 1. `[w]` Uninitialized vault token account (PDA), address must be:
    ///    `get_vault_address(mint_address)`
    /// 2. `[w]` Sender token account, must hold `mint` and be owned by the
    ///    signer
    /// 3. `[]` Mint of the tokens being sent
    /// 4. `[ws]` Owner of the sender token account, pays for the vault
    /// 5. `[]` System program
    /// 6. `[]` SPL Token program for the mint
    /// 7. `..7+M` `[]` (Optional) M extra accounts required by the mint's
    ///    transfer hook
    Initialize {
        /// little-endian `u64` representing the amount to move into the vault
        amount: u64,
    },
}

impl TokenVaultInstruction {
    /// Packs a [`TokenVaultInstruction`](enum.TokenVaultInstruction.html) into
    /// a byte array.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            TokenVaultInstruction::Initialize { amount } => {
                buf.push(0);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }
        buf
    }

    /// Unpacks a byte array into a
    /// [`TokenVaultInstruction`](enum.TokenVaultInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            Some((&0, rest)) if rest.len() == 8 => {
                let amount = rest
                    .try_into()
                    .map(u64::from_le_bytes)
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Ok(TokenVaultInstruction::Initialize { amount })
            }
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Creates `Initialize` instruction.
#[allow(clippy::too_many_arguments)]
pub fn initialize(
    program_id: &Pubkey,
    owner_authority_address: &Pubkey,
    vault_address: &Pubkey,
    sender_token_account_address: &Pubkey,
    mint_address: &Pubkey,
    signer_address: &Pubkey,
    token_program_id: &Pubkey,
    amount: u64,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*owner_authority_address, false),
        AccountMeta::new(*vault_address, false),
        AccountMeta::new(*sender_token_account_address, false),
        AccountMeta::new_readonly(*mint_address, false),
        AccountMeta::new(*signer_address, true),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        AccountMeta::new_readonly(*token_program_id, false),
    ];

    let data = TokenVaultInstruction::Initialize { amount }.pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}
