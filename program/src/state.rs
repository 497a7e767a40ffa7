//! Program state
//!
//! The vault program stores no data of its own. Every account it works with
//! is a token program record, read here through the Token-2022 pod layout,
//! which is a superset of the SPL Token layout.

use {
    solana_program_error::ProgramError,
    solana_program_option::COption,
    solana_program_pack::Pack,
    solana_pubkey::Pubkey,
    spl_token_2022::{
        extension::{BaseStateWithExtensions, ExtensionType, PodStateWithExtensions},
        pod::{PodAccount, PodMint},
    },
};

/// Mint fields the vault depends on
#[derive(Clone, Debug, PartialEq)]
pub struct MintState {
    /// Number of base 10 digits to the right of the decimal place
    pub decimals: u8,
    /// Authority allowed to mint new supply, if any
    pub mint_authority: Option<Pubkey>,
    /// Account extensions every token account for this mint must carry
    pub required_account_extensions: Vec<ExtensionType>,
}

impl MintState {
    /// Decode an initialized SPL Token or Token-2022 mint
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mint = PodStateWithExtensions::<PodMint>::unpack(data)?;
        let mint_authority: Option<Pubkey> = mint.base.mint_authority.ok_or(()).ok();
        let required_account_extensions =
            ExtensionType::get_required_init_account_extensions(&mint.get_extension_types()?);

        Ok(Self {
            decimals: mint.base.decimals,
            mint_authority,
            required_account_extensions,
        })
    }

    /// Space needed by a vault token account for this mint.
    ///
    /// Token-2022 vaults also carry `ImmutableOwner`, so the owner authority
    /// can never be reassigned.
    pub fn vault_account_len(&self, token_program_id: &Pubkey) -> Result<usize, ProgramError> {
        if *token_program_id == spl_token_2022::id() {
            let mut extensions = self.required_account_extensions.clone();
            if !extensions.contains(&ExtensionType::ImmutableOwner) {
                extensions.push(ExtensionType::ImmutableOwner);
            }
            ExtensionType::try_calculate_account_len::<PodAccount>(&extensions)
        } else {
            Ok(spl_token::state::Account::LEN)
        }
    }
}

/// Token account fields the vault depends on
#[derive(Clone, Debug, PartialEq)]
pub struct TokenAccountState {
    /// Mint this account holds
    pub mint: Pubkey,
    /// Owner allowed to move the balance
    pub owner: Pubkey,
    /// Balance in the mint's smallest unit
    pub amount: u64,
}

impl TokenAccountState {
    /// Decode an initialized SPL Token or Token-2022 token account
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let account = PodStateWithExtensions::<PodAccount>::unpack(data)?;
        Ok(Self {
            mint: account.base.mint,
            owner: account.base.owner,
            amount: account.base.amount.into(),
        })
    }
}
