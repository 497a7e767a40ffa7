//! Error types

use {
    num_derive::FromPrimitive,
    solana_decode_error::DecodeError,
    solana_msg::msg,
    solana_program_error::{PrintProgramError, ProgramError},
    std::error::Error,
    thiserror::Error,
};

/// Errors that may be returned by the Token Vault program.
#[derive(Clone, Debug, Eq, Error, PartialEq, FromPrimitive)]
pub enum TokenVaultError {
    // 0
    /// Supplied PDA address does not match the re-derived address
    #[error("Supplied PDA address does not match the re-derived address")]
    AddressMismatch,
    /// Vault token account already exists for this mint
    #[error("Vault token account already exists for this mint")]
    AccountAlreadyInitialized,
    /// Sender token account balance is lower than the requested amount
    #[error("Sender token account balance is lower than the requested amount")]
    InsufficientFunds,
    /// Sender token account does not hold the supplied mint
    #[error("Sender token account does not hold the supplied mint")]
    InvalidMintReference,
    /// Signer is not the owner of the sender token account
    #[error("Signer is not the owner of the sender token account")]
    SenderAuthorityMismatch,
}

impl From<TokenVaultError> for ProgramError {
    fn from(e: TokenVaultError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for TokenVaultError {
    fn type_of() -> &'static str {
        "TokenVaultError"
    }
}

impl PrintProgramError for TokenVaultError {
    fn print<E>(&self)
    where
        E: 'static + Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!(&self.to_string());
    }
}

/// Logs a processor error, decoding custom codes into [`TokenVaultError`]
pub fn log_error(err: &ProgramError) {
    err.print::<TokenVaultError>();
}
