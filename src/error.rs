//! Error propagation for the action helpers.

use {
    solana_program_test::BanksClientError, solana_sdk::program_error::ProgramError,
    thiserror::Error,
};

/// Errors surfaced by the action helpers.
///
/// Failures are detected by the banks client or the token program library and
/// passed through unmodified; the only locally produced variants are the two
/// account sanity checks performed before decoding.
#[derive(Debug, Error)]
pub enum TokenClientError {
    #[error("client error: {0}")]
    Client(#[from] BanksClientError),
    #[error("program error: {0}")]
    Program(#[from] ProgramError),
    #[error("account not found")]
    AccountNotFound,
    #[error("invalid account owner")]
    AccountInvalidOwner,
}

pub type TokenClientResult<T> = Result<T, TokenClientError>;
