//! Action helpers for driving SPL Token flows from `solana-program-test`
//! based integration tests.
//!
//! Every helper follows the same shape: build one or two instructions, fetch
//! the latest blockhash from the `BanksClient`, sign with the payer plus
//! whatever authority signers the call requires, and submit. All binary
//! layouts, rent math, associated-address derivation and instruction encoding
//! come from the SPL Token crates; nothing is validated or retried here, so
//! any failure surfaces as the underlying client or program error.
//!
//! Both `spl_token::id()` and `spl_token_2022::id()` are accepted wherever a
//! target program id can be supplied.

pub mod actions;
pub mod error;
pub mod signers;

pub use {
    actions::{
        create_account, create_associated_token_account, create_mint, get_account, get_mint,
        mint_to, transfer, CreateAccountConfig, CreateMintConfig,
    },
    error::{TokenClientError, TokenClientResult},
    signers::{resolve_signers, TokenAuthority},
};
