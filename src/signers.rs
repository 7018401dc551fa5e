//! Authority argument handling for `mint_to` and `transfer`.

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

/// An authority for a token operation, given either as a bare address or as
/// a locally held signer.
#[derive(Clone, Copy)]
pub enum TokenAuthority<'a> {
    /// The authority is an address whose signatures are provided externally,
    /// e.g. a multisig account whose member keypairs are passed separately.
    Address(Pubkey),
    /// The authority holds its own key and signs the transaction itself.
    Signer(&'a Keypair),
}

/// Normalize an authority argument into the effective authority address and
/// the list of local signers to attach to the transaction.
///
/// A bare [`TokenAuthority::Address`] is assumed to be signed for externally,
/// so `multi_signers` is passed through unchanged. A full
/// [`TokenAuthority::Signer`] signs for itself and becomes the sole local
/// signer.
pub fn resolve_signers<'a>(
    authority: TokenAuthority<'a>,
    multi_signers: &[&'a Keypair],
) -> (Pubkey, Vec<&'a Keypair>) {
    match authority {
        TokenAuthority::Address(address) => (address, multi_signers.to_vec()),
        TokenAuthority::Signer(signer) => (signer.pubkey(), vec![signer]),
    }
}
