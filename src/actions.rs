//! One-shot token actions against a `BanksClient`.

use {
    crate::{
        error::{TokenClientError, TokenClientResult},
        signers::{resolve_signers, TokenAuthority},
    },
    solana_banks_interface::BanksTransactionResultWithMetadata,
    solana_program_test::BanksClient,
    solana_sdk::{
        account::Account as BaseAccount,
        commitment_config::CommitmentLevel,
        program_pack::Pack,
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        system_instruction,
        transaction::Transaction,
    },
    spl_associated_token_account::{
        get_associated_token_address_with_program_id, instruction as ata_instruction,
    },
    spl_token_2022::{
        extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensionsOwned},
        instruction,
        state::{Account, Mint},
    },
};

/// Optional parameters for [`create_mint`].
#[derive(Default)]
pub struct CreateMintConfig<'a> {
    /// Keypair for the new mint account. A fresh keypair is generated when
    /// absent.
    pub mint_keypair: Option<&'a Keypair>,
    /// Token program that will own the mint. Defaults to `spl_token::id()`.
    pub program_id: Option<&'a Pubkey>,
}

/// Optional parameters for [`create_account`].
#[derive(Default)]
pub struct CreateAccountConfig<'a> {
    /// Keypair for the new token account. When absent, the associated token
    /// account for the (mint, owner) pair is created instead.
    pub account_keypair: Option<&'a Keypair>,
    /// Commitment level for the mint lookup and the creation transaction on
    /// the explicit-keypair path. Defaults to the client's default
    /// commitment.
    pub commitment: Option<CommitmentLevel>,
    /// Token program that will own the account. Defaults to `spl_token::id()`.
    pub program_id: Option<&'a Pubkey>,
}

/// Create and initialize a mint, returning its address.
pub async fn create_mint(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    config: CreateMintConfig<'_>,
) -> TokenClientResult<Pubkey> {
    let program_id = config.program_id.copied().unwrap_or_else(spl_token::id);
    let default_mint_keypair = Keypair::new();
    let mint = config.mint_keypair.unwrap_or(&default_mint_keypair);

    let rent = banks_client.get_rent().await?;
    let mint_rent = rent.minimum_balance(Mint::LEN);
    let recent_blockhash = banks_client.get_latest_blockhash().await?;

    let transaction = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &payer.pubkey(),
                &mint.pubkey(),
                mint_rent,
                Mint::LEN as u64,
                &program_id,
            ),
            instruction::initialize_mint(
                &program_id,
                &mint.pubkey(),
                mint_authority,
                freeze_authority,
                decimals,
            )?,
        ],
        Some(&payer.pubkey()),
        &[payer, mint],
        recent_blockhash,
    );
    banks_client.process_transaction(transaction).await?;

    Ok(mint.pubkey())
}

/// Create and initialize a token account holding `mint` for `owner`,
/// returning its address.
///
/// Without an explicit keypair this is the associated token account for the
/// (mint, owner) pair. With one, the account is allocated with exactly the
/// length the mint's extension set requires.
pub async fn create_account(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
    config: CreateAccountConfig<'_>,
) -> TokenClientResult<Pubkey> {
    let account = match config.account_keypair {
        Some(account) => account,
        None => {
            return create_associated_token_account(
                banks_client,
                payer,
                mint,
                owner,
                config.program_id,
            )
            .await
        }
    };
    let program_id = config.program_id.copied().unwrap_or_else(spl_token::id);

    let mint_state = get_mint(banks_client, mint, config.commitment, Some(&program_id)).await?;
    let mint_extensions = mint_state.get_extension_types()?;
    let required_extensions = ExtensionType::get_required_init_account_extensions(&mint_extensions);
    let space = ExtensionType::try_calculate_account_len::<Account>(&required_extensions)?;

    let rent = banks_client.get_rent().await?;
    let recent_blockhash = banks_client.get_latest_blockhash().await?;

    let transaction = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(space),
                space as u64,
                &program_id,
            ),
            instruction::initialize_account(&program_id, &account.pubkey(), mint, owner)?,
        ],
        Some(&payer.pubkey()),
        &[payer, account],
        recent_blockhash,
    );
    match config.commitment {
        Some(commitment) => {
            banks_client
                .process_transaction_with_commitment(transaction, commitment)
                .await?
        }
        None => banks_client.process_transaction(transaction).await?,
    }

    Ok(account.pubkey())
}

/// Create the associated token account for the (mint, owner) pair, returning
/// its derived address.
pub async fn create_associated_token_account(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
    program_id: Option<&Pubkey>,
) -> TokenClientResult<Pubkey> {
    let program_id = program_id.copied().unwrap_or_else(spl_token::id);
    let associated_token_address =
        get_associated_token_address_with_program_id(owner, mint, &program_id);

    let recent_blockhash = banks_client.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[ata_instruction::create_associated_token_account(
            &payer.pubkey(),
            owner,
            mint,
            &program_id,
        )],
        Some(&payer.pubkey()),
        &[payer],
        recent_blockhash,
    );
    banks_client.process_transaction(transaction).await?;

    Ok(associated_token_address)
}

/// Retrieve and decode mint state.
pub async fn get_mint(
    banks_client: &mut BanksClient,
    address: &Pubkey,
    commitment: Option<CommitmentLevel>,
    program_id: Option<&Pubkey>,
) -> TokenClientResult<StateWithExtensionsOwned<Mint>> {
    let program_id = program_id.copied().unwrap_or_else(spl_token::id);
    let account = fetch_account(banks_client, address, commitment).await?;
    if account.owner != program_id {
        return Err(TokenClientError::AccountInvalidOwner);
    }

    StateWithExtensionsOwned::<Mint>::unpack(account.data).map_err(Into::into)
}

/// Retrieve and decode token account state.
pub async fn get_account(
    banks_client: &mut BanksClient,
    address: &Pubkey,
    commitment: Option<CommitmentLevel>,
    program_id: Option<&Pubkey>,
) -> TokenClientResult<StateWithExtensionsOwned<Account>> {
    let program_id = program_id.copied().unwrap_or_else(spl_token::id);
    let account = fetch_account(banks_client, address, commitment).await?;
    if account.owner != program_id {
        return Err(TokenClientError::AccountInvalidOwner);
    }

    StateWithExtensionsOwned::<Account>::unpack(account.data).map_err(Into::into)
}

/// Mint new supply to `destination`, returning the transaction result with
/// its logs.
pub async fn mint_to(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: TokenAuthority<'_>,
    amount: u64,
    multi_signers: &[&Keypair],
    program_id: Option<&Pubkey>,
) -> TokenClientResult<BanksTransactionResultWithMetadata> {
    let program_id = program_id.copied().unwrap_or_else(spl_token::id);
    let (authority_pubkey, signers) = resolve_signers(authority, multi_signers);
    let signer_pubkeys: Vec<Pubkey> = signers.iter().map(|signer| signer.pubkey()).collect();
    let signer_pubkeys: Vec<&Pubkey> = signer_pubkeys.iter().collect();

    let instruction = instruction::mint_to(
        &program_id,
        mint,
        destination,
        &authority_pubkey,
        &signer_pubkeys,
        amount,
    )?;

    let recent_blockhash = banks_client.get_latest_blockhash().await?;
    let mut signing_keypairs = vec![payer];
    signing_keypairs.extend(signers);
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &signing_keypairs,
        recent_blockhash,
    );
    banks_client
        .process_transaction_with_metadata(transaction)
        .await
        .map_err(Into::into)
}

/// Transfer a balance between token accounts, returning the transaction
/// result with its logs.
pub async fn transfer(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    source: &Pubkey,
    destination: &Pubkey,
    authority: TokenAuthority<'_>,
    amount: u64,
    multi_signers: &[&Keypair],
    program_id: Option<&Pubkey>,
) -> TokenClientResult<BanksTransactionResultWithMetadata> {
    let program_id = program_id.copied().unwrap_or_else(spl_token::id);
    let (authority_pubkey, signers) = resolve_signers(authority, multi_signers);
    let signer_pubkeys: Vec<Pubkey> = signers.iter().map(|signer| signer.pubkey()).collect();
    let signer_pubkeys: Vec<&Pubkey> = signer_pubkeys.iter().collect();

    #[allow(deprecated)]
    let instruction = instruction::transfer(
        &program_id,
        source,
        destination,
        &authority_pubkey,
        &signer_pubkeys,
        amount,
    )?;

    let recent_blockhash = banks_client.get_latest_blockhash().await?;
    let mut signing_keypairs = vec![payer];
    signing_keypairs.extend(signers);
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &signing_keypairs,
        recent_blockhash,
    );
    banks_client
        .process_transaction_with_metadata(transaction)
        .await
        .map_err(Into::into)
}

async fn fetch_account(
    banks_client: &mut BanksClient,
    address: &Pubkey,
    commitment: Option<CommitmentLevel>,
) -> TokenClientResult<BaseAccount> {
    let account = match commitment {
        Some(commitment) => {
            banks_client
                .get_account_with_commitment(*address, commitment)
                .await?
        }
        None => banks_client.get_account(*address).await?,
    };
    account.ok_or(TokenClientError::AccountNotFound)
}
