
use {
    program_test::program_test,
    solana_program_test::*,
    solana_sdk::{
        program_option::COption,
        pubkey::Pubkey,
        signature::{Keypair, Signer},
    },
    spl_token_actions::{create_mint, get_mint, CreateMintConfig},
    test_case::test_case,
};

#[test_case(spl_token::id() ; "token")]
#[test_case(spl_token_2022::id() ; "token_2022")]
#[tokio::test]
async fn decimals_and_authorities_round_trip(program_id: Pubkey) {
    let (mut banks_client, payer, _recent_blockhash) = program_test().start().await;
    let mint_authority = Pubkey::new_unique();
    let freeze_authority = Pubkey::new_unique();

    let mint = create_mint(
        &mut banks_client,
        &payer,
        &mint_authority,
        Some(&freeze_authority),
        6,
        CreateMintConfig {
            program_id: Some(&program_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let mint_state = get_mint(&mut banks_client, &mint, None, Some(&program_id))
        .await
        .unwrap();
    assert!(mint_state.base.is_initialized);
    assert_eq!(mint_state.base.decimals, 6);
    assert_eq!(mint_state.base.mint_authority, COption::Some(mint_authority));
    assert_eq!(
        mint_state.base.freeze_authority,
        COption::Some(freeze_authority)
    );
    assert_eq!(mint_state.base.supply, 0);
}

#[tokio::test]
async fn no_freeze_authority() {
    let (mut banks_client, payer, _recent_blockhash) = program_test().start().await;
    let mint_authority = Pubkey::new_unique();

    let mint = create_mint(
        &mut banks_client,
        &payer,
        &mint_authority,
        None,
        0,
        CreateMintConfig::default(),
    )
    .await
    .unwrap();

    let mint_state = get_mint(&mut banks_client, &mint, None, None).await.unwrap();
    assert_eq!(mint_state.base.decimals, 0);
    assert_eq!(mint_state.base.freeze_authority, COption::None);
}

#[tokio::test]
async fn explicit_mint_keypair_is_used() {
    let (mut banks_client, payer, _recent_blockhash) = program_test().start().await;
    let mint_authority = Pubkey::new_unique();
    let mint_keypair = Keypair::new();

    let mint = create_mint(
        &mut banks_client,
        &payer,
        &mint_authority,
        None,
        9,
        CreateMintConfig {
            mint_keypair: Some(&mint_keypair),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(mint, mint_keypair.pubkey());
}

#[tokio::test]
async fn reusing_a_mint_keypair_fails() {
    let (mut banks_client, payer, _recent_blockhash) = program_test().start().await;
    let mint_authority = Pubkey::new_unique();
    let mint_keypair = Keypair::new();

    create_mint(
        &mut banks_client,
        &payer,
        &mint_authority,
        None,
        6,
        CreateMintConfig {
            mint_keypair: Some(&mint_keypair),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Different decimals so the second transaction is distinct; the account
    // allocation itself is the step that must fail.
    let error = create_mint(
        &mut banks_client,
        &payer,
        &mint_authority,
        None,
        9,
        CreateMintConfig {
            mint_keypair: Some(&mint_keypair),
            ..Default::default()
        },
    )
    .await;
    assert!(error.is_err());
}
