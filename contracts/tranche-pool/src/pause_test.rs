use crate::test_helpers::{PoolFixture, STARTING_BALANCE};
use crate::{PauseType, PoolError, Tranche};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_deposit_pause_blocks_deposits_only() {
    let f = PoolFixture::new();
    let user = f.funded_user();
    f.approve_pool(&user, 10_000);
    f.client.deposit_aa(&user, &5_000);

    f.client.set_pause(&f.admin, &PauseType::Deposit, &true);
    assert!(f.client.is_paused(&PauseType::Deposit));
    assert!(!f.client.is_paused(&PauseType::Withdraw));

    assert_eq!(
        f.client.try_deposit_aa(&user, &1_000),
        Err(Ok(PoolError::Paused))
    );
    assert_eq!(f.client.withdraw_aa(&user, &1_000), 1_000);

    f.client.set_pause(&f.admin, &PauseType::Deposit, &false);
    assert_eq!(f.client.deposit_aa(&user, &1_000), 1_000);
}

#[test]
fn test_withdraw_pause_blocks_withdraw_and_redeem() {
    let f = PoolFixture::new();
    let user = f.funded_user();
    f.approve_pool(&user, 10_000);
    f.client.deposit_bb(&user, &5_000);

    f.client.set_pause(&f.admin, &PauseType::Withdraw, &true);

    assert_eq!(
        f.client.try_withdraw_bb(&user, &1_000),
        Err(Ok(PoolError::Paused))
    );
    assert_eq!(
        f.client.try_redeem_from_tranche(&user, &Tranche::Junior, &1_000),
        Err(Ok(PoolError::Paused))
    );
    assert_eq!(f.client.balance_of(&user, &Tranche::Junior), 5_000);
}

#[test]
fn test_global_pause() {
    let f = PoolFixture::new();
    let user = f.funded_user();
    f.approve_pool(&user, 10_000);

    f.client.set_pause(&f.admin, &PauseType::All, &true);
    assert!(f.client.is_paused(&PauseType::Deposit));
    assert!(f.client.is_paused(&PauseType::Withdraw));

    assert_eq!(
        f.client.try_deposit_bb(&user, &1_000),
        Err(Ok(PoolError::Paused))
    );
    assert_eq!(f.token.balance(&user), STARTING_BALANCE);

    f.client.set_pause(&f.admin, &PauseType::All, &false);
    assert_eq!(f.client.deposit_bb(&user, &1_000), 1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_set_pause_unauthorized_address() {
    let f = PoolFixture::new();
    let rando = Address::generate(&f.env);
    f.client.set_pause(&rando, &PauseType::Deposit, &true);
}
