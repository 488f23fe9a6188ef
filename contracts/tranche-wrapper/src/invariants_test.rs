use crate::test_helpers::{WrapperFixture, STARTING_BALANCE};
use crate::{Tranche, TrancheWrapper, TrancheWrapperClient, PRICE_SCALAR};
use soroban_sdk::String;

#[test]
fn test_round_trip_returns_deposit_at_flat_price() {
    let f = WrapperFixture::new();
    let user = f.depositor(7_777);

    let shares = f.client.balance(&user);
    assert_eq!(f.client.redeem(&user, &shares, &user, &user), 7_777);
    assert_eq!(f.token.balance(&user), STARTING_BALANCE);
    f.assert_supply_invariant();
}

#[test]
fn test_round_trip_never_profits_after_yield() {
    let f = WrapperFixture::new();
    f.depositor(1_000);
    f.donate(tranche_pool::Tranche::Senior, 500);

    let user = f.funded_user();
    f.approve_wrapper(&user, 1_501);
    let shares = f.client.deposit(&user, &1_501, &user);
    assert_eq!(shares, 1_000);

    let back = f.client.redeem(&user, &shares, &user, &user);
    assert!(back <= 1_501);
    assert_eq!(f.token.balance(&user), STARTING_BALANCE - 1_501 + back);
    f.assert_supply_invariant();
}

#[test]
fn test_mint_then_redeem_never_returns_more() {
    let f = WrapperFixture::new();
    f.depositor(3_000);
    f.donate(tranche_pool::Tranche::Senior, 1_000);

    let user = f.funded_user();
    f.approve_wrapper(&user, 1_000);
    let paid = f.client.mint(&user, &7, &user);
    let minted = f.client.balance(&user);
    assert!(minted >= 7);

    let back = f.client.redeem(&user, &minted, &user, &user);
    assert!(back <= paid);
    f.assert_supply_invariant();
}

#[test]
fn test_previews_match_execution() {
    let f = WrapperFixture::new();
    let user = f.depositor(1_000);
    f.donate(tranche_pool::Tranche::Senior, 500);

    assert_eq!(f.client.current_price(), 15 * PRICE_SCALAR / 10);
    assert_eq!(f.client.total_assets(), 1_500);
    assert_eq!(f.client.convert_to_shares(&300), 200);
    assert_eq!(f.client.convert_to_assets(&200), 300);

    let expected = f.client.preview_withdraw(&100);
    assert_eq!(f.client.withdraw(&user, &100, &user, &user), expected);

    let expected = f.client.preview_redeem(&50);
    assert_eq!(f.client.redeem(&user, &50, &user, &user), expected);

    let other = f.funded_user();
    f.approve_wrapper(&other, 600);
    let expected = f.client.preview_deposit(&600);
    assert_eq!(f.client.deposit(&other, &600, &other), expected);
    f.assert_supply_invariant();
}

#[test]
fn test_supply_invariant_across_mixed_activity() {
    let f = WrapperFixture::new();
    let a = f.depositor(4_000);
    let b = f.depositor(6_000);
    f.assert_supply_invariant();

    f.donate(tranche_pool::Tranche::Senior, 2_000);
    f.client.withdraw(&a, &1_000, &a, &a);
    f.assert_supply_invariant();

    f.client.transfer(&b, &a, &500);
    f.client.redeem(&a, &500, &b, &a);
    f.assert_supply_invariant();

    let c = f.funded_user();
    f.approve_wrapper(&c, 5_000);
    f.client.mint(&c, &100, &c);
    f.client.deposit(&c, &1_000, &c);
    f.assert_supply_invariant();

    let all = f.client.balance(&b);
    f.client.redeem(&b, &all, &b, &b);
    f.assert_supply_invariant();
    assert_eq!(f.client.balance(&b), 0);
}

#[test]
fn test_wrappers_on_both_tranches_share_one_pool() {
    let f = WrapperFixture::new();
    let junior = f.env.register(TrancheWrapper, ());
    let junior_client = TrancheWrapperClient::new(&f.env, &junior);
    junior_client.initialize(
        &f.admin,
        &f.pool,
        &Tranche::Junior,
        &String::from_str(&f.env, "Junior wrapper share"),
        &String::from_str(&f.env, "JWS"),
    );

    let addr1 = f.funded_user();
    let addr2 = f.funded_user();
    let addr3 = f.funded_user();

    f.approve_wrapper(&addr1, 10_000);
    assert_eq!(f.client.deposit(&addr1, &10_000, &addr1), 10_000);

    f.token.approve(&addr2, &junior, &10_000, &1000);
    assert_eq!(junior_client.deposit(&addr2, &10_000, &addr2), 10_000);

    f.approve_wrapper(&addr3, 10_000);
    assert_eq!(f.client.deposit(&addr3, &10_000, &addr3), 5_000);

    f.assert_supply_invariant();
    assert_eq!(
        junior_client.total_supply(),
        f.pool_client
            .balance_of(&junior, &tranche_pool::Tranche::Junior)
    );
    assert_eq!(junior_client.held_tranche_shares(), 10_000);
    assert_eq!(f.token.balance(&f.pool), 30_000);
    assert_eq!(f.token.balance(&junior), 0);

    // The junior wrapper fully exits without touching senior positions
    assert_eq!(junior_client.redeem(&addr2, &10_000, &addr2, &addr2), 10_000);
    assert_eq!(f.client.total_supply(), 15_000);
    f.assert_supply_invariant();
}
