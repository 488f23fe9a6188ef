use crate::{Tranche, TrancheWrapper, TrancheWrapperClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};
use tranche_pool::{TranchePool, TranchePoolClient as PoolClient};

pub const STARTING_BALANCE: i128 = 10_000;

pub struct WrapperFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub asset: Address,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
    pub pool: Address,
    pub pool_client: PoolClient<'a>,
    pub wrapper: Address,
    pub client: TrancheWrapperClient<'a>,
}

impl<'a> WrapperFixture<'a> {
    /// Wrapper over the senior tranche of a fresh pool
    pub fn new() -> Self {
        Self::for_tranche(Tranche::Senior)
    }

    pub fn for_tranche(tranche: Tranche) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let asset = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        let token = TokenClient::new(&env, &asset);
        let token_admin = StellarAssetClient::new(&env, &asset);

        let pool = env.register(TranchePool, ());
        let pool_client = PoolClient::new(&env, &pool);
        pool_client.initialize(&admin, &asset, &true);

        let wrapper = env.register(TrancheWrapper, ());
        let client = TrancheWrapperClient::new(&env, &wrapper);
        client.initialize(
            &admin,
            &pool,
            &tranche,
            &String::from_str(&env, "Tranche wrapper share"),
            &String::from_str(&env, "TWS"),
        );

        WrapperFixture {
            env,
            admin,
            asset,
            token,
            token_admin,
            pool,
            pool_client,
            wrapper,
            client,
        }
    }

    /// New account funded with `STARTING_BALANCE` of the asset
    pub fn funded_user(&self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &STARTING_BALANCE);
        user
    }

    pub fn approve_wrapper(&self, user: &Address, amount: i128) {
        self.token.approve(user, &self.wrapper, &amount, &1000);
    }

    pub fn approve_pool(&self, user: &Address, amount: i128) {
        self.token.approve(user, &self.pool, &amount, &1000);
    }

    /// Funded user who deposited `amount` through the wrapper
    pub fn depositor(&self, amount: i128) -> Address {
        let user = self.funded_user();
        self.approve_wrapper(&user, amount);
        self.client.deposit(&user, &amount, &user);
        user
    }

    /// Raise the wrapped tranche's price by donating `amount` to it
    pub fn donate(&self, tranche: tranche_pool::Tranche, amount: i128) -> i128 {
        let donor = Address::generate(&self.env);
        self.token_admin.mint(&donor, &amount);
        self.approve_pool(&donor, amount);
        self.pool_client.donate_yield(&donor, &tranche, &amount)
    }

    /// Wrapper share supply equals the tranche shares it holds in the pool
    pub fn assert_supply_invariant(&self) {
        let held = self
            .pool_client
            .balance_of(&self.wrapper, &tranche_pool::Tranche::Senior)
            + self
                .pool_client
                .balance_of(&self.wrapper, &tranche_pool::Tranche::Junior);
        assert_eq!(self.client.total_supply(), held);
        assert_eq!(self.client.held_tranche_shares(), held);
        assert_eq!(self.token.balance(&self.wrapper), 0);
    }
}
