use crate::{TranchePool, TranchePoolClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

pub const STARTING_BALANCE: i128 = 10_000;

pub struct PoolFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub pool: Address,
    pub client: TranchePoolClient<'a>,
    pub asset: Address,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl<'a> PoolFixture<'a> {
    /// Pool over a fresh Stellar asset, senior capacity rule on
    pub fn new() -> Self {
        Self::with_capacity_rule(true)
    }

    pub fn with_capacity_rule(senior_capacity_rule: bool) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let asset = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        let token = TokenClient::new(&env, &asset);
        let token_admin = StellarAssetClient::new(&env, &asset);

        let pool = env.register(TranchePool, ());
        let client = TranchePoolClient::new(&env, &pool);
        client.initialize(&admin, &asset, &senior_capacity_rule);

        PoolFixture {
            env,
            admin,
            pool,
            client,
            asset,
            token,
            token_admin,
        }
    }

    /// New account funded with `STARTING_BALANCE` of the asset
    pub fn funded_user(&self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &STARTING_BALANCE);
        user
    }

    pub fn approve_pool(&self, user: &Address, amount: i128) {
        self.token.approve(user, &self.pool, &amount, &1000);
    }
}
