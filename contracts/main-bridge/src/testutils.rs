#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

use crate::{MainBridge, MainBridgeClient};

pub const CHAIN_ID: u32 = 1;

pub struct TestBridge<'a> {
    pub client: MainBridgeClient<'a>,
    pub owner: Address,
    pub main_admin: Address,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl TestBridge<'_> {
    /// Mints `amount` main tokens to `account` and lets the bridge spend them.
    pub fn fund(&self, account: &Address, amount: i128) {
        let expiration_ledger = self.client.env.ledger().sequence() + 1_000;

        self.token_admin.mint(account, &amount);
        self.token
            .approve(account, &self.client.address, &amount, &expiration_ledger);
    }
}

pub fn setup_bridge<'a>(env: &Env, owner: &Address) -> MainBridgeClient<'a> {
    let contract_id = env.register(MainBridge, (owner,));

    MainBridgeClient::new(env, &contract_id)
}

/// Registers a bridge owned by a fresh address and initializes it with a Stellar asset as main token.
pub fn setup_initialized_bridge<'a>(env: &Env) -> TestBridge<'a> {
    let owner = Address::generate(env);
    let main_admin = Address::generate(env);
    let main_token = env.register_stellar_asset_contract_v2(Address::generate(env));

    let client = setup_bridge(env, &owner);
    client
        .mock_all_auths()
        .initialize(&CHAIN_ID, &main_token.address(), &main_admin);

    TestBridge {
        client,
        owner,
        main_admin,
        token: TokenClient::new(env, &main_token.address()),
        token_admin: StellarAssetClient::new(env, &main_token.address()),
    }
}
