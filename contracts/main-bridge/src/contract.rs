use bridge_std::{ensure, interfaces, only_owner, when_not_paused, Ownable, Upgradable};
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String, Vec};

use crate::error::ContractError;
use crate::interface::MainBridgeInterface;
use crate::types::{AuthorityChange, BridgeConfig, Redemption, SideBridge, SideToken};
use crate::{authority, custody, id, registry, storage};

#[contract]
#[derive(Ownable, Upgradable)]
pub struct MainBridge;

#[contractimpl]
impl MainBridge {
    pub fn __constructor(env: &Env, owner: Address) {
        interfaces::set_owner(env, &owner);
    }
}

impl MainBridge {
    /// Only the owner and the main admin may toggle the pause state.
    fn ensure_pauser(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        let is_admin = storage::try_config(env).is_some_and(|config| config.main_admin == *caller);

        ensure!(
            *caller == Self::owner(env) || is_admin,
            ContractError::NotPauser
        );

        Ok(())
    }
}

#[contractimpl]
impl MainBridgeInterface for MainBridge {
    #[only_owner]
    fn initialize(
        env: &Env,
        chain_id: u32,
        main_token: Address,
        main_admin: Address,
    ) -> Result<(), ContractError> {
        registry::initialize(env, chain_id, main_token, main_admin)
    }

    fn config(env: &Env) -> Option<BridgeConfig> {
        storage::try_config(env)
    }

    fn chain_id(env: &Env) -> Result<u32, ContractError> {
        registry::config(env).map(|config| config.chain_id)
    }

    fn main_token(env: &Env) -> Result<Address, ContractError> {
        registry::config(env).map(|config| config.main_token)
    }

    fn main_admin(env: &Env) -> Result<Address, ContractError> {
        registry::config(env).map(|config| config.main_admin)
    }

    fn paused(env: &Env) -> bool {
        interfaces::paused(env)
    }

    fn pause_bridge(env: &Env, caller: Address) -> Result<(), ContractError> {
        Self::ensure_pauser(env, &caller)?;

        ensure!(!interfaces::paused(env), ContractError::AlreadyPaused);

        interfaces::pause(env);

        Ok(())
    }

    fn resume_bridge(env: &Env, caller: Address) -> Result<(), ContractError> {
        Self::ensure_pauser(env, &caller)?;

        ensure!(interfaces::paused(env), ContractError::NotPaused);

        interfaces::unpause(env);

        Ok(())
    }

    #[only_owner]
    #[when_not_paused(ContractError::BridgePaused)]
    fn register_side_bridge(
        env: &Env,
        peer: Bytes,
        required_signatures: u32,
        authorities: Vec<Address>,
    ) -> Result<(), ContractError> {
        registry::register_side_bridge(env, peer, required_signatures, authorities)
    }

    fn side_bridge(env: &Env) -> Option<SideBridge> {
        storage::try_side_bridge(env)
    }

    fn authorities(env: &Env) -> Vec<Address> {
        registry::authorities(env)
    }

    #[only_owner]
    #[when_not_paused(ContractError::BridgePaused)]
    fn register_side_token(
        env: &Env,
        peer_chain_id: u32,
        name: String,
        symbol: String,
        conversion_rate: u64,
        conversion_rate_decimals: u32,
        expected_id: BytesN<32>,
    ) -> Result<(), ContractError> {
        let side_token = SideToken {
            peer_chain_id,
            name,
            symbol,
            conversion_rate,
            conversion_rate_decimals,
        };

        registry::register_side_token(env, side_token, expected_id)
    }

    fn side_token(env: &Env, side_token_id: BytesN<32>) -> Option<SideToken> {
        storage::try_side_token(env, side_token_id)
    }

    fn side_token_id(
        env: &Env,
        peer_chain_id: u32,
        name: String,
        symbol: String,
        conversion_rate: u64,
        conversion_rate_decimals: u32,
    ) -> Result<BytesN<32>, ContractError> {
        registry::side_token_id(
            env,
            peer_chain_id,
            &name,
            &symbol,
            conversion_rate,
            conversion_rate_decimals,
        )
    }

    #[when_not_paused(ContractError::BridgePaused)]
    fn deposit(
        env: &Env,
        caller: Address,
        side_token_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        custody::deposit(env, caller, side_token_id, amount)
    }

    #[only_owner]
    #[when_not_paused(ContractError::BridgePaused)]
    fn owner_deposit(
        env: &Env,
        on_behalf_of: Address,
        side_token_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), ContractError> {
        custody::deposit(env, on_behalf_of, side_token_id, amount)
    }

    fn deposit_nonce(env: &Env) -> u64 {
        storage::try_deposit_nonce(env).unwrap_or(0)
    }

    #[when_not_paused(ContractError::BridgePaused)]
    fn stake(env: &Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        caller.require_auth();

        custody::stake(env, caller, amount)
    }

    #[when_not_paused(ContractError::BridgePaused)]
    fn unstake(env: &Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        caller.require_auth();

        custody::unstake(env, caller, amount)
    }

    fn staked_amount(env: &Env, staker: Address) -> i128 {
        storage::try_stake(env, staker).unwrap_or(0)
    }

    fn total_staked(env: &Env) -> i128 {
        custody::total_staked(env)
    }

    #[when_not_paused(ContractError::BridgePaused)]
    fn withdraw(
        env: &Env,
        caller: Address,
        redeem_id: BytesN<32>,
        side_token_id: BytesN<32>,
        beneficiary: Address,
        amount: i128,
        peer_tx_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        let redemption = Redemption {
            side_token_id,
            beneficiary,
            amount,
            peer_tx_hash,
            completed: false,
        };

        authority::withdraw(env, caller, redeem_id, redemption)
    }

    fn redeem_id(
        env: &Env,
        side_token_id: BytesN<32>,
        beneficiary: Address,
        amount: i128,
        peer_tx_hash: BytesN<32>,
    ) -> BytesN<32> {
        id::redeem_id(env, &side_token_id, &beneficiary, amount, &peer_tx_hash)
    }

    fn redemption(env: &Env, redeem_id: BytesN<32>) -> Option<Redemption> {
        storage::try_redemption(env, redeem_id)
    }

    fn has_signed(env: &Env, redeem_id: BytesN<32>, authority: Address) -> bool {
        authority::signed_slot(env, &redeem_id, &authority).is_some()
    }

    #[when_not_paused(ContractError::BridgePaused)]
    fn change_authority_request(
        env: &Env,
        caller: Address,
        old_authority: Address,
        new_authority: Address,
    ) -> Result<BytesN<32>, ContractError> {
        authority::request_change(env, caller, old_authority, new_authority)
    }

    #[when_not_paused(ContractError::BridgePaused)]
    fn change_authority(
        env: &Env,
        caller: Address,
        change_id: BytesN<32>,
        old_authority: Address,
        new_authority: Address,
    ) -> Result<(), ContractError> {
        authority::confirm_change(env, caller, change_id, old_authority, new_authority)
    }

    fn authority_change_id(
        env: &Env,
        old_authority: Address,
        new_authority: Address,
        nonce: u64,
    ) -> BytesN<32> {
        id::authority_change_id(env, &old_authority, &new_authority, nonce)
    }

    fn authority_change(env: &Env, change_id: BytesN<32>) -> Option<AuthorityChange> {
        storage::try_authority_change(env, change_id)
    }

    fn is_authority_change_confirmed(env: &Env, change_id: BytesN<32>, authority: Address) -> bool {
        storage::is_authority_change_confirmation(env, change_id, authority)
    }
}
