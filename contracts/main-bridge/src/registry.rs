use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::string::StringExt;
use bridge_std::threshold::validate_signer_set;
use bridge_std::ttl::extend_instance_ttl;
use soroban_sdk::{token, Address, Bytes, BytesN, Env, String, Vec};

use crate::error::ContractError;
use crate::event::{InitializedEvent, SideBridgeRegisteredEvent, SideTokenRegisteredEvent};
use crate::id;
use crate::storage;
use crate::types::{BridgeConfig, SideBridge, SideToken};

const MAX_SYMBOL_LEN: u32 = 7;
const MAX_CONVERSION_RATE_DECIMALS: u32 = 18;

pub fn config(env: &Env) -> Result<BridgeConfig, ContractError> {
    storage::try_config(env).ok_or(ContractError::NotInitialized)
}

pub fn side_bridge(env: &Env) -> Result<SideBridge, ContractError> {
    storage::try_side_bridge(env).ok_or(ContractError::SideBridgeNotRegistered)
}

pub fn authorities(env: &Env) -> Vec<Address> {
    storage::try_authorities(env).unwrap_or_else(|| Vec::new(env))
}

pub fn initialize(
    env: &Env,
    chain_id: u32,
    main_token: Address,
    main_admin: Address,
) -> Result<(), ContractError> {
    ensure!(
        storage::try_config(env).is_none(),
        ContractError::AlreadyInitialized
    );

    let main_token_decimals = token::TokenClient::new(env, &main_token).decimals();

    storage::set_config(
        env,
        &BridgeConfig {
            chain_id,
            main_token: main_token.clone(),
            main_admin: main_admin.clone(),
            main_token_decimals,
        },
    );

    InitializedEvent {
        chain_id,
        main_token,
        main_admin,
        main_token_decimals,
    }
    .emit(env);

    Ok(())
}

pub fn register_side_bridge(
    env: &Env,
    peer: Bytes,
    required_signatures: u32,
    authorities: Vec<Address>,
) -> Result<(), ContractError> {
    config(env)?;

    ensure!(
        storage::try_side_bridge(env).is_none(),
        ContractError::SideBridgeAlreadyRegistered
    );

    validate_signer_set(&authorities, required_signatures)?;
    ensure!(!peer.is_empty(), ContractError::InvalidPeer);

    storage::set_side_bridge(
        env,
        &SideBridge {
            peer: peer.clone(),
            required_signatures,
        },
    );
    storage::set_authorities(env, &authorities);

    SideBridgeRegisteredEvent {
        peer,
        required_signatures,
        authorities,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(())
}

pub fn side_token_id(
    env: &Env,
    peer_chain_id: u32,
    name: &String,
    symbol: &String,
    conversion_rate: u64,
    conversion_rate_decimals: u32,
) -> Result<BytesN<32>, ContractError> {
    let side_bridge = side_bridge(env)?;

    Ok(id::side_token_id(
        env,
        &side_bridge.peer,
        name,
        symbol,
        conversion_rate,
        conversion_rate_decimals,
        peer_chain_id,
    ))
}

pub fn register_side_token(
    env: &Env,
    side_token: SideToken,
    expected_id: BytesN<32>,
) -> Result<(), ContractError> {
    let config = config(env)?;
    side_bridge(env)?;

    ensure!(
        !side_token.name.is_empty() && side_token.name.is_ascii(),
        ContractError::InvalidSideTokenName
    );
    ensure!(
        !side_token.symbol.is_empty()
            && side_token.symbol.len() <= MAX_SYMBOL_LEN
            && side_token.symbol.is_ascii(),
        ContractError::InvalidSideTokenSymbol
    );
    ensure!(
        side_token.conversion_rate > 0
            && side_token.conversion_rate_decimals <= MAX_CONVERSION_RATE_DECIMALS,
        ContractError::InvalidConversionRate
    );

    let side_token_id = side_token_id(
        env,
        side_token.peer_chain_id,
        &side_token.name,
        &side_token.symbol,
        side_token.conversion_rate,
        side_token.conversion_rate_decimals,
    )?;

    ensure!(
        side_token_id == expected_id,
        ContractError::InvalidSideTokenId
    );
    ensure!(
        storage::try_side_token(env, side_token_id.clone()).is_none(),
        ContractError::SideTokenAlreadyRegistered
    );

    storage::set_side_token(env, side_token_id.clone(), &side_token);

    SideTokenRegisteredEvent {
        side_token_id,
        peer_chain_id: side_token.peer_chain_id,
        name: side_token.name,
        symbol: side_token.symbol,
        conversion_rate: side_token.conversion_rate,
        conversion_rate_decimals: side_token.conversion_rate_decimals,
        main_token_decimals: config.main_token_decimals,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(())
}
