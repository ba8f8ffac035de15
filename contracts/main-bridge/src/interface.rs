use bridge_std::interfaces::{OwnableInterface, UpgradableInterface};
use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, String, Vec};

use crate::error::ContractError;
use crate::types::{AuthorityChange, BridgeConfig, Redemption, SideBridge, SideToken};

#[allow(dead_code)]
#[contractclient(name = "MainBridgeClient")]
pub trait MainBridgeInterface: OwnableInterface + UpgradableInterface {
    /// Sets the chain id, the main token and the main admin. The main token's decimals are read once here.
    ///
    /// # Errors
    /// - [`ContractError::AlreadyInitialized`]: If the bridge was initialized before.
    ///
    /// # Authorization
    /// - [`OwnableInterface::owner`] must authorize.
    fn initialize(
        env: &Env,
        chain_id: u32,
        main_token: Address,
        main_admin: Address,
    ) -> Result<(), ContractError>;

    fn config(env: &Env) -> Option<BridgeConfig>;

    fn chain_id(env: &Env) -> Result<u32, ContractError>;

    fn main_token(env: &Env) -> Result<Address, ContractError>;

    fn main_admin(env: &Env) -> Result<Address, ContractError>;

    /// Returns whether the bridge is paused.
    fn paused(env: &Env) -> bool;

    /// Pauses every bridge operation.
    ///
    /// # Errors
    /// - [`ContractError::NotPauser`]: If `caller` is neither the owner nor the main admin.
    /// - [`ContractError::AlreadyPaused`]: If the bridge is already paused.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn pause_bridge(env: &Env, caller: Address) -> Result<(), ContractError>;

    /// Resumes bridge operations. See [`MainBridgeInterface::pause_bridge`].
    ///
    /// # Errors
    /// - [`ContractError::NotPaused`]: If the bridge is not paused.
    fn resume_bridge(env: &Env, caller: Address) -> Result<(), ContractError>;

    /// Registers the peer bridge and its initial authorities. Can only happen once.
    ///
    /// # Errors
    /// - [`ContractError::InvalidAuthorities`]: If there are 256 authorities or more.
    /// - [`ContractError::DuplicateAuthority`]: If an authority is listed twice.
    /// - [`ContractError::InvalidRequiredSignatures`]: If `required_signatures` is not a strict majority.
    /// - [`ContractError::InvalidPeer`]: If `peer` is empty.
    /// - [`ContractError::SideBridgeAlreadyRegistered`]: If a side bridge is registered.
    ///
    /// # Authorization
    /// - [`OwnableInterface::owner`] must authorize.
    fn register_side_bridge(
        env: &Env,
        peer: Bytes,
        required_signatures: u32,
        authorities: Vec<Address>,
    ) -> Result<(), ContractError>;

    fn side_bridge(env: &Env) -> Option<SideBridge>;

    /// Returns the current authorities, in registration order.
    fn authorities(env: &Env) -> Vec<Address>;

    /// Registers a side token. `expected_id` must equal [`MainBridgeInterface::side_token_id`]
    /// of the same inputs.
    ///
    /// # Errors
    /// - [`ContractError::SideBridgeNotRegistered`]: If no side bridge is registered.
    /// - [`ContractError::InvalidSideTokenName`]: If `name` is empty or not ASCII.
    /// - [`ContractError::InvalidSideTokenSymbol`]: If `symbol` is empty, not ASCII or longer than 7 bytes.
    /// - [`ContractError::InvalidConversionRate`]: If the rate is zero or has more than 18 decimals.
    /// - [`ContractError::InvalidSideTokenId`]: If `expected_id` does not match.
    /// - [`ContractError::SideTokenAlreadyRegistered`]: If the token is registered.
    ///
    /// # Authorization
    /// - [`OwnableInterface::owner`] must authorize.
    fn register_side_token(
        env: &Env,
        peer_chain_id: u32,
        name: String,
        symbol: String,
        conversion_rate: u64,
        conversion_rate_decimals: u32,
        expected_id: BytesN<32>,
    ) -> Result<(), ContractError>;

    fn side_token(env: &Env, side_token_id: BytesN<32>) -> Option<SideToken>;

    /// Computes the id of a side token registered with the current side bridge.
    fn side_token_id(
        env: &Env,
        peer_chain_id: u32,
        name: String,
        symbol: String,
        conversion_rate: u64,
        conversion_rate_decimals: u32,
    ) -> Result<BytesN<32>, ContractError>;

    /// Locks `amount` of the main token from `caller` for minting on the side chain.
    ///
    /// The bridge must be allowed to spend `amount` on behalf of `caller`.
    ///
    /// # Errors
    /// - [`ContractError::InvalidAmount`]: If `amount` is not positive.
    /// - [`ContractError::SideTokenNotRegistered`]: If the side token is unknown.
    /// - [`ContractError::InsufficientAllowance`]: If the bridge's allowance is below `amount`.
    /// - [`ContractError::AmountOverflow`]: If the converted amount overflows.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn deposit(
        env: &Env,
        caller: Address,
        side_token_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), ContractError>;

    /// Same as [`MainBridgeInterface::deposit`], pulling the tokens from `on_behalf_of`.
    ///
    /// # Authorization
    /// - [`OwnableInterface::owner`] must authorize.
    fn owner_deposit(
        env: &Env,
        on_behalf_of: Address,
        side_token_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), ContractError>;

    /// Returns the nonce of the latest deposit, `0` if none was made.
    fn deposit_nonce(env: &Env) -> u64;

    /// # Errors
    /// - [`ContractError::InvalidAmount`]: If `amount` is not positive.
    /// - [`ContractError::InsufficientAllowance`]: If the bridge's allowance is below `amount`.
    fn stake(env: &Env, caller: Address, amount: i128) -> Result<(), ContractError>;

    /// # Errors
    /// - [`ContractError::InvalidAmount`]: If `amount` is not positive.
    /// - [`ContractError::InsufficientStake`]: If `amount` exceeds the stake of `caller`.
    fn unstake(env: &Env, caller: Address, amount: i128) -> Result<(), ContractError>;

    fn staked_amount(env: &Env, staker: Address) -> i128;

    fn total_staked(env: &Env) -> i128;

    /// Signs the release of `amount` to `beneficiary` for a redemption on the side chain.
    /// Each authority slot holds one signature, which survives rotation of that slot.
    /// The signature that reaches the required number of signed slots pays out.
    ///
    /// Signing twice is a no-op.
    ///
    /// # Errors
    /// - [`ContractError::NotAuthority`]: If `caller` is not a current authority.
    /// - [`ContractError::InvalidAmount`]: If `amount` is not positive.
    /// - [`ContractError::SideTokenNotRegistered`]: If the side token is unknown.
    /// - [`ContractError::InvalidRedeemId`]: If `redeem_id` does not match the other inputs.
    /// - [`ContractError::AlreadyCompleted`]: If the redemption was paid out.
    /// - [`ContractError::SignatureSlotTaken`]: If the replaced authority of this slot already signed.
    /// - [`ContractError::InsufficientBalance`]: If the unstaked balance cannot cover the payout.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn withdraw(
        env: &Env,
        caller: Address,
        redeem_id: BytesN<32>,
        side_token_id: BytesN<32>,
        beneficiary: Address,
        amount: i128,
        peer_tx_hash: BytesN<32>,
    ) -> Result<(), ContractError>;

    fn redeem_id(
        env: &Env,
        side_token_id: BytesN<32>,
        beneficiary: Address,
        amount: i128,
        peer_tx_hash: BytesN<32>,
    ) -> BytesN<32>;

    fn redemption(env: &Env, redeem_id: BytesN<32>) -> Option<Redemption>;

    /// Whether `authority` holds the signature of one of the current slots.
    fn has_signed(env: &Env, redeem_id: BytesN<32>, authority: Address) -> bool;

    /// Requests replacing `old_authority` by `new_authority`. Returns the change id.
    ///
    /// # Errors
    /// - [`ContractError::SideBridgeNotRegistered`]: If no side bridge is registered.
    /// - [`ContractError::NotAuthority`]: If `old_authority` is not an authority.
    /// - [`ContractError::AuthorityAlreadyExists`]: If `new_authority` is an authority.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn change_authority_request(
        env: &Env,
        caller: Address,
        old_authority: Address,
        new_authority: Address,
    ) -> Result<BytesN<32>, ContractError>;

    /// Confirms an authority change. The confirmation that reaches the required count among
    /// current authorities swaps the authority in place.
    ///
    /// Confirming twice is a no-op.
    ///
    /// # Errors
    /// - [`ContractError::NotAuthority`]: If `caller` is not a current authority, or
    ///   `old_authority` no longer is one at commit time.
    /// - [`ContractError::UnknownChangeRequest`]: If `change_id` was never requested.
    /// - [`ContractError::InvalidChangeId`]: If `change_id` does not match the other inputs.
    /// - [`ContractError::ChangeAlreadyExecuted`]: If the change was applied.
    /// - [`ContractError::AuthorityAlreadyExists`]: If `new_authority` became an authority meanwhile.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn change_authority(
        env: &Env,
        caller: Address,
        change_id: BytesN<32>,
        old_authority: Address,
        new_authority: Address,
    ) -> Result<(), ContractError>;

    fn authority_change_id(
        env: &Env,
        old_authority: Address,
        new_authority: Address,
        nonce: u64,
    ) -> BytesN<32>;

    fn authority_change(env: &Env, change_id: BytesN<32>) -> Option<AuthorityChange>;

    fn is_authority_change_confirmed(env: &Env, change_id: BytesN<32>, authority: Address) -> bool;
}
