use bridge_std::threshold::SignerSetError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    MigrationNotAllowed = 1,
    NotInitialized = 2,
    AlreadyInitialized = 3,
    BridgePaused = 4,
    AlreadyPaused = 5,
    NotPaused = 6,
    NotPauser = 7,
    InvalidAuthorities = 8,
    InvalidRequiredSignatures = 9,
    DuplicateAuthority = 10,
    InvalidPeer = 11,
    SideBridgeAlreadyRegistered = 12,
    SideBridgeNotRegistered = 13,
    InvalidSideTokenId = 14,
    InvalidSideTokenName = 15,
    InvalidSideTokenSymbol = 16,
    InvalidConversionRate = 17,
    SideTokenAlreadyRegistered = 18,
    SideTokenNotRegistered = 19,
    InvalidAmount = 20,
    InsufficientAllowance = 21,
    InsufficientBalance = 22,
    InsufficientStake = 23,
    AmountOverflow = 24,
    NotAuthority = 25,
    InvalidRedeemId = 26,
    AlreadyCompleted = 27,
    AuthorityAlreadyExists = 28,
    UnknownChangeRequest = 29,
    InvalidChangeId = 30,
    ChangeAlreadyExecuted = 31,
    SignatureSlotTaken = 32,
}

impl From<SignerSetError> for ContractError {
    fn from(err: SignerSetError) -> Self {
        match err {
            SignerSetError::TooManySigners => Self::InvalidAuthorities,
            SignerSetError::DuplicateSigner => Self::DuplicateAuthority,
            SignerSetError::InvalidThreshold => Self::InvalidRequiredSignatures,
        }
    }
}
