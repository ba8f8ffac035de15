use bridge_std::threshold::SignerSetError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    InvalidThreshold = 1,
    TooManySigners = 2,
    DuplicateSigner = 3,
    UnknownSigner = 4,
    SignerNotFound = 5,
    InvalidChangeRequest = 6,
    UnknownChangeRequest = 7,
    DuplicateConfirmation = 8,
    UnknownSubmission = 9,
    AlreadyExecuted = 10,
}

impl From<SignerSetError> for ContractError {
    fn from(err: SignerSetError) -> Self {
        match err {
            SignerSetError::TooManySigners => Self::TooManySigners,
            SignerSetError::DuplicateSigner => Self::DuplicateSigner,
            SignerSetError::InvalidThreshold => Self::InvalidThreshold,
        }
    }
}
