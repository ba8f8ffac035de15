use bridge_std::threshold::SignerSetError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    InvalidThreshold = 1,
    TooManyApprovers = 2,
    DuplicateApprover = 3,
    ApproverNotFound = 4,
    NotProposer = 5,
    NotApprover = 6,
    NotExecutor = 7,
    InvalidValue = 8,
    InsufficientDelay = 9,
    InvalidDelay = 10,
    OperationAlreadyScheduled = 11,
    UnknownOperation = 12,
    AlreadyExecuted = 13,
    OperationCancelled = 14,
    AlreadyApproved = 15,
    InsufficientApprovals = 16,
    NotReady = 17,
    MissingDependency = 18,
    UnknownGovernanceCall = 19,
    InvalidGovernanceCall = 20,
}

impl From<SignerSetError> for ContractError {
    fn from(err: SignerSetError) -> Self {
        match err {
            SignerSetError::TooManySigners => Self::TooManyApprovers,
            SignerSetError::DuplicateSigner => Self::DuplicateApprover,
            SignerSetError::InvalidThreshold => Self::InvalidThreshold,
        }
    }
}
