use bridge_std::contractstorage;
use soroban_sdk::{contracttype, Address, BytesN, Vec};

use crate::types::{ChangeRequest, Submission};

#[contractstorage]
enum DataKey {
    #[instance]
    #[value(Vec<Address>)]
    Signers,

    #[instance]
    #[value(u32)]
    Threshold,

    #[instance]
    #[value(u64)]
    ChangeNonce,

    #[instance]
    #[value(u64)]
    SubmissionNonce,

    #[persistent]
    #[value(ChangeRequest)]
    ChangeRequest { id: BytesN<32> },

    #[persistent]
    #[status]
    ChangeConfirmation { id: BytesN<32>, signer: Address },

    #[persistent]
    #[value(Submission)]
    Submission { id: BytesN<32> },

    #[persistent]
    #[status]
    SubmissionConfirmation { id: BytesN<32>, signer: Address },
}
