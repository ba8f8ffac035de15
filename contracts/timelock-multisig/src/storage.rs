use bridge_std::contractstorage;
use soroban_sdk::{contracttype, Address, BytesN, Vec};

use crate::types::Operation;

#[contractstorage]
enum DataKey {
    #[instance]
    #[value(Vec<Address>)]
    Approvers,

    #[instance]
    #[value(u32)]
    Threshold,

    #[instance]
    #[value(u64)]
    MinDelay,

    #[instance]
    #[value(Vec<Address>)]
    Proposers,

    #[instance]
    #[value(Vec<Address>)]
    Executors,

    #[instance]
    #[value(Address)]
    NativeToken,

    #[persistent]
    #[value(Operation)]
    Operation { id: BytesN<32> },

    #[persistent]
    #[status]
    Approval { id: BytesN<32>, approver: Address },
}
