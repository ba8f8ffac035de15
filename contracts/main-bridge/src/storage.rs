use bridge_std::contractstorage;
use soroban_sdk::{contracttype, Address, BytesN, Vec};

use crate::types::{AuthorityChange, BridgeConfig, Redemption, SideBridge, SideToken};

#[contractstorage]
enum DataKey {
    #[instance]
    #[value(BridgeConfig)]
    Config,

    #[instance]
    #[value(SideBridge)]
    SideBridge,

    #[instance]
    #[value(Vec<Address>)]
    Authorities,

    #[instance]
    #[value(u64)]
    DepositNonce,

    #[instance]
    #[value(u64)]
    AuthorityChangeNonce,

    #[instance]
    #[value(i128)]
    TotalStaked,

    #[persistent]
    #[value(SideToken)]
    SideToken { id: BytesN<32> },

    #[persistent]
    #[value(i128)]
    Stake { staker: Address },

    #[persistent]
    #[value(Redemption)]
    Redemption { id: BytesN<32> },

    #[persistent]
    #[value(Address)]
    RedemptionSignature { id: BytesN<32>, slot: u32 },

    #[persistent]
    #[value(AuthorityChange)]
    AuthorityChange { id: BytesN<32> },

    #[persistent]
    #[status]
    AuthorityChangeConfirmation { id: BytesN<32>, authority: Address },
}
