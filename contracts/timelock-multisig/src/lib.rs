#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

pub mod error;
mod interface;
pub mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod tests;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{TimelockMultisigClient, TimelockMultisigInterface};
    } else {
        pub mod event;
        mod contract;
        mod governance;
        mod operation;
        mod storage;

        pub use contract::{TimelockMultisig, TimelockMultisigClient};
        pub use interface::TimelockMultisigInterface;
    }
}
