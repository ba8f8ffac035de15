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
        pub use interface::{MultisigClient, MultisigInterface};
    } else {
        pub mod event;
        mod contract;
        mod executor;
        mod id;
        mod registry;
        mod storage;

        pub use contract::{Multisig, MultisigClient};
        pub use interface::MultisigInterface;
    }
}
