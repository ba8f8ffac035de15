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
        pub use interface::{MainBridgeClient, MainBridgeInterface};
    } else {
        pub mod event;
        mod authority;
        mod contract;
        mod custody;
        mod id;
        mod registry;
        mod storage;

        pub use contract::{MainBridge, MainBridgeClient};
        pub use interface::MainBridgeInterface;
    }
}
