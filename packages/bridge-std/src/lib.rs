#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;


pub mod error;

pub mod events;

pub mod hash;

#[cfg(any(test, feature = "derive"))]
pub mod interfaces;

pub mod string;

pub mod threshold;

pub mod ttl;

#[cfg(any(test, feature = "derive"))]
pub use bridge_std_derive::*;
