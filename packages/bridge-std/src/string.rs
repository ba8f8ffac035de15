#![cfg(any(test, feature = "alloc"))]
extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

const ASCII_MAX: u8 = i8::MAX as u8;

pub trait StringExt {
    fn is_ascii(&self) -> bool;
}

impl StringExt for soroban_sdk::String {
    fn is_ascii(&self) -> bool {
        let mut bytes: Vec<u8> = vec![0; self.len() as usize];
        self.copy_into_slice(&mut bytes);

        bytes.iter().all(|&byte| byte <= ASCII_MAX)
    }
}

#[cfg(test)]
mod tests {
    use soroban_sdk::{Env, String};

    use super::*;

    #[test]
    fn ascii_strings_are_ascii() {
        let env = Env::default();

        for ascii_string in ["", "WETH", "Wrapped Ether", "1234567", "!@#$%^&*()_+-="] {
            assert!(String::from_str(&env, ascii_string).is_ascii());
        }
    }

    #[test]
    fn non_ascii_strings_are_not_ascii() {
        let env = Env::default();

        for non_ascii_string in ["Ether Ξ", "É", "代币", "トークン"] {
            assert!(!String::from_str(&env, non_ascii_string).is_ascii());
        }
    }
}
