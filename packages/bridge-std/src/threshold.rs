//! Validation shared by every threshold-gated signer set.

use soroban_sdk::{Address, Vec};

/// Signer sets are bounded below 256 members.
pub const MAX_SIGNERS: u32 = 255;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignerSetError {
    TooManySigners,
    DuplicateSigner,
    InvalidThreshold,
}

/// A threshold is valid for `signer_count` members when it is a strict majority
/// and no larger than the set: `0 < threshold <= signer_count` and `threshold > signer_count / 2`.
pub const fn is_valid_threshold(signer_count: u32, threshold: u32) -> bool {
    threshold > 0 && threshold <= signer_count && threshold > signer_count / 2
}

/// Validates a complete signer set together with its threshold.
pub fn validate_signer_set(signers: &Vec<Address>, threshold: u32) -> Result<(), SignerSetError> {
    let signer_count = signers.len();

    if signer_count > MAX_SIGNERS {
        return Err(SignerSetError::TooManySigners);
    }

    for (idx, signer) in signers.iter().enumerate() {
        if signers.first_index_of(&signer) != Some(idx as u32) {
            return Err(SignerSetError::DuplicateSigner);
        }
    }

    if !is_valid_threshold(signer_count, threshold) {
        return Err(SignerSetError::InvalidThreshold);
    }

    Ok(())
}

/// Validates the threshold against the size a set will have after a pending mutation.
pub fn validate_threshold(signer_count: u32, threshold: u32) -> Result<(), SignerSetError> {
    if signer_count > MAX_SIGNERS {
        return Err(SignerSetError::TooManySigners);
    }

    if !is_valid_threshold(signer_count, threshold) {
        return Err(SignerSetError::InvalidThreshold);
    }

    Ok(())
}
