//! Network-specific Onomy constants.

pub mod cosmos;
pub mod mainnet;

/// The largest address, in bytes, accepted by the default address format check.
///
/// Matches the length limit enforced by the Cosmos SDK's `VerifyAddressFormat`.
pub const MAX_ADDR_LEN: usize = 255;

/// The BIP 44 purpose field used for key derivation.
pub const PURPOSE: u32 = 44;
