use core::fmt;
use std::error::Error;

use crate::{
    constants::{cosmos, mainnet, MAX_ADDR_LEN},
    Bech32Kind,
};

/// An address payload was rejected by an address format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressFormatError {
    /// The address contains no bytes.
    Empty,
    /// The address is longer than [`MAX_ADDR_LEN`] bytes.
    TooLong(usize),
    /// A custom verifier rejected the address.
    Rejected(String),
}

impl fmt::Display for AddressFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFormatError::Empty => write!(f, "Addresses cannot be empty"),
            AddressFormatError::TooLong(len) => write!(
                f,
                "Address max length is {}, got {}",
                MAX_ADDR_LEN, len
            ),
            AddressFormatError::Rejected(reason) => write!(f, "Invalid address: {}", reason),
        }
    }
}

impl Error for AddressFormatError {}

/// Checks the length limits applied to every address unless a chain overrides them.
pub fn default_verify_address_format(bytes: &[u8]) -> Result<(), AddressFormatError> {
    if bytes.is_empty() {
        Err(AddressFormatError::Empty)
    } else if bytes.len() > MAX_ADDR_LEN {
        Err(AddressFormatError::TooLong(bytes.len()))
    } else {
        Ok(())
    }
}

/// The bech32 prefixes and address rules a codec encodes and decodes against.
///
/// This is implemented by the constant parameter sets in this crate, and by runtime
/// configuration objects that are populated at process start.
pub trait Bech32Parameters {
    /// Returns the human-readable prefix for Bech32-encoded account addresses.
    fn bech32_account_addr_prefix(&self) -> &str;

    /// Returns the human-readable prefix for Bech32-encoded account public keys.
    fn bech32_account_pub_prefix(&self) -> &str;

    /// Returns the human-readable prefix for Bech32-encoded validator operator addresses.
    fn bech32_validator_addr_prefix(&self) -> &str;

    /// Returns the human-readable prefix for Bech32-encoded validator operator public keys.
    fn bech32_validator_pub_prefix(&self) -> &str;

    /// Returns the human-readable prefix for Bech32-encoded consensus node addresses.
    fn bech32_consensus_addr_prefix(&self) -> &str;

    /// Returns the human-readable prefix for Bech32-encoded consensus node public keys.
    fn bech32_consensus_pub_prefix(&self) -> &str;

    /// Returns the prefix for the given namespace.
    fn prefix(&self, kind: Bech32Kind) -> &str {
        match kind {
            Bech32Kind::AccountAddress => self.bech32_account_addr_prefix(),
            Bech32Kind::AccountPubKey => self.bech32_account_pub_prefix(),
            Bech32Kind::ValidatorAddress => self.bech32_validator_addr_prefix(),
            Bech32Kind::ValidatorPubKey => self.bech32_validator_pub_prefix(),
            Bech32Kind::ConsensusAddress => self.bech32_consensus_addr_prefix(),
            Bech32Kind::ConsensusPubKey => self.bech32_consensus_pub_prefix(),
        }
    }

    /// Returns the namespace whose prefix is exactly `hrp`, if any.
    ///
    /// The comparison is exact: `onomy` never matches a string whose prefix is
    /// `onomyvaloper`.
    fn kind_for_prefix(&self, hrp: &str) -> Option<Bech32Kind> {
        Bech32Kind::ALL
            .into_iter()
            .find(|kind| self.prefix(*kind) == hrp)
    }

    /// Checks that `bytes` is an acceptable address payload.
    fn verify_address_format(&self, bytes: &[u8]) -> Result<(), AddressFormatError> {
        default_verify_address_format(bytes)
    }
}

impl<P: Bech32Parameters + ?Sized> Bech32Parameters for &P {
    fn bech32_account_addr_prefix(&self) -> &str {
        (*self).bech32_account_addr_prefix()
    }

    fn bech32_account_pub_prefix(&self) -> &str {
        (*self).bech32_account_pub_prefix()
    }

    fn bech32_validator_addr_prefix(&self) -> &str {
        (*self).bech32_validator_addr_prefix()
    }

    fn bech32_validator_pub_prefix(&self) -> &str {
        (*self).bech32_validator_pub_prefix()
    }

    fn bech32_consensus_addr_prefix(&self) -> &str {
        (*self).bech32_consensus_addr_prefix()
    }

    fn bech32_consensus_pub_prefix(&self) -> &str {
        (*self).bech32_consensus_pub_prefix()
    }

    fn verify_address_format(&self, bytes: &[u8]) -> Result<(), AddressFormatError> {
        (*self).verify_address_format(bytes)
    }
}

/// Marker struct for the Onomy network prefixes.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct OnomyNetwork;

impl Bech32Parameters for OnomyNetwork {
    fn bech32_account_addr_prefix(&self) -> &str {
        mainnet::BECH32_PREFIX_ACC_ADDR
    }

    fn bech32_account_pub_prefix(&self) -> &str {
        mainnet::BECH32_PREFIX_ACC_PUB
    }

    fn bech32_validator_addr_prefix(&self) -> &str {
        mainnet::BECH32_PREFIX_VAL_ADDR
    }

    fn bech32_validator_pub_prefix(&self) -> &str {
        mainnet::BECH32_PREFIX_VAL_PUB
    }

    fn bech32_consensus_addr_prefix(&self) -> &str {
        mainnet::BECH32_PREFIX_CONS_ADDR
    }

    fn bech32_consensus_pub_prefix(&self) -> &str {
        mainnet::BECH32_PREFIX_CONS_PUB
    }
}

/// Marker struct for the Cosmos SDK default prefixes.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct CosmosDefaults;

impl Bech32Parameters for CosmosDefaults {
    fn bech32_account_addr_prefix(&self) -> &str {
        cosmos::BECH32_PREFIX_ACC_ADDR
    }

    fn bech32_account_pub_prefix(&self) -> &str {
        cosmos::BECH32_PREFIX_ACC_PUB
    }

    fn bech32_validator_addr_prefix(&self) -> &str {
        cosmos::BECH32_PREFIX_VAL_ADDR
    }

    fn bech32_validator_pub_prefix(&self) -> &str {
        cosmos::BECH32_PREFIX_VAL_PUB
    }

    fn bech32_consensus_addr_prefix(&self) -> &str {
        cosmos::BECH32_PREFIX_CONS_ADDR
    }

    fn bech32_consensus_pub_prefix(&self) -> &str {
        cosmos::BECH32_PREFIX_CONS_PUB
    }
}
