use std::{error, fmt};

use onomy_protocol::{
    constants::{cosmos, PURPOSE},
    default_verify_address_format, AddressFormatError, Bech32Kind, Bech32Parameters, Role,
};
use tracing::{debug, warn};

use crate::PrefixSet;

/// Errors that can occur while populating or reading a [`Config`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A mutation was attempted after the configuration was sealed.
    Sealed,
    /// The process-wide configuration was read before it was sealed.
    NotSealed,
    /// An empty prefix was supplied for the given namespace.
    EmptyPrefix(Bech32Kind),
    /// The supplied prefix is not a lowercase Bech32 human-readable part.
    InvalidPrefix { kind: Bech32Kind, prefix: String },
    /// Two namespaces were configured with the same prefix.
    AmbiguousPrefixes {
        prefix: String,
        first: Bech32Kind,
        second: Bech32Kind,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sealed => write!(f, "configuration already sealed"),
            Error::NotSealed => write!(f, "configuration has not been sealed yet"),
            Error::EmptyPrefix(kind) => write!(f, "the {} prefix cannot be empty", kind),
            Error::InvalidPrefix { kind, prefix } => write!(
                f,
                "{:?} is not a valid bech32 prefix for the {} namespace",
                prefix, kind
            ),
            Error::AmbiguousPrefixes {
                prefix,
                first,
                second,
            } => write!(
                f,
                "the {} and {} namespaces share the prefix {:?}",
                first, second, prefix
            ),
        }
    }
}

impl error::Error for Error {}

/// A chain-specific check applied to address bytes in place of the default length check.
pub type AddressVerifier = fn(&[u8]) -> Result<(), String>;

/// The stages a [`Config`] moves through, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Lifecycle {
    /// Nothing has been configured; the Cosmos SDK defaults are in effect.
    Uninitialized,
    /// At least one setting has been changed, and more may follow.
    Populated,
    /// The configuration is final. Every setter fails with [`Error::Sealed`].
    Sealed,
}

/// Address-encoding configuration for a node.
///
/// A `Config` starts out with the Cosmos SDK defaults, is populated once at startup, and
/// is then [sealed](Config::seal). Code that formats or parses addresses should only be
/// handed a shared reference to a sealed `Config`.
#[derive(Clone)]
pub struct Config {
    prefixes: PrefixSet,
    coin_type: u32,
    purpose: u32,
    address_verifier: Option<AddressVerifier>,
    lifecycle: Lifecycle,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("prefixes", &self.prefixes)
            .field("coin_type", &self.coin_type)
            .field("purpose", &self.purpose)
            .field("address_verifier", &self.address_verifier.is_some())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl Config {
    /// Returns an unsealed configuration holding the Cosmos SDK defaults.
    pub fn new() -> Self {
        Config {
            prefixes: PrefixSet::default(),
            coin_type: cosmos::COIN_TYPE,
            purpose: PURPOSE,
            address_verifier: None,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_sealed(&self) -> bool {
        self.lifecycle == Lifecycle::Sealed
    }

    /// Returns the configured prefixes.
    pub fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    pub fn purpose(&self) -> u32 {
        self.purpose
    }

    /// Returns the BIP 44 derivation path of the first key of the first account.
    pub fn full_fundraiser_path(&self) -> String {
        format!("m/{}'/{}'/0'/0/0", self.purpose, self.coin_type)
    }

    /// Sets the prefixes for account addresses and account public keys.
    pub fn set_bech32_prefix_for_account(
        &mut self,
        address_prefix: &str,
        pub_key_prefix: &str,
    ) -> Result<(), Error> {
        self.set_bech32_prefix_for(Role::Account, address_prefix, pub_key_prefix)
    }

    /// Sets the prefixes for validator operator addresses and public keys.
    pub fn set_bech32_prefix_for_validator(
        &mut self,
        address_prefix: &str,
        pub_key_prefix: &str,
    ) -> Result<(), Error> {
        self.set_bech32_prefix_for(Role::Validator, address_prefix, pub_key_prefix)
    }

    /// Sets the prefixes for consensus node addresses and public keys.
    pub fn set_bech32_prefix_for_consensus_node(
        &mut self,
        address_prefix: &str,
        pub_key_prefix: &str,
    ) -> Result<(), Error> {
        self.set_bech32_prefix_for(Role::ConsensusNode, address_prefix, pub_key_prefix)
    }

    /// Sets the address and public key prefixes of `role`.
    ///
    /// Both prefixes are validated before either is stored.
    pub fn set_bech32_prefix_for(
        &mut self,
        role: Role,
        address_prefix: &str,
        pub_key_prefix: &str,
    ) -> Result<(), Error> {
        self.assert_not_sealed(role)?;
        self.prefixes.set_pair(role, address_prefix, pub_key_prefix)?;
        debug!(
            %role,
            address_prefix,
            pub_key_prefix,
            "Set bech32 prefixes"
        );
        self.lifecycle = Lifecycle::Populated;
        Ok(())
    }

    pub fn set_coin_type(&mut self, coin_type: u32) -> Result<(), Error> {
        self.assert_not_sealed("coin type")?;
        self.coin_type = coin_type;
        self.lifecycle = Lifecycle::Populated;
        Ok(())
    }

    pub fn set_purpose(&mut self, purpose: u32) -> Result<(), Error> {
        self.assert_not_sealed("purpose")?;
        self.purpose = purpose;
        self.lifecycle = Lifecycle::Populated;
        Ok(())
    }

    /// Replaces the default address length check with `verifier`.
    pub fn set_address_verifier(&mut self, verifier: AddressVerifier) -> Result<(), Error> {
        self.assert_not_sealed("address verifier")?;
        self.address_verifier = Some(verifier);
        self.lifecycle = Lifecycle::Populated;
        Ok(())
    }

    /// Seals the configuration, after which every setter fails with [`Error::Sealed`].
    ///
    /// Sealing an already sealed configuration does nothing. Sealing fails, leaving the
    /// configuration unsealed, if two namespaces share a prefix.
    pub fn seal(&mut self) -> Result<(), Error> {
        if self.is_sealed() {
            debug!("Configuration is already sealed");
            return Ok(());
        }
        self.prefixes.check_distinct()?;
        self.lifecycle = Lifecycle::Sealed;
        debug!(prefixes = ?self.prefixes, "Sealed configuration");
        Ok(())
    }

    fn assert_not_sealed(&self, setting: impl fmt::Display) -> Result<(), Error> {
        if self.is_sealed() {
            warn!("Rejected change to {} after the configuration was sealed", setting);
            Err(Error::Sealed)
        } else {
            Ok(())
        }
    }
}

impl Bech32Parameters for Config {
    fn bech32_account_addr_prefix(&self) -> &str {
        self.prefixes.account_address_prefix()
    }

    fn bech32_account_pub_prefix(&self) -> &str {
        self.prefixes.account_pub_key_prefix()
    }

    fn bech32_validator_addr_prefix(&self) -> &str {
        self.prefixes.validator_address_prefix()
    }

    fn bech32_validator_pub_prefix(&self) -> &str {
        self.prefixes.validator_pub_key_prefix()
    }

    fn bech32_consensus_addr_prefix(&self) -> &str {
        self.prefixes.consensus_node_address_prefix()
    }

    fn bech32_consensus_pub_prefix(&self) -> &str {
        self.prefixes.consensus_node_pub_key_prefix()
    }

    fn verify_address_format(&self, bytes: &[u8]) -> Result<(), AddressFormatError> {
        match self.address_verifier {
            Some(verifier) => verifier(bytes).map_err(AddressFormatError::Rejected),
            None => default_verify_address_format(bytes),
        }
    }
}
