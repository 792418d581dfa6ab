//! *Bech32 encoding for Onomy addresses and public keys.*
//!
//! This crate renders binary account, validator and consensus-node addresses (and their
//! public keys) as Bech32 strings, and parses such strings back, built around the
//! [`Bech32Address`] type.
//!
//! - [`Bech32Address`] can be encoded to, and decoded from, strings under any set of
//!   prefixes implementing [`Bech32Parameters`].
//! - Decoding identifies which of the six namespaces a string belongs to from its
//!   human-readable prefix. The match is exact, so an `onomyvaloper1...` string is never
//!   mistaken for an `onomy1...` account address.
//! - [`AccAddress`], [`ValAddress`] and [`ConsAddress`] are typed wrappers for callers
//!   that only accept one kind of address.
//!
//! ```text
//!         decode(params, s)
//!         ----------------->
//! Strings                    Bech32Address  <---->  AccAddress / ValAddress / ConsAddress
//!         <-----------------
//!           encode(params)
//! ```
//!
//! # Examples
//!
//! ```
//! use onomy_address::{Bech32Address, ParseError};
//! use onomy_protocol::{Bech32Kind, OnomyNetwork};
//!
//! let addr = Bech32Address::new(Bech32Kind::ValidatorAddress, [7u8; 20]);
//! let encoded = addr.encode(&OnomyNetwork).unwrap();
//! assert!(encoded.starts_with("onomyvaloper1"));
//!
//! assert_eq!(Bech32Address::decode(&OnomyNetwork, &encoded).unwrap(), addr);
//! assert!(matches!(
//!     Bech32Address::decode_as(&OnomyNetwork, Bech32Kind::AccountAddress, &encoded),
//!     Err(ParseError::HrpMismatch { .. }),
//! ));
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

mod convert;
mod encoding;

pub use convert::{AccAddress, ConsAddress, ConversionError, ValAddress};
pub use encoding::{EncodeError, ParseError};
pub use onomy_protocol::{Bech32Kind, Bech32Parameters, Role};

/// An address or public key, tagged with the namespace it is encoded under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bech32Address {
    kind: Bech32Kind,
    data: Vec<u8>,
}

impl Bech32Address {
    /// Wraps the given bytes as a value of the given namespace.
    ///
    /// The bytes are checked against the address format rules of the parameters used to
    /// encode them, not here.
    pub fn new(kind: Bech32Kind, data: impl Into<Vec<u8>>) -> Self {
        Bech32Address {
            kind,
            data: data.into(),
        }
    }

    /// Wraps the given bytes as the address of an entity in the given role.
    pub fn address(role: Role, data: impl Into<Vec<u8>>) -> Self {
        Self::new(role.address_kind(), data)
    }

    /// Wraps the given bytes as the public key of an entity in the given role.
    pub fn pub_key(role: Role, data: impl Into<Vec<u8>>) -> Self {
        Self::new(role.pub_key_kind(), data)
    }

    /// Returns the namespace this value belongs to.
    pub fn kind(&self) -> Bech32Kind {
        self.kind
    }

    /// Returns the raw bytes of this value.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes this value, returning its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Encodes this value as a Bech32 string under the prefix `params` assigns to its
    /// namespace.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidAddress`] if `params` rejects the address bytes.
    /// - [`EncodeError::InvalidPrefix`] if the configured prefix is not a valid HRP.
    pub fn encode<P: Bech32Parameters + ?Sized>(&self, params: &P) -> Result<String, EncodeError> {
        if !self.kind.is_pub_key() {
            params
                .verify_address_format(&self.data)
                .map_err(EncodeError::InvalidAddress)?;
        }
        encoding::encode_bech32(params.prefix(self.kind), &self.data)
    }

    /// Decodes a Bech32 string, identifying its namespace from its prefix.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownPrefix`] if the prefix is none of those in `params`.
    /// - [`ParseError::InvalidAddress`] if `params` rejects the decoded address bytes.
    /// - [`ParseError::InvalidEncoding`] or [`ParseError::IncorrectVariant`] if the
    ///   string is not valid Bech32.
    pub fn decode<P: Bech32Parameters + ?Sized>(params: &P, s: &str) -> Result<Self, ParseError> {
        let (hrp, data) = encoding::decode_bech32(s)?;
        let kind = params
            .kind_for_prefix(&hrp)
            .ok_or(ParseError::UnknownPrefix(hrp))?;
        Self::checked(params, kind, data)
    }

    /// Decodes a Bech32 string that must belong to the given namespace.
    ///
    /// # Errors
    ///
    /// As for [`Bech32Address::decode`], except that a string with any prefix other than
    /// the one `params` assigns to `kind` results in [`ParseError::HrpMismatch`].
    pub fn decode_as<P: Bech32Parameters + ?Sized>(
        params: &P,
        kind: Bech32Kind,
        s: &str,
    ) -> Result<Self, ParseError> {
        let (hrp, data) = encoding::decode_bech32(s)?;
        let expected = params.prefix(kind);
        if hrp != expected {
            return Err(ParseError::HrpMismatch {
                expected: expected.to_string(),
                actual: hrp,
            });
        }
        Self::checked(params, kind, data)
    }

    fn checked<P: Bech32Parameters + ?Sized>(
        params: &P,
        kind: Bech32Kind,
        data: Vec<u8>,
    ) -> Result<Self, ParseError> {
        if !kind.is_pub_key() {
            params
                .verify_address_format(&data)
                .map_err(ParseError::InvalidAddress)?;
        }
        Ok(Bech32Address { kind, data })
    }
}

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::prop_compose;

    use crate::Bech32Address;
    use onomy_protocol::testing::{arb_address_bytes, arb_bech32_kind};

    prop_compose! {
        /// Create an arbitrary `Bech32Address` whose bytes pass the default format check.
        pub fn arb_bech32_address()(
            kind in arb_bech32_kind(),
            data in arb_address_bytes(),
        ) -> Bech32Address {
            Bech32Address::new(kind, data)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use onomy_protocol::{
        AddressFormatError, Bech32Kind, Bech32Parameters, CosmosDefaults, OnomyNetwork, Role,
    };

    use crate::{testing::arb_bech32_address, Bech32Address, EncodeError, ParseError};

    #[test]
    fn encodes_under_configured_prefix() {
        for kind in Bech32Kind::ALL {
            let encoded = Bech32Address::new(kind, [0u8; 20])
                .encode(&OnomyNetwork)
                .unwrap();
            let (hrp, _) = encoded.rsplit_once('1').unwrap();
            assert_eq!(hrp, OnomyNetwork.prefix(kind));
        }
    }

    #[test]
    fn role_constructors() {
        assert_eq!(
            Bech32Address::address(Role::Validator, [1; 20]).kind(),
            Bech32Kind::ValidatorAddress
        );
        assert_eq!(
            Bech32Address::pub_key(Role::ConsensusNode, [1; 33]).kind(),
            Bech32Kind::ConsensusPubKey
        );
    }

    #[test]
    fn empty_address_is_rejected() {
        assert_matches!(
            Bech32Address::new(Bech32Kind::AccountAddress, Vec::new()).encode(&OnomyNetwork),
            Err(EncodeError::InvalidAddress(AddressFormatError::Empty))
        );
    }

    #[test]
    fn other_network_prefix_is_unknown() {
        let encoded = Bech32Address::new(Bech32Kind::AccountAddress, [3u8; 20])
            .encode(&CosmosDefaults)
            .unwrap();
        assert!(encoded.starts_with("cosmos1"));
        assert_matches!(
            Bech32Address::decode(&OnomyNetwork, &encoded),
            Err(ParseError::UnknownPrefix(hrp)) if hrp == "cosmos"
        );
    }

    proptest! {
        #[test]
        fn decode_identifies_namespace(addr in arb_bech32_address()) {
            let kind = addr.kind();
            let encoded = addr.encode(&OnomyNetwork).unwrap();

            let decoded = Bech32Address::decode(&OnomyNetwork, &encoded).unwrap();
            prop_assert_eq!(&decoded, &addr);

            for other in Bech32Kind::ALL.into_iter().filter(|k| *k != kind) {
                let res = Bech32Address::decode_as(&OnomyNetwork, other, &encoded);
                let is_mismatch = matches!(res, Err(ParseError::HrpMismatch { .. }));
                prop_assert!(is_mismatch);
            }
        }
    }
}
