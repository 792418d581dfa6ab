//! *A crate for Onomy network constants and bech32 prefix parameters.*
//!
//! `onomy_protocol` contains the human-readable prefixes used to render Onomy account,
//! validator and consensus-node addresses and public keys, the Cosmos SDK defaults that
//! those prefixes replace, and the [`Bech32Parameters`] trait through which address
//! codecs read whichever set of prefixes a process has been configured with.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod address;
pub mod constants;
mod params;

pub use address::{Bech32Kind, Role};
pub use params::{
    default_verify_address_format, AddressFormatError, Bech32Parameters, CosmosDefaults,
    OnomyNetwork,
};

#[cfg(feature = "test-dependencies")]
pub mod testing {
    use proptest::prelude::{prop_compose, prop_oneof, Just, Strategy};

    use crate::Bech32Kind;

    /// Returns a strategy producing any of the six bech32 encoding namespaces.
    pub fn arb_bech32_kind() -> impl Strategy<Value = Bech32Kind> {
        prop_oneof![
            Just(Bech32Kind::AccountAddress),
            Just(Bech32Kind::AccountPubKey),
            Just(Bech32Kind::ValidatorAddress),
            Just(Bech32Kind::ValidatorPubKey),
            Just(Bech32Kind::ConsensusAddress),
            Just(Bech32Kind::ConsensusPubKey),
        ]
    }

    prop_compose! {
        /// Create an arbitrary address payload that passes the default format check.
        pub fn arb_address_bytes()(
            bytes in proptest::collection::vec(proptest::prelude::any::<u8>(), 1..=64)
        ) -> Vec<u8> {
            bytes
        }
    }
}
