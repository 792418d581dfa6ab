//! *Sealable bech32 prefix configuration for Onomy nodes.*
//!
//! Onomy renders account, validator and consensus-node addresses (and their public keys)
//! under its own Bech32 prefixes instead of the Cosmos SDK defaults. This crate holds
//! those prefixes in a [`Config`] that is populated once at startup and then sealed, after
//! which any attempt to change it fails with [`Error::Sealed`].
//!
//! Programs call [`initialize_address_prefixes`] from their entry point, before
//! constructing anything that formats or parses addresses, and pass the returned
//! configuration to those components:
//!
//! ```
//! use onomy_config::initialize_address_prefixes;
//!
//! let config = initialize_address_prefixes().unwrap();
//! assert_eq!(config.prefixes().account_address_prefix(), "onomy");
//! assert_eq!(config.prefixes().validator_pub_key_prefix(), "onomyvaloperpub");
//! ```
//!
//! Components that are handed an explicit [`Config`] can also be set up without touching
//! the process-wide state, see [`init::configure`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
pub mod global;
pub mod init;
mod prefix;

pub use config::{AddressVerifier, Config, Error, Lifecycle};
pub use init::initialize_address_prefixes;
pub use prefix::PrefixSet;
