//! The process-wide configuration.
//!
//! The configuration is mutated under a lock while it is being populated. Sealing it
//! publishes an immutable snapshot, which [`config`] then hands out without locking.
//! Before sealing, [`config`] fails with [`Error::NotSealed`], so no reader can observe a
//! partially populated configuration.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use lazy_static::lazy_static;
use tracing::warn;

use crate::{Config, Error};

lazy_static! {
    static ref CONFIG: Mutex<Config> = Mutex::new(Config::new());
}

static SEALED: OnceLock<Config> = OnceLock::new();

fn lock() -> MutexGuard<'static, Config> {
    // Every mutation either completes or leaves the config untouched, so the data
    // behind a poisoned lock is still consistent.
    CONFIG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with exclusive access to the process-wide configuration.
///
/// If the configuration is sealed when `f` returns, the sealed snapshot is published.
///
/// # Errors
///
/// Returns [`Error::Sealed`] without calling `f` once the configuration has been sealed.
pub fn with_config_mut<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce(&mut Config) -> Result<T, Error>,
{
    let mut config = lock();
    // The snapshot is only published while the lock is held, so this cannot race with
    // a concurrent seal.
    if SEALED.get().is_some() {
        warn!("Rejected access to the process-wide configuration after it was sealed");
        return Err(Error::Sealed);
    }
    let res = f(&mut config);
    if config.is_sealed() {
        SEALED.get_or_init(|| config.clone());
    }
    res
}

/// Sets the prefixes for account addresses and account public keys.
pub fn set_bech32_prefix_for_account(
    address_prefix: &str,
    pub_key_prefix: &str,
) -> Result<(), Error> {
    with_config_mut(|config| config.set_bech32_prefix_for_account(address_prefix, pub_key_prefix))
}

/// Sets the prefixes for validator operator addresses and public keys.
pub fn set_bech32_prefix_for_validator(
    address_prefix: &str,
    pub_key_prefix: &str,
) -> Result<(), Error> {
    with_config_mut(|config| {
        config.set_bech32_prefix_for_validator(address_prefix, pub_key_prefix)
    })
}

/// Sets the prefixes for consensus node addresses and public keys.
pub fn set_bech32_prefix_for_consensus_node(
    address_prefix: &str,
    pub_key_prefix: &str,
) -> Result<(), Error> {
    with_config_mut(|config| {
        config.set_bech32_prefix_for_consensus_node(address_prefix, pub_key_prefix)
    })
}

/// Seals the process-wide configuration and returns the sealed snapshot.
///
/// Sealing an already sealed configuration returns the existing snapshot.
pub fn seal() -> Result<&'static Config, Error> {
    if let Some(sealed) = SEALED.get() {
        return Ok(sealed);
    }
    match with_config_mut(Config::seal) {
        // Another thread sealed the configuration first.
        Ok(()) | Err(Error::Sealed) => config(),
        Err(e) => Err(e),
    }
}

/// Returns whether the process-wide configuration has been sealed.
pub fn is_sealed() -> bool {
    SEALED.get().is_some()
}

/// Returns the sealed process-wide configuration.
///
/// # Errors
///
/// Returns [`Error::NotSealed`] if the configuration has not been sealed yet.
pub fn config() -> Result<&'static Config, Error> {
    SEALED.get().ok_or(Error::NotSealed)
}
