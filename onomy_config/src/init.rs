//! Startup configuration of the Onomy address prefixes.

use onomy_protocol::constants::mainnet;
use tracing::{debug, info, warn};

use crate::{global, Config, Error, PrefixSet};

/// Sets the Onomy prefixes on `config` and seals it.
///
/// # Errors
///
/// Returns [`Error::Sealed`] if `config` was already sealed.
pub fn configure(config: &mut Config) -> Result<(), Error> {
    config.set_coin_type(mainnet::COIN_TYPE)?;
    config.set_bech32_prefix_for_account(
        mainnet::BECH32_PREFIX_ACC_ADDR,
        mainnet::BECH32_PREFIX_ACC_PUB,
    )?;
    config.set_bech32_prefix_for_validator(
        mainnet::BECH32_PREFIX_VAL_ADDR,
        mainnet::BECH32_PREFIX_VAL_PUB,
    )?;
    config.set_bech32_prefix_for_consensus_node(
        mainnet::BECH32_PREFIX_CONS_ADDR,
        mainnet::BECH32_PREFIX_CONS_PUB,
    )?;
    config.seal()
}

/// Configures and seals the process-wide configuration with the Onomy prefixes.
///
/// This must be called from the program's entry point before anything formats or parses
/// an address. Calling it again once it has succeeded returns the same sealed
/// configuration.
///
/// # Errors
///
/// Returns [`Error::Sealed`] if the process-wide configuration was already sealed with
/// different prefixes. Callers should treat this as fatal.
pub fn initialize_address_prefixes() -> Result<&'static Config, Error> {
    if let Ok(config) = global::config() {
        return if config.prefixes() == &PrefixSet::onomy() {
            debug!("Address prefixes are already initialized");
            Ok(config)
        } else {
            warn!(
                prefixes = ?config.prefixes(),
                "Configuration was sealed with other address prefixes"
            );
            Err(Error::Sealed)
        };
    }

    match global::with_config_mut(configure) {
        Ok(()) => info!("Initialized Onomy address prefixes"),
        // Another thread sealed the configuration after the check above.
        Err(Error::Sealed) => return initialize_address_prefixes(),
        Err(e) => return Err(e),
    }
    global::config()
}
