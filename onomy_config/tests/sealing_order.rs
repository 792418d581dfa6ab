//! The process-wide configuration is checked step by step in a single test, since the
//! steps depend on each other and share one process.

use onomy_config::{global, initialize_address_prefixes, Error, PrefixSet};

#[test]
fn process_wide_lifecycle() {
    // Nothing is visible before sealing.
    assert!(!global::is_sealed());
    assert_eq!(global::config().unwrap_err(), Error::NotSealed);

    // Populate with prefixes other than Onomy's, then seal.
    global::set_bech32_prefix_for_account("test", "testpub").unwrap();
    global::set_bech32_prefix_for_validator("testvaloper", "testvaloperpub").unwrap();
    global::set_bech32_prefix_for_consensus_node("testvalcons", "testvalconspub").unwrap();
    assert_eq!(global::config().unwrap_err(), Error::NotSealed);

    let sealed = global::seal().unwrap();
    assert!(global::is_sealed());
    assert_eq!(sealed.prefixes().account_address_prefix(), "test");

    // Sealing again changes nothing.
    assert!(std::ptr::eq(global::seal().unwrap(), sealed));

    // Initialization cannot override a configuration sealed with other prefixes.
    assert_eq!(initialize_address_prefixes().unwrap_err(), Error::Sealed);
    let config = global::config().unwrap();
    assert_ne!(config.prefixes(), &PrefixSet::onomy());
    assert_eq!(config.prefixes().validator_pub_key_prefix(), "testvaloperpub");
}
