//! Every test in this binary shares one process, so each one starts by initializing the
//! process-wide configuration and only relies on the state that leaves behind.

use assert_matches::assert_matches;
use proptest::prelude::*;

use onomy_address::{AccAddress, Bech32Address, ParseError, ValAddress};
use onomy_config::{global, initialize_address_prefixes, Config, Error, Lifecycle, PrefixSet};
use onomy_protocol::{
    testing::{arb_address_bytes, arb_bech32_kind},
    Bech32Kind, Bech32Parameters,
};

#[test]
fn initialization_sets_onomy_prefixes() {
    let config = initialize_address_prefixes().unwrap();
    assert_eq!(config.lifecycle(), Lifecycle::Sealed);
    assert_eq!(config.prefixes().account_address_prefix(), "onomy");
    assert_eq!(config.prefixes().account_pub_key_prefix(), "onomypub");
    assert_eq!(config.prefixes().validator_address_prefix(), "onomyvaloper");
    assert_eq!(config.prefixes().validator_pub_key_prefix(), "onomyvaloperpub");
    assert_eq!(config.prefixes().consensus_node_address_prefix(), "onomyvalcons");
    assert_eq!(
        config.prefixes().consensus_node_pub_key_prefix(),
        "onomyvalconspub"
    );
    assert!(global::is_sealed());
}

#[test]
fn repeated_initialization_is_a_no_op() {
    let first = initialize_address_prefixes().unwrap();
    let second = initialize_address_prefixes().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.prefixes(), &PrefixSet::onomy());
    assert!(std::ptr::eq(global::config().unwrap(), first));
}

#[test]
fn mutation_after_initialization_fails() {
    initialize_address_prefixes().unwrap();

    assert_eq!(
        global::set_bech32_prefix_for_account("cosmos", "cosmospub"),
        Err(Error::Sealed)
    );
    assert_eq!(
        global::set_bech32_prefix_for_validator("cosmosvaloper", "cosmosvaloperpub"),
        Err(Error::Sealed)
    );
    assert_eq!(
        global::set_bech32_prefix_for_consensus_node("cosmosvalcons", "cosmosvalconspub"),
        Err(Error::Sealed)
    );
    assert_eq!(
        global::with_config_mut(|config| config.set_coin_type(1)),
        Err(Error::Sealed)
    );
    assert_eq!(global::seal().map(|c| c.prefixes().clone()), Ok(PrefixSet::onomy()));

    let config = global::config().unwrap();
    assert_eq!(config.prefixes(), &PrefixSet::onomy());
    assert_eq!(config.coin_type(), 118);
}

#[test]
fn sealed_config_cannot_be_replaced() {
    initialize_address_prefixes().unwrap();

    let mut called = false;
    assert_eq!(
        global::with_config_mut(|config| {
            called = true;
            *config = Config::new();
            Ok(())
        }),
        Err(Error::Sealed)
    );
    assert!(!called);

    assert_eq!(
        global::set_bech32_prefix_for_account("cosmos", "cosmospub"),
        Err(Error::Sealed)
    );
    assert_eq!(global::config().unwrap().prefixes(), &PrefixSet::onomy());
    assert_eq!(
        initialize_address_prefixes().unwrap().prefixes(),
        &PrefixSet::onomy()
    );
}

#[test]
fn addresses_use_the_sealed_prefixes() {
    let config = initialize_address_prefixes().unwrap();

    let acc = AccAddress::from_bytes([0x42; 20]);
    let encoded = acc.encode(config).unwrap();
    assert!(encoded.starts_with("onomy1"));
    assert_eq!(AccAddress::decode(config, &encoded).unwrap(), acc);

    // `onomy` is a string prefix of `onomyvaloper`, but the namespaces never mix.
    assert_matches!(
        ValAddress::decode(config, &encoded),
        Err(ParseError::HrpMismatch { .. })
    );
    let val = ValAddress::from_bytes([0x42; 20]).encode(config).unwrap();
    assert_eq!(
        Bech32Address::decode(config, &val).unwrap().kind(),
        Bech32Kind::ValidatorAddress
    );
}

proptest! {
    #[test]
    fn decoding_never_misidentifies_a_namespace(
        kind in arb_bech32_kind(),
        data in arb_address_bytes(),
    ) {
        let config = initialize_address_prefixes().unwrap();
        let encoded = Bech32Address::new(kind, data.clone()).encode(config).unwrap();

        let decoded = Bech32Address::decode(config, &encoded).unwrap();
        prop_assert_eq!(decoded.kind(), kind);
        prop_assert_eq!(decoded.as_bytes(), &data[..]);

        for other in Bech32Kind::ALL {
            let res = Bech32Address::decode_as(config, other, &encoded);
            if other == kind {
                prop_assert!(res.is_ok());
            } else {
                let is_mismatch = matches!(
                    res,
                    Err(ParseError::HrpMismatch { ref actual, .. }) if actual == config.prefix(kind)
                );
                prop_assert!(is_mismatch);
            }
        }
    }
}
