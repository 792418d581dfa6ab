//! The six bech32 prefixes a node renders addresses and public keys with.

use bech32::Hrp;
use onomy_protocol::{
    constants::{cosmos, mainnet},
    Bech32Kind, Bech32Parameters, Role,
};

use crate::Error;

/// The human-readable prefixes of the account, validator and consensus-node namespaces.
///
/// Every prefix is a non-empty, lowercase, valid Bech32 human-readable part.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrefixSet {
    account_address: String,
    account_pub_key: String,
    validator_address: String,
    validator_pub_key: String,
    consensus_node_address: String,
    consensus_node_pub_key: String,
}

impl Default for PrefixSet {
    /// Returns the Cosmos SDK default prefixes.
    fn default() -> Self {
        PrefixSet {
            account_address: cosmos::BECH32_PREFIX_ACC_ADDR.to_string(),
            account_pub_key: cosmos::BECH32_PREFIX_ACC_PUB.to_string(),
            validator_address: cosmos::BECH32_PREFIX_VAL_ADDR.to_string(),
            validator_pub_key: cosmos::BECH32_PREFIX_VAL_PUB.to_string(),
            consensus_node_address: cosmos::BECH32_PREFIX_CONS_ADDR.to_string(),
            consensus_node_pub_key: cosmos::BECH32_PREFIX_CONS_PUB.to_string(),
        }
    }
}

impl PrefixSet {
    /// Returns the prefixes used on the Onomy network.
    pub fn onomy() -> Self {
        PrefixSet {
            account_address: mainnet::BECH32_PREFIX_ACC_ADDR.to_string(),
            account_pub_key: mainnet::BECH32_PREFIX_ACC_PUB.to_string(),
            validator_address: mainnet::BECH32_PREFIX_VAL_ADDR.to_string(),
            validator_pub_key: mainnet::BECH32_PREFIX_VAL_PUB.to_string(),
            consensus_node_address: mainnet::BECH32_PREFIX_CONS_ADDR.to_string(),
            consensus_node_pub_key: mainnet::BECH32_PREFIX_CONS_PUB.to_string(),
        }
    }

    pub fn account_address_prefix(&self) -> &str {
        &self.account_address
    }

    pub fn account_pub_key_prefix(&self) -> &str {
        &self.account_pub_key
    }

    pub fn validator_address_prefix(&self) -> &str {
        &self.validator_address
    }

    pub fn validator_pub_key_prefix(&self) -> &str {
        &self.validator_pub_key
    }

    pub fn consensus_node_address_prefix(&self) -> &str {
        &self.consensus_node_address
    }

    pub fn consensus_node_pub_key_prefix(&self) -> &str {
        &self.consensus_node_pub_key
    }

    /// Replaces the prefix pair of `role`, leaving the set untouched if either prefix
    /// is invalid.
    pub(crate) fn set_pair(
        &mut self,
        role: Role,
        address_prefix: &str,
        pub_key_prefix: &str,
    ) -> Result<(), Error> {
        validate_prefix(role.address_kind(), address_prefix)?;
        validate_prefix(role.pub_key_kind(), pub_key_prefix)?;

        let (address, pub_key) = match role {
            Role::Account => (&mut self.account_address, &mut self.account_pub_key),
            Role::Validator => (&mut self.validator_address, &mut self.validator_pub_key),
            Role::ConsensusNode => (
                &mut self.consensus_node_address,
                &mut self.consensus_node_pub_key,
            ),
        };
        *address = address_prefix.to_string();
        *pub_key = pub_key_prefix.to_string();
        Ok(())
    }

    /// Checks that no two namespaces share a prefix, so that the prefix of an encoded
    /// string always identifies its namespace.
    pub fn check_distinct(&self) -> Result<(), Error> {
        for (i, first) in Bech32Kind::ALL.iter().enumerate() {
            for second in &Bech32Kind::ALL[i + 1..] {
                if self.prefix(*first) == self.prefix(*second) {
                    return Err(Error::AmbiguousPrefixes {
                        prefix: self.prefix(*first).to_string(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Bech32Parameters for PrefixSet {
    fn bech32_account_addr_prefix(&self) -> &str {
        &self.account_address
    }

    fn bech32_account_pub_prefix(&self) -> &str {
        &self.account_pub_key
    }

    fn bech32_validator_addr_prefix(&self) -> &str {
        &self.validator_address
    }

    fn bech32_validator_pub_prefix(&self) -> &str {
        &self.validator_pub_key
    }

    fn bech32_consensus_addr_prefix(&self) -> &str {
        &self.consensus_node_address
    }

    fn bech32_consensus_pub_prefix(&self) -> &str {
        &self.consensus_node_pub_key
    }
}

fn validate_prefix(kind: Bech32Kind, prefix: &str) -> Result<(), Error> {
    if prefix.is_empty() {
        return Err(Error::EmptyPrefix(kind));
    }
    // Encoders emit lowercase prefixes, so an uppercase one could never be matched.
    if Hrp::parse(prefix).is_err() || prefix.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(Error::InvalidPrefix {
            kind,
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use onomy_protocol::{Bech32Kind, Bech32Parameters, OnomyNetwork, Role};

    use super::PrefixSet;
    use crate::Error;

    #[test]
    fn onomy_matches_network_constants() {
        let prefixes = PrefixSet::onomy();
        for kind in Bech32Kind::ALL {
            assert_eq!(prefixes.prefix(kind), OnomyNetwork.prefix(kind));
        }
        assert_eq!(prefixes.check_distinct(), Ok(()));
        assert_eq!(PrefixSet::default().check_distinct(), Ok(()));
    }

    #[test]
    fn set_pair_validates_both_before_storing() {
        let mut prefixes = PrefixSet::default();
        assert_eq!(
            prefixes.set_pair(Role::Validator, "okvaloper", ""),
            Err(Error::EmptyPrefix(Bech32Kind::ValidatorPubKey))
        );
        assert_matches!(
            prefixes.set_pair(Role::Validator, "Okvaloper", "okvaloperpub"),
            Err(Error::InvalidPrefix { kind: Bech32Kind::ValidatorAddress, .. })
        );
        assert_matches!(
            prefixes.set_pair(Role::Account, "ok", "ok pub"),
            Err(Error::InvalidPrefix { kind: Bech32Kind::AccountPubKey, .. })
        );
        assert_eq!(prefixes, PrefixSet::default());

        prefixes.set_pair(Role::Validator, "okvaloper", "okvaloperpub").unwrap();
        assert_eq!(prefixes.validator_address_prefix(), "okvaloper");
        assert_eq!(prefixes.validator_pub_key_prefix(), "okvaloperpub");
        assert_eq!(prefixes.account_address_prefix(), "cosmos");
    }

    #[test]
    fn duplicates_are_reported() {
        let mut prefixes = PrefixSet::onomy();
        prefixes
            .set_pair(Role::ConsensusNode, "onomyvalcons", "onomyvaloper")
            .unwrap();
        assert_eq!(
            prefixes.check_distinct(),
            Err(Error::AmbiguousPrefixes {
                prefix: "onomyvaloper".to_string(),
                first: Bech32Kind::ValidatorAddress,
                second: Bech32Kind::ConsensusPubKey,
            })
        );
    }
}
