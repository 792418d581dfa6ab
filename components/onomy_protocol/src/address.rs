//! Types naming the bech32 encoding namespaces used by Onomy addresses and keys.

use core::fmt;

/// One of the six bech32 namespaces an encoded address or public key can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bech32Kind {
    /// The address of a user- or contract-controlled ledger account.
    AccountAddress,
    /// The public key of a ledger account.
    AccountPubKey,
    /// The operator address of a validator.
    ValidatorAddress,
    /// The operator public key of a validator.
    ValidatorPubKey,
    /// The address of a node in its consensus role.
    ConsensusAddress,
    /// The public key of a node in its consensus role.
    ConsensusPubKey,
}

impl Bech32Kind {
    /// Every namespace, in the order the prefixes are configured.
    pub const ALL: [Bech32Kind; 6] = [
        Bech32Kind::AccountAddress,
        Bech32Kind::AccountPubKey,
        Bech32Kind::ValidatorAddress,
        Bech32Kind::ValidatorPubKey,
        Bech32Kind::ConsensusAddress,
        Bech32Kind::ConsensusPubKey,
    ];

    /// Returns whether this namespace is used for public keys rather than addresses.
    pub fn is_pub_key(self) -> bool {
        matches!(
            self,
            Bech32Kind::AccountPubKey | Bech32Kind::ValidatorPubKey | Bech32Kind::ConsensusPubKey
        )
    }
}

impl fmt::Display for Bech32Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bech32Kind::AccountAddress => f.write_str("account address"),
            Bech32Kind::AccountPubKey => f.write_str("account public key"),
            Bech32Kind::ValidatorAddress => f.write_str("validator operator address"),
            Bech32Kind::ValidatorPubKey => f.write_str("validator operator public key"),
            Bech32Kind::ConsensusAddress => f.write_str("consensus node address"),
            Bech32Kind::ConsensusPubKey => f.write_str("consensus node public key"),
        }
    }
}

/// The three address classes that are each configured with an address/public key pair
/// of prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Account,
    Validator,
    ConsensusNode,
}

impl Role {
    /// Returns the namespace used for addresses of this role.
    pub fn address_kind(self) -> Bech32Kind {
        match self {
            Role::Account => Bech32Kind::AccountAddress,
            Role::Validator => Bech32Kind::ValidatorAddress,
            Role::ConsensusNode => Bech32Kind::ConsensusAddress,
        }
    }

    /// Returns the namespace used for public keys of this role.
    pub fn pub_key_kind(self) -> Bech32Kind {
        match self {
            Role::Account => Bech32Kind::AccountPubKey,
            Role::Validator => Bech32Kind::ValidatorPubKey,
            Role::ConsensusNode => Bech32Kind::ConsensusPubKey,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Account => f.write_str("account"),
            Role::Validator => f.write_str("validator"),
            Role::ConsensusNode => f.write_str("consensus node"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bech32Kind, Role};

    #[test]
    fn roles_partition_kinds() {
        let mut kinds = [Role::Account, Role::Validator, Role::ConsensusNode]
            .into_iter()
            .flat_map(|role| {
                assert!(!role.address_kind().is_pub_key());
                assert!(role.pub_key_kind().is_pub_key());
                [role.address_kind(), role.pub_key_kind()]
            })
            .collect::<Vec<_>>();
        kinds.sort();
        assert_eq!(kinds, Bech32Kind::ALL);
    }
}
