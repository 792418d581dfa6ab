use std::{error::Error, fmt};

use onomy_protocol::{Bech32Kind, Bech32Parameters};

use crate::{Bech32Address, EncodeError, ParseError};

/// A [`Bech32Address`] of one namespace was converted into a type for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    pub expected: Bech32Kind,
    pub actual: Bech32Kind,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected a {}, got a {}", self.expected, self.actual)
    }
}

impl Error for ConversionError {}

macro_rules! typed_address {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Vec<u8>);

        impl $name {
            /// The namespace values of this type are encoded under.
            pub const KIND: Bech32Kind = $kind;

            /// Wraps the given address bytes.
            pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
                $name(data.into())
            }

            /// Returns the raw address bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Encodes this address as a Bech32 string.
            pub fn encode<P: Bech32Parameters + ?Sized>(
                &self,
                params: &P,
            ) -> Result<String, EncodeError> {
                Bech32Address::new(Self::KIND, self.0.as_slice()).encode(params)
            }

            /// Decodes a Bech32 string, which must carry this type's prefix.
            pub fn decode<P: Bech32Parameters + ?Sized>(
                params: &P,
                s: &str,
            ) -> Result<Self, ParseError> {
                Bech32Address::decode_as(params, Self::KIND, s).map(|a| $name(a.into_bytes()))
            }
        }

        impl From<$name> for Bech32Address {
            fn from(addr: $name) -> Self {
                Bech32Address::new($name::KIND, addr.0)
            }
        }

        impl TryFrom<Bech32Address> for $name {
            type Error = ConversionError;

            fn try_from(addr: Bech32Address) -> Result<Self, Self::Error> {
                if addr.kind() == Self::KIND {
                    Ok($name(addr.into_bytes()))
                } else {
                    Err(ConversionError {
                        expected: Self::KIND,
                        actual: addr.kind(),
                    })
                }
            }
        }
    };
}

typed_address!(
    /// The address of an account.
    AccAddress,
    Bech32Kind::AccountAddress
);

typed_address!(
    /// The operator address of a validator.
    ValAddress,
    Bech32Kind::ValidatorAddress
);

typed_address!(
    /// The address of a node in its consensus role.
    ConsAddress,
    Bech32Kind::ConsensusAddress
);
