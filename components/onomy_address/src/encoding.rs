use std::{error::Error, fmt};

use bech32::{
    primitives::{
        decode::{CheckedHrpstring, CheckedHrpstringError},
        hrp,
    },
    Bech32, Bech32m, Hrp,
};
use onomy_protocol::AddressFormatError;

/// An error while attempting to parse a string as an Onomy address or public key.
#[derive(Debug)]
pub enum ParseError {
    /// The string is not a valid Bech32 encoding.
    InvalidEncoding(CheckedHrpstringError),
    /// The string is a valid Bech32m encoding; only the original Bech32 variant is used.
    IncorrectVariant,
    /// The prefix of the string is not one of the configured prefixes.
    UnknownPrefix(String),
    /// The string was encoded for a different namespace than the one requested.
    HrpMismatch { expected: String, actual: String },
    /// The decoded bytes are not an acceptable address.
    InvalidAddress(AddressFormatError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidEncoding(e) => write!(f, "Invalid encoding: {}", e),
            ParseError::IncorrectVariant => {
                write!(f, "Incorrect bech32 encoding (wrong variant: Bech32m)")
            }
            ParseError::UnknownPrefix(hrp) => write!(f, "Unknown bech32 prefix {}", hrp),
            ParseError::HrpMismatch { expected, actual } => write!(
                f,
                "Invalid bech32 prefix: expected {}, got {}",
                expected, actual
            ),
            ParseError::InvalidAddress(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::InvalidEncoding(e) => Some(e),
            ParseError::InvalidAddress(e) => Some(e),
            _ => None,
        }
    }
}

/// An error while attempting to encode an Onomy address or public key.
#[derive(Debug)]
pub enum EncodeError {
    /// The configured prefix is not a valid human-readable part.
    InvalidPrefix(hrp::Error),
    /// The address bytes are not an acceptable address.
    InvalidAddress(AddressFormatError),
    /// The data is too long to be Bech32 encoded.
    Bech32(bech32::EncodeError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidPrefix(e) => write!(f, "Invalid bech32 prefix: {}", e),
            EncodeError::InvalidAddress(e) => write!(f, "{}", e),
            EncodeError::Bech32(e) => write!(f, "{}", e),
        }
    }
}

impl Error for EncodeError {}

pub(crate) fn encode_bech32(prefix: &str, data: &[u8]) -> Result<String, EncodeError> {
    let hrp = Hrp::parse(prefix).map_err(EncodeError::InvalidPrefix)?;
    bech32::encode::<Bech32>(hrp, data).map_err(EncodeError::Bech32)
}

/// Decodes a Bech32 string into its lowercased prefix and its data bytes.
pub(crate) fn decode_bech32(s: &str) -> Result<(String, Vec<u8>), ParseError> {
    // Remove leading and trailing whitespace, to handle copy-paste errors.
    let s = s.trim();

    match CheckedHrpstring::new::<Bech32>(s) {
        Ok(parsed) => {
            let hrp = parsed.hrp().as_str().to_ascii_lowercase();
            Ok((hrp, parsed.byte_iter().collect()))
        }
        // Distinguish a string using the newer checksum from one that is simply corrupt.
        Err(_) if CheckedHrpstring::new::<Bech32m>(s).is_ok() => {
            Err(ParseError::IncorrectVariant)
        }
        Err(e) => Err(ParseError::InvalidEncoding(e)),
    }
}
