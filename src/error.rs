// SPDX-License-Identifier: CC0-1.0

//! Error types for the address codec.

use core::fmt;

/// Address parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Base58 decoding error: invalid character, truncated input or checksum
    /// mismatch.
    Base58(base58::Error),
    /// Decoded data was not 21 bytes long.
    InvalidBase58PayloadLength(InvalidBase58PayloadLengthError),
    /// Version byte is not registered for the requested network.
    NetworkValidation(NetworkValidationError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseError::*;

        match *self {
            Base58(ref e) => write!(f, "base58 error: {}", e),
            InvalidBase58PayloadLength(ref e) => write!(f, "{}", e),
            NetworkValidation(ref e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ParseError::*;

        match *self {
            Base58(ref e) => Some(e),
            InvalidBase58PayloadLength(ref e) => Some(e),
            NetworkValidation(ref e) => Some(e),
        }
    }
}

impl From<base58::Error> for ParseError {
    fn from(e: base58::Error) -> Self { Self::Base58(e) }
}

impl From<InvalidBase58PayloadLengthError> for ParseError {
    fn from(e: InvalidBase58PayloadLengthError) -> Self { Self::InvalidBase58PayloadLength(e) }
}

impl From<NetworkValidationError> for ParseError {
    fn from(e: NetworkValidationError) -> Self { Self::NetworkValidation(e) }
}

/// Decoded base58 data was not the canonical 21 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBase58PayloadLengthError {
    /// The length of the decoded data.
    pub(crate) length: usize,
}

impl InvalidBase58PayloadLengthError {
    /// Returns the invalid decoded length.
    pub fn invalid_length(&self) -> usize { self.length }
}

impl fmt::Display for InvalidBase58PayloadLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decoded base58 data was {} bytes long, expected 21", self.length)
    }
}

impl std::error::Error for InvalidBase58PayloadLengthError {}

/// Address version byte is not registered for the required network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkValidationError {
    /// The version byte that failed validation.
    pub(crate) version: u8,
}

impl NetworkValidationError {
    /// Returns the version byte that failed validation.
    pub fn version(&self) -> u8 { self.version }
}

impl fmt::Display for NetworkValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "address version byte {:#04x} is not valid on the required network", self.version)
    }
}

impl std::error::Error for NetworkValidationError {}

/// Payload passed to a construction path was not 20 bytes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPayloadLengthError {
    /// The length of the supplied payload.
    pub(crate) length: usize,
}

impl InvalidPayloadLengthError {
    /// Returns the invalid payload length.
    pub fn invalid_length(&self) -> usize { self.length }
}

impl fmt::Display for InvalidPayloadLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "address payload was {} bytes long, expected 20", self.length)
    }
}

impl std::error::Error for InvalidPayloadLengthError {}

/// Text form is too short to split into three lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeLineFormatError {
    /// The length of the text form.
    pub(crate) length: usize,
}

impl ThreeLineFormatError {
    /// Returns the length of the text form that could not be split.
    pub fn text_length(&self) -> usize { self.length }
}

impl fmt::Display for ThreeLineFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "address text was {} characters long, 24 or more required", self.length)
    }
}

impl std::error::Error for ThreeLineFormatError {}
