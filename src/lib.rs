// SPDX-License-Identifier: CC0-1.0

//! Base58 check-encoded addresses.
//!
//! An address is the canonical 21-byte form of a pay-to-pubkey-hash or
//! pay-to-script-hash destination: a single version byte identifying the
//! network and the address kind, followed by a 20-byte hash. The text form is
//! the base58 encoding of those 21 bytes with a 4-byte sha256d checksum
//! appended, so a mistyped character is caught before funds are routed to an
//! unrecoverable destination.
//!
//! Equality, ordering and hashing are defined over the raw 21 bytes, never
//! over the text form. The text form is computed lazily and memoized.
//!
//! # Example: parsing an address for a known network
//!
//! ```rust
//! use base58_address::{Address, Network};
//!
//! let address: Address = "132F25rTsvBdp9JzLLBHP5mvGY66i1xdiM".parse().unwrap();
//! let address = address.require_network(&Network::Bitcoin).unwrap();
//!
//! assert_eq!(address.version(), 0);
//! assert!(address.is_standard(&Network::Bitcoin));
//! ```

// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]
#![doc(test(attr(warn(unused))))]
// Exclude lints we don't think are valuable.
#![allow(clippy::needless_question_mark)]
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.

pub mod error;
pub mod network;

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use hashes::{hash160, sha256d};

use crate::error::{
    InvalidBase58PayloadLengthError, InvalidPayloadLengthError, NetworkValidationError,
    ThreeLineFormatError,
};

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    error::ParseError,
    network::{AddressParams, Network},
};

/// Length of the canonical binary form: one version byte plus the payload.
pub const ADDRESS_LEN: usize = 21;

/// Length of the hash payload carried by every address.
pub const PAYLOAD_LEN: usize = 20;

/// Length of the checksum appended before base58 encoding.
const CHECKSUM_LEN: usize = 4;

/// A base58 check-encoded address.
///
/// The canonical representation is 21 bytes: a version byte that multiplexes
/// the network and the address kind (standard vs. multisig), followed by the
/// 20-byte hash of a public key or a script. The base58check text form is
/// derived on demand and cached; it is a pure function of the bytes, so the
/// cache can only ever hold one value.
///
/// `Eq`, `Ord` and `Hash` look exclusively at the 21 bytes. The `Hash`
/// implementation uses only four payload bytes near the tail (see
/// [`lookup_key`](Self::lookup_key)); it trades collision resistance for
/// speed and carries no security property.
#[derive(Clone)]
pub struct Address {
    bytes: [u8; ADDRESS_LEN],
    text: OnceLock<String>,
}

impl Address {
    /// Constructs an address from its 21-byte canonical form.
    ///
    /// The version byte is taken at face value; use
    /// [`require_network`](Self::require_network) to validate it against a
    /// network.
    pub fn from_byte_array(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address { bytes, text: OnceLock::new() }
    }

    /// Constructs an address from its canonical form together with its
    /// already-known text form, avoiding recomputation later.
    ///
    /// No attempt is made to verify that `text` matches `bytes`; that is the
    /// caller's contract.
    pub fn with_cached_text(bytes: [u8; ADDRESS_LEN], text: String) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(text);
        Address { bytes, text: cell }
    }

    /// Constructs an address from a 20-byte payload and an explicit version
    /// byte.
    ///
    /// # Errors
    ///
    /// If `payload` is not exactly 20 bytes long.
    pub fn from_payload(payload: &[u8], version: u8) -> Result<Self, InvalidPayloadLengthError> {
        if payload.len() != PAYLOAD_LEN {
            return Err(InvalidPayloadLengthError { length: payload.len() });
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = version;
        bytes[1..].copy_from_slice(payload);
        Ok(Address::from_byte_array(bytes))
    }

    /// Constructs a standard (pay-to-pubkey-hash) address from a 20-byte
    /// public key hash.
    ///
    /// # Errors
    ///
    /// If `pubkey_hash` is not exactly 20 bytes long.
    pub fn from_standard_hash(
        pubkey_hash: &[u8],
        params: &impl AddressParams,
    ) -> Result<Self, InvalidPayloadLengthError> {
        Self::from_payload(pubkey_hash, params.standard_address_header())
    }

    /// Constructs a multisig (pay-to-script-hash) address from a 20-byte
    /// script hash.
    ///
    /// # Errors
    ///
    /// If `script_hash` is not exactly 20 bytes long.
    pub fn from_multisig_hash(
        script_hash: &[u8],
        params: &impl AddressParams,
    ) -> Result<Self, InvalidPayloadLengthError> {
        Self::from_payload(script_hash, params.multisig_address_header())
    }

    /// Constructs a standard address from a serialized public key.
    ///
    /// The key bytes are run through hash160 (sha256 then ripemd160), which
    /// always yields a 20-byte payload.
    pub fn from_standard_public_key(public_key: &[u8], params: &impl AddressParams) -> Self {
        let hash = hash160::Hash::hash(public_key).to_byte_array();
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = params.standard_address_header();
        bytes[1..].copy_from_slice(&hash);
        Address::from_byte_array(bytes)
    }

    /// Returns the null address for `params`: an all-zero payload under the
    /// standard header.
    ///
    /// This is a sentinel, never a spendable destination.
    pub fn null(params: &impl AddressParams) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = params.standard_address_header();
        Address::from_byte_array(bytes)
    }

    /// Parses `s` and checks that its version byte is registered for the
    /// given network.
    ///
    /// Equivalent to `s.parse()` followed by
    /// [`require_network`](Self::require_network).
    pub fn parse_for_network(s: &str, params: &impl AddressParams) -> Result<Self, ParseError> {
        Ok(s.parse::<Address>()?.require_network(params)?)
    }

    /// Checks that the version byte is one of the two headers registered for
    /// the given network, consuming and returning the address on success.
    ///
    /// # Errors
    ///
    /// If the version byte is not registered for `params`.
    pub fn require_network(
        self,
        params: &impl AddressParams,
    ) -> Result<Self, NetworkValidationError> {
        if self.is_valid_for_network(params) {
            Ok(self)
        } else {
            Err(NetworkValidationError { version: self.version() })
        }
    }

    /// Parses a batch of address strings for the given network, preserving
    /// order.
    ///
    /// # Errors
    ///
    /// A single invalid element fails the whole batch.
    pub fn from_strings<'a, I>(strings: I, params: &impl AddressParams) -> Result<Vec<Self>, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        strings.into_iter().map(|s| Address::parse_for_network(s, params)).collect()
    }

    /// Converts a batch of addresses to their text forms, preserving order.
    pub fn to_strings(addresses: &[Self]) -> Vec<String> {
        addresses.iter().map(|a| a.to_base58().to_owned()).collect()
    }

    /// Returns the base58check text form, computing and caching it on first
    /// use.
    ///
    /// The checksum is the first four bytes of the sha256d of the 21 canonical
    /// bytes; the 25-byte result is base58 encoded. Decoding the returned
    /// string yields the same 21 bytes back, bit for bit.
    pub fn to_base58(&self) -> &str {
        self.text.get_or_init(|| {
            let mut buf = [0u8; ADDRESS_LEN + CHECKSUM_LEN];
            buf[..ADDRESS_LEN].copy_from_slice(&self.bytes);
            let checksum = sha256d::Hash::hash(&self.bytes);
            buf[ADDRESS_LEN..].copy_from_slice(&checksum.as_byte_array()[..CHECKSUM_LEN]);
            base58::encode(&buf)
        })
    }

    /// Returns the text form split into lines of 12, 12 and remaining
    /// characters, joined by `\r\n`, for visual chunking on printed material.
    ///
    /// # Errors
    ///
    /// If the text form is shorter than 24 characters. Addresses produced by
    /// this crate always encode to at least 25 characters, so this only
    /// triggers for a mismatched text smuggled in via
    /// [`with_cached_text`](Self::with_cached_text).
    pub fn to_three_lines(&self) -> Result<String, ThreeLineFormatError> {
        let text = self.to_base58();
        if text.len() < 24 {
            return Err(ThreeLineFormatError { length: text.len() });
        }
        // The base58 alphabet is ASCII, slicing at char boundaries is safe.
        Ok(format!("{}\r\n{}\r\n{}", &text[..12], &text[12..24], &text[24..]))
    }

    /// Returns `true` if the version byte is registered for the given network,
    /// under either the standard or the multisig header.
    pub fn is_valid_for_network(&self, params: &impl AddressParams) -> bool {
        let version = self.version();
        version == params.standard_address_header() || version == params.multisig_address_header()
    }

    /// Returns `true` if the version byte equals the network's standard
    /// (pay-to-pubkey-hash) header.
    pub fn is_standard(&self, params: &impl AddressParams) -> bool {
        self.version() == params.standard_address_header()
    }

    /// Returns `true` if the version byte equals the network's multisig
    /// (pay-to-script-hash) header.
    pub fn is_multisig(&self, params: &impl AddressParams) -> bool {
        self.version() == params.multisig_address_header()
    }

    /// Returns the version byte.
    pub fn version(&self) -> u8 { self.bytes[0] }

    /// Returns the full 21-byte canonical form.
    pub fn as_byte_array(&self) -> &[u8; ADDRESS_LEN] { &self.bytes }

    /// Returns a fresh copy of the 20-byte payload, without the version byte.
    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        self.bytes[1..].try_into().expect("statically 20B long")
    }

    /// Returns the 32-bit key used by the `Hash` implementation: bytes 16..20
    /// of the canonical form packed little-endian.
    ///
    /// Only 32 bits from a fixed slice, so unequal addresses may collide;
    /// suitable for hash tables, not for any security property.
    pub fn lookup_key(&self) -> u32 {
        u32::from_le_bytes(self.bytes[16..20].try_into().expect("statically 4B long"))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.to_base58()) }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.to_base58()) }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `decode_check` rejects empty and mistyped input: the checksum of the
        // prefix must match the trailing four bytes.
        let decoded = base58::decode_check(s)?;
        if decoded.len() != ADDRESS_LEN {
            return Err(InvalidBase58PayloadLengthError { length: decoded.len() }.into());
        }
        let bytes = decoded.try_into().expect("length checked above");
        // No cached text: recomputing reproduces `s` exactly.
        Ok(Address::from_byte_array(bytes))
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool { self.bytes == other.bytes }
}

impl Eq for Address {}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Address {
    /// Lexicographic over the 21 bytes, each compared as unsigned. The exact
    /// order is arbitrary; what matters is that sorting is deterministic.
    fn cmp(&self, other: &Self) -> Ordering { self.bytes.cmp(&other.bytes) }
}

impl core::hash::Hash for Address {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.lookup_key());
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a base58 check-encoded address string")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                s.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
