// SPDX-License-Identifier: CC0-1.0

//! Per-network address version bytes.
//!
//! The codec itself hard-codes no constants; it asks an [`AddressParams`]
//! implementation for the two headers it multiplexes into the version byte.
//! [`Network`] covers the well-known networks, any future network can
//! implement the trait.

use core::fmt;
use core::str::FromStr;

/// Version byte for standard (pay-to-pubkey-hash) addresses on mainnet.
pub const PUBKEY_ADDRESS_PREFIX_MAIN: u8 = 0; // 0x00
/// Version byte for multisig (pay-to-script-hash) addresses on mainnet.
pub const SCRIPT_ADDRESS_PREFIX_MAIN: u8 = 5; // 0x05
/// Version byte for standard (pay-to-pubkey-hash) addresses on test networks.
pub const PUBKEY_ADDRESS_PREFIX_TEST: u8 = 111; // 0x6f
/// Version byte for multisig (pay-to-script-hash) addresses on test networks.
pub const SCRIPT_ADDRESS_PREFIX_TEST: u8 = 196; // 0xc4

/// The two address version bytes registered for a network.
pub trait AddressParams {
    /// Version byte for standard (pay-to-pubkey-hash) addresses.
    fn standard_address_header(&self) -> u8;

    /// Version byte for multisig (pay-to-script-hash) addresses.
    fn multisig_address_header(&self) -> u8;
}

/// The well-known networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Network {
    /// Mainnet.
    Bitcoin,
    /// The testnet network.
    Testnet,
    /// The local regression-testing network.
    Regtest,
}

impl AddressParams for Network {
    fn standard_address_header(&self) -> u8 {
        match *self {
            Network::Bitcoin => PUBKEY_ADDRESS_PREFIX_MAIN,
            Network::Testnet | Network::Regtest => PUBKEY_ADDRESS_PREFIX_TEST,
        }
    }

    fn multisig_address_header(&self) -> u8 {
        match *self {
            Network::Bitcoin => SCRIPT_ADDRESS_PREFIX_MAIN,
            Network::Testnet | Network::Regtest => SCRIPT_ADDRESS_PREFIX_TEST,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Network::Bitcoin => "bitcoin",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        })
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bitcoin" => Ok(Network::Bitcoin),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ParseNetworkError(s.to_owned())),
        }
    }
}

/// Network name failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl std::error::Error for ParseNetworkError {}
