//! Address assembly and validation.
//!
//! A standard address is `network byte || public spend key || public
//! view key || checksum`, where the checksum is the first four bytes
//! of the Keccak-256 of everything before it, rendered with Monero's
//! block Base58 (95 characters for this 69-byte payload).

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use xmr_primitives::base58;
use xmr_primitives::ec::PublicKey;
use xmr_primitives::hash::keccak256_multi;

use crate::KeysError;

/// Network byte prepended to mainnet primary addresses.
const MAINNET_PREFIX: u8 = 0x12;

/// Network byte prepended to testnet primary addresses.
const TESTNET_PREFIX: u8 = 0x35;

/// Length of the address checksum in bytes.
const CHECKSUM_LEN: usize = 4;

static RE_MAINNET_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4[0-9AB][1-9A-HJ-NP-Za-km-z]{93}$").unwrap());

/// The network an address is encoded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    /// Mainnet, network byte 0x12; addresses start with '4'.
    Mainnet,
    /// Testnet, network byte 0x35; addresses start with '9'.
    Testnet,
}

impl Network {
    /// The network byte this network prepends to addresses.
    pub fn prefix_byte(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }
}

impl FromStr for Network {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moneromainnet" => Ok(Network::Mainnet),
            "monerotestnet" => Ok(Network::Testnet),
            other => Err(KeysError::UnsupportedNetwork(other.to_string())),
        }
    }
}

/// Encode a primary address for a public spend/view key pair.
pub fn encode_address(
    network: Network,
    public_spend_key: &PublicKey,
    public_view_key: &PublicKey,
) -> Result<String, KeysError> {
    let prefix = [network.prefix_byte()];
    let spend_bytes = public_spend_key.to_bytes();
    let view_bytes = public_view_key.to_bytes();
    let checksum = keccak256_multi(&[&prefix, &spend_bytes, &view_bytes]);

    let mut payload = Vec::with_capacity(1 + 32 + 32 + CHECKSUM_LEN);
    payload.extend_from_slice(&prefix);
    payload.extend_from_slice(&spend_bytes);
    payload.extend_from_slice(&view_bytes);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    Ok(base58::encode(&payload)?)
}

/// Encode a primary address from hex public keys and a network code.
///
/// The network code is `"moneromainnet"` or `"monerotestnet"`; both
/// keys must be valid hex of exactly 32 bytes.
pub fn derive_address_from_public_keys(
    public_spend_key: &str,
    public_view_key: &str,
    network: &str,
) -> Result<String, KeysError> {
    let network = network.parse()?;
    let spend = PublicKey::from_hex(public_spend_key)?;
    let view = PublicKey::from_hex(public_view_key)?;
    encode_address(network, &spend, &view)
}

/// Whether a string is shaped like a mainnet primary address.
///
/// Checks the '4' prefix, the second character range, and that the
/// remaining 93 characters are in the Base58 alphabet. Does not verify
/// the embedded checksum.
pub fn validate_address(address: &str) -> bool {
    RE_MAINNET_ADDRESS.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUB_SPEND_HEX: &str =
        "ca4a448c3fc4d04945da9fdf920976c05e9bbe3d8cebb1858ea44d587c5e63c3";
    const PUB_VIEW_HEX: &str =
        "88c1ef1bf8b7575ea2a8ccbc0bbde2d1b5e00da2980097a8b1a51e6d09f707ae";
    const MAINNET_ADDRESS: &str =
        "49HjJN4ZbLjDFqe3Mus7mPZBE6Q27cRGtPLfyuNejGdYZhvke36zj1xGq5kDCbSCXbc5TLTR7vygzVDYTcgFURLaLe4Gdds";
    const TESTNET_ADDRESS: &str =
        "9zqGncipshqDFqe3Mus7mPZBE6Q27cRGtPLfyuNejGdYZhvke36zj1xGq5kDCbSCXbc5TLTR7vygzVDYTcgFURLaLhu3moV";

    #[test]
    fn test_mainnet_address() {
        let address =
            derive_address_from_public_keys(PUB_SPEND_HEX, PUB_VIEW_HEX, "moneromainnet")
                .unwrap();
        assert_eq!(address, MAINNET_ADDRESS);
        assert_eq!(address.len(), 95);
        assert!(address.starts_with('4'));
    }

    #[test]
    fn test_testnet_address() {
        let address =
            derive_address_from_public_keys(PUB_SPEND_HEX, PUB_VIEW_HEX, "monerotestnet")
                .unwrap();
        assert_eq!(address, TESTNET_ADDRESS);
        assert!(address.starts_with('9'));
    }

    #[test]
    fn test_networks_differ() {
        assert_ne!(MAINNET_ADDRESS, TESTNET_ADDRESS);
    }

    #[test]
    fn test_unsupported_network() {
        let err = derive_address_from_public_keys(PUB_SPEND_HEX, PUB_VIEW_HEX, "stagenet")
            .unwrap_err();
        assert!(matches!(err, KeysError::UnsupportedNetwork(_)));
    }

    #[test]
    fn test_bad_public_keys_rejected() {
        assert!(
            derive_address_from_public_keys("zz", PUB_VIEW_HEX, "moneromainnet").is_err()
        );
        // Valid hex of the wrong length.
        assert!(
            derive_address_from_public_keys("caffee", PUB_VIEW_HEX, "moneromainnet").is_err()
        );
    }

    #[test]
    fn test_address_byte_structure() {
        let decoded = base58::decode(MAINNET_ADDRESS).unwrap();
        assert_eq!(decoded.len(), 69);
        assert_eq!(decoded[0], 0x12);
        assert_eq!(hex::encode(&decoded[1..33]), PUB_SPEND_HEX);
        assert_eq!(hex::encode(&decoded[33..65]), PUB_VIEW_HEX);
        let expected = keccak256_multi(&[&decoded[..65]]);
        assert_eq!(&decoded[65..], &expected[..CHECKSUM_LEN]);
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address(MAINNET_ADDRESS));
        // Testnet addresses are out of scope for the validator.
        assert!(!validate_address(TESTNET_ADDRESS));
        assert!(!validate_address(""));
        assert!(!validate_address(&MAINNET_ADDRESS[..94]));
        // 'l' is not in the Base58 alphabet.
        let mut tampered = MAINNET_ADDRESS.to_string();
        tampered.replace_range(10..11, "l");
        assert!(!validate_address(&tampered));
    }
}
