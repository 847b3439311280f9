use serde::{Deserialize, Deserializer, Serialize, Serializer};
use solana_pubkey::Pubkey;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Shortest base58 encoding of a 32-byte public key.
pub const MIN_ADDRESS_LEN: usize = 32;
/// Longest base58 encoding of a 32-byte public key.
pub const MAX_ADDRESS_LEN: usize = 44;

/// A Solana public key address.
///
/// This is a wrapper around [`Pubkey`] serialized as a base58-encoded string.
/// Parsing enforces the [`MIN_ADDRESS_LEN`]..=[`MAX_ADDRESS_LEN`] length
/// bound before attempting the decode.
///
/// # Example
///
/// ```
/// use solpay_types::Address;
/// use std::str::FromStr;
///
/// let addr = Address::from_str("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap();
/// assert_eq!(addr.to_string(), "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Address(Pubkey);

impl Address {
    /// Creates a new address from a [`Pubkey`].
    pub const fn new(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }

    pub fn pubkey(&self) -> &Pubkey {
        &self.0
    }
}

/// Returns true iff `candidate` is a plausible Solana address: length within
/// bounds and decodable as a public key.
///
/// This is a pure predicate guarding downstream calls; a failed decode is
/// "invalid", not an error.
pub fn is_valid_address(candidate: &str) -> bool {
    Address::from_str(candidate).is_ok()
}

impl From<Pubkey> for Address {
    fn from(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }
}

impl From<Address> for Pubkey {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < MIN_ADDRESS_LEN || s.len() > MAX_ADDRESS_LEN {
            return Err(AddressParseError::Length(s.len()));
        }
        let pubkey =
            Pubkey::from_str(s).map_err(|_| AddressParseError::Decode(s.to_string()))?;
        Ok(Self(pubkey))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let base58_string = self.0.to_string();
        serializer.serialize_str(&base58_string)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for parsing Solana addresses.
#[derive(Debug, thiserror::Error)]
pub enum AddressParseError {
    /// The candidate length was outside the base58 bounds for 32 bytes.
    #[error(
        "address length {0} out of range, expected {MIN_ADDRESS_LEN}..={MAX_ADDRESS_LEN} characters"
    )]
    Length(usize),
    /// The candidate did not decode as a public key.
    #[error("failed to decode Solana address: {0}")]
    Decode(String),
}
