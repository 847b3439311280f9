use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use url::Url;

/// A named deployment environment of the Solana network.
///
/// Cluster names follow the Mobile Wallet Adapter convention: the string form
/// is what the external wallet application receives in an authorization
/// request, and what configuration files carry.
///
/// # Example
///
/// ```
/// use solpay_types::Cluster;
///
/// let cluster: Cluster = "devnet".parse().unwrap();
/// assert_eq!(cluster, Cluster::Devnet);
/// assert_eq!(cluster.as_str(), "devnet");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cluster {
    /// Solana mainnet (`mainnet-beta`).
    MainnetBeta,
    /// Solana devnet.
    #[default]
    Devnet,
    /// Solana testnet.
    Testnet,
}

impl Cluster {
    /// Returns the cluster name as the wallet application expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        }
    }

    /// Returns the public RPC endpoint for this cluster.
    pub fn default_rpc_url(&self) -> Url {
        let endpoint = match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
        };
        Url::parse(endpoint).expect("cluster endpoints are well-formed URLs")
    }
}

impl Display for Cluster {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = ClusterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet-beta" => Ok(Cluster::MainnetBeta),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(ClusterParseError(other.to_string())),
        }
    }
}

impl Serialize for Cluster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Cluster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for parsing cluster names.
#[derive(Debug, thiserror::Error)]
#[error("unknown cluster {0}, expected mainnet-beta, devnet, or testnet")]
pub struct ClusterParseError(pub String);
