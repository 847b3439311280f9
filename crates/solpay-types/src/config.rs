//! Configuration for the payment stack.
//!
//! Values not present in a deserialized config fall back to environment
//! variables, then to hardcoded per-cluster defaults:
//!
//! - `SOLPAY_CLUSTER` - cluster name (`mainnet-beta`, `devnet`, `testnet`)
//! - `SOLPAY_RPC_URL` - RPC endpoint override

use serde::Deserialize;
use url::Url;

use crate::cluster::Cluster;
use crate::identity::AppIdentity;

/// Configuration for a payment client.
#[derive(Clone, Debug, Deserialize)]
pub struct PayConfig {
    #[serde(default = "config_defaults::default_cluster")]
    pub cluster: Cluster,
    /// RPC endpoint; `None` resolves to `SOLPAY_RPC_URL`, then the cluster's
    /// public endpoint.
    #[serde(default)]
    pub rpc: Option<Url>,
    pub identity: AppIdentity,
}

impl PayConfig {
    pub fn new(identity: AppIdentity) -> Self {
        Self {
            cluster: config_defaults::default_cluster(),
            rpc: None,
            identity,
        }
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn with_rpc(mut self, rpc: Url) -> Self {
        self.rpc = Some(rpc);
        self
    }

    /// Resolves the RPC endpoint to use.
    pub fn rpc_url(&self) -> Url {
        self.rpc
            .clone()
            .unwrap_or_else(|| config_defaults::default_rpc(self.cluster))
    }
}

pub mod config_defaults {
    use std::env;
    use url::Url;

    use crate::cluster::Cluster;

    /// Returns the default cluster with fallback: $SOLPAY_CLUSTER -> devnet
    pub fn default_cluster() -> Cluster {
        env::var("SOLPAY_CLUSTER")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the default RPC endpoint with fallback:
    /// $SOLPAY_RPC_URL -> the cluster's public endpoint
    pub fn default_rpc(cluster: Cluster) -> Url {
        env::var("SOLPAY_RPC_URL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| cluster.default_rpc_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PayConfig =
            serde_json::from_str(r#"{"identity": {"name": "Settle"}}"#).unwrap();
        assert_eq!(config.identity.name, "Settle");
        assert!(config.rpc.is_none());
    }

    #[test]
    fn test_explicit_rpc_wins() {
        let rpc: Url = "http://localhost:8899".parse().unwrap();
        let config = PayConfig::new(AppIdentity::new("Settle")).with_rpc(rpc.clone());
        assert_eq!(config.rpc_url(), rpc);
    }

    #[test]
    fn test_cluster_endpoint_is_fallback() {
        let config = PayConfig::new(AppIdentity::new("Settle")).with_cluster(Cluster::Testnet);
        // No SOLPAY_RPC_URL in the test environment.
        if std::env::var("SOLPAY_RPC_URL").is_err() {
            assert_eq!(config.rpc_url(), Cluster::Testnet.default_rpc_url());
        }
    }
}
