//! Solana mobile wallet payments in Rust.
//!
//! `solpay-rs` bundles the solpay stack: session management against an
//! external mobile wallet application, native-SOL payment submission signed
//! by that wallet, and best-effort balance reads from a Solana RPC node.
//!
//! # Roles
//!
//! - **Wallet session** ([`wallet`]): obtain, refresh, and revoke an
//!   authorization token over the Mobile Wallet Adapter capability interface.
//!   The token is an opaque credential; the embedding app persists it behind
//!   the [`wallet::AuthCache`] seam.
//! - **Payments** ([`client`]): build a single-instruction transfer anchored
//!   to the latest blockhash, have the wallet sign and broadcast it, and poll
//!   for confirmation with an explicit bound.
//! - **Balances** ([`client::balance`]): read-only, independent of any
//!   session.
//!
//! # Example
//!
//! ```ignore
//! use solpay_rs::client::{BalanceReader, PaymentClient};
//! use solpay_rs::types::{AppIdentity, Cluster, PayConfig};
//! use solpay_rs::wallet::{MemoryAuthCache, WalletSession};
//! use solana_client::nonblocking::rpc_client::RpcClient;
//! use std::sync::Arc;
//!
//! let config = PayConfig::new(AppIdentity::new("Settle")).with_cluster(Cluster::Devnet);
//! let rpc = Arc::new(RpcClient::new(config.rpc_url().to_string()));
//!
//! // `wallet` is the platform binding of wallet::MobileWallet.
//! let session = WalletSession::new(wallet, config.cluster, config.identity.clone());
//! let auth = session.authorize().await?;
//!
//! let cache = MemoryAuthCache::new();
//! cache.store(auth.clone());
//!
//! let payments = PaymentClient::new(session, cache, Arc::clone(&rpc));
//! let result = payments.send_payment("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM", 0.5).await;
//! assert!(result.success());
//!
//! let balance = BalanceReader::new(rpc).balance(&auth.public_address).await;
//! ```

pub use solpay_client as client;
pub use solpay_types as types;
pub use solpay_wallet as wallet;
