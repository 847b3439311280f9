//! Shared types for the solpay payment stack.
//!
//! This crate holds the value types passed between the wallet session layer
//! ([`solpay-wallet`]) and the payment client ([`solpay-client`]):
//!
//! - [`cluster`] - Named Solana deployment environments and their endpoints
//! - [`address`] - Base58 public key addresses and validation
//! - [`identity`] - The app identity shown by the wallet during approval
//! - [`auth`] - Authorization tokens and authorization results
//! - [`money`] - SOL/lamport conversion
//! - [`result`] - The uniform outcome value of a transfer attempt
//! - [`config`] - Payment client configuration with environment fallbacks
//!
//! [`solpay-wallet`]: https://docs.rs/solpay-wallet
//! [`solpay-client`]: https://docs.rs/solpay-client

pub mod address;
pub mod auth;
pub mod cluster;
pub mod config;
pub mod identity;
pub mod money;
pub mod result;

pub use address::{Address, AddressParseError, is_valid_address};
pub use auth::{AuthToken, WalletAccount, WalletAuthResult};
pub use cluster::{Cluster, ClusterParseError};
pub use config::PayConfig;
pub use identity::AppIdentity;
pub use money::{LAMPORTS_PER_SOL, lamports_to_sol, sol_to_lamports};
pub use result::SendResult;
