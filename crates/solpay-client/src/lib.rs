//! Native-SOL payment submission and balance reads.
//!
//! This crate implements the ledger-facing half of the solpay stack:
//!
//! - [`rpc`] - [`RpcClientLike`](rpc::RpcClientLike), the seam over a Solana
//!   RPC node, implemented for `solana_client`'s nonblocking [`RpcClient`]
//! - [`payment`] - [`PaymentClient`](payment::PaymentClient): builds a
//!   single-instruction transfer, has the external wallet sign and broadcast
//!   it, and polls for confirmation
//! - [`confirm`] - The bounded confirmation-polling policy
//! - [`balance`] - [`BalanceReader`](balance::BalanceReader), a best-effort
//!   balance query
//!
//! `send_payment` and `balance` never propagate errors: the first returns a
//! uniform [`SendResult`](solpay_types::SendResult), the second folds every
//! failure into a zero balance. Authorization flows propagate; see
//! `solpay-wallet`.
//!
//! [`RpcClient`]: solana_client::nonblocking::rpc_client::RpcClient

pub mod balance;
pub mod confirm;
pub mod error;
pub mod payment;
pub mod rpc;

pub use balance::BalanceReader;
pub use confirm::{BlockhashAnchor, ConfirmPolicy};
pub use error::SendError;
pub use payment::{PaymentClient, build_transfer_transaction};
pub use rpc::{RpcClientLike, SignatureStatus};
