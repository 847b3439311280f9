//! Wallet session management over the Mobile Wallet Adapter.
//!
//! This crate owns the authorization lifecycle between an embedding app and
//! an external mobile wallet application:
//!
//! - [`adapter`] - The [`MobileWallet`](adapter::MobileWallet) capability
//!   interface over the wallet process, one async method per remote call
//! - [`session`] - [`WalletSession`](session::WalletSession): authorize,
//!   reauthorize, best-effort disconnect, and the reauthorize-then-sign flow
//! - [`cache`] - The [`AuthCache`](cache::AuthCache) seam over the app's
//!   persisted credential store
//!
//! The Mobile Wallet Adapter protocol state machine itself lives behind
//! [`adapter::MobileWallet`]: embedders bind the trait to their platform SDK,
//! tests substitute a mock.

pub mod adapter;
pub mod cache;
pub mod session;

pub use adapter::{AuthorizeRequest, MobileWallet, RawAuthorization, WalletAdapterError};
pub use cache::{AuthCache, MemoryAuthCache};
pub use session::{SessionError, WalletSession};
