use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_signature::Signature;
use solana_transaction::versioned::VersionedTransaction;
use solpay_types::{AppIdentity, AuthToken, Cluster, WalletAccount};
use std::sync::Arc;
use url::Url;

/// One authorization request sent to the wallet application.
///
/// A present `auth_token` makes the call a reauthorization: the wallet skips
/// interactive approval if the token is still valid, and may re-prompt or
/// fail if it is not.
#[derive(Clone, Debug, Serialize)]
pub struct AuthorizeRequest {
    pub cluster: Cluster,
    pub identity: AppIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<AuthToken>,
}

/// Raw authorization payload returned by the wallet application.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawAuthorization {
    pub auth_token: AuthToken,
    pub accounts: Vec<WalletAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_uri_base: Option<Url>,
}

/// Errors surfaced by the external wallet application.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalletAdapterError {
    /// The user declined the request in the wallet's approval dialog.
    #[error("request declined by user")]
    Declined,
    /// The wallet terminated the session before the request completed.
    #[error("wallet session closed: {0}")]
    SessionClosed(String),
    /// Transport failure between the app and the wallet process.
    #[error("wallet transport error: {0}")]
    Transport(String),
}

/// Capability interface over the external mobile wallet application.
///
/// Each method is one remote procedure call into a separate wallet process;
/// a call suspends until the wallet (and possibly the user) responds. No
/// cancellation is exposed: a suspended request runs to completion or failure
/// as determined by the wallet. Embedders bind this trait to their platform's
/// Mobile Wallet Adapter SDK; tests substitute a mock.
#[async_trait]
pub trait MobileWallet: Send + Sync {
    /// Requests authorization for a cluster and caller identity. Suspends
    /// until the user approves or denies in the wallet app.
    async fn authorize(
        &self,
        request: AuthorizeRequest,
    ) -> Result<RawAuthorization, WalletAdapterError>;

    /// Requests revocation of a previously issued token.
    async fn deauthorize(&self, auth_token: &AuthToken) -> Result<(), WalletAdapterError>;

    /// Submits transactions for signing and broadcast by the wallet.
    /// Returns one signature per transaction, in order.
    async fn sign_and_send_transactions(
        &self,
        transactions: &[VersionedTransaction],
    ) -> Result<Vec<Signature>, WalletAdapterError>;
}

#[async_trait]
impl<T: MobileWallet + ?Sized> MobileWallet for Arc<T> {
    async fn authorize(
        &self,
        request: AuthorizeRequest,
    ) -> Result<RawAuthorization, WalletAdapterError> {
        (**self).authorize(request).await
    }

    async fn deauthorize(&self, auth_token: &AuthToken) -> Result<(), WalletAdapterError> {
        (**self).deauthorize(auth_token).await
    }

    async fn sign_and_send_transactions(
        &self,
        transactions: &[VersionedTransaction],
    ) -> Result<Vec<Signature>, WalletAdapterError> {
        (**self).sign_and_send_transactions(transactions).await
    }
}
