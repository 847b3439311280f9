use solana_signature::Signature;
use solana_transaction::versioned::VersionedTransaction;
use solpay_types::{AppIdentity, AuthToken, Cluster, WalletAuthResult};

use crate::adapter::{AuthorizeRequest, MobileWallet, RawAuthorization, WalletAdapterError};

/// Errors from the wallet session manager.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The user denied the request, or the wallet failed it.
    #[error("wallet authorization failed: {0}")]
    Authorization(WalletAdapterError),
    /// The wallet authorized but listed no accounts.
    #[error("wallet returned no accounts")]
    NoAccounts,
    /// The wallet failed the signing request.
    #[error("wallet signing failed: {0}")]
    Signing(WalletAdapterError),
    /// The wallet accepted the signing request but returned no signature.
    #[error("wallet returned no signature")]
    NoSignature,
}

/// Manages authorization sessions with the external wallet application.
///
/// Holds the cluster and caller identity every request carries.
/// [`authorize`](WalletSession::authorize) and
/// [`reauthorize`](WalletSession::reauthorize) propagate failures to the
/// caller, who must react (e.g. retry the prompt);
/// [`disconnect`](WalletSession::disconnect) is best-effort and has no error
/// channel at all.
pub struct WalletSession<W> {
    wallet: W,
    cluster: Cluster,
    identity: AppIdentity,
}

impl<W> WalletSession<W> {
    pub fn new(wallet: W, cluster: Cluster, identity: AppIdentity) -> Self {
        Self {
            wallet,
            cluster,
            identity,
        }
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }
}

impl<W: MobileWallet> WalletSession<W> {
    /// Opens a wallet session and requests a fresh authorization.
    ///
    /// Shows the wallet's approval dialog; suspends until the user approves
    /// or denies. The first account the wallet lists becomes the primary
    /// address.
    pub async fn authorize(&self) -> Result<WalletAuthResult, SessionError> {
        let raw = self
            .wallet
            .authorize(self.request(None))
            .await
            .map_err(SessionError::Authorization)?;
        into_auth_result(raw)
    }

    /// Reauthorizes with a previously issued token.
    ///
    /// The wallet skips interactive approval if the token is still valid;
    /// otherwise it re-prompts or fails, and the outcome surfaces here
    /// unchanged.
    pub async fn reauthorize(&self, cached: &AuthToken) -> Result<WalletAuthResult, SessionError> {
        let raw = self
            .wallet
            .authorize(self.request(Some(cached.clone())))
            .await
            .map_err(SessionError::Authorization)?;
        into_auth_result(raw)
    }

    /// Requests revocation of `token`, best-effort.
    ///
    /// Revocation failure is logged and swallowed: the caller is abandoning
    /// the session regardless of the remote outcome, and local state must
    /// still be cleared.
    pub async fn disconnect(&self, token: &AuthToken) {
        if let Err(error) = self.wallet.deauthorize(token).await {
            tracing::warn!(error = %error, "wallet deauthorization failed");
        }
    }

    /// Reauthorizes with `cached` to obtain a live signing session, then
    /// submits `transactions` for signing and broadcast.
    pub async fn sign_and_send(
        &self,
        cached: &AuthToken,
        transactions: &[VersionedTransaction],
    ) -> Result<Vec<Signature>, SessionError> {
        self.wallet
            .authorize(self.request(Some(cached.clone())))
            .await
            .map_err(SessionError::Authorization)?;
        let signatures = self
            .wallet
            .sign_and_send_transactions(transactions)
            .await
            .map_err(SessionError::Signing)?;
        if signatures.is_empty() {
            return Err(SessionError::NoSignature);
        }
        Ok(signatures)
    }

    fn request(&self, auth_token: Option<AuthToken>) -> AuthorizeRequest {
        AuthorizeRequest {
            cluster: self.cluster,
            identity: self.identity.clone(),
            auth_token,
        }
    }
}

fn into_auth_result(raw: RawAuthorization) -> Result<WalletAuthResult, SessionError> {
    let primary = raw.accounts.first().ok_or(SessionError::NoAccounts)?;
    Ok(WalletAuthResult {
        public_address: primary.address.clone(),
        auth_token: raw.auth_token,
        wallet_uri_base: raw.wallet_uri_base,
        accounts: raw.accounts,
    })
}
