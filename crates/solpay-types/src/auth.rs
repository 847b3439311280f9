use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use url::Url;

/// Opaque authorization token issued by the wallet application.
///
/// Holding a valid token lets the app request signing without re-prompting
/// the user. The token has no internal structure this crate inspects; it
/// remains valid until the wallet revokes it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// One account exposed by the wallet during authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Result of a successful wallet authorization or reauthorization.
///
/// Immutable value returned to the caller and persisted by the embedding
/// app's credential store. `public_address` is the first account the wallet
/// listed, treated as the primary address for payments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAuthResult {
    pub public_address: String,
    pub auth_token: AuthToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_uri_base: Option<Url>,
    pub accounts: Vec<WalletAccount>,
}
