use async_trait::async_trait;
use solpay_types::WalletAuthResult;
use std::sync::{Arc, RwLock};

/// Capability interface over the embedding app's credential store.
///
/// Returns the previously persisted authorization, if any. Persistence
/// format and lifecycle belong to the embedder.
#[async_trait]
pub trait AuthCache: Send + Sync {
    async fn stored_wallet_auth(&self) -> Option<WalletAuthResult>;
}

#[async_trait]
impl<T: AuthCache + ?Sized> AuthCache for Arc<T> {
    async fn stored_wallet_auth(&self) -> Option<WalletAuthResult> {
        (**self).stored_wallet_auth().await
    }
}

/// In-process [`AuthCache`] for tests and embedders without a platform store.
#[derive(Default)]
pub struct MemoryAuthCache {
    stored: RwLock<Option<WalletAuthResult>>,
}

impl MemoryAuthCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, auth: WalletAuthResult) {
        *self.stored.write().expect("auth cache lock poisoned") = Some(auth);
    }

    pub fn clear(&self) {
        *self.stored.write().expect("auth cache lock poisoned") = None;
    }
}

#[async_trait]
impl AuthCache for MemoryAuthCache {
    async fn stored_wallet_auth(&self) -> Option<WalletAuthResult> {
        self.stored.read().expect("auth cache lock poisoned").clone()
    }
}
