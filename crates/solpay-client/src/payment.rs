//! Payment submission through an external wallet session.
//!
//! The flow mirrors what a mobile payments screen needs: read the cached
//! credential, validate both ends of the transfer, anchor the transaction to
//! the latest blockhash, have the wallet sign and broadcast, then wait for
//! confirmation. The whole flow collapses into one uniform [`SendResult`] at
//! the `send_payment` boundary.

use solana_commitment_config::CommitmentConfig;
use solana_message::v0::Message as MessageV0;
use solana_message::{Hash, VersionedMessage};
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_system_interface::instruction as system_instruction;
use solana_transaction::versioned::VersionedTransaction;
use solpay_types::{Address, SendResult, sol_to_lamports};
use solpay_wallet::{AuthCache, MobileWallet, WalletSession};

use crate::confirm::{BlockhashAnchor, ConfirmPolicy, await_confirmation};
use crate::error::SendError;
use crate::rpc::RpcClientLike;

/// Builds the single-instruction native transfer from `from` to `to`, with
/// `from` as fee payer. Signatures are left for the wallet to fill.
pub fn build_transfer_transaction(
    from: &Pubkey,
    to: &Pubkey,
    lamports: u64,
    recent_blockhash: Hash,
) -> Result<VersionedTransaction, SendError> {
    let transfer = system_instruction::transfer(from, to, lamports);
    let message = MessageV0::try_compile(from, &[transfer], &[], recent_blockhash)
        .map_err(|e| SendError::Compile(format!("{e:?}")))?;
    let message = VersionedMessage::V0(message);
    let num_required = message.header().num_required_signatures as usize;
    Ok(VersionedTransaction {
        signatures: vec![Signature::default(); num_required],
        message,
    })
}

/// Submits native-SOL payments signed by the external wallet application.
///
/// Holds the wallet session, the credential cache, and the RPC seam. The
/// credential cache decides whether a payment can start at all; the wallet
/// serializes signing requests on its side, so concurrent `send_payment`
/// calls are not synchronized here.
pub struct PaymentClient<W, C, R> {
    session: WalletSession<W>,
    cache: C,
    rpc: R,
    commitment: CommitmentConfig,
    confirm_policy: ConfirmPolicy,
}

impl<W, C, R> PaymentClient<W, C, R> {
    pub fn new(session: WalletSession<W>, cache: C, rpc: R) -> Self {
        Self {
            session,
            cache,
            rpc,
            commitment: CommitmentConfig::confirmed(),
            confirm_policy: ConfirmPolicy::default(),
        }
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_confirm_policy(mut self, policy: ConfirmPolicy) -> Self {
        self.confirm_policy = policy;
        self
    }

    pub fn session(&self) -> &WalletSession<W> {
        &self.session
    }
}

impl<W, C, R> PaymentClient<W, C, R>
where
    W: MobileWallet,
    C: AuthCache,
    R: RpcClientLike + Sync,
{
    /// Sends `amount_sol` to `to_address`, signed by the connected wallet.
    ///
    /// Never returns an error: every failure at every step is folded into
    /// [`SendResult::Failed`], so callers consume one uniform value.
    pub async fn send_payment(&self, to_address: &str, amount_sol: f64) -> SendResult {
        match self.try_send(to_address, amount_sol).await {
            Ok(signature) => SendResult::confirmed(signature),
            Err(error) => {
                tracing::warn!(error = %error, to = to_address, "payment failed");
                SendResult::failed(error.to_string())
            }
        }
    }

    async fn try_send(&self, to_address: &str, amount_sol: f64) -> Result<Signature, SendError> {
        let cached = self
            .cache
            .stored_wallet_auth()
            .await
            .ok_or(SendError::NoSession)?;

        let sender: Address = cached
            .public_address
            .parse()
            .map_err(|_| SendError::InvalidSender(cached.public_address.clone()))?;
        let recipient: Address = to_address
            .parse()
            .map_err(|_| SendError::InvalidRecipient(to_address.to_string()))?;

        // Lossy by contract: sub-lamport precision truncates toward zero.
        let lamports = sol_to_lamports(amount_sol);
        tracing::info!(
            from = %sender,
            to = %recipient,
            amount_sol,
            lamports,
            "creating transfer transaction"
        );

        let (blockhash, last_valid_block_height) = self
            .rpc
            .get_latest_blockhash_with_commitment(self.commitment)
            .await?;
        let anchor = BlockhashAnchor {
            blockhash,
            last_valid_block_height,
        };

        let transaction = build_transfer_transaction(
            sender.pubkey(),
            recipient.pubkey(),
            lamports,
            anchor.blockhash,
        )?;

        let signatures = self
            .session
            .sign_and_send(&cached.auth_token, &[transaction])
            .await?;
        let signature = signatures[0];
        tracing::info!(signature = %signature, "transaction sent");

        await_confirmation(
            &self.rpc,
            &signature,
            &anchor,
            self.commitment,
            self.confirm_policy,
        )
        .await?;
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::SignatureStatus;
    use async_trait::async_trait;
    use solana_client::client_error::{ClientError, ClientErrorKind};
    use solana_client::rpc_response::TransactionError;
    use solpay_types::{
        AppIdentity, AuthToken, Cluster, LAMPORTS_PER_SOL, WalletAccount, WalletAuthResult,
    };
    use solpay_wallet::{AuthorizeRequest, RawAuthorization, WalletAdapterError};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MockWallet {
        authorize_calls: Mutex<u32>,
        sent_transactions: Mutex<Vec<VersionedTransaction>>,
        signature: Option<Signature>,
    }

    #[async_trait]
    impl MobileWallet for MockWallet {
        async fn authorize(
            &self,
            request: AuthorizeRequest,
        ) -> Result<RawAuthorization, WalletAdapterError> {
            *self.authorize_calls.lock().unwrap() += 1;
            let token = request
                .auth_token
                .unwrap_or_else(|| AuthToken::new("fresh"));
            Ok(RawAuthorization {
                auth_token: token,
                accounts: vec![WalletAccount {
                    address: "unused".to_string(),
                    label: None,
                }],
                wallet_uri_base: None,
            })
        }

        async fn deauthorize(&self, _auth_token: &AuthToken) -> Result<(), WalletAdapterError> {
            Ok(())
        }

        async fn sign_and_send_transactions(
            &self,
            transactions: &[VersionedTransaction],
        ) -> Result<Vec<Signature>, WalletAdapterError> {
            self.sent_transactions
                .lock()
                .unwrap()
                .extend_from_slice(transactions);
            match self.signature {
                Some(signature) => Ok(vec![signature]),
                None => Err(WalletAdapterError::SessionClosed("gone".to_string())),
            }
        }
    }

    struct MockCache {
        stored: Option<WalletAuthResult>,
    }

    #[async_trait]
    impl AuthCache for MockCache {
        async fn stored_wallet_auth(&self) -> Option<WalletAuthResult> {
            self.stored.clone()
        }
    }

    #[derive(Default)]
    struct MockRpc {
        calls: Mutex<u32>,
        blockhash_unavailable: bool,
        status: Mutex<Option<SignatureStatus>>,
    }

    impl MockRpc {
        fn confirming() -> Self {
            Self {
                status: Mutex::new(Some(SignatureStatus {
                    err: None,
                    satisfies_commitment: true,
                })),
                ..Self::default()
            }
        }
    }

    impl RpcClientLike for MockRpc {
        fn get_latest_blockhash_with_commitment(
            &self,
            _commitment: CommitmentConfig,
        ) -> impl Future<Output = Result<(Hash, u64), ClientError>> + Send {
            async move {
                *self.calls.lock().unwrap() += 1;
                if self.blockhash_unavailable {
                    Err(ClientError::from(ClientErrorKind::Custom(
                        "node unreachable".to_string(),
                    )))
                } else {
                    Ok((Hash::default(), 500))
                }
            }
        }

        fn get_balance(
            &self,
            _pubkey: &Pubkey,
        ) -> impl Future<Output = Result<u64, ClientError>> + Send {
            async move {
                *self.calls.lock().unwrap() += 1;
                Ok(0)
            }
        }

        fn get_block_height(&self) -> impl Future<Output = Result<u64, ClientError>> + Send {
            async move {
                *self.calls.lock().unwrap() += 1;
                Ok(10)
            }
        }

        fn signature_status(
            &self,
            _signature: &Signature,
            _commitment: CommitmentConfig,
        ) -> impl Future<Output = Result<Option<SignatureStatus>, ClientError>> + Send {
            async move {
                *self.calls.lock().unwrap() += 1;
                Ok(self.status.lock().unwrap().clone())
            }
        }
    }

    fn stored_auth(address: &str) -> WalletAuthResult {
        WalletAuthResult {
            public_address: address.to_string(),
            auth_token: AuthToken::new("cached-token"),
            wallet_uri_base: None,
            accounts: vec![WalletAccount {
                address: address.to_string(),
                label: None,
            }],
        }
    }

    fn client(
        wallet: MockWallet,
        cache: MockCache,
        rpc: MockRpc,
    ) -> PaymentClient<MockWallet, MockCache, MockRpc> {
        let session = WalletSession::new(wallet, Cluster::Devnet, AppIdentity::new("Settle"));
        PaymentClient::new(session, cache, rpc).with_confirm_policy(ConfirmPolicy {
            poll_interval: Duration::from_millis(1),
            max_polls: 3,
        })
    }

    #[tokio::test]
    async fn test_no_session_short_circuits() {
        let client = client(
            MockWallet::default(),
            MockCache { stored: None },
            MockRpc::default(),
        );

        let result = client.send_payment(&Pubkey::new_unique().to_string(), 0.5).await;
        assert!(!result.success());
        assert!(result.message().unwrap().contains("no wallet connected"));
        assert_eq!(*client.session().wallet().authorize_calls.lock().unwrap(), 0);
        assert_eq!(*client.rpc.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_recipient_short_circuits() {
        let sender = Pubkey::new_unique().to_string();
        let client = client(
            MockWallet::default(),
            MockCache {
                stored: Some(stored_auth(&sender)),
            },
            MockRpc::default(),
        );

        let result = client.send_payment("not-an-address", 0.5).await;
        assert!(!result.success());
        assert!(result.message().unwrap().contains("recipient"));
        assert_eq!(*client.session().wallet().authorize_calls.lock().unwrap(), 0);
        assert_eq!(*client.rpc.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_cached_sender_short_circuits() {
        let client = client(
            MockWallet::default(),
            MockCache {
                stored: Some(stored_auth("corrupted")),
            },
            MockRpc::default(),
        );

        let result = client
            .send_payment(&Pubkey::new_unique().to_string(), 0.5)
            .await;
        assert!(!result.success());
        assert!(result.message().unwrap().contains("reconnect"));
        assert_eq!(*client.session().wallet().authorize_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_confirmed_payment_round_trip() {
        let sender = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let signature = Signature::from([3u8; 64]);
        let wallet = MockWallet {
            signature: Some(signature),
            ..MockWallet::default()
        };
        let client = client(
            wallet,
            MockCache {
                stored: Some(stored_auth(&sender.to_string())),
            },
            MockRpc::confirming(),
        );

        let result = client.send_payment(&recipient.to_string(), 0.5).await;
        assert!(result.success());
        assert_eq!(result.signature(), Some(&signature));

        // One reauthorization with the cached token, one transaction sent.
        assert_eq!(*client.session().wallet().authorize_calls.lock().unwrap(), 1);
        let sent = client.session().wallet().sent_transactions.lock().unwrap();
        assert_eq!(sent.len(), 1);

        // The compiled message carries the floored lamport amount:
        // u32 discriminant followed by a u64, both little-endian.
        let VersionedMessage::V0(message) = &sent[0].message else {
            panic!("expected a v0 message");
        };
        let data = &message.instructions[0].data;
        let lamports = u64::from_le_bytes(data[4..12].try_into().unwrap());
        assert_eq!(lamports, LAMPORTS_PER_SOL / 2);
        assert_eq!(message.header.num_required_signatures, 1);
    }

    #[tokio::test]
    async fn test_onchain_failure_is_embedded() {
        let sender = Pubkey::new_unique();
        let wallet = MockWallet {
            signature: Some(Signature::from([4u8; 64])),
            ..MockWallet::default()
        };
        let rpc = MockRpc {
            status: Mutex::new(Some(SignatureStatus {
                err: Some(TransactionError::AccountNotFound),
                satisfies_commitment: true,
            })),
            ..MockRpc::default()
        };
        let client = client(
            wallet,
            MockCache {
                stored: Some(stored_auth(&sender.to_string())),
            },
            rpc,
        );

        let result = client
            .send_payment(&Pubkey::new_unique().to_string(), 1.0)
            .await;
        assert!(!result.success());
        assert!(result.message().unwrap().contains("transaction failed"));
    }

    #[tokio::test]
    async fn test_rpc_failure_is_uniform() {
        let sender = Pubkey::new_unique();
        let rpc = MockRpc {
            blockhash_unavailable: true,
            ..MockRpc::default()
        };
        let client = client(
            MockWallet::default(),
            MockCache {
                stored: Some(stored_auth(&sender.to_string())),
            },
            rpc,
        );

        let result = client
            .send_payment(&Pubkey::new_unique().to_string(), 1.0)
            .await;
        assert!(!result.success());
        // The wallet was never contacted: the anchor fetch failed first.
        assert_eq!(*client.session().wallet().authorize_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_build_transfer_transaction_fee_payer() {
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let tx = build_transfer_transaction(&from, &to, 42, Hash::default()).unwrap();
        let VersionedMessage::V0(message) = &tx.message else {
            panic!("expected a v0 message");
        };
        assert_eq!(message.account_keys[0], from);
        assert_eq!(tx.signatures.len(), 1);
    }
}
