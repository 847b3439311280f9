use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_response::TransactionError;
use solana_commitment_config::CommitmentConfig;
use solana_message::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;

/// Status of a submitted signature, as reported by the ledger.
#[derive(Clone, Debug)]
pub struct SignatureStatus {
    /// On-chain execution error, if the transaction landed and failed.
    pub err: Option<TransactionError>,
    /// Whether the status has reached the queried commitment.
    pub satisfies_commitment: bool,
}

pub trait RpcClientLike {
    fn get_latest_blockhash_with_commitment(
        &self,
        commitment: CommitmentConfig,
    ) -> impl Future<Output = Result<(Hash, u64), ClientError>> + Send;
    fn get_balance(
        &self,
        pubkey: &Pubkey,
    ) -> impl Future<Output = Result<u64, ClientError>> + Send;
    fn get_block_height(&self) -> impl Future<Output = Result<u64, ClientError>> + Send;
    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> impl Future<Output = Result<Option<SignatureStatus>, ClientError>> + Send;
}

impl<Container: AsRef<RpcClient> + Sync> RpcClientLike for Container {
    fn get_latest_blockhash_with_commitment(
        &self,
        commitment: CommitmentConfig,
    ) -> impl Future<Output = Result<(Hash, u64), ClientError>> + Send {
        RpcClient::get_latest_blockhash_with_commitment(self.as_ref(), commitment)
    }

    fn get_balance(
        &self,
        pubkey: &Pubkey,
    ) -> impl Future<Output = Result<u64, ClientError>> + Send {
        RpcClient::get_balance(self.as_ref(), pubkey)
    }

    fn get_block_height(&self) -> impl Future<Output = Result<u64, ClientError>> + Send {
        RpcClient::get_block_height(self.as_ref())
    }

    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> impl Future<Output = Result<Option<SignatureStatus>, ClientError>> + Send {
        async move {
            let response = RpcClient::get_signature_statuses(
                self.as_ref(),
                std::slice::from_ref(signature),
            )
            .await?;
            let status = response.value.into_iter().next().flatten();
            Ok(status.map(|status| SignatureStatus {
                satisfies_commitment: status.satisfies_commitment(commitment),
                err: status.err,
            }))
        }
    }
}
