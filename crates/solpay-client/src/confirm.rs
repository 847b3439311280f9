use solana_commitment_config::CommitmentConfig;
use solana_message::Hash;
use solana_signature::Signature;
use std::time::Duration;

use crate::error::SendError;
use crate::rpc::RpcClientLike;

/// Network anchor bounding a transaction's validity.
///
/// Issued by the ledger with the latest blockhash; a transaction referencing
/// `blockhash` is droppable once the chain's block height passes
/// `last_valid_block_height`.
#[derive(Clone, Copy, Debug)]
pub struct BlockhashAnchor {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Bounded polling policy for transaction confirmation.
///
/// The ledger is polled every `poll_interval` until the signature reaches the
/// requested commitment, the anchor's validity height passes, or `max_polls`
/// attempts are spent. No retries happen beyond the bound.
#[derive(Clone, Copy, Debug)]
pub struct ConfirmPolicy {
    pub poll_interval: Duration,
    pub max_polls: u32,
}

impl Default for ConfirmPolicy {
    // 400ms x 75 polls: about the 30s confirmation window web3.js uses.
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(400),
            max_polls: 75,
        }
    }
}

/// Polls the ledger until `signature` confirms against `anchor`.
///
/// An on-chain execution error fails with the reported payload; a signature
/// the node never saw fails once the anchor expires.
pub async fn await_confirmation<R: RpcClientLike>(
    rpc: &R,
    signature: &Signature,
    anchor: &BlockhashAnchor,
    commitment: CommitmentConfig,
    policy: ConfirmPolicy,
) -> Result<(), SendError> {
    for _ in 0..policy.max_polls {
        match rpc.signature_status(signature, commitment).await? {
            Some(status) => {
                if let Some(err) = status.err {
                    return Err(SendError::TransactionFailed(err));
                }
                if status.satisfies_commitment {
                    return Ok(());
                }
            }
            None => {
                // Not yet seen by the node. Expired once the chain moves
                // past the anchor's validity height.
                let block_height = rpc.get_block_height().await?;
                if block_height > anchor.last_valid_block_height {
                    return Err(SendError::BlockhashExpired);
                }
            }
        }
        tokio::time::sleep(policy.poll_interval).await;
    }
    Err(SendError::ConfirmTimeout(policy.max_polls))
}
