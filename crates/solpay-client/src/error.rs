use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_response::TransactionError;
use solpay_wallet::SessionError;

/// Errors that can occur while submitting a payment.
///
/// `send_payment` converts every variant into a uniform
/// [`SendResult`](solpay_types::SendResult) failure at its boundary; the
/// variants exist for internal propagation and for tests.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// No cached wallet credential.
    #[error("no wallet connected; connect a wallet before sending")]
    NoSession,
    /// The cached sender address failed validation.
    #[error("stored wallet address {0} is invalid; reconnect the wallet")]
    InvalidSender(String),
    /// The recipient address failed validation.
    #[error("invalid recipient address {0}; expected a base58 public key of 32-44 characters")]
    InvalidRecipient(String),
    /// The transaction landed on chain and failed.
    #[error("transaction failed: {0}")]
    TransactionFailed(TransactionError),
    /// The blockhash anchor expired before the signature confirmed.
    #[error("transaction expired: block height exceeded")]
    BlockhashExpired,
    /// Confirmation polling hit its bound without a decisive status.
    #[error("transaction was not confirmed after {0} polls")]
    ConfirmTimeout(u32),
    /// Failed to compile the transfer message.
    #[error("failed to build transfer transaction: {0}")]
    Compile(String),
    /// Failure in the wallet session layer.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// RPC transport error.
    #[error(transparent)]
    Rpc(Box<ClientErrorKind>),
}

impl From<ClientError> for SendError {
    fn from(value: ClientError) -> Self {
        SendError::Rpc(Box::new(*value.kind))
    }
}
