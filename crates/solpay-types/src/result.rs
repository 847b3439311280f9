use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use solana_signature::Signature;

/// Outcome of one transfer attempt.
///
/// `send_payment` returns this value instead of raising: callers consume a
/// uniform result without branching on error types. Serializes as
/// `{"success": bool, "signature"?: string, "message"?: string}` for interop
/// with the embedding app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendResult {
    /// The transfer was confirmed on chain.
    Confirmed { signature: Signature },
    /// The transfer did not happen; `message` says why.
    Failed { message: String },
}

impl SendResult {
    pub fn confirmed(signature: Signature) -> Self {
        SendResult::Confirmed { signature }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        SendResult::Failed {
            message: message.into(),
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, SendResult::Confirmed { .. })
    }

    pub fn signature(&self) -> Option<&Signature> {
        match self {
            SendResult::Confirmed { signature } => Some(signature),
            SendResult::Failed { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SendResult::Confirmed { .. } => None,
            SendResult::Failed { message } => Some(message),
        }
    }
}

impl Serialize for SendResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SendResult::Confirmed { signature } => {
                let mut s = serializer.serialize_struct("SendResult", 2)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("signature", &signature.to_string())?;
                s.end()
            }
            SendResult::Failed { message } => {
                let mut s = serializer.serialize_struct("SendResult", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("message", message)?;
                s.end()
            }
        }
    }
}
