use solpay_types::{Address, lamports_to_sol};

use crate::rpc::RpcClientLike;

/// Best-effort reader of native-SOL balances.
///
/// Independent of the wallet session: it only needs an address and the RPC
/// seam.
pub struct BalanceReader<R> {
    rpc: R,
}

impl<R> BalanceReader<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }
}

impl<R: RpcClientLike> BalanceReader<R> {
    /// Returns the SOL balance of `address`, or 0 on any failure.
    ///
    /// Malformed addresses and network errors are logged and folded into
    /// zero; callers never see an error from this read.
    pub async fn balance(&self, address: &str) -> f64 {
        let parsed: Address = match address.parse() {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::warn!(error = %error, address, "balance read of invalid address");
                return 0.0;
            }
        };
        match self.rpc.get_balance(parsed.pubkey()).await {
            Ok(lamports) => lamports_to_sol(lamports),
            Err(error) => {
                tracing::warn!(error = %error, address, "balance read failed");
                0.0
            }
        }
    }
}
