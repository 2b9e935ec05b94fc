use crate::domain::Address;
use serde::{Deserialize, Serialize};

/// Snapshot of the connected wallet, as reported by the session provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub chain_id: Option<u64>,
    pub account: Option<Address>,
}

impl WalletState {
    pub fn connected(chain_id: u64, account: Address) -> Self {
        Self {
            chain_id: Some(chain_id),
            account: Some(account),
        }
    }

    /// Both a network and an account are required to act.
    pub fn is_connected(&self) -> bool {
        self.chain_id.is_some() && self.account.is_some()
    }
}
