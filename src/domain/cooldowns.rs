use serde::{Deserialize, Serialize};

/// Force-close timing parameters read from contract state, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceCooldowns {
    /// Wait after the last status change before a signature window may start.
    pub first_cooldown: i64,
    /// Wait after the signature window ends before the close can be forced.
    pub second_cooldown: i64,
    /// Shortest signature window the contract accepts.
    pub min_sig_period: i64,
}

impl ForceCooldowns {
    pub fn new(first_cooldown: i64, second_cooldown: i64, min_sig_period: i64) -> Self {
        Self {
            first_cooldown,
            second_cooldown,
            min_sig_period,
        }
    }
}
