//! Whether the active account has delegated close calls to the TP/SL wallet.

use crate::chains::SupportedChainId;
use crate::datasource::DelegationReader;
use crate::domain::{Address, WalletState};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selector must be 4 bytes of 0x-prefixed hex: {0}")]
pub struct SelectorParseError(pub String);

/// Parse a `0x`-prefixed 4-byte function selector.
pub fn parse_selector(s: &str) -> Result<[u8; 4], SelectorParseError> {
    let body = s
        .strip_prefix("0x")
        .ok_or_else(|| SelectorParseError(s.to_string()))?;
    let bytes = hex::decode(body).map_err(|_| SelectorParseError(s.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| SelectorParseError(s.to_string()))
}

/// Per-deployment contracts and the two selectors that get delegated.
#[derive(Debug, Clone)]
pub struct DelegationTargets {
    pub multi_account: HashMap<SupportedChainId, Address>,
    pub tpsl_wallet: HashMap<SupportedChainId, Address>,
    pub close_selector: [u8; 4],
    pub cancel_close_selector: [u8; 4],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TpSlDelegation {
    pub close: bool,
    pub cancel_close: bool,
}

/// Read both delegation flags for the connected account.
///
/// Without an account, on an unsupported chain, or without configured
/// contracts, nothing is read and both flags are false. A failed read
/// counts as not delegated.
pub async fn check_tpsl_delegation(
    reader: &dyn DelegationReader,
    wallet: &WalletState,
    targets: &DelegationTargets,
) -> TpSlDelegation {
    let (Some(account), Some(chain_id)) = (&wallet.account, wallet.chain_id) else {
        return TpSlDelegation::default();
    };
    let Ok(chain) = SupportedChainId::try_from(chain_id) else {
        return TpSlDelegation::default();
    };
    let (Some(multi_account), Some(tpsl_wallet)) = (
        targets.multi_account.get(&chain),
        targets.tpsl_wallet.get(&chain),
    ) else {
        return TpSlDelegation::default();
    };

    let (close, cancel_close) = futures::join!(
        reader.delegated_access(multi_account, account, tpsl_wallet, targets.close_selector),
        reader.delegated_access(
            multi_account,
            account,
            tpsl_wallet,
            targets.cancel_close_selector
        ),
    );

    TpSlDelegation {
        close: granted_or_false(close, "close"),
        cancel_close: granted_or_false(cancel_close, "cancel close"),
    }
}

fn granted_or_false<E: std::fmt::Display>(result: Result<bool, E>, what: &str) -> bool {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "delegation read for {} failed", what);
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::MockDelegationReader;

    const CLOSE: [u8; 4] = [0x50, 0x1e, 0x89, 0x1f];
    const CANCEL_CLOSE: [u8; 4] = [0xa6, 0x3b, 0x93, 0x63];

    fn addr(last: u8) -> Address {
        Address::parse(&format!("0x{}{:02x}", "00".repeat(19), last)).unwrap()
    }

    fn targets() -> DelegationTargets {
        DelegationTargets {
            multi_account: HashMap::from([(SupportedChainId::Base, addr(1))]),
            tpsl_wallet: HashMap::from([(SupportedChainId::Base, addr(2))]),
            close_selector: CLOSE,
            cancel_close_selector: CANCEL_CLOSE,
        }
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(parse_selector("0x501e891f"), Ok(CLOSE));
        assert!(parse_selector("501e891f").is_err());
        assert!(parse_selector("0x501e89").is_err());
        assert!(parse_selector("0xzzzzzzzz").is_err());
    }

    #[tokio::test]
    async fn test_both_delegated() {
        let reader = MockDelegationReader::new()
            .grant(addr(9), addr(2), CLOSE)
            .grant(addr(9), addr(2), CANCEL_CLOSE);
        let wallet = WalletState::connected(8453, addr(9));

        let result = check_tpsl_delegation(&reader, &wallet, &targets()).await;
        assert_eq!(
            result,
            TpSlDelegation {
                close: true,
                cancel_close: true
            }
        );
        assert_eq!(reader.read_count(), 2);
    }

    #[tokio::test]
    async fn test_only_close_delegated() {
        let reader = MockDelegationReader::new().grant(addr(9), addr(2), CLOSE);
        let wallet = WalletState::connected(8453, addr(9));

        let result = check_tpsl_delegation(&reader, &wallet, &targets()).await;
        assert!(result.close);
        assert!(!result.cancel_close);
    }

    #[tokio::test]
    async fn test_no_account_makes_no_reads() {
        let reader = MockDelegationReader::new();
        let wallet = WalletState {
            chain_id: Some(8453),
            account: None,
        };

        let result = check_tpsl_delegation(&reader, &wallet, &targets()).await;
        assert_eq!(result, TpSlDelegation::default());
        assert_eq!(reader.read_count(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_chain_makes_no_reads() {
        let reader = MockDelegationReader::new();
        let wallet = WalletState::connected(137, addr(9));

        let result = check_tpsl_delegation(&reader, &wallet, &targets()).await;
        assert_eq!(result, TpSlDelegation::default());
        assert_eq!(reader.read_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_read_counts_as_not_delegated() {
        let reader = MockDelegationReader::new()
            .grant(addr(9), addr(2), CLOSE)
            .grant(addr(9), addr(2), CANCEL_CLOSE)
            .fail_on(CANCEL_CLOSE);
        let wallet = WalletState::connected(8453, addr(9));

        let result = check_tpsl_delegation(&reader, &wallet, &targets()).await;
        assert!(result.close);
        assert!(!result.cancel_close);
    }
}
