//! Collaborator abstractions: quote/market data, close submission, and
//! on-chain delegation reads.
//!
//! Wallet handling, signing and contract encoding live behind these traits.

use crate::domain::{Address, DateRange, Decimal, ForceCooldowns, Market, MarketId, Quote};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;

pub use mock::{MockCloseSubmitter, MockDataSource, MockDelegationReader};

/// Read-only data the force-close modal renders from.
#[async_trait]
pub trait QuoteDataSource: Send + Sync + fmt::Debug {
    /// Market metadata by id, or None if the market is unknown.
    async fn fetch_market(&self, market_id: MarketId) -> Result<Option<Market>, DataSourceError>;

    /// Quantity of the quote executed on-chain so far.
    async fn fetch_fill_amount(&self, quote: &Quote) -> Result<Option<Decimal>, DataSourceError>;

    /// Contract cooldown parameters, or None while they are not yet known.
    async fn fetch_force_cooldowns(&self) -> Result<Option<ForceCooldowns>, DataSourceError>;

    /// Whether market prices over `range` satisfy the quote's close condition.
    async fn check_price_condition(
        &self,
        quote: &Quote,
        range: Option<&DateRange>,
    ) -> Result<bool, DataSourceError>;
}

/// Submits the force-close transaction. Invoked at most once per click.
#[async_trait]
pub trait CloseSubmitter: Send + Sync + fmt::Debug {
    async fn force_close(&self, quote: &Quote, range: &DateRange) -> Result<(), SubmitError>;
}

/// Reads `delegatedAccesses(account, target, selector)` from a multi-account contract.
#[async_trait]
pub trait DelegationReader: Send + Sync + fmt::Debug {
    async fn delegated_access(
        &self,
        contract: &Address,
        account: &Address,
        target: &Address,
        selector: [u8; 4],
    ) -> Result<bool, DataSourceError>;
}

/// Error type for data source operations.
#[derive(Debug, Clone)]
pub enum DataSourceError {
    /// Transport failure reaching the RPC or backend.
    NetworkError(String),
    /// A contract call reverted or returned undecodable data.
    ContractRead { contract: String, message: String },
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DataSourceError::ContractRead { contract, message } => {
                write!(f, "Contract read failed on {}: {}", contract, message)
            }
        }
    }
}

impl std::error::Error for DataSourceError {}

/// Failure reported by the close submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("user rejected the transaction")]
    Rejected,
    #[error("transaction failed: {0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasource_error_display() {
        let err = DataSourceError::NetworkError("connection timeout".to_string());
        assert_eq!(err.to_string(), "Network error: connection timeout");

        let err = DataSourceError::ContractRead {
            contract: "0xabc".to_string(),
            message: "execution reverted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Contract read failed on 0xabc: execution reverted"
        );
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(SubmitError::Rejected.to_string(), "user rejected the transaction");
        assert_eq!(
            SubmitError::Failed("out of gas".to_string()).to_string(),
            "transaction failed: out of gas"
        );
    }
}
