//! In-memory collaborators for testing without a wallet or RPC.

use super::{CloseSubmitter, DataSourceError, DelegationReader, QuoteDataSource, SubmitError};
use crate::domain::{
    Address, DateRange, Decimal, ForceCooldowns, Market, MarketBook, MarketId, Quote, QuoteId,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock data source that returns predefined values.
#[derive(Debug, Clone, Default)]
pub struct MockDataSource {
    markets: MarketBook,
    fill_amounts: HashMap<QuoteId, Decimal>,
    cooldowns: Option<ForceCooldowns>,
    price_condition_met: bool,
    fail_with: Option<DataSourceError>,
}

impl MockDataSource {
    /// Create a new mock data source with no data and the price condition unmet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markets(mut self, markets: Vec<Market>) -> Self {
        self.markets = MarketBook::new(markets);
        self
    }

    pub fn with_fill_amount(mut self, quote_id: QuoteId, amount: Decimal) -> Self {
        self.fill_amounts.insert(quote_id, amount);
        self
    }

    pub fn with_cooldowns(mut self, cooldowns: ForceCooldowns) -> Self {
        self.cooldowns = Some(cooldowns);
        self
    }

    pub fn with_price_condition(mut self, met: bool) -> Self {
        self.price_condition_met = met;
        self
    }

    /// Make every fetch fail with `err`.
    pub fn failing(mut self, err: DataSourceError) -> Self {
        self.fail_with = Some(err);
        self
    }

    fn check_failure(&self) -> Result<(), DataSourceError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl QuoteDataSource for MockDataSource {
    async fn fetch_market(&self, market_id: MarketId) -> Result<Option<Market>, DataSourceError> {
        self.check_failure()?;
        Ok(self.markets.get(market_id).cloned())
    }

    async fn fetch_fill_amount(&self, quote: &Quote) -> Result<Option<Decimal>, DataSourceError> {
        self.check_failure()?;
        Ok(self.fill_amounts.get(&quote.id).copied())
    }

    async fn fetch_force_cooldowns(&self) -> Result<Option<ForceCooldowns>, DataSourceError> {
        self.check_failure()?;
        Ok(self.cooldowns)
    }

    async fn check_price_condition(
        &self,
        _quote: &Quote,
        _range: Option<&DateRange>,
    ) -> Result<bool, DataSourceError> {
        self.check_failure()?;
        Ok(self.price_condition_met)
    }
}

/// Records submissions and resolves with a preset outcome.
///
/// With a gate installed, each submission waits until the gate is
/// notified, which lets tests observe the in-flight state.
#[derive(Debug, Default)]
pub struct MockCloseSubmitter {
    calls: Mutex<Vec<(QuoteId, DateRange)>>,
    outcome: Option<SubmitError>,
    gate: Option<Arc<Notify>>,
}

impl MockCloseSubmitter {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(err: SubmitError) -> Self {
        Self {
            outcome: Some(err),
            ..Self::default()
        }
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<(QuoteId, DateRange)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CloseSubmitter for MockCloseSubmitter {
    async fn force_close(&self, quote: &Quote, range: &DateRange) -> Result<(), SubmitError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((quote.id, *range));
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.outcome {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Answers delegation reads from a fixed set of granted selectors.
#[derive(Debug, Default)]
pub struct MockDelegationReader {
    granted: HashSet<(Address, Address, [u8; 4])>,
    failing: HashSet<[u8; 4]>,
    reads: Mutex<usize>,
}

impl MockDelegationReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, account: Address, target: Address, selector: [u8; 4]) -> Self {
        self.granted.insert((account, target, selector));
        self
    }

    /// Make reads for `selector` fail.
    pub fn fail_on(mut self, selector: [u8; 4]) -> Self {
        self.failing.insert(selector);
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().map(|n| *n).unwrap_or_default()
    }
}

#[async_trait]
impl DelegationReader for MockDelegationReader {
    async fn delegated_access(
        &self,
        contract: &Address,
        account: &Address,
        target: &Address,
        selector: [u8; 4],
    ) -> Result<bool, DataSourceError> {
        if let Ok(mut reads) = self.reads.lock() {
            *reads += 1;
        }
        if self.failing.contains(&selector) {
            return Err(DataSourceError::ContractRead {
                contract: contract.to_string(),
                message: "execution reverted".to_string(),
            });
        }
        Ok(self
            .granted
            .contains(&(account.clone(), target.clone(), selector)))
    }
}
