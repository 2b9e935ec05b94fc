//! Quote snapshot as held by the front-end.

use crate::domain::{Decimal, MarketId, PositionType, QuoteId, TimeSec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quote lifecycle status, numbered as in the contract enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    Pending,
    Locked,
    CancelPending,
    Canceled,
    Opened,
    ClosePending,
    CancelClosePending,
    Closed,
    Liquidated,
    Expired,
}

impl QuoteStatus {
    /// Whether a close request is outstanding, so fills are measured
    /// against `quantity_to_close` instead of the full quantity.
    pub fn is_closing(&self) -> bool {
        matches!(self, QuoteStatus::ClosePending | QuoteStatus::CancelClosePending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown quote status code {0}")]
pub struct UnknownQuoteStatus(pub u8);

impl TryFrom<u8> for QuoteStatus {
    type Error = UnknownQuoteStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => QuoteStatus::Pending,
            1 => QuoteStatus::Locked,
            2 => QuoteStatus::CancelPending,
            3 => QuoteStatus::Canceled,
            4 => QuoteStatus::Opened,
            5 => QuoteStatus::ClosePending,
            6 => QuoteStatus::CancelClosePending,
            7 => QuoteStatus::Closed,
            8 => QuoteStatus::Liquidated,
            9 => QuoteStatus::Expired,
            other => return Err(UnknownQuoteStatus(other)),
        })
    }
}

/// Read-only snapshot of a quote owned by the trading contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub market_id: MarketId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    pub position_type: PositionType,
    pub quote_status: QuoteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_to_close: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_amount: Option<Decimal>,
    pub status_modify_timestamp: TimeSec,
    pub deadline: TimeSec,
}
