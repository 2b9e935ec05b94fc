use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::AppState;
use crate::domain::{DateRange, Decimal, Market, Quote, TimeSec};
use crate::engine::{ModalView, ViewInputs};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PickedRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Client-side state the modal is rendered from. Cooldowns come from config.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub quote: Quote,
    #[serde(default)]
    pub date_range: Option<PickedRange>,
    #[serde(default)]
    pub market: Option<Market>,
    #[serde(default)]
    pub fill_amount: Option<Decimal>,
    #[serde(default)]
    pub price_condition_met: bool,
    #[serde(default)]
    pub wallet_connected: bool,
    #[serde(default)]
    pub pending_transaction: bool,
    #[serde(default)]
    pub awaiting_confirmation: bool,
    /// Evaluation time; defaults to the server clock.
    #[serde(default)]
    pub now: Option<TimeSec>,
}

pub async fn preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<ModalView>, AppError> {
    let date_range = req
        .date_range
        .map(|r| DateRange::from_picker(r.start, r.end))
        .transpose()?;

    let market = req
        .market
        .or_else(|| state.markets.get(req.quote.market_id).cloned());
    if market.is_none() {
        tracing::debug!(
            market_id = %req.quote.market_id,
            "market not found, rendering without metadata"
        );
    }

    let inputs = ViewInputs {
        market,
        fill_amount: req.fill_amount,
        cooldowns: Some(state.config.cooldowns),
        price_condition_met: req.price_condition_met,
        wallet_connected: req.wallet_connected,
        pending_transaction: req.pending_transaction,
        awaiting_confirmation: req.awaiting_confirmation,
        now: req.now.unwrap_or_else(TimeSec::now),
    };

    Ok(Json(ModalView::build(
        Some(&req.quote),
        date_range,
        true,
        &inputs,
    )))
}
