//! Render-ready model of the force-close modal.

use crate::domain::{
    DateRange, Decimal, ForceCooldowns, Market, PositionType, Quote, QuoteId, TimeSec,
};
use crate::engine::eligibility::{self, EligibilityInputs};
use crate::engine::{ActionLabel, ButtonState, FillBreakdown, PresenterInputs, Verdict};
use chrono::SecondsFormat;
use serde::Serialize;

/// Everything gathered from collaborators for one render.
#[derive(Debug, Clone, Default)]
pub struct ViewInputs {
    pub market: Option<Market>,
    pub fill_amount: Option<Decimal>,
    /// `None` until the contract values have been read.
    pub cooldowns: Option<ForceCooldowns>,
    pub price_condition_met: bool,
    pub wallet_connected: bool,
    pub pending_transaction: bool,
    pub awaiting_confirmation: bool,
    pub now: TimeSec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

impl InfoRow {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub open: bool,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<QuoteId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_type: Option<PositionType>,
    /// Range the button state was evaluated against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    pub fill: FillBreakdown,
    pub rows: Vec<InfoRow>,
    /// Absent when no quote is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonState>,
}

impl ModalView {
    /// Build the modal for `quote`. The modal is closed when there is none.
    pub fn build(
        quote: Option<&Quote>,
        date_range: Option<DateRange>,
        modal_open: bool,
        inputs: &ViewInputs,
    ) -> Self {
        let market = inputs.market.as_ref();
        let market_name = market.map(|m| m.name.as_str()).unwrap_or_default();
        let symbol = market.map(|m| m.symbol.as_str()).unwrap_or_default();
        let precision = market.map(|m| m.quantity_precision).unwrap_or(0);

        let fill = quote
            .map(|q| FillBreakdown::compute(q, inputs.fill_amount))
            .unwrap_or_default();

        let title = match quote {
            Some(q) => format!("Force Close {}-Q{}", market_name, q.id),
            None => "Force Close".to_string(),
        };

        let mut rows = vec![
            InfoRow::new(
                "Order Filled Size:",
                size_text(fill.filled_percent, fill.filled_amount, precision, symbol),
            ),
            InfoRow::new(
                "Order Not Filled Size:",
                size_text(fill.unfilled_percent, fill.unfilled_amount, precision, symbol),
            ),
        ];
        if let Some(range) = date_range {
            rows.push(InfoRow::new("Start Date:", format_time(range.start())));
            rows.push(InfoRow::new("End Date:", format_time(range.end())));
        }

        let button = quote.map(|q| {
            let verdict = inputs.cooldowns.map(|cooldowns| {
                eligibility::evaluate(&EligibilityInputs::for_quote(
                    q,
                    date_range,
                    cooldowns,
                    inputs.now,
                    inputs.price_condition_met,
                ))
            });
            button_state(q, &fill, verdict, inputs)
        });

        Self {
            open: modal_open && quote.is_some(),
            title,
            quote_id: quote.map(|q| q.id),
            position_type: quote.map(|q| q.position_type),
            date_range,
            fill,
            rows,
            button,
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.button.as_ref().is_some_and(ButtonState::is_enabled)
    }
}

fn button_state(
    quote: &Quote,
    fill: &FillBreakdown,
    verdict: Option<Verdict>,
    inputs: &ViewInputs,
) -> ButtonState {
    let presenter = PresenterInputs {
        wallet_connected: inputs.wallet_connected,
        pending_transaction: inputs.pending_transaction,
        awaiting_confirmation: inputs.awaiting_confirmation,
        verdict,
    };
    ButtonState::resolve(
        &presenter,
        ActionLabel::for_quote(fill.unfilled_percent, quote.quote_status),
    )
}

fn size_text(percent: Decimal, amount: Decimal, precision: u32, symbol: &str) -> String {
    format!(
        "{}% ({} {})",
        percent.to_fixed(2),
        amount.format_amount(precision),
        symbol
    )
}

fn format_time(t: TimeSec) -> String {
    chrono::DateTime::from_timestamp(t.as_secs(), 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarketId, QuoteStatus};

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn quote() -> Quote {
        Quote {
            id: QuoteId(42),
            market_id: MarketId(1),
            quantity: Some(d("8")),
            position_type: PositionType::Long,
            quote_status: QuoteStatus::Opened,
            quantity_to_close: Some(d("0")),
            closed_amount: Some(d("0")),
            status_modify_timestamp: TimeSec::new(1000),
            deadline: TimeSec::new(1_000_000),
        }
    }

    fn market() -> Market {
        Market {
            id: MarketId(1),
            name: "BTCUSDT".to_string(),
            symbol: "BTC".to_string(),
            quantity_precision: 3,
        }
    }

    fn ready_inputs() -> ViewInputs {
        ViewInputs {
            market: Some(market()),
            fill_amount: Some(d("5")),
            cooldowns: Some(ForceCooldowns::new(500, 300, 120)),
            price_condition_met: true,
            wallet_connected: true,
            pending_transaction: false,
            awaiting_confirmation: false,
            now: TimeSec::new(100_000),
        }
    }

    #[test]
    fn test_view_for_eligible_quote() {
        let range = DateRange::new(TimeSec::new(1500), TimeSec::new(1800)).unwrap();
        let view = ModalView::build(Some(&quote()), Some(range), true, &ready_inputs());

        assert!(view.open);
        assert_eq!(view.title, "Force Close BTCUSDT-Q42");
        assert_eq!(view.rows[0].value, "62.50% (5 BTC)");
        assert_eq!(view.rows[1].value, "37.50% (3 BTC)");
        assert_eq!(view.rows[2].value, "1970-01-01T00:25:00Z");
        assert_eq!(view.rows[3].value, "1970-01-01T00:30:00Z");
        assert_eq!(view.button.as_ref().unwrap().text(), "Cancel Remaining 37.50%");
        assert_eq!(view.date_range, Some(range));
        assert!(view.is_actionable());
    }

    #[test]
    fn test_view_without_range_asks_for_one() {
        let view = ModalView::build(Some(&quote()), None, true, &ready_inputs());
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.button.unwrap().text(), "Enter Date Range");
    }

    #[test]
    fn test_view_without_cooldowns_uses_fallback() {
        let inputs = ViewInputs {
            cooldowns: None,
            ..ready_inputs()
        };
        let view = ModalView::build(Some(&quote()), None, true, &inputs);
        assert_eq!(view.button.unwrap().text(), "Can not use force close");
    }

    #[test]
    fn test_view_without_quote_is_closed() {
        let view = ModalView::build(None, None, true, &ready_inputs());
        assert!(!view.open);
        assert!(view.button.is_none());
        assert_eq!(view.fill, FillBreakdown::default());
        assert_eq!(view.rows[0].value, "0.00% (0 BTC)");
    }

    #[test]
    fn test_view_with_missing_market_degrades() {
        let inputs = ViewInputs {
            market: None,
            ..ready_inputs()
        };
        let view = ModalView::build(Some(&quote()), None, true, &inputs);
        assert_eq!(view.title, "Force Close -Q42");
        assert_eq!(view.rows[1].value, "37.50% (3 )");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = ModalView::build(Some(&quote()), None, false, &ready_inputs());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["open"], false);
        assert_eq!(json["quoteId"], 42);
        assert_eq!(json["positionType"], "LONG");
        let unfilled: Decimal = json["fill"]["unfilledPercent"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(unfilled, d("37.5"));
        assert_eq!(json["button"]["kind"], "blocked");
    }
}
