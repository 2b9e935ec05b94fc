use crate::domain::{Decimal, Quote, QuoteStatus};
use serde::Serialize;

/// Filled/unfilled split of a quote, amounts plus percent (0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillBreakdown {
    pub unfilled_amount: Decimal,
    pub filled_amount: Decimal,
    pub unfilled_percent: Decimal,
    pub filled_percent: Decimal,
}

impl FillBreakdown {
    /// Split a quote's size by the live on-chain fill amount.
    ///
    /// Missing quote amounts give an all-zero breakdown. A fill of zero is
    /// reported as fully unfilled against `quantity_to_close` whatever the
    /// status. While a close is pending, fills are measured relative to the
    /// close request (net of what was already closed); otherwise relative to
    /// the full quantity. Amounts too large to combine also give zeros.
    pub fn compute(quote: &Quote, fill_amount: Option<Decimal>) -> Self {
        Self::from_parts(
            quote.quantity,
            quote.quantity_to_close,
            quote.closed_amount,
            fill_amount,
            quote.quote_status,
        )
    }

    pub fn from_parts(
        quantity: Option<Decimal>,
        quantity_to_close: Option<Decimal>,
        closed_amount: Option<Decimal>,
        fill_amount: Option<Decimal>,
        status: QuoteStatus,
    ) -> Self {
        let (Some(quantity), Some(quantity_to_close), Some(closed_amount)) =
            (quantity, quantity_to_close, closed_amount)
        else {
            return Self::default();
        };

        let fill = fill_amount.unwrap_or_default();
        if fill.is_zero() {
            return Self {
                unfilled_amount: quantity_to_close,
                filled_amount: Decimal::zero(),
                unfilled_percent: Decimal::hundred(),
                filled_percent: Decimal::zero(),
            };
        }

        let split = if status.is_closing() {
            quantity_to_close
                .checked_add(closed_amount)
                .and_then(|total| total.checked_sub(fill))
                .zip(fill.checked_sub(closed_amount))
                .and_then(|(unfilled, filled)| {
                    Self::relative_to(unfilled, filled, quantity_to_close)
                })
        } else {
            quantity
                .checked_sub(fill)
                .and_then(|unfilled| Self::relative_to(unfilled, fill, quantity))
        };

        split.unwrap_or_else(|| {
            tracing::warn!(
                %quantity,
                %quantity_to_close,
                %closed_amount,
                %fill,
                "fill breakdown overflowed, reporting zeros"
            );
            Self::default()
        })
    }

    fn relative_to(unfilled: Decimal, filled: Decimal, whole: Decimal) -> Option<Self> {
        Some(Self {
            unfilled_amount: unfilled,
            filled_amount: filled,
            unfilled_percent: unfilled.percent_of(whole)?,
            filled_percent: filled.percent_of(whole)?,
        })
    }
}
