use crate::datasource::{CloseSubmitter, DataSourceError, QuoteDataSource};
use crate::domain::{DateRange, DateRangeError, Quote, TimeSec, WalletState};
use crate::engine::{ModalView, ViewInputs};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

/// What a click on the action button led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The button was not actionable, or a submission was already in flight.
    Ignored,
    /// The collaborator accepted the close; the modal is closed.
    Submitted,
    /// The collaborator failed; the error was logged and the modal closed.
    Failed,
}

#[derive(Debug, Default)]
struct SessionState {
    quote: Option<Quote>,
    date_range: Option<DateRange>,
    awaiting_confirmation: bool,
    open: bool,
}

/// One force-close modal instance.
///
/// Owns the selected date range and the awaiting-confirmation flag. Both
/// are reset whenever the modal is opened for a different quote.
#[derive(Debug)]
pub struct ForceCloseSession {
    datasource: Arc<dyn QuoteDataSource>,
    submitter: Arc<dyn CloseSubmitter>,
    state: Mutex<SessionState>,
}

impl ForceCloseSession {
    pub fn new(datasource: Arc<dyn QuoteDataSource>, submitter: Arc<dyn CloseSubmitter>) -> Self {
        Self {
            datasource,
            submitter,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Open the modal for `quote`.
    pub fn open(&self, quote: Quote) {
        let mut state = self.state();
        let same_quote = state.quote.as_ref().map(|q| q.id) == Some(quote.id);
        if !same_quote {
            state.date_range = None;
            state.awaiting_confirmation = false;
        }
        state.quote = Some(quote);
        state.open = true;
    }

    pub fn close(&self) {
        self.state().open = false;
    }

    pub fn toggle(&self) {
        let mut state = self.state();
        state.open = !state.open;
    }

    pub fn is_open(&self) -> bool {
        let state = self.state();
        state.open && state.quote.is_some()
    }

    /// Apply a picker selection; `None` clears the range.
    pub fn select_range(
        &self,
        picked: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<(), DateRangeError> {
        let range = picked
            .map(|(start, end)| DateRange::from_picker(start, end))
            .transpose()?;
        self.state().date_range = range;
        Ok(())
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.state().date_range
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.state().awaiting_confirmation
    }

    /// Gather collaborator data and build the modal as of `now`.
    pub async fn render(
        &self,
        wallet: &WalletState,
        pending_transaction: bool,
        now: TimeSec,
    ) -> Result<ModalView, DataSourceError> {
        let (quote, date_range, awaiting_confirmation, open) = {
            let state = self.state();
            (
                state.quote.clone(),
                state.date_range,
                state.awaiting_confirmation,
                state.open,
            )
        };

        let mut inputs = ViewInputs {
            wallet_connected: wallet.is_connected(),
            pending_transaction,
            awaiting_confirmation,
            now,
            ..ViewInputs::default()
        };

        if let Some(q) = &quote {
            let (market, fill_amount, cooldowns, price_condition_met) = futures::try_join!(
                self.datasource.fetch_market(q.market_id),
                self.datasource.fetch_fill_amount(q),
                self.datasource.fetch_force_cooldowns(),
                self.datasource.check_price_condition(q, date_range.as_ref()),
            )?;
            inputs.market = market;
            inputs.fill_amount = fill_amount;
            inputs.cooldowns = cooldowns;
            inputs.price_condition_met = price_condition_met;
        }

        Ok(ModalView::build(quote.as_ref(), date_range, open, &inputs))
    }

    /// Handle a click on the button shown in `view`.
    ///
    /// Only an enabled button rendered for the current quote and the
    /// currently selected range submits. The collaborator is called once;
    /// success or failure both clear the flag and close the modal, and a
    /// failure is only logged.
    pub async fn submit(&self, view: &ModalView) -> SubmitOutcome {
        let (quote, range) = {
            let mut state = self.state();
            if !view.is_actionable() || state.awaiting_confirmation {
                return SubmitOutcome::Ignored;
            }
            let (Some(quote), Some(range)) = (state.quote.clone(), state.date_range) else {
                return SubmitOutcome::Ignored;
            };
            if view.quote_id != Some(quote.id) || view.date_range != Some(range) {
                tracing::debug!(quote_id = %quote.id, "view is stale, ignoring click");
                return SubmitOutcome::Ignored;
            }
            state.awaiting_confirmation = true;
            (quote, range)
        };

        tracing::info!(
            quote_id = %quote.id,
            start = %range.start(),
            end = %range.end(),
            "submitting force close"
        );
        let result = self.submitter.force_close(&quote, &range).await;

        let mut state = self.state();
        state.open = false;
        state.awaiting_confirmation = false;
        match result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(e) => {
                tracing::error!(quote_id = %quote.id, error = %e, "force close submission failed");
                SubmitOutcome::Failed
            }
        }
    }
}
