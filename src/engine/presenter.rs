//! Button presentation for the force-close action.

use crate::domain::{Decimal, QuoteStatus};
use crate::engine::{BlockReason, Verdict};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Shown when the action is blocked but no specific reason is known.
pub const FALLBACK_BLOCKED_TEXT: &str = "Can not use force close";

/// Label of the enabled button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionLabel {
    ForceClose,
    Cancel,
    /// Percent of the order still unfilled.
    CancelRemaining(Decimal),
}

impl ActionLabel {
    pub fn for_quote(unfilled_percent: Decimal, status: QuoteStatus) -> Self {
        if unfilled_percent.is_zero() {
            if status == QuoteStatus::ClosePending {
                ActionLabel::ForceClose
            } else {
                ActionLabel::Cancel
            }
        } else {
            ActionLabel::CancelRemaining(unfilled_percent)
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionLabel::ForceClose => f.write_str("Force Close"),
            ActionLabel::Cancel => f.write_str("Cancel"),
            ActionLabel::CancelRemaining(pct) => write!(f, "Cancel Remaining {}%", pct.to_fixed(2)),
        }
    }
}

/// Inputs the presenter is re-evaluated from on every render.
#[derive(Debug, Clone, Copy)]
pub struct PresenterInputs {
    pub wallet_connected: bool,
    pub pending_transaction: bool,
    pub awaiting_confirmation: bool,
    /// `None` while the inputs for the checks are still loading.
    pub verdict: Option<Verdict>,
}

/// The five mutually exclusive presentations, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonState {
    ConnectWallet,
    Transacting,
    AwaitingConfirmation,
    Blocked(Option<BlockReason>),
    Ready(ActionLabel),
}

impl ButtonState {
    pub fn resolve(inputs: &PresenterInputs, label: ActionLabel) -> Self {
        if !inputs.wallet_connected {
            return ButtonState::ConnectWallet;
        }
        if inputs.pending_transaction {
            return ButtonState::Transacting;
        }
        if inputs.awaiting_confirmation {
            return ButtonState::AwaitingConfirmation;
        }
        match inputs.verdict {
            Some(Verdict::Allowed) => ButtonState::Ready(label),
            Some(Verdict::Blocked(reason)) => ButtonState::Blocked(Some(reason)),
            None => ButtonState::Blocked(None),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ButtonState::Ready(_))
    }

    pub fn text(&self) -> String {
        match self {
            ButtonState::ConnectWallet => "Connect Wallet".to_string(),
            ButtonState::Transacting => "Transacting".to_string(),
            ButtonState::AwaitingConfirmation => "Awaiting Confirmation".to_string(),
            ButtonState::Blocked(Some(reason)) => reason.to_string(),
            ButtonState::Blocked(None) => FALLBACK_BLOCKED_TEXT.to_string(),
            ButtonState::Ready(label) => label.to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ButtonState::ConnectWallet => "connectWallet",
            ButtonState::Transacting => "transacting",
            ButtonState::AwaitingConfirmation => "awaitingConfirmation",
            ButtonState::Blocked(_) => "blocked",
            ButtonState::Ready(_) => "ready",
        }
    }

    /// Whether the in-progress indicator accompanies the text.
    fn busy(&self) -> bool {
        matches!(
            self,
            ButtonState::Transacting | ButtonState::AwaitingConfirmation
        )
    }
}

impl Serialize for ButtonState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ButtonState", 4)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("text", &self.text())?;
        s.serialize_field("enabled", &self.is_enabled())?;
        s.serialize_field("busy", &self.busy())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn inputs(
        connected: bool,
        pending: bool,
        awaiting: bool,
        verdict: Option<Verdict>,
    ) -> PresenterInputs {
        PresenterInputs {
            wallet_connected: connected,
            pending_transaction: pending,
            awaiting_confirmation: awaiting,
            verdict,
        }
    }

    #[test]
    fn test_disconnected_wins_over_everything() {
        let verdicts = [
            None,
            Some(Verdict::Allowed),
            Some(Verdict::Blocked(BlockReason::Expired)),
        ];
        for verdict in verdicts {
            for pending in [false, true] {
                for awaiting in [false, true] {
                    let state = ButtonState::resolve(
                        &inputs(false, pending, awaiting, verdict),
                        ActionLabel::Cancel,
                    );
                    assert_eq!(state, ButtonState::ConnectWallet);
                }
            }
        }
    }

    #[test]
    fn test_pending_transaction_before_awaiting() {
        let state = ButtonState::resolve(
            &inputs(true, true, true, Some(Verdict::Allowed)),
            ActionLabel::Cancel,
        );
        assert_eq!(state, ButtonState::Transacting);
        assert!(!state.is_enabled());
        assert_eq!(state.text(), "Transacting");
    }

    #[test]
    fn test_awaiting_before_verdict() {
        let state = ButtonState::resolve(
            &inputs(true, false, true, Some(Verdict::Blocked(BlockReason::Expired))),
            ActionLabel::Cancel,
        );
        assert_eq!(state, ButtonState::AwaitingConfirmation);
        assert_eq!(state.text(), "Awaiting Confirmation");
    }

    #[test]
    fn test_blocked_shows_reason_or_fallback() {
        let verdict = Verdict::Blocked(BlockReason::InvalidSignaturePeriod);
        let blocked =
            ButtonState::resolve(&inputs(true, false, false, Some(verdict)), ActionLabel::Cancel);
        assert_eq!(blocked.text(), "Invalid signature period");
        assert!(!blocked.is_enabled());

        let unknown = ButtonState::resolve(&inputs(true, false, false, None), ActionLabel::Cancel);
        assert_eq!(unknown, ButtonState::Blocked(None));
        assert_eq!(unknown.text(), FALLBACK_BLOCKED_TEXT);
    }

    #[test]
    fn test_ready_carries_label() {
        let state = ButtonState::resolve(
            &inputs(true, false, false, Some(Verdict::Allowed)),
            ActionLabel::ForceClose,
        );
        assert!(state.is_enabled());
        assert_eq!(state.text(), "Force Close");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            ActionLabel::for_quote(Decimal::zero(), QuoteStatus::ClosePending).to_string(),
            "Force Close"
        );
        assert_eq!(
            ActionLabel::for_quote(Decimal::zero(), QuoteStatus::Opened).to_string(),
            "Cancel"
        );
        assert_eq!(
            ActionLabel::for_quote(Decimal::zero(), QuoteStatus::CancelClosePending).to_string(),
            "Cancel"
        );
        assert_eq!(
            ActionLabel::for_quote(d("37.5"), QuoteStatus::ClosePending).to_string(),
            "Cancel Remaining 37.50%"
        );
        assert_eq!(
            ActionLabel::for_quote(d("100"), QuoteStatus::Opened).to_string(),
            "Cancel Remaining 100.00%"
        );
    }

    #[test]
    fn test_button_serialization() {
        let json = serde_json::to_value(ButtonState::AwaitingConfirmation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "awaitingConfirmation",
                "text": "Awaiting Confirmation",
                "enabled": false,
                "busy": true
            })
        );
    }
}
