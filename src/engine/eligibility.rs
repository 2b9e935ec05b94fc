//! Client-side mirror of the contract checks guarding a forced close.

use crate::domain::{DateRange, ForceCooldowns, Quote, TimeSec};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a forced close is not currently permitted.
///
/// Variants follow the order the contract validates in; the first failing
/// check is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    RangeNotSelected,
    /// `start < status_modify_timestamp + first_cooldown`
    FirstCooldownPending,
    /// `end > now - second_cooldown`
    SecondCooldownPending,
    /// `end + second_cooldown > deadline`
    Expired,
    /// `end - start < min_sig_period`
    InvalidSignaturePeriod,
    PriceConditionNotMet,
}

impl BlockReason {
    pub fn message(&self) -> &'static str {
        match self {
            BlockReason::RangeNotSelected => "Enter Date Range",
            // Both cooldown checks surface the same contract message.
            BlockReason::FirstCooldownPending | BlockReason::SecondCooldownPending => {
                "Cooldown not reached"
            }
            BlockReason::Expired => "Close request is expired",
            BlockReason::InvalidSignaturePeriod => "Invalid signature period",
            BlockReason::PriceConditionNotMet => "Price condition was not met",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for BlockReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Outcome of the eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Blocked(BlockReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    pub fn reason(&self) -> Option<BlockReason> {
        match self {
            Verdict::Allowed => None,
            Verdict::Blocked(reason) => Some(*reason),
        }
    }
}

/// Everything the checks depend on. No hidden state.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityInputs {
    pub date_range: Option<DateRange>,
    pub status_modify_timestamp: TimeSec,
    pub deadline: TimeSec,
    pub cooldowns: ForceCooldowns,
    pub now: TimeSec,
    pub price_condition_met: bool,
}

impl EligibilityInputs {
    pub fn for_quote(
        quote: &Quote,
        date_range: Option<DateRange>,
        cooldowns: ForceCooldowns,
        now: TimeSec,
        price_condition_met: bool,
    ) -> Self {
        Self {
            date_range,
            status_modify_timestamp: quote.status_modify_timestamp,
            deadline: quote.deadline,
            cooldowns,
            now,
            price_condition_met,
        }
    }
}

/// Run the checks in contract order and report the first failure.
pub fn evaluate(inputs: &EligibilityInputs) -> Verdict {
    let verdict = first_failure(inputs).map_or(Verdict::Allowed, Verdict::Blocked);
    if let Verdict::Blocked(reason) = verdict {
        tracing::debug!(?reason, now = inputs.now.as_secs(), "force close blocked");
    }
    verdict
}

fn first_failure(inputs: &EligibilityInputs) -> Option<BlockReason> {
    let Some(range) = inputs.date_range else {
        return Some(BlockReason::RangeNotSelected);
    };
    let cooldowns = &inputs.cooldowns;

    let earliest_start = inputs
        .status_modify_timestamp
        .saturating_add(cooldowns.first_cooldown);
    if range.start() < earliest_start {
        return Some(BlockReason::FirstCooldownPending);
    }

    let latest_end = inputs.now.saturating_sub(cooldowns.second_cooldown);
    if range.end() > latest_end {
        return Some(BlockReason::SecondCooldownPending);
    }

    if range.end().saturating_add(cooldowns.second_cooldown) > inputs.deadline {
        return Some(BlockReason::Expired);
    }

    if range.period_secs() < cooldowns.min_sig_period {
        return Some(BlockReason::InvalidSignaturePeriod);
    }

    if !inputs.price_condition_met {
        return Some(BlockReason::PriceConditionNotMet);
    }

    None
}
