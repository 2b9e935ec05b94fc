//! Stateful flows that tie the pure engine to collaborators.

pub mod delegation;
pub mod session;

pub use delegation::{check_tpsl_delegation, parse_selector, DelegationTargets, TpSlDelegation};
pub use session::{ForceCloseSession, SubmitOutcome};
