//! Pure decision logic for the force-close modal.

pub mod eligibility;
pub mod fill;
pub mod presenter;
pub mod view;

pub use eligibility::{evaluate, BlockReason, EligibilityInputs, Verdict};
pub use fill::FillBreakdown;
pub use presenter::{ActionLabel, ButtonState, PresenterInputs, FALLBACK_BLOCKED_TEXT};
pub use view::{InfoRow, ModalView, ViewInputs};
