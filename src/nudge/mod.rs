//! Nudge visibility policy.
//!
//! A nudge is a dismissible promotional prompt. Whether one renders is the
//! conjunction of two independent predicates, evaluated by the caller:
//! [`policy::is_visible`] (site eligibility) and [`policy::is_dismissed`]
//! (cool-down state from the per-site dismissal log). They are deliberately
//! not merged into a single call.

pub mod log;
pub mod policy;
pub mod store;

pub use log::{DismissalEvent, DismissalKind, DismissalLog};
pub use store::{NUDGE_PREFERENCE_KEY, load_dismissal_log, record_dismissal};
