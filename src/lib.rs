#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

//! Decision engines for a site management console.
//!
//! Two independent components: the nudge visibility policy ([`nudge`]) and
//! the activity action resolver ([`activity`]). Both are pure functions over
//! explicit inputs; all I/O (preference reads/writes, collaborator dispatch)
//! happens in thin caller glue around them.

pub mod activity;
pub mod analytics;
pub mod error;
pub mod install;
pub mod keyring;
pub mod nudge;
pub mod plans;
pub mod prefs;
pub mod site;

pub use activity::{ActivityRecord, ItemAction, resolve_item_action};
pub use error::{Result, SitepulseError};
pub use nudge::{DismissalKind, DismissalLog};
pub use prefs::PreferenceStore;
pub use site::SiteContext;

/// Current time as epoch milliseconds, the unit the policies work in.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
