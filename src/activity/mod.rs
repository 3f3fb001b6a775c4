//! Activity-log item decision layer.
//!
//! [`resolver`] derives the single action control an activity item presents,
//! as a pure function over the record and ambient request state. [`flow`]
//! owns the transient rewind/backup confirmation markers and dispatches to
//! the external collaborators, emitting one tracking event per transition.

pub mod flow;
pub mod resolver;
pub mod types;

pub use flow::{ActivityFlow, PluginUpdater, RewindClient, ViewEffects};
pub use resolver::{ItemAction, resolve_item_action};
pub use types::{
    ActivityMeta, ActivityRecord, PluginUpdateStatus, ResolverFlags, RewindState, SitePlugin,
};
