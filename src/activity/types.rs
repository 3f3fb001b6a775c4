use serde::{Deserialize, Serialize};

/// Optional metadata carried by some activity types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

/// One entry of a site's activity feed, as delivered by the read model.
/// Read-only input to the resolver; `activity_status` and `activity_ts` are
/// opaque passthrough for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewind_id: Option<String>,
    pub activity_name: String,
    #[serde(default)]
    pub activity_is_rewindable: bool,
    #[serde(default)]
    pub activity_meta: ActivityMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_status: Option<String>,
    #[serde(default)]
    pub activity_ts: i64,
}

/// Installed-plugin view the resolver consults for update-available items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePlugin {
    pub slug: String,
    pub id: String,
    /// True when the site reports a newer version is installable.
    pub update_available: bool,
}

/// In-flight state of a plugin update request. Absence (the item has no
/// pending or finished update) is modeled as `Option::None` at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PluginUpdateStatus {
    InProgress,
    Completed,
    Error { message: String },
}

/// What the rewind subsystem reports about credential setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewindState {
    pub can_autoconfigure: bool,
}

/// Ambient pending-request state supplied by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverFlags {
    pub hide_restore: bool,
    pub disable_restore: bool,
    pub disable_backup: bool,
}
