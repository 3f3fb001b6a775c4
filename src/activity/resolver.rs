//! Derives the single action control an activity item presents.

use super::types::{ActivityRecord, PluginUpdateStatus, ResolverFlags, RewindState, SitePlugin};

pub const ACTIVITY_PLUGIN_UPDATE_AVAILABLE: &str = "plugin__update_available";
pub const ACTIVITY_PLUGIN_UPDATE_FAILED: &str = "plugin__update_failed";
pub const ACTIVITY_SCAN_RESULT_FOUND: &str = "rewind__scan_result_found";
pub const ACTIVITY_BACKUP_ERROR: &str = "rewind__backup_error";

const ERROR_CODE_BAD_CREDENTIALS: &str = "bad_credentials";

/// The action control to render for one activity item. Exactly one variant
/// per render pass; callers match exhaustively, so there is no implicit
/// fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Plugin update request is in flight.
    PluginUpdating,
    /// Plugin update finished successfully.
    PluginUpdated,
    /// Plugin update failed; message is shown inline and retry is manual.
    PluginUpdateError { message: String },
    /// Offer to start a plugin update for this site.
    UpdatePlugin { site_id: u64, plugin: SitePlugin },
    /// Offer the external help channel, tagged with the activity name.
    GetHelp { activity_name: String },
    /// Send the user to credential setup.
    FixCredentials { url: String },
    /// Composite rewind control with a backup-download secondary action.
    Rewind {
        disable_restore: bool,
        disable_backup: bool,
    },
    /// No action control for this item.
    Nothing,
}

/// Resolves the action for one activity record. Pure: identical inputs give
/// identical output, and unknown activity names fall through to the rewind
/// check, never to an error.
///
/// The branch order is load-bearing — plugin-update handling preempts the
/// help branches, which preempt the generic rewind control.
#[allow(clippy::too_many_arguments)]
pub fn resolve_item_action(
    site_id: u64,
    site_slug: &str,
    activity: &ActivityRecord,
    plugin: Option<&SitePlugin>,
    plugin_status: Option<&PluginUpdateStatus>,
    rewind_state: &RewindState,
    flags: ResolverFlags,
) -> ItemAction {
    match activity.activity_name.as_str() {
        ACTIVITY_PLUGIN_UPDATE_AVAILABLE => {
            return match plugin_status {
                Some(PluginUpdateStatus::InProgress) => ItemAction::PluginUpdating,
                Some(PluginUpdateStatus::Completed) => ItemAction::PluginUpdated,
                Some(PluginUpdateStatus::Error { message }) => ItemAction::PluginUpdateError {
                    message: message.clone(),
                },
                None => match plugin {
                    Some(plugin) if plugin.update_available => ItemAction::UpdatePlugin {
                        site_id,
                        plugin: plugin.clone(),
                    },
                    _ => ItemAction::Nothing,
                },
            };
        }
        ACTIVITY_PLUGIN_UPDATE_FAILED | ACTIVITY_SCAN_RESULT_FOUND => {
            return ItemAction::GetHelp {
                activity_name: activity.activity_name.clone(),
            };
        }
        ACTIVITY_BACKUP_ERROR => {
            return if activity.activity_meta.error_code.as_deref()
                == Some(ERROR_CODE_BAD_CREDENTIALS)
            {
                ItemAction::FixCredentials {
                    url: fix_credentials_url(site_id, site_slug, rewind_state),
                }
            } else {
                ItemAction::GetHelp {
                    activity_name: activity.activity_name.clone(),
                }
            };
        }
        _ => {}
    }

    if !flags.hide_restore && activity.activity_is_rewindable {
        return ItemAction::Rewind {
            disable_restore: flags.disable_restore,
            disable_backup: flags.disable_backup,
        };
    }

    ItemAction::Nothing
}

/// Credential-setup target. Sites whose rewind subsystem can autoconfigure
/// credentials get the short flow.
fn fix_credentials_url(site_id: u64, site_slug: &str, rewind_state: &RewindState) -> String {
    if rewind_state.can_autoconfigure {
        format!("/start/rewind-auto-config/?blogid={site_id}&siteSlug={site_slug}")
    } else {
        format!("/start/rewind-setup/?siteId={site_id}&siteSlug={site_slug}")
    }
}
