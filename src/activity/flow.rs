//! Rewind/backup confirmation flow.
//!
//! Requesting a rewind or backup never executes immediately: it marks the
//! activity as the pending confirmation target, which the presentation layer
//! turns into a dialog. Confirming dispatches the real operation; dismissing
//! clears the marker. Every transition emits exactly one tracking event —
//! events live here, in the state changes, so rendering cannot duplicate
//! them. Dispatches are fire-and-forget and not cancellable.

use crate::analytics::{AnalyticsSink, TrackEvent, TrackEventName};
use tracing::info;

use super::types::SitePlugin;

/// Rewind/backup dispatch collaborator. Results arrive asynchronously as
/// later read-model updates, not through these calls.
pub trait RewindClient {
    fn restore(&self, site_id: u64, rewind_id: &str);
    fn download_backup(&self, site_id: u64, rewind_id: &str);
}

/// Plugin update dispatch collaborator.
pub trait PluginUpdater {
    fn update_plugin(&self, site_id: u64, plugin: &SitePlugin);
}

/// Presentation side effects that accompany some transitions.
pub trait ViewEffects {
    fn scroll_to_top(&self);
}

/// Per-site confirmation state and the transitions over it.
pub struct ActivityFlow<'a> {
    site_id: u64,
    requested_rewind: Option<String>,
    requested_backup: Option<String>,
    rewind: &'a dyn RewindClient,
    plugins: &'a dyn PluginUpdater,
    analytics: &'a dyn AnalyticsSink,
    view: &'a dyn ViewEffects,
}

impl<'a> ActivityFlow<'a> {
    pub fn new(
        site_id: u64,
        rewind: &'a dyn RewindClient,
        plugins: &'a dyn PluginUpdater,
        analytics: &'a dyn AnalyticsSink,
        view: &'a dyn ViewEffects,
    ) -> Self {
        Self {
            site_id,
            requested_rewind: None,
            requested_backup: None,
            rewind,
            plugins,
            analytics,
            view,
        }
    }

    /// True when `activity_id` is the pending rewind confirmation target.
    pub fn might_rewind(&self, activity_id: &str) -> bool {
        self.requested_rewind.as_deref() == Some(activity_id)
    }

    /// True when `activity_id` is the pending backup confirmation target.
    pub fn might_backup(&self, activity_id: &str) -> bool {
        self.requested_backup.as_deref() == Some(activity_id)
    }

    // ── rewind ───────────────────────────────────────────────

    pub fn request_rewind(&mut self, activity_id: &str) {
        self.analytics.track(
            TrackEvent::new(TrackEventName::ActivitylogRestoreRequest).with("from", "item"),
        );
        self.requested_rewind = Some(activity_id.to_string());
    }

    pub fn dismiss_rewind(&mut self) {
        self.analytics
            .track(TrackEvent::new(TrackEventName::ActivitylogRestoreCancel));
        self.requested_rewind = None;
    }

    /// Confirms the pending rewind. Not revocable once dispatched.
    pub fn confirm_rewind(&mut self, rewind_id: &str) {
        self.analytics.track(
            TrackEvent::new(TrackEventName::ActivitylogRestoreConfirm)
                .with("action_id", rewind_id),
        );
        self.view.scroll_to_top();
        info!(site_id = self.site_id, rewind_id, "rewind confirmed");
        self.rewind.restore(self.site_id, rewind_id);
        self.requested_rewind = None;
    }

    // ── backup ───────────────────────────────────────────────

    pub fn request_backup(&mut self, activity_id: &str) {
        self.analytics.track(
            TrackEvent::new(TrackEventName::ActivitylogBackupRequest).with("from", "item"),
        );
        self.requested_backup = Some(activity_id.to_string());
    }

    pub fn dismiss_backup(&mut self) {
        self.analytics
            .track(TrackEvent::new(TrackEventName::ActivitylogBackupCancel));
        self.requested_backup = None;
    }

    /// Confirms the pending backup download. Not revocable once dispatched.
    pub fn confirm_backup(&mut self, rewind_id: &str) {
        self.analytics.track(
            TrackEvent::new(TrackEventName::ActivitylogBackupConfirm).with("action_id", rewind_id),
        );
        self.view.scroll_to_top();
        info!(site_id = self.site_id, rewind_id, "backup confirmed");
        self.rewind.download_backup(self.site_id, rewind_id);
        self.requested_backup = None;
    }

    // ── other actions ────────────────────────────────────────

    /// Dispatches a plugin update. Status is observed elsewhere and surfaces
    /// through the resolver on later evaluations.
    pub fn update_plugin(&self, plugin: &SitePlugin) {
        info!(site_id = self.site_id, plugin = %plugin.slug, "plugin update requested");
        self.plugins.update_plugin(self.site_id, plugin);
    }

    pub fn track_help(&self, activity_name: &str) {
        self.analytics.track(
            TrackEvent::new(TrackEventName::ActivitylogEventGetHelp)
                .with("activity_name", activity_name),
        );
    }

    pub fn track_fix_credentials(&self) {
        self.analytics
            .track(TrackEvent::new(TrackEventName::ActivitylogEventFixCredentials));
    }
}
