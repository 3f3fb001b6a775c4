//! Preference-backed persistence of the per-site dismissal log.
//!
//! The stored value is a JSON object keyed by decimal site id, each entry a
//! bare array of dismissal events. The policy layer never reads the store;
//! callers load the log, evaluate, and record through this glue.

use super::log::{DismissalEvent, DismissalKind, DismissalLog};
use crate::error::{PrefsError, Result};
use crate::prefs::PreferenceStore;
use serde_json::{Map, Value};
use tracing::debug;

/// Preference key holding all sites' dismissal histories.
pub const NUDGE_PREFERENCE_KEY: &str = "google-my-business-dismissible-nudge";

/// Loads the dismissal log for one site. A missing preference, missing site
/// entry, or null value all yield an empty log.
pub fn load_dismissal_log(store: &dyn PreferenceStore, site_id: u64) -> Result<DismissalLog> {
    let Some(value) = store.get(NUDGE_PREFERENCE_KEY)? else {
        return Ok(DismissalLog::new());
    };

    match value.get(site_id.to_string()) {
        Some(entry) if !entry.is_null() => {
            let log = serde_json::from_value(entry.clone()).map_err(PrefsError::from)?;
            Ok(log)
        }
        _ => Ok(DismissalLog::new()),
    }
}

/// Appends a dismissal event for `site_id`, preserving every other site's
/// history. Read-modify-write; the store serializes concurrent writers.
pub fn record_dismissal(
    store: &dyn PreferenceStore,
    site_id: u64,
    kind: DismissalKind,
    now_ms: i64,
) -> Result<()> {
    let mut preference = match store.get(NUDGE_PREFERENCE_KEY)? {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let site_key = site_id.to_string();
    let mut log: DismissalLog = match preference.get(&site_key) {
        Some(entry) if !entry.is_null() => {
            serde_json::from_value(entry.clone()).map_err(PrefsError::from)?
        }
        _ => DismissalLog::new(),
    };

    log.record(DismissalEvent {
        dismissed_at: now_ms,
        kind,
    });
    debug!(site_id, ?kind, events = log.len(), "recorded nudge dismissal");

    let encoded = serde_json::to_value(&log).map_err(PrefsError::from)?;
    preference.insert(site_key, encoded);
    store.set(NUDGE_PREFERENCE_KEY, Value::Object(preference))
}
