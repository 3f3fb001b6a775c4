//! End-to-end nudge flow: dismissals recorded through the SQLite preference
//! store drive the visibility policy exactly like in-memory state.

use chrono::{Duration, Utc};
use sitepulse::nudge::policy::{self, MAX_DISMISS};
use sitepulse::nudge::{DismissalKind, load_dismissal_log, record_dismissal};
use sitepulse::prefs::SqlitePreferenceStore;
use sitepulse::site::SiteContext;
use tempfile::NamedTempFile;

const SITE_ID: u64 = 4242;

fn store() -> (NamedTempFile, SqlitePreferenceStore) {
    let db_file = NamedTempFile::new().unwrap();
    let store = SqlitePreferenceStore::new(db_file.path()).unwrap();
    (db_file, store)
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn business_site(age_days: i64) -> SiteContext {
    SiteContext {
        site_id: SITE_ID,
        site_slug: "shop.example.com".into(),
        plan_slug: "business-bundle".into(),
        goals: vec!["promote".into(), "grow".into()],
        created_at: Utc::now() - Duration::days(age_days),
        has_connected_location: false,
    }
}

#[test]
fn fresh_site_shows_nudge_until_dismissed() {
    let (_db_file, store) = store();
    let site = business_site(8);
    let now = now_ms();

    let log = load_dismissal_log(&store, SITE_ID).unwrap();
    assert!(policy::is_visible(&site, now));
    assert!(!policy::is_dismissed(&log, now));

    record_dismissal(&store, SITE_ID, DismissalKind::Dismiss, now).unwrap();

    let log = load_dismissal_log(&store, SITE_ID).unwrap();
    assert!(policy::is_dismissed(&log, now));
    // Visibility is a separate predicate and is unaffected.
    assert!(policy::is_visible(&site, now));
}

#[test]
fn single_dismissal_expires_but_ceiling_is_permanent() {
    let (_db_file, store) = store();
    let now = now_ms();
    let thirty_days_ago = now - 30 * 24 * 3600 * 1000;

    record_dismissal(&store, SITE_ID, DismissalKind::Dismiss, thirty_days_ago).unwrap();
    let log = load_dismissal_log(&store, SITE_ID).unwrap();
    assert!(!policy::is_dismissed(&log, now), "one stale dismissal expires");

    record_dismissal(&store, SITE_ID, DismissalKind::Dismiss, thirty_days_ago + 1000).unwrap();
    let log = load_dismissal_log(&store, SITE_ID).unwrap();
    assert_eq!(policy::dismiss_count(&log), MAX_DISMISS);
    assert!(
        policy::is_dismissed(&log, now),
        "second dismissal hits the permanent ceiling"
    );
}

#[test]
fn already_listed_never_suppresses() {
    let (_db_file, store) = store();
    let now = now_ms();

    for _ in 0..3 {
        record_dismissal(&store, SITE_ID, DismissalKind::AlreadyListed, now).unwrap();
    }

    let log = load_dismissal_log(&store, SITE_ID).unwrap();
    assert_eq!(policy::dismiss_count(&log), 0);
    assert!(!policy::is_dismissed(&log, now));
}

#[test]
fn histories_survive_store_reopen_and_stay_per_site() {
    let db_file = NamedTempFile::new().unwrap();
    let now = now_ms();

    {
        let store = SqlitePreferenceStore::new(db_file.path()).unwrap();
        record_dismissal(&store, 1, DismissalKind::Dismiss, now).unwrap();
        record_dismissal(&store, 2, DismissalKind::AlreadyListed, now).unwrap();
    }

    let store = SqlitePreferenceStore::new(db_file.path()).unwrap();
    let site_one = load_dismissal_log(&store, 1).unwrap();
    let site_two = load_dismissal_log(&store, 2).unwrap();

    assert!(policy::is_dismissed(&site_one, now));
    assert!(!policy::is_dismissed(&site_two, now));
}

#[test]
fn ineligible_sites_never_show_the_nudge() {
    let now = now_ms();

    let young = business_site(3);
    assert!(!sitepulse::nudge::policy::is_visible(&young, now));

    let connected = SiteContext {
        has_connected_location: true,
        ..business_site(30)
    };
    assert!(!sitepulse::nudge::policy::is_visible(&connected, now));

    let premium = SiteContext {
        plan_slug: "value_bundle".into(),
        ..business_site(30)
    };
    assert!(!sitepulse::nudge::policy::is_visible(&premium, now));
}
