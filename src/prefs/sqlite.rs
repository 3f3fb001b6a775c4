use super::PreferenceStore;
use crate::error::{PrefsError, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::path::Path;
use std::sync::Mutex;

/// SQLite-backed preference store.
///
/// One row per key; `set` is an upsert so a read-modify-write cycle from the
/// single-threaded event loop observes last-writer-wins semantics.
pub struct SqlitePreferenceStore {
    conn: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    pub fn new(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .map_err(|error| PrefsError::Open(error.to_string()))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL,
                 updated_at TEXT NOT NULL
             );",
        )
        .map_err(PrefsError::from)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock_connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.lock_connection();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(PrefsError::from)?;

        raw.map(|text| serde_json::from_str(&text).map_err(PrefsError::from))
            .transpose()
            .map_err(Into::into)
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let conn = self.lock_connection();
        let text = serde_json::to_string(&value).map_err(PrefsError::from)?;
        let timestamp = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, text, timestamp],
        )
        .map_err(PrefsError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn store() -> (NamedTempFile, SqlitePreferenceStore) {
        let db_file = NamedTempFile::new().unwrap();
        let store = SqlitePreferenceStore::new(db_file.path()).unwrap();
        (db_file, store)
    }

    #[test]
    fn missing_key_is_none() {
        let (_db_file, store) = store();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_db_file, store) = store();
        store
            .set("nudge", json!({ "123": [{ "dismissedAt": 1, "type": "dismiss" }] }))
            .unwrap();

        let value = store.get("nudge").unwrap().unwrap();
        assert_eq!(value["123"][0]["type"], "dismiss");
    }

    #[test]
    fn set_overwrites_previous_value() {
        let (_db_file, store) = store();
        store.set("k", json!([1])).unwrap();
        store.set("k", json!([1, 2])).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!([1, 2])));
    }

    #[test]
    fn keys_are_independent() {
        let (_db_file, store) = store();
        store.set("a", json!("left")).unwrap();
        store.set("b", json!("right")).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!("left")));
        assert_eq!(store.get("b").unwrap(), Some(json!("right")));
    }

    #[test]
    fn values_survive_reopen() {
        let db_file = NamedTempFile::new().unwrap();
        {
            let store = SqlitePreferenceStore::new(db_file.path()).unwrap();
            store.set("k", json!(42)).unwrap();
        }
        let reopened = SqlitePreferenceStore::new(db_file.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap(), Some(json!(42)));
    }
}
