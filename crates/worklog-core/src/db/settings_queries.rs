//! Preference record persistence.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use crate::{
    error::{SqliteResultExt, Result},
    models::Preferences,
};

const SELECT_PREFERENCES_SQL: &str = "SELECT payload FROM preferences WHERE id = 1";
const UPSERT_PREFERENCES_SQL: &str = "INSERT INTO preferences (id, payload, updated_at) VALUES (1, ?1, ?2) ON CONFLICT(id) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at";

impl super::Database {
    /// Load the persisted preference record.
    ///
    /// A missing or unreadable record yields the defaults; the store never
    /// requires preferences to exist.
    pub fn load_preferences(&self) -> Result<Preferences> {
        let payload: Option<String> = self
            .conn
            .query_row(SELECT_PREFERENCES_SQL, [], |row| row.get(0))
            .optional()
            .sql_context("Failed to query preferences")?;

        Ok(payload
            .and_then(|payload| serde_json::from_str(&payload).ok())
            .unwrap_or_default())
    }

    /// Persist the preference record, replacing any previous one.
    pub fn save_preferences(&mut self, prefs: &Preferences) -> Result<()> {
        let payload = serde_json::to_string(prefs)?;
        let now = Timestamp::now().to_string();

        self.conn
            .execute(UPSERT_PREFERENCES_SQL, params![payload, now])
            .sql_context("Failed to save preferences")?;

        Ok(())
    }
}
