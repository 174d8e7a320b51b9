//! Persisted preference load and update.

use super::Journal;
use crate::{error::Result, models::Preferences, params::UpdatePreferences};

impl Journal {
    /// Loads the persisted preferences, falling back to defaults when none
    /// have been saved yet.
    pub async fn preferences(&self) -> Result<Preferences> {
        self.with_db(|db| db.load_preferences()).await
    }

    /// Applies a partial preference update and persists the result.
    ///
    /// Returns the updated preferences together with labels for every field
    /// that actually changed. Nothing is written when no field changed.
    pub async fn update_preferences(
        &self,
        params: &UpdatePreferences,
    ) -> Result<(Preferences, Vec<String>)> {
        params.validate()?;
        let params = params.clone();

        self.with_db(move |mut db| {
            let mut prefs = db.load_preferences()?;

            let changes = params.apply(&mut prefs);
            if !changes.is_empty() {
                db.save_preferences(&prefs)?;
            }
            Ok((prefs, changes))
        })
        .await
    }
}
