use tempfile::TempDir;
use worklog_core::{Journal, JournalBuilder};

/// Open a journal backed by a database file inside a fresh temp directory.
///
/// The directory guard must stay alive for the duration of the test.
pub async fn open_temp_journal() -> (TempDir, Journal) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let journal = JournalBuilder::new()
        .with_database_path(Some(dir.path().join("worklog.db")))
        .build()
        .await
        .expect("Failed to open journal");
    (dir, journal)
}
