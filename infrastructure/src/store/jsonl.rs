//! JSON Lines intake store
//!
//! Each [`IntakeRecord`] is serialized as a single JSON line and appended to
//! the file. Existing lines are read back on open, so ids keep counting up
//! across restarts.

use async_trait::async_trait;
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};
use triage_application::{IntakeStore, StoreError};
use triage_domain::{IntakeId, IntakeRecord, NewIntake, sort_newest_first};

struct State {
    file: File,
    records: Vec<IntakeRecord>,
    next_id: u64,
}

/// Append-only JSONL intake store.
///
/// Thread-safe via a `Mutex` around the file and the loaded records. A record
/// is either written whole or not at all: a failed append is cut back off the
/// file and its id is handed out again.
pub struct JsonlIntakeStore {
    state: Mutex<State>,
    path: PathBuf,
}

impl JsonlIntakeStore {
    /// Open (or create) the store file and load its records.
    ///
    /// Creates parent directories if needed. Blank lines are skipped; any
    /// other line that is not a valid record fails with
    /// [`StoreError::Corrupt`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let records = Self::read_records(path)?;
        let next_id = records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        info!(
            "Opened intake store {} ({} records)",
            path.display(),
            records.len()
        );

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            state: Mutex::new(State {
                file,
                records,
                next_id,
            }),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(path: &Path) -> Result<Vec<IntakeRecord>, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record =
                serde_json::from_str::<IntakeRecord>(&line).map_err(|e| StoreError::Corrupt {
                    line: index + 1,
                    reason: e.to_string(),
                })?;
            records.push(record);
        }
        Ok(records)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("intake store lock poisoned".to_string()))
    }
}

/// Append `line` plus a newline in a single write.
///
/// On failure the file is truncated back to its previous length, so a
/// partially written record never survives into the next append.
fn append_line(file: &mut File, line: &str) -> std::io::Result<()> {
    let len = file.metadata()?.len();
    let mut bytes = Vec::with_capacity(line.len() + 1);
    bytes.extend_from_slice(line.as_bytes());
    bytes.push(b'\n');

    if let Err(e) = file.write_all(&bytes).and_then(|()| file.flush()) {
        if let Err(truncate) = file.set_len(len) {
            warn!("Failed to roll back partial intake record: {}", truncate);
        }
        return Err(e);
    }
    Ok(())
}

#[async_trait]
impl IntakeStore for JsonlIntakeStore {
    async fn create(&self, intake: NewIntake) -> Result<IntakeRecord, StoreError> {
        let mut state = self.lock()?;

        let record = IntakeRecord::new(IntakeId(state.next_id), intake, Utc::now());
        let line =
            serde_json::to_string(&record).map_err(|e| StoreError::Serialization(e.to_string()))?;

        append_line(&mut state.file, &line)?;

        state.next_id += 1;
        state.records.push(record.clone());
        debug!("Stored intake {} in {}", record.id, self.path.display());
        Ok(record)
    }

    async fn list_recent(&self) -> Result<Vec<IntakeRecord>, StoreError> {
        let mut records = self.lock()?.records.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intake(cow: &str, age: u32) -> NewIntake {
        NewIntake {
            username: "Suresh".to_string(),
            user_contact: "9000000001".to_string(),
            cow_name: cow.to_string(),
            cow_age: age,
            cow_breed: "Holstein".to_string(),
        }
    }

    #[tokio::test]
    async fn test_writes_one_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intakes.jsonl");
        let store = JsonlIntakeStore::open(&path).unwrap();

        store.create(intake("Nandini", 3)).await.unwrap();
        store.create(intake("Bhuri", 7)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], 1);
        assert_eq!(first["cowName"], "Nandini");
        assert_eq!(first["cowAge"], 3);
        assert!(first.get("createdAt").is_some());
    }

    #[tokio::test]
    async fn test_ids_continue_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("intakes.jsonl");

        {
            let store = JsonlIntakeStore::open(&path).unwrap();
            store.create(intake("Nandini", 3)).await.unwrap();
            store.create(intake("Bhuri", 7)).await.unwrap();
        }

        let store = JsonlIntakeStore::open(&path).unwrap();
        let third = store.create(intake("Kali", 2)).await.unwrap();
        assert_eq!(third.id, IntakeId(3));

        let ids: Vec<u64> = store
            .list_recent()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_corrupt_line_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intakes.jsonl");

        {
            let store = JsonlIntakeStore::open(&path).unwrap();
            store.create(intake("Nandini", 3)).await.unwrap();
        }
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{not json").unwrap();

        match JsonlIntakeStore::open(&path) {
            Err(StoreError::Corrupt { line, .. }) => assert_eq!(line, 2),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("corrupt file opened"),
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_failed_append_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intakes.jsonl");
        let store = JsonlIntakeStore::open(&path).unwrap();

        // Every write to /dev/full fails with "no space left on device"
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let real = std::mem::replace(&mut store.state.lock().unwrap().file, full);

        let failed = store.create(intake("Failed", 4)).await;
        assert!(matches!(failed, Err(StoreError::Io(_))));
        assert!(store.list_recent().await.unwrap().is_empty());

        store.state.lock().unwrap().file = real;
        let second = store.create(intake("Second", 5)).await.unwrap();
        assert_eq!(second.id, IntakeId(1));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("Second"));
        assert!(!content.contains("Failed"));

        drop(store);
        let reopened = JsonlIntakeStore::open(&path).unwrap();
        let ids: Vec<u64> = reopened
            .list_recent()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intakes.jsonl");
        std::fs::write(&path, "\n   \n").unwrap();

        let store = JsonlIntakeStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
    }
}
