//! JSON Lines store backend

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::punch::PunchLog;
use crate::Result;

use super::AttendanceStore;

/// One persisted attendance row.
#[derive(Debug, Serialize)]
struct PunchRecord<'a> {
    user_id: &'a str,
    io_time: &'a str,
    io_mode: i64,
    status: &'a str,
    received_at: DateTime<Utc>,
}

/// Appends each punch as one JSON line to a local file.
pub struct JsonlStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }
}

#[async_trait]
impl AttendanceStore for JsonlStore {
    async fn save_punch(&self, punch: &PunchLog, status: &str) -> Result<()> {
        let record = PunchRecord {
            user_id: &punch.user_id,
            io_time: &punch.io_time,
            io_mode: punch.io_mode,
            status,
            received_at: Utc::now(),
        };

        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_jsonl_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("punches.jsonl");
        let store = JsonlStore::new(&path).unwrap();

        let punch = PunchLog {
            user_id: "U1".to_string(),
            io_time: "2024-01-01T08:00:00".to_string(),
            io_mode: 16_777_216,
            ..Default::default()
        };

        store.save_punch(&punch, "Check-In").await.unwrap();
        store.save_punch(&punch, "Check-In").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let row: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(row["user_id"], "U1");
        assert_eq!(row["io_time"], "2024-01-01T08:00:00");
        assert_eq!(row["io_mode"], 16_777_216);
        assert_eq!(row["status"], "Check-In");
        assert!(row["received_at"].is_string());
    }

    #[tokio::test]
    async fn test_jsonl_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/punches.jsonl");
        let store = JsonlStore::new(&path).unwrap();

        let punch = PunchLog {
            user_id: "U2".to_string(),
            io_time: "T".to_string(),
            io_mode: 1,
            ..Default::default()
        };

        store.save_punch(&punch, "Unknown (1)").await.unwrap();
        assert!(path.exists());
    }
}
