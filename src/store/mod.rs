//! Attendance store abstraction
//!
//! Provides a unified save interface over the configured backend

use std::path::PathBuf;

use async_trait::async_trait;

use crate::punch::PunchLog;
use crate::Result;

pub mod jsonl;
pub mod log;

/// Store backend trait
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Persist one punch together with its derived status label
    async fn save_punch(&self, punch: &PunchLog, status: &str) -> Result<()>;
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Log,
    Jsonl { path: PathBuf },
}

/// Create a store backend from config
pub fn create_store(config: StoreConfig) -> Result<Box<dyn AttendanceStore>> {
    match config {
        StoreConfig::Log => Ok(Box::new(log::LogStore::new())),
        StoreConfig::Jsonl { path } => {
            let backend = jsonl::JsonlStore::new(path)?;
            Ok(Box::new(backend))
        }
    }
}
