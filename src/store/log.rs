//! Pass-through store backend

use async_trait::async_trait;

use crate::punch::PunchLog;
use crate::Result;

use super::AttendanceStore;

/// Logs every punch without persisting it.
#[derive(Debug, Default)]
pub struct LogStore;

impl LogStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AttendanceStore for LogStore {
    async fn save_punch(&self, punch: &PunchLog, status: &str) -> Result<()> {
        tracing::info!(
            user_id = %punch.user_id,
            io_time = %punch.io_time,
            status,
            "Saving punch"
        );
        Ok(())
    }
}
