//! API server state

use std::sync::Arc;

use crate::store::AttendanceStore;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Attendance store backend
    pub store: Arc<dyn AttendanceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }
}
