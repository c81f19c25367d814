//! io_mode to attendance status mapping

use std::fmt;

/// Attendance status derived from the vendor io_mode bitmask.
///
/// The mapping is total: any value outside the fixed table renders as
/// `Unknown (<value>)` with the decimal code preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStatus {
    CheckIn,
    CheckOut,
    BreakIn,
    BreakOut,
    OvertimeIn,
    OvertimeOut,
    Unknown(i64),
}

impl IoStatus {
    /// Translate the raw bitmask integer to a status.
    pub fn from_mode(mode: i64) -> Self {
        match mode {
            16_777_216 => IoStatus::CheckIn,
            33_554_432 => IoStatus::CheckOut,
            50_331_648 => IoStatus::BreakIn,
            67_108_864 => IoStatus::BreakOut,
            83_886_080 => IoStatus::OvertimeIn,
            100_663_296 => IoStatus::OvertimeOut,
            other => IoStatus::Unknown(other),
        }
    }
}

impl fmt::Display for IoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoStatus::CheckIn => write!(f, "Check-In"),
            IoStatus::CheckOut => write!(f, "Check-Out"),
            IoStatus::BreakIn => write!(f, "Break-In"),
            IoStatus::BreakOut => write!(f, "Break-Out"),
            IoStatus::OvertimeIn => write!(f, "Overtime-In"),
            IoStatus::OvertimeOut => write!(f, "Overtime-Out"),
            IoStatus::Unknown(mode) => write!(f, "Unknown ({})", mode),
        }
    }
}
