//! Punch payload extraction and classification
//!
//! Push terminals wrap their JSON in vendor framing, so the body is never
//! decoded as-is: the span between the first `{` and the last `}` is treated
//! as the payload, and everything around it is ignored.

use serde::Deserialize;

use crate::Result;

/// A single callback payload as sent by a biometric terminal.
///
/// Fields the device omits decode to their defaults; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PunchLog {
    pub user_id: String,
    pub io_time: String,
    pub io_mode: i64,
    pub fk_name: String,
}

/// What a decoded payload turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// An attendance event: both `user_id` and `io_time` are present.
    Punch,
    /// A device liveness/enrollment signal identified by `fk_name`.
    Heartbeat,
    /// Nothing actionable; dropped silently.
    Discard,
}

impl PunchLog {
    pub fn classify(&self) -> Classification {
        if !self.user_id.is_empty() && !self.io_time.is_empty() {
            Classification::Punch
        } else if !self.fk_name.is_empty() {
            Classification::Heartbeat
        } else {
            Classification::Discard
        }
    }
}

/// Locate the first-`{`-to-last-`}` span in a raw request body.
///
/// Returns `None` when either delimiter is missing or the last `}` does not
/// come after the first `{`.
pub fn json_fragment(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

/// Decode an extracted fragment into a [`PunchLog`].
pub fn decode(fragment: &str) -> Result<PunchLog> {
    Ok(serde_json::from_str(fragment)?)
}
