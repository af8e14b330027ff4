// crates/track-bridge-core/src/core/time.rs
// ============================================================================
// Module: Track Bridge Time Model
// Description: Timestamp representation and legacy timestamp formatting.
// Purpose: Provide deterministic time values supplied by hosts, never read ambiently.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The pipeline never reads wall-clock time or the local timezone directly;
//! hosts attach a timestamp to every inbound event and supply the current
//! UTC offset through the application context. The legacy wire format wants
//! two views of time: the event timestamp as decimal unix seconds, and a
//! date string whose date/time fields are zeroed because the collector reads
//! only the trailing timezone offset from it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::UtcOffset;

// ============================================================================
// SECTION: Timestamp
// ============================================================================

/// Event timestamp in unix seconds.
///
/// # Invariants
/// - Values are explicitly provided by hosts; the pipeline never reads wall-clock time.
/// - No validation is performed; monotonicity is a host responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix seconds.
    #[must_use]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the timestamp as unix seconds.
    #[must_use]
    pub const fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as the decimal string the wire format carries.
    #[must_use]
    pub fn decimal_string(self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// SECTION: Legacy Timestamp Formatting
// ============================================================================

/// Formats the offset-only timestamp string for the formatted-timestamp field.
///
/// Date and time fields are zeroed; the collector reads only the trailing
/// offset, expressed in minutes with the sign inverted relative to the UTC
/// offset.
#[must_use]
pub fn gmt_offset_timestamp(offset: UtcOffset) -> String {
    let offset_minutes = -i64::from(offset.whole_minutes());
    format!("00/00/0000 00:00:00 0 {offset_minutes}")
}
