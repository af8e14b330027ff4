// crates/track-bridge-core/src/core/app.rs
// ============================================================================
// Module: Track Bridge Application Context
// Description: Host application facts consumed by hit field building.
// Purpose: Supply the default page name, timezone offset, and lifecycle state.
// Dependencies: crate::core::keys, serde, time
// ============================================================================

//! ## Overview
//! The application context is a per-request snapshot of host facts: the
//! application name/version/build used as the default page name, the current
//! UTC offset for the legacy timestamp field, and the foreground/background
//! state resolved through the bounded application-state probe. The state is
//! resolved before field building so the builders stay pure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::UtcOffset;

use crate::core::keys;

// ============================================================================
// SECTION: Application State
// ============================================================================

/// Application lifecycle state at the time a request is processed.
///
/// # Invariants
/// - `Unknown` covers both an unavailable host lookup and a probe timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    /// The application is in the foreground.
    Foreground,
    /// The application is in the background.
    Background,
    /// The state could not be determined in time.
    #[default]
    Unknown,
}

impl AppState {
    /// Returns the customer-perspective marker, when the state is known.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Foreground => Some(keys::APP_STATE_FOREGROUND),
            Self::Background => Some(keys::APP_STATE_BACKGROUND),
            Self::Unknown => None,
        }
    }
}

// ============================================================================
// SECTION: Application Context
// ============================================================================

/// Snapshot of host application facts for one request.
///
/// # Invariants
/// - `utc_offset` is supplied by the host; the pipeline never reads the
///   local timezone itself.
/// - Empty name/version/build values are legal and handled by the
///   identifier formatting rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationContext {
    /// Application display name.
    pub name: String,
    /// Application version number.
    pub version: String,
    /// Application build number.
    pub build: String,
    /// Current UTC offset of the host device.
    pub utc_offset: UtcOffset,
    /// Application lifecycle state resolved for this request.
    pub state: AppState,
}

impl ApplicationContext {
    /// Formats the application identifier used as the default page name.
    ///
    /// The identifier is `"{name} {version} ({build})"` with doubled spaces
    /// collapsed, the `()` wrapper removed when the build is empty, and
    /// surrounding whitespace trimmed, so partially configured hosts never
    /// leak formatting artifacts into the page name.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{} {} ({})", self.name, self.version, self.build)
            .replace("  ", " ")
            .replace("()", "")
            .trim()
            .to_string()
    }
}
