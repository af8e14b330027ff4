// crates/track-bridge-core/src/core/privacy.rs
// ============================================================================
// Module: Track Bridge Privacy Gate
// Description: Privacy status resolution and the processing gate.
// Purpose: Decide per event whether tracking may proceed.
// Dependencies: crate::core::snapshot, serde
// ============================================================================

//! ## Overview
//! Privacy is resolved from the configuration snapshot accompanying each
//! event. Unparseable or absent values resolve to `Unknown`, which still
//! permits processing but annotates the hit; only an explicit opt-out stops
//! a request. Clearing persisted identity on an opt-out transition is the
//! caller's responsibility, since the gate itself holds no state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::snapshot::ConfigSnapshot;

// ============================================================================
// SECTION: Privacy Status
// ============================================================================

/// Privacy status carried in the configuration shared state.
///
/// # Invariants
/// - Raw wire strings are fixed by the configuration contract.
/// - Unrecognized raw strings resolve to `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyStatus {
    /// The user has opted in to tracking.
    OptedIn,
    /// The user has opted out of tracking.
    OptedOut,
    /// Privacy preference is not yet resolved.
    #[default]
    Unknown,
}

impl PrivacyStatus {
    /// Parses a raw privacy string from configuration.
    ///
    /// The raw strings are fixed by the configuration contract
    /// (`optedin`, `optedout`, `optunknown`); anything else is `Unknown`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "optedin" => Self::OptedIn,
            "optedout" => Self::OptedOut,
            _ => Self::Unknown,
        }
    }
}

// ============================================================================
// SECTION: Privacy Gate
// ============================================================================

/// Stateless gate resolving privacy and deciding whether to process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivacyGate;

impl PrivacyGate {
    /// Resolves the privacy status from a configuration snapshot.
    #[must_use]
    pub fn resolve(config: &ConfigSnapshot) -> PrivacyStatus {
        config.privacy_raw().map_or(PrivacyStatus::Unknown, PrivacyStatus::from_raw)
    }

    /// Returns true unless the resolved status is an explicit opt-out.
    #[must_use]
    pub const fn should_process(status: PrivacyStatus) -> bool {
        !matches!(status, PrivacyStatus::OptedOut)
    }
}
