// crates/track-bridge-core/src/core/snapshot.rs
// ============================================================================
// Module: Track Bridge Shared-State Snapshots
// Description: Per-event views of configuration and assurance shared state.
// Purpose: Give the pipeline read-only access to host-propagated state.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The host bus propagates extension state as key/value snapshots resolved
//! per event. The pipeline consumes two of them: the configuration snapshot
//! (for the privacy string) and the assurance snapshot (for the debug
//! session identifier). Snapshots are immutable; the pipeline never writes
//! shared state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Snapshot Keys
// ============================================================================

/// Configuration key holding the global privacy string.
pub const GLOBAL_CONFIG_PRIVACY: &str = "global.privacy";
/// Assurance key holding the debug session identifier.
pub const ASSURANCE_SESSION_ID: &str = "sessionid";

// ============================================================================
// SECTION: Configuration Snapshot
// ============================================================================

/// Read-only view of the configuration shared state for one event.
///
/// # Invariants
/// - Values are snapshots; the pipeline must not mutate them.
/// - An empty snapshot models absent shared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigSnapshot {
    /// Snapshot values keyed by configuration key.
    values: BTreeMap<String, Value>,
}

impl ConfigSnapshot {
    /// Creates a snapshot from resolved shared-state values.
    #[must_use]
    pub const fn new(values: BTreeMap<String, Value>) -> Self {
        Self {
            values,
        }
    }

    /// Returns the raw privacy string, when the snapshot carries one.
    #[must_use]
    pub fn privacy_raw(&self) -> Option<&str> {
        self.values.get(GLOBAL_CONFIG_PRIVACY).and_then(Value::as_str)
    }
}

// ============================================================================
// SECTION: Assurance Snapshot
// ============================================================================

/// Read-only view of the assurance shared state for one event.
///
/// # Invariants
/// - Values are snapshots; the pipeline must not mutate them.
/// - A missing or empty session identifier means no debug session is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssuranceSnapshot {
    /// Snapshot values keyed by assurance key.
    values: BTreeMap<String, Value>,
}

impl AssuranceSnapshot {
    /// Creates a snapshot from resolved shared-state values.
    #[must_use]
    pub const fn new(values: BTreeMap<String, Value>) -> Self {
        Self {
            values,
        }
    }

    /// Returns the debug session identifier when present and non-empty.
    #[must_use]
    pub fn debug_session_id(&self) -> Option<&str> {
        self.values
            .get(ASSURANCE_SESSION_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Returns true when a debug session is active.
    #[must_use]
    pub fn is_session_active(&self) -> bool {
        self.debug_session_id().is_some()
    }
}
