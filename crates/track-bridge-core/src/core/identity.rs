// crates/track-bridge-core/src/core/identity.rs
// ============================================================================
// Module: Track Bridge Persisted Identity
// Description: Snapshot of the persisted client identity fields.
// Purpose: Carry analytics and visitor identifiers into hit field building.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The persisted identity is owned by the identity store; the pipeline only
//! ever sees an immutable snapshot of it. Absent identifiers are omitted
//! from hits entirely, never emitted as empty strings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Persisted Identity
// ============================================================================

/// Snapshot of the persisted client identity.
///
/// # Invariants
/// - Mutated only by the one-shot migrator and the opt-out clearing path,
///   both of which live outside this crate.
/// - `None` means the field was never populated or has been cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedIdentity {
    /// Legacy analytics identifier, when one was persisted.
    pub analytics_id: Option<String>,
    /// Legacy visitor identifier, when one was persisted.
    pub visitor_id: Option<String>,
    /// Flag suppressing analytics identifier use, when one was persisted.
    pub ignore_analytics_id: Option<bool>,
    /// True once the one-shot storage migration has run.
    pub migration_completed: bool,
}

impl PersistedIdentity {
    /// Returns the analytics identifier when present and non-empty.
    #[must_use]
    pub fn analytics_id(&self) -> Option<&str> {
        self.analytics_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns the visitor identifier when present and non-empty.
    #[must_use]
    pub fn visitor_id(&self) -> Option<&str> {
        self.visitor_id.as_deref().filter(|id| !id.is_empty())
    }
}
