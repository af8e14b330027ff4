// crates/track-bridge-core/src/core/request.rs
// ============================================================================
// Module: Track Bridge Request Model
// Description: Canonical track request produced by event normalization.
// Purpose: Collapse direct track events and rule consequences into one shape.
// Dependencies: crate::core::{identifiers, time}, serde
// ============================================================================

//! ## Overview
//! Two external triggers feed the pipeline: direct instrumentation track
//! events and rule-engine track consequences. Both are normalized into
//! [`TrackRequest`] before any processing. A request with no action, no
//! state, and no context data carries nothing worth sending and is dropped
//! by the processor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::EventId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Track Request
// ============================================================================

/// Canonical track request.
///
/// # Invariants
/// - `action_name` and `state_name` are either absent or non-empty; empty
///   strings supplied by hosts are treated as absent by the accessors.
/// - `context_data` insertion order is irrelevant; the map is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRequest {
    /// Action name reported by the instrumentation call, if any.
    pub action_name: Option<String>,
    /// State (screen) name reported by the instrumentation call, if any.
    pub state_name: Option<String>,
    /// Marks the action as internally generated rather than app-authored.
    pub is_internal_action: bool,
    /// Free-form context data supplied by the caller.
    pub context_data: BTreeMap<String, String>,
    /// Identifier of the host event this request was normalized from.
    pub source_event_id: EventId,
    /// Timestamp of the host event this request was normalized from.
    pub source_timestamp: Timestamp,
}

impl TrackRequest {
    /// Returns the action name when present and non-empty.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the state name when present and non-empty.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns true when the request carries an action, state, or context data.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.action().is_some() || self.state().is_some() || !self.context_data.is_empty()
    }
}
