// crates/track-bridge-host/src/event.rs
// ============================================================================
// Module: Host Bus Event Model
// Description: Canonical inbound and outbound event records.
// Purpose: Model the host event bus shapes the bridge listens for and emits.
// Dependencies: track-bridge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The host bus delivers typed events with loosely-typed JSON payloads.
//! The bridge listens for three inbound shapes (generic track requests,
//! rules-engine responses, configuration responses) and emits one outbound
//! shape (edge requests). Event identifiers and timestamps are assigned by
//! the host and passed through unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use track_bridge_core::EventId;
use track_bridge_core::Timestamp;

// ============================================================================
// SECTION: Event Kinds
// ============================================================================

/// Event type discriminator on the host bus.
///
/// # Invariants
/// - Variants are stable for serialization and listener matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Generic instrumentation track event.
    GenericTrack,
    /// Rules-engine response event.
    RulesEngine,
    /// Configuration response event.
    Configuration,
    /// Outbound edge request event.
    Edge,
}

/// Event source discriminator on the host bus.
///
/// # Invariants
/// - Variants are stable for serialization and listener matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Request content from callers.
    RequestContent,
    /// Response content from other extensions.
    ResponseContent,
}

// ============================================================================
// SECTION: Event Record
// ============================================================================

/// Canonical host bus event.
///
/// # Invariants
/// - `id` and `timestamp` are host-assigned and opaque to the bridge.
/// - `data` is optional; events without data are ignored by every listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Host-assigned event identifier.
    pub id: EventId,
    /// Human-readable event name.
    pub name: String,
    /// Event type discriminator.
    pub event_type: EventType,
    /// Event source discriminator.
    pub source: EventSource,
    /// Host-assigned event timestamp.
    pub timestamp: Timestamp,
    /// Optional event payload.
    pub data: Option<Map<String, Value>>,
}

impl Event {
    /// Creates an event with the given identity and payload.
    #[must_use]
    pub fn new(
        id: impl Into<EventId>,
        name: impl Into<String>,
        event_type: EventType,
        source: EventSource,
        timestamp: Timestamp,
        data: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            event_type,
            source,
            timestamp,
            data,
        }
    }

    /// Returns the payload map, when the event carries one.
    #[must_use]
    pub const fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }
}
