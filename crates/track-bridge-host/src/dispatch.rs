// crates/track-bridge-host/src/dispatch.rs
// ============================================================================
// Module: Edge Request Dispatch
// Description: Outbound envelope building and the dispatcher interface.
// Purpose: Wrap assembled hits into the edge event shape and hand them to
//          the transport collaborator.
// Dependencies: track-bridge-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! One edge request is emitted per accepted track request. The envelope
//! nests the flattened legacy hit under `data._legacy.analytics` and tags
//! the XDM object with the legacy analytics event type. Delivery itself is
//! a collaborator concern; the bridge hands the request over and holds no
//! send queue or retry state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;
use track_bridge_core::LegacyHit;
use track_bridge_core::keys;

// ============================================================================
// SECTION: Dispatch Errors
// ============================================================================

/// Dispatch errors for edge request delivery.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Dispatcher reported an error.
    #[error("dispatch error: {0}")]
    DispatchFailed(String),
}

// ============================================================================
// SECTION: Edge Request
// ============================================================================

/// Outbound edge request carrying one legacy hit.
///
/// # Invariants
/// - `data` always holds the `xdm` and `data` envelope objects.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRequest {
    /// Event name assigned to the outbound request.
    pub event_name: String,
    /// Envelope payload for the outbound request.
    pub data: Map<String, Value>,
}

/// Builds the edge request envelope for an assembled hit.
#[must_use]
pub fn edge_request(hit: &LegacyHit) -> EdgeRequest {
    let mut xdm = Map::new();
    xdm.insert(
        keys::EVENT_TYPE.to_string(),
        Value::String(keys::LEGACY_ANALYTICS_EVENT_TYPE.to_string()),
    );

    let mut legacy = Map::new();
    legacy.insert(keys::ANALYTICS.to_string(), hit.to_value());
    let mut payload = Map::new();
    payload.insert(keys::LEGACY.to_string(), Value::Object(legacy));

    let mut data = Map::new();
    data.insert(keys::XDM.to_string(), Value::Object(xdm));
    data.insert(keys::DATA.to_string(), Value::Object(payload));

    EdgeRequest {
        event_name: keys::EDGE_EVENT_NAME.to_string(),
        data,
    }
}

// ============================================================================
// SECTION: Dispatcher Interface
// ============================================================================

/// Transport collaborator delivering edge requests.
///
/// Implementations wrap the request into a host bus event and deliver it;
/// the bridge never retries a failed dispatch.
pub trait EdgeDispatcher {
    /// Delivers one edge request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when delivery fails.
    fn dispatch(&mut self, request: EdgeRequest) -> Result<(), DispatchError>;
}
