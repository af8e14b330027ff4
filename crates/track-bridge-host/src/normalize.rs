// crates/track-bridge-host/src/normalize.rs
// ============================================================================
// Module: Track Request Normalization
// Description: Conversion of inbound event payloads into track requests.
// Purpose: Collapse direct track events and rule consequences into one shape.
// Dependencies: track-bridge-core, serde_json, tracing
// ============================================================================

//! ## Overview
//! Two external triggers converge on [`TrackRequest`]: direct track events
//! carry the request fields at the top of their payload, while rules-engine
//! responses wrap them inside a triggered consequence that must match the
//! track discriminator and carry a non-empty consequence id before its
//! detail map is trusted. Both normalizers fail closed: malformed payloads
//! yield no request and are logged at debug level.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;
use tracing::debug;
use track_bridge_core::TrackRequest;

use crate::event::Event;

// ============================================================================
// SECTION: Event Data Keys
// ============================================================================

/// Track action key in event data.
pub const TRACK_ACTION: &str = "action";
/// Track state key in event data.
pub const TRACK_STATE: &str = "state";
/// Context data key in event data.
pub const CONTEXT_DATA: &str = "contextdata";
/// Internal action flag key in event data.
pub const TRACK_INTERNAL: &str = "trackinternal";
/// Triggered consequence wrapper key in rules-engine responses.
pub const TRIGGERED_CONSEQUENCE: &str = "triggeredconsequence";
/// Consequence identifier key.
pub const CONSEQUENCE_ID: &str = "id";
/// Consequence type key.
pub const CONSEQUENCE_TYPE: &str = "type";
/// Consequence detail key.
pub const CONSEQUENCE_DETAIL: &str = "detail";
/// Consequence type value selecting track consequences.
pub const CONSEQUENCE_TYPE_TRACK: &str = "an";

// ============================================================================
// SECTION: Direct Track Events
// ============================================================================

/// Normalizes a direct track event into a track request.
///
/// Returns `None` when the event carries no data. Missing request fields
/// are normalized to absent values; content validation happens later in
/// the processor.
#[must_use]
pub fn track_request_from_event(event: &Event) -> Option<TrackRequest> {
    let Some(data) = event.data() else {
        debug!(event_id = %event.id, "event contained no data, ignoring");
        return None;
    };
    Some(request_from_payload(event, data))
}

// ============================================================================
// SECTION: Rule Consequences
// ============================================================================

/// Normalizes a rules-engine response into a track request.
///
/// The payload must wrap a consequence whose type matches the track
/// discriminator and whose id is a non-empty string; the nested detail map
/// is then treated as the track payload. Any other shape yields `None`.
#[must_use]
pub fn track_request_from_consequence(event: &Event) -> Option<TrackRequest> {
    let Some(data) = event.data() else {
        debug!(event_id = %event.id, "event contained no data, ignoring");
        return None;
    };

    let Some(Value::Object(consequence)) = data.get(TRIGGERED_CONSEQUENCE) else {
        debug!(event_id = %event.id, "ignoring response, missing consequence data");
        return None;
    };

    if consequence.get(CONSEQUENCE_TYPE).and_then(Value::as_str)
        != Some(CONSEQUENCE_TYPE_TRACK)
    {
        debug!(event_id = %event.id, "ignoring response, consequence type is not track");
        return None;
    }

    match consequence.get(CONSEQUENCE_ID).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => {}
        _ => {
            debug!(event_id = %event.id, "ignoring response, consequence id is missing");
            return None;
        }
    }

    let empty = Map::new();
    let detail = match consequence.get(CONSEQUENCE_DETAIL) {
        Some(Value::Object(detail)) => detail,
        _ => &empty,
    };
    Some(request_from_payload(event, detail))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a track request from a payload map.
fn request_from_payload(event: &Event, payload: &Map<String, Value>) -> TrackRequest {
    TrackRequest {
        action_name: payload.get(TRACK_ACTION).and_then(Value::as_str).map(ToString::to_string),
        state_name: payload.get(TRACK_STATE).and_then(Value::as_str).map(ToString::to_string),
        is_internal_action: payload
            .get(TRACK_INTERNAL)
            .and_then(Value::as_bool)
            .unwrap_or(false),
        context_data: string_entries(payload.get(CONTEXT_DATA)),
        source_event_id: event.id.clone(),
        source_timestamp: event.timestamp,
    }
}

/// Extracts the string-valued entries of an optional JSON object.
///
/// Non-string values are skipped; callers only ever supply string context
/// data and anything else cannot be represented on the legacy wire.
fn string_entries(value: Option<&Value>) -> BTreeMap<String, String> {
    let Some(Value::Object(map)) = value else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(key, value)| {
            value.as_str().map(|text| (key.clone(), text.to_string()))
        })
        .collect()
}
