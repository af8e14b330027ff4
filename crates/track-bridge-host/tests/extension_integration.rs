// crates/track-bridge-host/tests/extension_integration.rs
// ============================================================================
// Module: Analytics Bridge Integration Tests
// Description: End-to-end tests over the listener routing and pipeline.
// Purpose: Validate dispatched envelopes, privacy handling, consequence
//          filtering, migration at construction, and opt-out clearing.
// ============================================================================

//! ## Overview
//! Integration tests driving the bridge the way the host bus does:
//! - Track state and track action events produce full legacy envelopes
//! - Opted-out privacy drops requests entirely
//! - Unknown privacy annotates the hit
//! - Active debug sessions echo the source event identifier
//! - Rule consequences are filtered by type and id before tracking
//! - Identity migrates during construction and clears on opt-out

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use serde_json::Value;
use serde_json::json;
use track_bridge_core::AppState;
use track_bridge_core::KeyValueStore;
use track_bridge_host::AnalyticsBridge;
use track_bridge_host::FixedStateProbe;
use track_bridge_store::GenerationV4;
use track_bridge_store::GenerationV5;
use track_bridge_store::MemoryKeyValueStore;
use track_bridge_store::store_keys;

use common::CapturingDispatcher;
use common::MapSharedState;
use common::configuration_event;
use common::request_pointer;
use common::rules_event;
use common::sample_app;
use common::track_event;

// ============================================================================
// SECTION: Helpers
// ============================================================================

type TestBridge = AnalyticsBridge<MemoryKeyValueStore, FixedStateProbe, CapturingDispatcher>;

fn bridge_over(
    datastore: MemoryKeyValueStore,
    legacy: &mut MemoryKeyValueStore,
) -> (TestBridge, CapturingDispatcher) {
    let dispatcher = CapturingDispatcher::default();
    let bridge = AnalyticsBridge::new(
        datastore,
        legacy,
        FixedStateProbe::new(AppState::Foreground),
        dispatcher.clone(),
        sample_app(),
    );
    (bridge, dispatcher)
}

fn fresh_bridge() -> (TestBridge, CapturingDispatcher) {
    bridge_over(MemoryKeyValueStore::new(), &mut MemoryKeyValueStore::new())
}

// ============================================================================
// SECTION: Track Events
// ============================================================================

#[test]
fn track_state_dispatches_full_envelope() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = track_event(
        "event-1",
        json!({"state": "state", "contextdata": {"key1": "value1", "key2": "value2"}}),
    );
    assert!(bridge.ready_for_event(&event, &states));
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].event_name, "Analytics Edge Request");

    let expected = json!({
        "xdm": {"eventType": "legacy.analytics"},
        "data": {
            "_legacy": {
                "analytics": {
                    "ndh": 1,
                    "pageName": "state",
                    "ce": "UTF-8",
                    "t": "00/00/0000 00:00:00 0 0",
                    "ts": "100",
                    "cp": "foreground",
                    "c": {"key1": "value1", "key2": "value2"}
                }
            }
        }
    });
    assert_eq!(Value::Object(requests[0].data.clone()), expected);
}

#[test]
fn track_action_dispatches_action_fields() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = track_event(
        "event-1",
        json!({"action": "action", "contextdata": {"key1": "value1", "key2": "value2"}}),
    );
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(requests.len(), 1);

    let expected = json!({
        "xdm": {"eventType": "legacy.analytics"},
        "data": {
            "_legacy": {
                "analytics": {
                    "ndh": 1,
                    "pe": "lnk_o",
                    "pev2": "AMACTION:action",
                    "pageName": "TestApp 2.1 (42)",
                    "ce": "UTF-8",
                    "t": "00/00/0000 00:00:00 0 0",
                    "ts": "100",
                    "cp": "foreground",
                    "c": {"key1": "value1", "key2": "value2", "a.action": "action"}
                }
            }
        }
    });
    assert_eq!(Value::Object(requests[0].data.clone()), expected);
}

#[test]
fn internal_track_action_uses_internal_prefix_and_key() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = track_event(
        "event-1",
        json!({"action": "action", "trackinternal": true, "contextdata": {"key1": "value1"}}),
    );
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/pev2"),
        Some(Value::String("ADBINTERNAL:action".to_string()))
    );
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/c/a.internalaction"),
        Some(Value::String("action".to_string()))
    );
    assert_eq!(request_pointer(&requests[0], "/data/_legacy/analytics/c/a.action"), None);
}

#[test]
fn escaped_context_keys_are_promoted_in_dispatched_hit() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = track_event("event-1", json!({"state": "S", "contextdata": {"&&custom": "x"}}));
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/custom"),
        Some(Value::String("x".to_string()))
    );
    assert_eq!(request_pointer(&requests[0], "/data/_legacy/analytics/c/custom"), None);
    assert_eq!(request_pointer(&requests[0], "/data/_legacy/analytics/c/&&custom"), None);
}

#[test]
fn event_without_data_dispatches_nothing() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let mut event = track_event("event-1", json!({}));
    event.data = None;
    bridge.handle_event(&event, &states);

    assert!(dispatcher.requests.borrow().is_empty());
}

// ============================================================================
// SECTION: Privacy
// ============================================================================

#[test]
fn opted_out_privacy_drops_request() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedout");

    let event = track_event("event-1", json!({"action": "action"}));
    bridge.handle_event(&event, &states);

    assert!(dispatcher.requests.borrow().is_empty());
}

#[test]
fn unknown_privacy_annotates_hit() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optunknown");

    let event = track_event("event-1", json!({"action": "action"}));
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/c/a.privacy.mode"),
        Some(Value::String("unknown".to_string()))
    );
}

#[test]
fn readiness_requires_configuration_state() {
    let (bridge, _dispatcher) = fresh_bridge();
    let states = MapSharedState::default();

    let event = track_event("event-1", json!({"action": "action"}));
    assert!(!bridge.ready_for_event(&event, &states));
}

// ============================================================================
// SECTION: Debug Sessions
// ============================================================================

#[test]
fn active_debug_session_echoes_event_identifier() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optunknown");
    states.set_assurance_session("assuranceactive");

    let event = track_event("event-1", json!({"action": "action"}));
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/c/a.DebugEventIdentifier"),
        Some(Value::String("event-1".to_string()))
    );
}

// ============================================================================
// SECTION: Rule Consequences
// ============================================================================

#[test]
fn rules_response_without_data_dispatches_nothing() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    bridge.handle_event(&rules_event("event-1", None), &states);

    assert!(dispatcher.requests.borrow().is_empty());
}

#[test]
fn rules_response_with_wrong_consequence_type_dispatches_nothing() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = rules_event(
        "event-1",
        Some(json!({
            "triggeredconsequence": {
                "id": "id",
                "type": "type",
                "detail": {"action": "action"}
            }
        })),
    );
    bridge.handle_event(&event, &states);

    assert!(dispatcher.requests.borrow().is_empty());
}

#[test]
fn rules_response_with_missing_consequence_id_dispatches_nothing() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = rules_event(
        "event-1",
        Some(json!({
            "triggeredconsequence": {
                "type": "an",
                "detail": {"action": "action"}
            }
        })),
    );
    bridge.handle_event(&event, &states);

    assert!(dispatcher.requests.borrow().is_empty());
}

#[test]
fn rules_response_with_missing_detail_dispatches_nothing() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = rules_event(
        "event-1",
        Some(json!({
            "triggeredconsequence": {
                "id": "id",
                "type": "an"
            }
        })),
    );
    bridge.handle_event(&event, &states);

    assert!(dispatcher.requests.borrow().is_empty());
}

#[test]
fn track_consequence_dispatches_context_only_hit() {
    let (mut bridge, dispatcher) = fresh_bridge();
    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    let event = rules_event(
        "event-1",
        Some(json!({
            "triggeredconsequence": {
                "id": "id",
                "type": "an",
                "detail": {"contextdata": {"key1": "value1", "key2": "value2"}}
            }
        })),
    );
    bridge.handle_event(&event, &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(requests.len(), 1);

    let expected = json!({
        "xdm": {"eventType": "legacy.analytics"},
        "data": {
            "_legacy": {
                "analytics": {
                    "ndh": 1,
                    "pageName": "TestApp 2.1 (42)",
                    "ce": "UTF-8",
                    "t": "00/00/0000 00:00:00 0 0",
                    "ts": "100",
                    "cp": "foreground",
                    "c": {"key1": "value1", "key2": "value2"}
                }
            }
        }
    });
    assert_eq!(Value::Object(requests[0].data.clone()), expected);
}

// ============================================================================
// SECTION: Identity Lifecycle
// ============================================================================

#[test]
fn construction_migrates_legacy_identity_before_tracking() {
    let mut legacy = MemoryKeyValueStore::new();
    legacy.set_string(GenerationV5::AID, "a2").expect("seed legacy store");
    legacy.set_string(GenerationV4::VID, "v1").expect("seed legacy store");
    let (mut bridge, dispatcher) = bridge_over(MemoryKeyValueStore::new(), &mut legacy);

    assert_eq!(bridge.identity().analytics_id.as_deref(), Some("a2"));
    assert_eq!(bridge.identity().visitor_id.as_deref(), Some("v1"));
    assert!(bridge.identity().migration_completed);
    assert!(legacy.is_empty());

    let mut states = MapSharedState::default();
    states.set_privacy("optedin");
    bridge.handle_event(&track_event("event-1", json!({"state": "S"})), &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/aid"),
        Some(Value::String("a2".to_string()))
    );
    assert_eq!(
        request_pointer(&requests[0], "/data/_legacy/analytics/vid"),
        Some(Value::String("v1".to_string()))
    );
}

#[test]
fn opt_out_transition_clears_identity_and_subsequent_hits_carry_none() {
    let mut datastore = MemoryKeyValueStore::new();
    datastore.set_string(store_keys::AID, "aid-1").expect("seed datastore");
    datastore.set_string(store_keys::VID, "vid-1").expect("seed datastore");
    datastore.set_bool(store_keys::DATA_MIGRATED, true).expect("seed datastore");
    let (mut bridge, dispatcher) = bridge_over(datastore, &mut MemoryKeyValueStore::new());

    let mut states = MapSharedState::default();
    states.set_privacy("optedin");

    bridge.handle_event(
        &configuration_event("event-1", json!({"global.privacy": "optedout"})),
        &states,
    );

    assert_eq!(bridge.identity().analytics_id, None);
    assert_eq!(bridge.identity().visitor_id, None);
    assert_eq!(bridge.identity().ignore_analytics_id, None);

    bridge.handle_event(&track_event("event-2", json!({"state": "S"})), &states);

    let requests = dispatcher.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(request_pointer(&requests[0], "/data/_legacy/analytics/aid"), None);
    assert_eq!(request_pointer(&requests[0], "/data/_legacy/analytics/vid"), None);
}
