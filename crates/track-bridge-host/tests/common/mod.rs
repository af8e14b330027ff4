// crates/track-bridge-host/tests/common/mod.rs
// ============================================================================
// Module: Host Test Helpers
// Description: Shared fixtures for bridge integration tests.
// Purpose: Provide a capturing dispatcher, a map-backed shared-state
//          provider, and event builders.
// ============================================================================

//! ## Overview
//! Test doubles for the host collaborators: a dispatcher that records every
//! edge request, a shared-state provider backed by plain maps, and builders
//! for the inbound event shapes.

#![allow(
    dead_code,
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only helpers; not every test uses every fixture."
)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;
use time::UtcOffset;
use track_bridge_core::Timestamp;
use track_bridge_host::ApplicationInfo;
use track_bridge_host::DispatchError;
use track_bridge_host::EdgeDispatcher;
use track_bridge_host::EdgeRequest;
use track_bridge_host::Event;
use track_bridge_host::EventSource;
use track_bridge_host::EventType;
use track_bridge_host::SharedStateProvider;

// ============================================================================
// SECTION: Capturing Dispatcher
// ============================================================================

/// Dispatcher recording every delivered edge request.
#[derive(Debug, Default, Clone)]
pub struct CapturingDispatcher {
    /// Recorded requests, shared with the test body.
    pub requests: Rc<RefCell<Vec<EdgeRequest>>>,
}

impl EdgeDispatcher for CapturingDispatcher {
    fn dispatch(&mut self, request: EdgeRequest) -> Result<(), DispatchError> {
        self.requests.borrow_mut().push(request);
        Ok(())
    }
}

// ============================================================================
// SECTION: Shared State Provider
// ============================================================================

/// Shared-state provider backed by plain maps.
#[derive(Debug, Default)]
pub struct MapSharedState {
    /// Shared states keyed by extension name.
    states: BTreeMap<String, BTreeMap<String, Value>>,
}

impl MapSharedState {
    /// Sets an extension's shared state.
    pub fn set(&mut self, extension_name: &str, values: BTreeMap<String, Value>) {
        self.states.insert(extension_name.to_string(), values);
    }

    /// Sets the configuration shared state to the given privacy string.
    pub fn set_privacy(&mut self, raw: &str) {
        let mut values = BTreeMap::new();
        values.insert("global.privacy".to_string(), Value::String(raw.to_string()));
        self.set(track_bridge_host::CONFIGURATION_SHARED_STATE, values);
    }

    /// Sets the assurance shared state to the given session identifier.
    pub fn set_assurance_session(&mut self, session_id: &str) {
        let mut values = BTreeMap::new();
        values.insert("sessionid".to_string(), Value::String(session_id.to_string()));
        self.set(track_bridge_host::ASSURANCE_SHARED_STATE, values);
    }
}

impl SharedStateProvider for MapSharedState {
    fn shared_state(
        &self,
        extension_name: &str,
        _event: &Event,
    ) -> Option<BTreeMap<String, Value>> {
        self.states.get(extension_name).cloned()
    }
}

// ============================================================================
// SECTION: Builders
// ============================================================================

/// Application facts used across the bridge tests.
pub fn sample_app() -> ApplicationInfo {
    ApplicationInfo {
        name: "TestApp".to_string(),
        version: "2.1".to_string(),
        build: "42".to_string(),
        utc_offset: UtcOffset::UTC,
    }
}

/// Builds a generic track request event.
pub fn track_event(id: &str, data: Value) -> Event {
    Event::new(
        id,
        "Generic track event",
        EventType::GenericTrack,
        EventSource::RequestContent,
        Timestamp::from_unix_seconds(100),
        data.as_object().cloned(),
    )
}

/// Builds a rules-engine response event.
pub fn rules_event(id: &str, data: Option<Value>) -> Event {
    Event::new(
        id,
        "Rule event",
        EventType::RulesEngine,
        EventSource::ResponseContent,
        Timestamp::from_unix_seconds(100),
        data.and_then(|value| value.as_object().cloned()),
    )
}

/// Builds a configuration response event.
pub fn configuration_event(id: &str, data: Value) -> Event {
    Event::new(
        id,
        "Configuration event",
        EventType::Configuration,
        EventSource::ResponseContent,
        Timestamp::from_unix_seconds(100),
        data.as_object().cloned(),
    )
}

/// Reads a nested value out of a dispatched edge request.
pub fn request_pointer(request: &EdgeRequest, pointer: &str) -> Option<Value> {
    Value::Object(request.data.clone()).pointer(pointer).cloned()
}
