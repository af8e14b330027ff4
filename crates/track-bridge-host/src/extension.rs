// crates/track-bridge-host/src/extension.rs
// ============================================================================
// Module: Analytics Bridge Extension
// Description: Listener routing and orchestration over the pipeline.
// Purpose: Wire migration, normalization, processing, and dispatch together
//          on the single-threaded event sequence.
// Dependencies: track-bridge-core, track-bridge-store, time, tracing
// ============================================================================

//! ## Overview
//! The extension is the composition root: construction runs the one-shot
//! identity migration before any listener can fire, and `handle_event`
//! routes inbound events to the track, rules-consequence, or configuration
//! handler. Each accepted track request is processed to completion and
//! dispatched before the next event is accepted; the extension retains no
//! per-request state beyond what the identity store owns.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use time::UtcOffset;
use tracing::debug;
use tracing::trace;
use tracing::warn;
use track_bridge_core::AppState;
use track_bridge_core::AppStateProbe;
use track_bridge_core::ApplicationContext;
use track_bridge_core::GLOBAL_CONFIG_PRIVACY;
use track_bridge_core::KeyValueStore;
use track_bridge_core::PersistedIdentity;
use track_bridge_core::PrivacyStatus;
use track_bridge_core::TrackEventProcessor;
use track_bridge_core::TrackRequest;
use track_bridge_store::IdentityMigrator;
use track_bridge_store::IdentityStore;

use crate::app_state::APP_STATE_QUERY_TIMEOUT;
use crate::dispatch::EdgeDispatcher;
use crate::dispatch::edge_request;
use crate::event::Event;
use crate::event::EventSource;
use crate::event::EventType;
use crate::normalize::track_request_from_consequence;
use crate::normalize::track_request_from_event;
use crate::shared_state::SharedStateProvider;
use crate::shared_state::assurance_snapshot;
use crate::shared_state::config_snapshot;
use crate::shared_state::is_configuration_set;

// ============================================================================
// SECTION: Application Info
// ============================================================================

/// Static host application facts supplied at construction.
///
/// # Invariants
/// - `utc_offset` reflects the device timezone at startup; hosts that track
///   timezone changes construct a fresh bridge context per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    /// Application display name.
    pub name: String,
    /// Application version number.
    pub version: String,
    /// Application build number.
    pub build: String,
    /// Current UTC offset of the host device.
    pub utc_offset: UtcOffset,
}

impl ApplicationInfo {
    /// Combines the static facts with a resolved lifecycle state.
    fn context(&self, state: AppState) -> ApplicationContext {
        ApplicationContext {
            name: self.name.clone(),
            version: self.version.clone(),
            build: self.build.clone(),
            utc_offset: self.utc_offset,
            state,
        }
    }
}

// ============================================================================
// SECTION: Analytics Bridge
// ============================================================================

/// Composition root wiring the pipeline to the host bus.
///
/// # Invariants
/// - Identity migration completes during construction, before any event is
///   handled.
/// - The identity store is written only by migration and the opt-out
///   clearing path, both on the single-threaded event sequence.
pub struct AnalyticsBridge<S, P, D>
where
    S: KeyValueStore,
    P: AppStateProbe,
    D: EdgeDispatcher,
{
    /// Persisted identity store.
    store: IdentityStore<S>,
    /// Bounded application-state probe.
    probe: P,
    /// Transport collaborator for edge requests.
    dispatcher: D,
    /// Static host application facts.
    app: ApplicationInfo,
    /// Stateless track processor.
    processor: TrackEventProcessor,
    /// Bound for one application-state query.
    query_timeout: Duration,
}

impl<S, P, D> AnalyticsBridge<S, P, D>
where
    S: KeyValueStore,
    P: AppStateProbe,
    D: EdgeDispatcher,
{
    /// Creates the bridge and runs the one-shot identity migration.
    ///
    /// `legacy_defaults` is the host-wide store older client generations
    /// wrote into; `datastore` is the extension's own backing store.
    #[must_use]
    pub fn new(
        datastore: S,
        legacy_defaults: &mut dyn KeyValueStore,
        probe: P,
        dispatcher: D,
        app: ApplicationInfo,
    ) -> Self {
        let mut store = IdentityStore::new(datastore);
        IdentityMigrator::default().migrate(legacy_defaults, &mut store);
        Self {
            store,
            probe,
            dispatcher,
            app,
            processor: TrackEventProcessor,
            query_timeout: APP_STATE_QUERY_TIMEOUT,
        }
    }

    /// Overrides the application-state query bound.
    #[must_use]
    pub const fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Returns a snapshot of the persisted identity.
    #[must_use]
    pub fn identity(&self) -> PersistedIdentity {
        self.store.snapshot()
    }

    /// Returns true once the event can be processed.
    ///
    /// Track events are held until the configuration shared state is set,
    /// so privacy is never evaluated against a missing snapshot.
    #[must_use]
    pub fn ready_for_event(&self, event: &Event, states: &dyn SharedStateProvider) -> bool {
        is_configuration_set(states, event)
    }

    /// Routes one inbound event to its listener.
    pub fn handle_event(&mut self, event: &Event, states: &dyn SharedStateProvider) {
        match (event.event_type, event.source) {
            (EventType::GenericTrack, EventSource::RequestContent) => {
                self.handle_track_request(event, states);
            }
            (EventType::RulesEngine, EventSource::ResponseContent) => {
                self.handle_rules_response(event, states);
            }
            (EventType::Configuration, EventSource::ResponseContent) => {
                self.handle_configuration_response(event);
            }
            _ => {}
        }
    }

    /// Handles a generic track request event.
    fn handle_track_request(&mut self, event: &Event, states: &dyn SharedStateProvider) {
        trace!(event_id = %event.id, "processing track request event");
        if let Some(request) = track_request_from_event(event) {
            self.track(&request, event, states);
        }
    }

    /// Handles a rules-engine response event.
    fn handle_rules_response(&mut self, event: &Event, states: &dyn SharedStateProvider) {
        trace!(event_id = %event.id, "processing rules engine response event");
        if let Some(request) = track_request_from_consequence(event) {
            self.track(&request, event, states);
        }
    }

    /// Handles a configuration response event.
    ///
    /// A reported transition to opted-out clears the persisted identity;
    /// this is the only identity deletion outside migration overwrite.
    fn handle_configuration_response(&mut self, event: &Event) {
        let Some(data) = event.data() else {
            trace!(event_id = %event.id, "event contained no data, ignoring");
            return;
        };

        if let Some(raw) = data.get(GLOBAL_CONFIG_PRIVACY).and_then(serde_json::Value::as_str)
            && PrivacyStatus::from_raw(raw) == PrivacyStatus::OptedOut
        {
            debug!(event_id = %event.id, "privacy opted out, clearing persisted identity");
            self.store.clear_identity();
        }
    }

    /// Runs one normalized request through the pipeline and dispatches the
    /// resulting hit, if any.
    fn track(&mut self, request: &TrackRequest, event: &Event, states: &dyn SharedStateProvider) {
        let config = config_snapshot(states, event);
        let assurance = assurance_snapshot(states, event);
        let state = self.probe.current_state(self.query_timeout);
        let app = self.app.context(state);
        let identity = self.store.snapshot();

        let Some(hit) = self.processor.process(request, &config, &identity, &assurance, &app)
        else {
            return;
        };

        if let Err(err) = self.dispatcher.dispatch(edge_request(&hit)) {
            warn!(event_id = %event.id, %err, "failed to dispatch edge request");
        }
    }
}
