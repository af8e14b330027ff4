// crates/track-bridge-host/src/lib.rs
// ============================================================================
// Module: Track Bridge Host Library
// Description: Host-bus integration for the track bridge pipeline.
// Purpose: Listen for track, consequence, and configuration events and emit
//          edge requests carrying assembled legacy hits.
// Dependencies: track-bridge-core, track-bridge-store, serde, serde_json,
//               thiserror, time, tracing
// ============================================================================

//! ## Overview
//! Track Bridge Host connects the pure pipeline to a host event bus: it
//! models inbound events, resolves per-event shared-state snapshots,
//! normalizes the two track triggers into one request shape, bridges the
//! blocking application-state lookup, and wraps accepted hits into the
//! outbound edge envelope. The permanently-unsupported public API surface
//! also lives here.
//!
//! Invariants:
//! - Identity migration runs during construction, before any event is
//!   handled.
//! - Malformed inbound events are dropped with logs, never raised.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod app_state;
pub mod dispatch;
pub mod event;
pub mod extension;
pub mod normalize;
pub mod shared_state;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use api::ApiError;
pub use app_state::APP_STATE_QUERY_TIMEOUT;
pub use app_state::AppStateBridge;
pub use app_state::FixedStateProbe;
pub use dispatch::DispatchError;
pub use dispatch::EdgeDispatcher;
pub use dispatch::EdgeRequest;
pub use dispatch::edge_request;
pub use event::Event;
pub use event::EventSource;
pub use event::EventType;
pub use extension::AnalyticsBridge;
pub use extension::ApplicationInfo;
pub use normalize::track_request_from_consequence;
pub use normalize::track_request_from_event;
pub use shared_state::ASSURANCE_SHARED_STATE;
pub use shared_state::CONFIGURATION_SHARED_STATE;
pub use shared_state::SharedStateProvider;
pub use shared_state::assurance_snapshot;
pub use shared_state::config_snapshot;
pub use shared_state::is_configuration_set;
