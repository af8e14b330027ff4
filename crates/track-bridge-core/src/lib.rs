// crates/track-bridge-core/src/lib.rs
// ============================================================================
// Module: Track Bridge Core Library
// Description: Data model and transformation pipeline for legacy analytics hits.
// Purpose: Convert track requests into legacy hit payloads behind a privacy gate.
// Dependencies: serde, serde_json, thiserror, time, tracing
// ============================================================================

//! ## Overview
//! Track Bridge Core holds the pure pieces of the bridge: the track request
//! model, the privacy gate, the hit field builders, the legacy hit assembler,
//! and the processor that sequences them. Host integration (event listeners,
//! shared-state snapshots, persistence backends) lives in sibling crates and
//! reaches this crate only through the interfaces module.
//!
//! Invariants:
//! - Field building and assembly are pure; no I/O happens inside this crate.
//! - Opted-out requests never produce a hit.
//! - Hit payloads reproduce the legacy wire format byte for byte.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::app::AppState;
pub use crate::core::app::ApplicationContext;
pub use crate::core::fields::build_context_data;
pub use crate::core::fields::build_request_vars;
pub use crate::core::hit::LegacyHit;
pub use crate::core::hit::assemble;
pub use crate::core::identifiers::EventId;
pub use crate::core::identity::PersistedIdentity;
pub use crate::core::keys;
pub use crate::core::privacy::PrivacyGate;
pub use crate::core::privacy::PrivacyStatus;
pub use crate::core::request::TrackRequest;
pub use crate::core::snapshot::ASSURANCE_SESSION_ID;
pub use crate::core::snapshot::AssuranceSnapshot;
pub use crate::core::snapshot::ConfigSnapshot;
pub use crate::core::snapshot::GLOBAL_CONFIG_PRIVACY;
pub use crate::core::time::Timestamp;
pub use crate::core::time::gmt_offset_timestamp;
pub use crate::interfaces::AppStateProbe;
pub use crate::interfaces::KeyValueStore;
pub use crate::interfaces::StorageError;
pub use crate::runtime::processor::TrackEventProcessor;
