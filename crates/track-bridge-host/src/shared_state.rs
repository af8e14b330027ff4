// crates/track-bridge-host/src/shared_state.rs
// ============================================================================
// Module: Shared State Provider
// Description: Pull-based access to other extensions' propagated state.
// Purpose: Resolve configuration and assurance snapshots per event.
// Dependencies: track-bridge-core, serde_json
// ============================================================================

//! ## Overview
//! The host bus propagates extension state as versioned key/value snapshots
//! resolved relative to an event. The bridge pulls two of them: the
//! configuration state (privacy string) and the assurance state (debug
//! session identifier). Absent state resolves to an empty snapshot, which
//! downstream code treats as unknown privacy and no active session.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;
use track_bridge_core::AssuranceSnapshot;
use track_bridge_core::ConfigSnapshot;

use crate::event::Event;

// ============================================================================
// SECTION: Shared State Names
// ============================================================================

/// Shared-state name of the configuration extension.
pub const CONFIGURATION_SHARED_STATE: &str = "com.adobe.module.configuration";
/// Shared-state name of the assurance extension.
pub const ASSURANCE_SHARED_STATE: &str = "com.adobe.assurance";

// ============================================================================
// SECTION: Provider Interface
// ============================================================================

/// Pull-based shared-state resolver.
///
/// Implementations resolve the snapshot of another extension's state as of
/// the given event. `None` means the state has never been set.
pub trait SharedStateProvider {
    /// Resolves an extension's shared state relative to an event.
    fn shared_state(&self, extension_name: &str, event: &Event)
    -> Option<BTreeMap<String, Value>>;
}

// ============================================================================
// SECTION: Snapshot Resolution
// ============================================================================

/// Resolves the configuration snapshot for an event.
///
/// Absent shared state yields an empty snapshot, which resolves to unknown
/// privacy downstream.
#[must_use]
pub fn config_snapshot(provider: &dyn SharedStateProvider, event: &Event) -> ConfigSnapshot {
    provider
        .shared_state(CONFIGURATION_SHARED_STATE, event)
        .map_or_else(ConfigSnapshot::default, ConfigSnapshot::new)
}

/// Resolves the assurance snapshot for an event.
///
/// Absent shared state yields an empty snapshot, meaning no debug session.
#[must_use]
pub fn assurance_snapshot(provider: &dyn SharedStateProvider, event: &Event) -> AssuranceSnapshot {
    provider
        .shared_state(ASSURANCE_SHARED_STATE, event)
        .map_or_else(AssuranceSnapshot::default, AssuranceSnapshot::new)
}

/// Returns true when the configuration shared state has been set.
///
/// The bridge is ready for an event only once configuration is available,
/// so privacy is never evaluated against a missing snapshot.
#[must_use]
pub fn is_configuration_set(provider: &dyn SharedStateProvider, event: &Event) -> bool {
    provider.shared_state(CONFIGURATION_SHARED_STATE, event).is_some()
}
