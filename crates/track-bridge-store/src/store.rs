// crates/track-bridge-store/src/store.rs
// ============================================================================
// Module: Persistent Identity Store
// Description: Typed accessor over the abstract key-value store.
// Purpose: Own the current-generation layout of persisted client identity.
// Dependencies: track-bridge-core, tracing
// ============================================================================

//! ## Overview
//! The identity store wraps a [`KeyValueStore`] backend with typed accessors
//! for the current-generation identity fields. Accessors fail soft: a
//! storage error is logged and treated like an absent value, because
//! identity persistence is never allowed to break tracking. The store has
//! exactly two writers over its lifetime, the one-shot migrator and the
//! privacy opt-out clearing path, and both run on the single-threaded event
//! sequence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::warn;
use track_bridge_core::KeyValueStore;
use track_bridge_core::PersistedIdentity;

// ============================================================================
// SECTION: Current-Generation Keys
// ============================================================================

/// Current-generation storage keys owned by the identity store.
pub mod keys {
    /// Name of the datastore holding the identity fields.
    pub const DATASTORE_NAME: &str = "com.adobe.module.analytics";
    /// Analytics identifier key.
    pub const AID: &str = "aid";
    /// Visitor identifier key.
    pub const VID: &str = "vid";
    /// Ignore-analytics-identifier flag key.
    pub const IGNORE_AID: &str = "ignoreaid";
    /// Migration-completed marker key.
    pub const DATA_MIGRATED: &str = "data.migrated";
}

// ============================================================================
// SECTION: Identity Store
// ============================================================================

/// Typed identity accessor over a key-value backend.
///
/// # Invariants
/// - Only this type touches the current-generation keys.
/// - Reads and writes fail soft; errors are logged, never propagated.
#[derive(Debug)]
pub struct IdentityStore<S: KeyValueStore> {
    /// Backing key-value store.
    backend: S,
}

impl<S: KeyValueStore> IdentityStore<S> {
    /// Creates an identity store over the given backend.
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self {
            backend,
        }
    }

    /// Returns the persisted analytics identifier, if any.
    #[must_use]
    pub fn analytics_id(&self) -> Option<String> {
        self.read_string(keys::AID)
    }

    /// Persists the analytics identifier.
    pub fn set_analytics_id(&mut self, aid: &str) {
        self.write_string(keys::AID, aid);
    }

    /// Returns the persisted visitor identifier, if any.
    #[must_use]
    pub fn visitor_id(&self) -> Option<String> {
        self.read_string(keys::VID)
    }

    /// Persists the visitor identifier.
    pub fn set_visitor_id(&mut self, vid: &str) {
        self.write_string(keys::VID, vid);
    }

    /// Returns the persisted ignore-analytics-identifier flag, if any.
    #[must_use]
    pub fn ignore_analytics_id(&self) -> Option<bool> {
        self.read_bool(keys::IGNORE_AID)
    }

    /// Persists the ignore-analytics-identifier flag.
    pub fn set_ignore_analytics_id(&mut self, ignore: bool) {
        self.write_bool(keys::IGNORE_AID, ignore);
    }

    /// Returns true once the one-shot storage migration has run.
    #[must_use]
    pub fn migration_completed(&self) -> bool {
        self.read_bool(keys::DATA_MIGRATED).unwrap_or(false)
    }

    /// Marks the one-shot storage migration as completed.
    pub fn set_migration_completed(&mut self) {
        self.write_bool(keys::DATA_MIGRATED, true);
    }

    /// Clears the identity fields on a privacy opt-out transition.
    ///
    /// The migration marker is kept; opting out must not re-arm migration.
    pub fn clear_identity(&mut self) {
        for key in [keys::AID, keys::VID, keys::IGNORE_AID] {
            if let Err(err) = self.backend.remove(key) {
                warn!(key, %err, "failed to clear identity field");
            }
        }
    }

    /// Returns an immutable snapshot of the persisted identity.
    #[must_use]
    pub fn snapshot(&self) -> PersistedIdentity {
        PersistedIdentity {
            analytics_id: self.analytics_id(),
            visitor_id: self.visitor_id(),
            ignore_analytics_id: self.ignore_analytics_id(),
            migration_completed: self.migration_completed(),
        }
    }

    /// Reads a string key, logging and absorbing storage errors.
    fn read_string(&self, key: &str) -> Option<String> {
        match self.backend.get_string(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "failed to read identity field");
                None
            }
        }
    }

    /// Writes a string key, logging and absorbing storage errors.
    fn write_string(&mut self, key: &str, value: &str) {
        if let Err(err) = self.backend.set_string(key, value) {
            warn!(key, %err, "failed to write identity field");
        }
    }

    /// Reads a boolean key, logging and absorbing storage errors.
    fn read_bool(&self, key: &str) -> Option<bool> {
        match self.backend.get_bool(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "failed to read identity field");
                None
            }
        }
    }

    /// Writes a boolean key, logging and absorbing storage errors.
    fn write_bool(&mut self, key: &str, value: bool) {
        if let Err(err) = self.backend.set_bool(key, value) {
            warn!(key, %err, "failed to write identity field");
        }
    }
}
