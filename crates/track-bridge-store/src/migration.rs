// crates/track-bridge-store/src/migration.rs
// ============================================================================
// Module: Identity Migration
// Description: One-shot consolidation of identity from legacy storage generations.
// Purpose: Fill the current identity store from older schema generations and
//          reclaim their keys, exactly once per install.
// Dependencies: track-bridge-core, tracing
// ============================================================================

//! ## Overview
//! Older versions of the client persisted the analytics identifier, visitor
//! identifier, and ignore flag under generation-specific key names. On cold
//! start, before any track event is handled, the migrator walks the
//! generations most recent first and copies the first value it finds for
//! each field into the current store; lower-priority generations only fill
//! fields the higher-priority ones left empty, never overwrite them. All
//! generation keys are then deleted to prevent stale re-reads, and the
//! completion marker is set even when cleanup partially fails so the
//! migration can never run twice.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;
use tracing::warn;
use track_bridge_core::KeyValueStore;

use crate::store::IdentityStore;

// ============================================================================
// SECTION: Legacy Generation Interface
// ============================================================================

/// Uniform view of one legacy storage generation.
///
/// # Invariants
/// - Reads fail soft: a storage error behaves like an absent value.
/// - `delete_all` removes every key the generation owns, including
///   transient bookkeeping keys that are never migrated.
pub trait LegacyGeneration {
    /// Stable label for logging.
    fn label(&self) -> &'static str;

    /// Reads the generation's analytics identifier, when present.
    fn read_analytics_id(&self, store: &dyn KeyValueStore) -> Option<String>;

    /// Reads the generation's visitor identifier, when present.
    fn read_visitor_id(&self, store: &dyn KeyValueStore) -> Option<String>;

    /// Reads the generation's ignore-analytics-identifier flag, when present.
    fn read_ignore_flag(&self, store: &dyn KeyValueStore) -> Option<bool>;

    /// Deletes every key owned by the generation.
    fn delete_all(&self, store: &mut dyn KeyValueStore);
}

/// Reads a string key from a legacy store, absorbing errors.
fn read_string(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get_string(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            warn!(key, %err, "failed to read legacy identity key");
            None
        }
    }
}

/// Reads a boolean key from a legacy store, absorbing errors.
fn read_bool(store: &dyn KeyValueStore, key: &str) -> Option<bool> {
    match store.get_bool(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, %err, "failed to read legacy identity key");
            None
        }
    }
}

/// Removes a set of legacy keys, absorbing errors.
fn remove_all(store: &mut dyn KeyValueStore, keys: &[&str]) {
    for key in keys {
        if let Err(err) = store.remove(key) {
            warn!(key, %err, "failed to delete legacy identity key");
        }
    }
}

// ============================================================================
// SECTION: Fifth-Generation Schema
// ============================================================================

/// Fifth-generation storage schema (namespaced defaults keys).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationV5;

impl GenerationV5 {
    /// Analytics identifier key.
    pub const AID: &'static str = "Adobe.AnalyticsDataStorage.ADOBEMOBILE_STOREDDEFAULTS_AID";
    /// Ignore-analytics-identifier flag key.
    pub const IGNORE_AID: &'static str =
        "Adobe.AnalyticsDataStorage.ADOBEMOBILE_STOREDDEFAULTS_IGNOREAID";
    /// Visitor identifier key.
    pub const VID: &'static str =
        "Adobe.AnalyticsDataStorage.ADOBEMOBILE_STOREDDEFAULTS_VISITOR_IDENTIFIER";
    /// Visitor identifier fallback key in the visitor-id service datastore.
    /// Earlier upgrades sometimes landed the visitor identifier there.
    pub const IDENTITY_VID: &'static str =
        "Adobe.visitorIDServiceDataStore.ADOBEMOBILE_VISITOR_ID";
    /// Transient most-recent-hit timestamp key, deleted without migration.
    pub const MOST_RECENT_HIT_TIMESTAMP: &'static str =
        "Adobe.AnalyticsDataStorage.mostRecentHitTimestampSeconds";
}

impl LegacyGeneration for GenerationV5 {
    fn label(&self) -> &'static str {
        "v5"
    }

    fn read_analytics_id(&self, store: &dyn KeyValueStore) -> Option<String> {
        read_string(store, Self::AID)
    }

    fn read_visitor_id(&self, store: &dyn KeyValueStore) -> Option<String> {
        read_string(store, Self::VID).or_else(|| read_string(store, Self::IDENTITY_VID))
    }

    fn read_ignore_flag(&self, store: &dyn KeyValueStore) -> Option<bool> {
        read_bool(store, Self::IGNORE_AID)
    }

    fn delete_all(&self, store: &mut dyn KeyValueStore) {
        // The visitor-id service key is owned by another extension's
        // datastore and is read-only from here.
        remove_all(
            store,
            &[Self::AID, Self::IGNORE_AID, Self::VID, Self::MOST_RECENT_HIT_TIMESTAMP],
        );
    }
}

// ============================================================================
// SECTION: Fourth-Generation Schema
// ============================================================================

/// Fourth-generation storage schema (flat defaults keys).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationV4;

impl GenerationV4 {
    /// Analytics identifier key.
    pub const AID: &'static str = "ADOBEMOBILE_STOREDDEFAULTS_AID";
    /// Ignore-analytics-identifier flag key.
    pub const IGNORE_AID: &'static str = "ADOBEMOBILE_STOREDDEFAULTS_IGNOREAID";
    /// Visitor identifier key.
    pub const VID: &'static str = "AOMS_AppMeasurement_StoredDefaults_VisitorID";
    /// Transient AID-synced marker key, deleted without migration.
    pub const AID_SYNCED: &'static str = "ADOBEMOBILE_STOREDDEFAULTS_AIDSYNCED";
    /// Transient last-timestamp key, deleted without migration.
    pub const LAST_TIMESTAMP: &'static str = "ADBMobileLastTimestamp";
    /// Transient in-flight hit identifier key, deleted without migration.
    pub const CURRENT_HIT_ID: &'static str = "ANALYTICS_WORKER_CURRENT_ID";
    /// Transient in-flight hit timestamp key, deleted without migration.
    pub const CURRENT_HIT_STAMP: &'static str = "ANALYTICS_WORKER_CURRENT_STAMP";
}

impl LegacyGeneration for GenerationV4 {
    fn label(&self) -> &'static str {
        "v4"
    }

    fn read_analytics_id(&self, store: &dyn KeyValueStore) -> Option<String> {
        read_string(store, Self::AID)
    }

    fn read_visitor_id(&self, store: &dyn KeyValueStore) -> Option<String> {
        read_string(store, Self::VID)
    }

    fn read_ignore_flag(&self, store: &dyn KeyValueStore) -> Option<bool> {
        read_bool(store, Self::IGNORE_AID)
    }

    fn delete_all(&self, store: &mut dyn KeyValueStore) {
        remove_all(
            store,
            &[
                Self::AID,
                Self::IGNORE_AID,
                Self::VID,
                Self::AID_SYNCED,
                Self::LAST_TIMESTAMP,
                Self::CURRENT_HIT_ID,
                Self::CURRENT_HIT_STAMP,
            ],
        );
    }
}

// ============================================================================
// SECTION: Migration Outcome
// ============================================================================

/// Summary of one migration run.
///
/// # Invariants
/// - `already_completed` implies no field flags are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// True when the migration had already run and nothing was touched.
    pub already_completed: bool,
    /// True when an analytics identifier was copied forward.
    pub analytics_id_migrated: bool,
    /// True when a visitor identifier was copied forward.
    pub visitor_id_migrated: bool,
    /// True when an ignore flag was copied forward.
    pub ignore_flag_migrated: bool,
}

// ============================================================================
// SECTION: Identity Migrator
// ============================================================================

/// One-shot migrator over an ordered list of legacy generations.
///
/// # Invariants
/// - Generations are consulted in construction order, most recent first.
/// - A completed migration is never re-run, even after partial cleanup
///   failures.
pub struct IdentityMigrator {
    /// Legacy generations in priority order.
    generations: Vec<Box<dyn LegacyGeneration>>,
}

impl IdentityMigrator {
    /// Creates a migrator with a custom generation list.
    #[must_use]
    pub fn with_generations(generations: Vec<Box<dyn LegacyGeneration>>) -> Self {
        Self {
            generations,
        }
    }

    /// Runs the migration against the legacy store and the identity store.
    ///
    /// Must be called during extension startup, before the event listener
    /// is armed, so no track request can observe a partially migrated
    /// identity.
    pub fn migrate<S: KeyValueStore>(
        &self,
        legacy: &mut dyn KeyValueStore,
        store: &mut IdentityStore<S>,
    ) -> MigrationOutcome {
        if store.migration_completed() {
            return MigrationOutcome {
                already_completed: true,
                ..MigrationOutcome::default()
            };
        }

        let mut analytics_id = None;
        let mut visitor_id = None;
        let mut ignore_flag = None;

        for generation in &self.generations {
            if analytics_id.is_none() {
                analytics_id = generation.read_analytics_id(legacy);
            }
            if visitor_id.is_none() {
                visitor_id = generation.read_visitor_id(legacy);
            }
            if ignore_flag.is_none() {
                ignore_flag = generation.read_ignore_flag(legacy);
            }
        }

        let outcome = MigrationOutcome {
            already_completed: false,
            analytics_id_migrated: analytics_id.is_some(),
            visitor_id_migrated: visitor_id.is_some(),
            ignore_flag_migrated: ignore_flag.is_some(),
        };

        if let Some(aid) = analytics_id {
            store.set_analytics_id(&aid);
        }
        if let Some(vid) = visitor_id {
            store.set_visitor_id(&vid);
        }
        if let Some(ignore) = ignore_flag {
            store.set_ignore_analytics_id(ignore);
        }

        for generation in &self.generations {
            generation.delete_all(legacy);
            debug!(generation = generation.label(), "deleted legacy identity keys");
        }

        store.set_migration_completed();
        outcome
    }
}

impl Default for IdentityMigrator {
    fn default() -> Self {
        Self::with_generations(vec![Box::new(GenerationV5), Box::new(GenerationV4)])
    }
}
