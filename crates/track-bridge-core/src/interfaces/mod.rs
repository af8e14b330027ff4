// crates/track-bridge-core/src/interfaces/mod.rs
// ============================================================================
// Module: Track Bridge Interfaces
// Description: Backend-agnostic interfaces for storage and host lookups.
// Purpose: Define the contract surfaces used by the pipeline and its hosts.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the bridge integrates with host platforms without
//! embedding platform-specific details. Storage is an abstract key-value
//! store; the application-state lookup is a bounded-wait query that must
//! degrade to `Unknown` instead of blocking a track call indefinitely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;

use crate::core::app::AppState;

// ============================================================================
// SECTION: Key-Value Storage
// ============================================================================

/// Key-value storage errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing store reported an access error.
    #[error("storage access error: {0}")]
    Access(String),
}

/// Abstract persistent key-value store.
///
/// Implementations wrap whatever the host platform provides (preference
/// files, defaults databases). All methods fail soft: callers treat an
/// error like an absent value and log it, because identity persistence is
/// never allowed to break tracking.
pub trait KeyValueStore {
    /// Reads a string value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a string value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Reads a boolean value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StorageError>;

    /// Writes a boolean value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StorageError>;

    /// Removes a value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// ============================================================================
// SECTION: Application State Probe
// ============================================================================

/// Bounded-wait lookup of the application lifecycle state.
///
/// The lookup may have to hop to a designated owning thread; implementations
/// block the caller for at most `timeout` and answer [`AppState::Unknown`]
/// when the owning thread does not reply in time. A blocked or deadlocked
/// track call is a correctness bug, not an acceptable behavior.
pub trait AppStateProbe {
    /// Resolves the current application state within the given bound.
    fn current_state(&self, timeout: Duration) -> AppState;
}
