// crates/track-bridge-host/src/app_state.rs
// ============================================================================
// Module: Application State Bridge
// Description: Bounded-wait cross-thread application-state lookup.
// Purpose: Answer foreground/background queries from a designated owning
//          thread without ever blocking a track call indefinitely.
// Dependencies: track-bridge-core, std::sync::mpsc, tracing
// ============================================================================

//! ## Overview
//! Host platforms only expose the application lifecycle state on a
//! designated owning thread. The bridge hands each query to that thread
//! through a bounded channel and waits for the reply with a timeout; when
//! the owning thread does not answer in time, the query degrades to
//! [`AppState::Unknown`] and the caller omits the perspective field. The
//! timeout outcome is an ordinary branch, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::mpsc;
use std::sync::mpsc::SyncSender;
use std::thread;
use std::time::Duration;

use tracing::debug;
use track_bridge_core::AppState;
use track_bridge_core::AppStateProbe;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default bound for one application-state query.
pub const APP_STATE_QUERY_TIMEOUT: Duration = Duration::from_millis(1_000);
/// Capacity of the query channel to the owning thread.
const QUERY_CHANNEL_CAPACITY: usize = 16;

// ============================================================================
// SECTION: Bridge
// ============================================================================

/// Bounded-wait bridge to the application-state owning thread.
///
/// # Invariants
/// - Queries never block longer than the supplied timeout.
/// - The owning thread exits when the last bridge handle is dropped.
#[derive(Debug, Clone)]
pub struct AppStateBridge {
    /// Query channel to the owning thread; each query carries its reply
    /// channel.
    queries: SyncSender<SyncSender<AppState>>,
}

impl AppStateBridge {
    /// Spawns the owning thread around a host state lookup.
    ///
    /// The lookup runs only on the spawned thread, matching platforms that
    /// restrict lifecycle reads to a designated thread.
    #[must_use]
    pub fn spawn<F>(lookup: F) -> Self
    where
        F: Fn() -> AppState + Send + 'static,
    {
        let (queries, receiver) = mpsc::sync_channel::<SyncSender<AppState>>(
            QUERY_CHANNEL_CAPACITY,
        );
        thread::spawn(move || {
            while let Ok(reply) = receiver.recv() {
                // A caller that already timed out has dropped its receiver;
                // the failed send is not an error.
                let _unused = reply.send(lookup());
            }
        });
        Self {
            queries,
        }
    }
}

impl AppStateProbe for AppStateBridge {
    fn current_state(&self, timeout: Duration) -> AppState {
        let (reply, response) = mpsc::sync_channel(1);
        if self.queries.try_send(reply).is_err() {
            debug!("application state query channel unavailable, treating state as unknown");
            return AppState::Unknown;
        }
        response.recv_timeout(timeout).unwrap_or_else(|_| {
            debug!("application state query timed out, treating state as unknown");
            AppState::Unknown
        })
    }
}

// ============================================================================
// SECTION: Fixed Probe
// ============================================================================

/// Probe answering every query with a fixed state, without a thread hop.
///
/// Useful for hosts that can read the state from any thread, and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStateProbe {
    /// State returned by every query.
    state: AppState,
}

impl FixedStateProbe {
    /// Creates a probe answering with the given state.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self {
            state,
        }
    }
}

impl AppStateProbe for FixedStateProbe {
    fn current_state(&self, _timeout: Duration) -> AppState {
        self.state
    }
}
