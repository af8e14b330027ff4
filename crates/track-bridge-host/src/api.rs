// crates/track-bridge-host/src/api.rs
// ============================================================================
// Module: Public Synchronous API
// Description: Permanently-unsupported queue and identifier entry points.
// Purpose: Preserve the public surface of the queue-based predecessor while
//          the edge transport owns delivery.
// Dependencies: thiserror, tracing
// ============================================================================

//! ## Overview
//! The queue-based predecessor exposed synchronous entry points for queue
//! management and identifier access. The bridge holds no queue and does not
//! issue identifiers, so every entry point is a fixed placeholder: queue
//! operations log and return nothing, lookups answer the fixed unsupported
//! error. Tests pin this behavior; none of these functions will grow logic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use tracing::trace;

// ============================================================================
// SECTION: API Errors
// ============================================================================

/// Errors returned by the public API surface.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The operation is not supported by the edge-backed bridge.
    #[error("unexpected error: operation is not supported")]
    Unsupported,
}

// ============================================================================
// SECTION: Queue Entry Points
// ============================================================================

/// Clears all hits from the tracking queue.
///
/// The bridge holds no queue; the call logs and returns.
pub fn clear_queue() {
    trace!("clear_queue is not currently supported");
}

/// Retrieves the number of hits in the tracking queue.
///
/// # Errors
///
/// Always returns [`ApiError::Unsupported`]; the bridge holds no queue.
pub fn queue_size() -> Result<u64, ApiError> {
    trace!("queue_size is not currently supported");
    Err(ApiError::Unsupported)
}

/// Forces delivery of all queued hits.
///
/// The bridge holds no queue; the call logs and returns.
pub fn send_queued_hits() {
    trace!("send_queued_hits is not currently supported");
}

// ============================================================================
// SECTION: Identifier Entry Points
// ============================================================================

/// Retrieves the analytics tracking identifier.
///
/// # Errors
///
/// Always returns [`ApiError::Unsupported`]; the bridge does not issue
/// tracking identifiers.
pub fn tracking_identifier() -> Result<Option<String>, ApiError> {
    trace!("tracking_identifier is not currently supported");
    Err(ApiError::Unsupported)
}

/// Retrieves the visitor identifier.
///
/// # Errors
///
/// Always returns [`ApiError::Unsupported`]; the bridge does not manage the
/// visitor identifier.
pub fn visitor_identifier() -> Result<Option<String>, ApiError> {
    trace!("visitor_identifier is not currently supported");
    Err(ApiError::Unsupported)
}

/// Sets the visitor identifier.
///
/// The bridge does not manage the visitor identifier; the call logs and
/// returns.
pub fn set_visitor_identifier(_visitor_identifier: &str) {
    trace!("set_visitor_identifier is not currently supported");
}
