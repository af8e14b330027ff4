// crates/track-bridge-core/src/runtime/processor.rs
// ============================================================================
// Module: Track Bridge Event Processor
// Description: Privacy-gated pipeline from track request to legacy hit.
// Purpose: Sequence gate, field builders, and assembler for one request.
// Dependencies: crate::core, tracing
// ============================================================================

//! ## Overview
//! The processor is the top of the pipeline: resolve privacy, drop
//! opted-out or content-free requests, build the two field maps, assemble
//! the hit. It retains no state between calls; persisted identity arrives
//! as a snapshot owned by the caller and drops are logged, never raised.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::warn;

use crate::core::app::ApplicationContext;
use crate::core::fields::build_context_data;
use crate::core::fields::build_request_vars;
use crate::core::hit::LegacyHit;
use crate::core::hit::assemble;
use crate::core::identity::PersistedIdentity;
use crate::core::privacy::PrivacyGate;
use crate::core::request::TrackRequest;
use crate::core::snapshot::AssuranceSnapshot;
use crate::core::snapshot::ConfigSnapshot;

// ============================================================================
// SECTION: Track Event Processor
// ============================================================================

/// Stateless processor turning track requests into legacy hits.
///
/// # Invariants
/// - Opted-out requests never produce a hit.
/// - Requests without action, state, or context data never produce a hit.
/// - No state is retained between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackEventProcessor;

impl TrackEventProcessor {
    /// Processes one track request into a legacy hit, when permitted.
    ///
    /// Returns `None` when privacy is opted out or the request carries no
    /// content; both drops are logged and invisible to the caller.
    #[must_use]
    pub fn process(
        &self,
        request: &TrackRequest,
        config: &ConfigSnapshot,
        identity: &PersistedIdentity,
        assurance: &AssuranceSnapshot,
        app: &ApplicationContext,
    ) -> Option<LegacyHit> {
        let privacy = PrivacyGate::resolve(config);
        if !PrivacyGate::should_process(privacy) {
            warn!(event_id = %request.source_event_id, "dropping track request, privacy is opted out");
            return None;
        }

        if !request.has_content() {
            warn!(
                event_id = %request.source_event_id,
                "dropping track request, event data is missing state, action and context data"
            );
            return None;
        }

        let vars = build_request_vars(request, identity, app);
        let context_data = build_context_data(request, privacy, assurance);
        Some(assemble(vars, context_data))
    }
}
