// crates/track-bridge-core/src/core/fields.rs
// ============================================================================
// Module: Track Bridge Hit Field Builders
// Description: Pure builders for request variables and context data.
// Purpose: Map a track request and its snapshots into the two hit maps.
// Dependencies: crate::core::{app, identity, keys, privacy, request, snapshot, time}
// ============================================================================

//! ## Overview
//! Field building is split into two pure functions: one producing the
//! well-known request variables, one producing the free-form context data.
//! The maps are independent until assembly, where escape-prefixed context
//! keys may overwrite variables. Action and page-name precedence follows the
//! legacy protocol: an action always emits the action-name pair, and a
//! state name always wins the page-name field even when an action is
//! present.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::app::ApplicationContext;
use crate::core::identity::PersistedIdentity;
use crate::core::keys;
use crate::core::privacy::PrivacyStatus;
use crate::core::request::TrackRequest;
use crate::core::snapshot::AssuranceSnapshot;
use crate::core::time::gmt_offset_timestamp;

// ============================================================================
// SECTION: Request Variables
// ============================================================================

/// Builds the well-known request variables for a track request.
#[must_use]
pub fn build_request_vars(
    request: &TrackRequest,
    identity: &PersistedIdentity,
    app: &ApplicationContext,
) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    // Action-name pairs are emitted whenever an action is present,
    // regardless of state.
    if let Some(action) = request.action() {
        vars.insert(
            keys::IGNORE_PAGE_NAME.to_string(),
            keys::IGNORE_PAGE_NAME_VALUE.to_string(),
        );
        vars.insert(
            keys::ACTION_NAME.to_string(),
            format!("{}{action}", action_prefix(request.is_internal_action)),
        );
    }

    // The application identifier keeps action-only hits from being
    // discarded for a missing page name; a state name overrides it.
    vars.insert(keys::PAGE_NAME.to_string(), app.identifier());
    if let Some(state) = request.state() {
        vars.insert(keys::PAGE_NAME.to_string(), state.to_string());
    }

    if let Some(aid) = identity.analytics_id() {
        vars.insert(keys::ANALYTICS_ID.to_string(), aid.to_string());
    }
    if let Some(vid) = identity.visitor_id() {
        vars.insert(keys::VISITOR_ID.to_string(), vid.to_string());
    }

    vars.insert(keys::CHARSET.to_string(), keys::CHARSET_VALUE.to_string());
    vars.insert(
        keys::FORMATTED_TIMESTAMP.to_string(),
        gmt_offset_timestamp(app.utc_offset),
    );
    vars.insert(
        keys::STRING_TIMESTAMP.to_string(),
        request.source_timestamp.decimal_string(),
    );

    if let Some(marker) = app.state.marker() {
        vars.insert(keys::CUSTOMER_PERSPECTIVE.to_string(), marker.to_string());
    }

    vars
}

// ============================================================================
// SECTION: Context Data
// ============================================================================

/// Builds the context data map for a track request.
#[must_use]
pub fn build_context_data(
    request: &TrackRequest,
    privacy: PrivacyStatus,
    assurance: &AssuranceSnapshot,
) -> BTreeMap<String, String> {
    let mut context = request.context_data.clone();

    if let Some(action) = request.action() {
        context.insert(
            action_context_key(request.is_internal_action).to_string(),
            action.to_string(),
        );
    }

    if privacy == PrivacyStatus::Unknown {
        context.insert(
            keys::PRIVACY_MODE_KEY.to_string(),
            keys::PRIVACY_MODE_UNKNOWN.to_string(),
        );
    }

    if assurance.is_session_active() {
        context.insert(
            keys::EVENT_IDENTIFIER_KEY.to_string(),
            request.source_event_id.to_string(),
        );
    }

    context
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the action-name prefix for the internal flag.
const fn action_prefix(is_internal_action: bool) -> &'static str {
    if is_internal_action {
        keys::INTERNAL_ACTION_PREFIX
    } else {
        keys::ACTION_PREFIX
    }
}

/// Returns the injected context key for the internal flag.
const fn action_context_key(is_internal_action: bool) -> &'static str {
    if is_internal_action {
        keys::INTERNAL_ACTION_KEY
    } else {
        keys::ACTION_KEY
    }
}
