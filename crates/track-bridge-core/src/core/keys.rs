// crates/track-bridge-core/src/core/keys.rs
// ============================================================================
// Module: Track Bridge Wire Keys
// Description: Legacy wire-format keys, prefixes, and sentinel values.
// Purpose: Centralize the constants the hit payload must reproduce exactly.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The legacy collection protocol is a flat key-value encoding with short,
//! fixed field names. Every constant here is part of the backward-compatible
//! wire or storage contract; none of them may change without breaking the
//! downstream collector.

// ============================================================================
// SECTION: Request Variable Keys
// ============================================================================

/// Page name request variable.
pub const PAGE_NAME: &str = "pageName";
/// Action name request variable.
pub const ACTION_NAME: &str = "pev2";
/// Ignore-page-name marker request variable.
pub const IGNORE_PAGE_NAME: &str = "pe";
/// Character set request variable.
pub const CHARSET: &str = "ce";
/// Formatted timestamp request variable (timezone offset only).
pub const FORMATTED_TIMESTAMP: &str = "t";
/// Numeric timestamp request variable (decimal unix seconds).
pub const STRING_TIMESTAMP: &str = "ts";
/// Customer perspective request variable (foreground/background).
pub const CUSTOMER_PERSPECTIVE: &str = "cp";
/// Analytics identifier request variable.
pub const ANALYTICS_ID: &str = "aid";
/// Visitor identifier request variable.
pub const VISITOR_ID: &str = "vid";
/// Nested context data field in the assembled hit.
pub const CONTEXT_DATA: &str = "c";
/// No-data-hit marker field in the assembled hit.
pub const NO_DATA_HIT: &str = "ndh";

// ============================================================================
// SECTION: Injected Context Data Keys
// ============================================================================

/// Context key echoing an external action name.
pub const ACTION_KEY: &str = "a.action";
/// Context key echoing an internal action name.
pub const INTERNAL_ACTION_KEY: &str = "a.internalaction";
/// Context key carrying the source event identifier during debug sessions.
pub const EVENT_IDENTIFIER_KEY: &str = "a.DebugEventIdentifier";
/// Context key annotating hits sent while privacy is unresolved.
pub const PRIVACY_MODE_KEY: &str = "a.privacy.mode";
/// Value of [`PRIVACY_MODE_KEY`] for unresolved privacy.
pub const PRIVACY_MODE_UNKNOWN: &str = "unknown";

// ============================================================================
// SECTION: Prefixes and Sentinels
// ============================================================================

/// Prefix applied to external action names in the action-name variable.
pub const ACTION_PREFIX: &str = "AMACTION:";
/// Prefix applied to internal action names in the action-name variable.
pub const INTERNAL_ACTION_PREFIX: &str = "ADBINTERNAL:";
/// Escape prefix promoting context-data keys to top-level hit fields.
pub const VAR_ESCAPE_PREFIX: &str = "&&";
/// Sentinel value for the ignore-page-name marker.
pub const IGNORE_PAGE_NAME_VALUE: &str = "lnk_o";
/// Character set emitted with every hit.
pub const CHARSET_VALUE: &str = "UTF-8";
/// Customer perspective marker for a foregrounded application.
pub const APP_STATE_FOREGROUND: &str = "foreground";
/// Customer perspective marker for a backgrounded application.
pub const APP_STATE_BACKGROUND: &str = "background";
/// No-data-hit marker value (numeric on the wire).
pub const NO_DATA_HIT_VALUE: i64 = 1;

// ============================================================================
// SECTION: Outbound Envelope Keys
// ============================================================================

/// Experience-event envelope key for the XDM object.
pub const XDM: &str = "xdm";
/// Experience-event envelope key for the data object.
pub const DATA: &str = "data";
/// XDM event type key.
pub const EVENT_TYPE: &str = "eventType";
/// Legacy payload wrapper key inside the data object.
pub const LEGACY: &str = "_legacy";
/// Analytics payload key inside the legacy wrapper.
pub const ANALYTICS: &str = "analytics";
/// XDM event type value for legacy analytics hits.
pub const LEGACY_ANALYTICS_EVENT_TYPE: &str = "legacy.analytics";
/// Name of the outbound edge request event.
pub const EDGE_EVENT_NAME: &str = "Analytics Edge Request";
