// crates/track-bridge-core/src/core/hit.rs
// ============================================================================
// Module: Track Bridge Legacy Hit
// Description: Assembled legacy hit and the two-tier assembly rule.
// Purpose: Merge variables and context data into the legacy wire structure.
// Dependencies: crate::core::keys, serde, serde_json
// ============================================================================

//! ## Overview
//! Assembly starts from the request variables as the top-level field set and
//! folds context data in under the two-tier promotion rule: keys carrying
//! the `&&` escape prefix are stripped and hoisted into the top-level set,
//! overwriting any colliding field, while remaining non-empty keys nest
//! under the `c` sub-map. This rule is the crux of backward compatibility
//! with the legacy wire format and lets callers impersonate protocol-level
//! fields from context data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::keys;

// ============================================================================
// SECTION: Legacy Hit
// ============================================================================

/// Assembled legacy analytics hit.
///
/// # Invariants
/// - Immutable once assembled; the hit is handed to the transport and
///   discarded, never queued or retried by this system.
/// - `fields` holds top-level protocol fields, including promoted keys.
/// - `context_data` nests under the context-data field at serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyHit {
    /// Top-level protocol fields.
    pub fields: BTreeMap<String, String>,
    /// Nested context data entries.
    pub context_data: BTreeMap<String, String>,
}

impl LegacyHit {
    /// Serializes the hit body in the legacy wire shape.
    ///
    /// The body carries every top-level field as a string, the constant
    /// no-data-hit marker as a number, and context data as a nested object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            keys::NO_DATA_HIT.to_string(),
            Value::from(keys::NO_DATA_HIT_VALUE),
        );
        for (key, value) in &self.fields {
            body.insert(key.clone(), Value::String(value.clone()));
        }
        let context: Map<String, Value> = self
            .context_data
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        body.insert(keys::CONTEXT_DATA.to_string(), Value::Object(context));
        Value::Object(body)
    }
}

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Assembles a legacy hit from request variables and context data.
///
/// Escape-prefixed context keys are stripped and promoted into the
/// top-level field set, overwriting colliding variables; other non-empty
/// keys stay nested. Keys left empty after stripping are dropped silently.
#[must_use]
pub fn assemble(
    vars: BTreeMap<String, String>,
    context_data: BTreeMap<String, String>,
) -> LegacyHit {
    let mut fields = vars;
    let mut nested = BTreeMap::new();

    for (key, value) in context_data {
        if let Some(stripped) = key.strip_prefix(keys::VAR_ESCAPE_PREFIX) {
            if !stripped.is_empty() {
                fields.insert(stripped.to_string(), value);
            }
        } else if !key.is_empty() {
            nested.insert(key, value);
        }
    }

    LegacyHit {
        fields,
        context_data: nested,
    }
}
