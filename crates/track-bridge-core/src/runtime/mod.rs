// crates/track-bridge-core/src/runtime/mod.rs
// ============================================================================
// Module: Track Bridge Runtime
// Description: Pipeline orchestration over the core model.
// Purpose: Group the runtime modules that sequence the pure builders.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The runtime tree holds the processor that sequences the privacy gate,
//! the field builders, and the assembler for one request at a time.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod processor;
