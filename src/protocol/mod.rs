//! WebDriver wire message bodies.
//!
//! This module defines the JSON bodies the remote end sends back for a
//! New Session request once capability processing has finished.
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | `NewSessionResponse` | Remote → Local | Negotiated session capabilities |
//! | `ErrorResponse` | Remote → Local | Standard error body |
//!
//! Both are wrapped in a top-level `value` member on the wire.

// ============================================================================
// Submodules
// ============================================================================

/// Success and error response bodies.
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use response::{ErrorBody, ErrorResponse, NewSessionBody, NewSessionResponse};
