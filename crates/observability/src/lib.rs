//! Tracing/logging setup shared by applications embedding the engine.
//!
//! The engine crates only emit `tracing` events; wiring a subscriber is the
//! host's decision and happens here.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
