//! Tracing hooks for eager operators.
//!
//! This module purposefully avoids pulling heavy telemetry stacks; with the
//! `tracing` feature off every hook is a no-op.

/// An eager operator buffered `len` elements before yielding.
#[cfg(feature = "tracing")]
pub fn materialized(op: &'static str, len: usize) {
    tracing::trace!(op, len, "materialized");
}

#[cfg(not(feature = "tracing"))]
pub fn materialized(_op: &'static str, _len: usize) { /* no-op */
}

/// An equality-based set operator's seen-list crossed the configured
/// `linear_scan_warn_len`.
#[cfg(feature = "tracing")]
pub fn linear_scan(op: &'static str, len: usize) {
    tracing::warn!(
        op,
        len,
        "equality-based scan is quadratic; prefer the key-based variant"
    );
}

#[cfg(not(feature = "tracing"))]
pub fn linear_scan(_op: &'static str, _len: usize) { /* no-op */
}
