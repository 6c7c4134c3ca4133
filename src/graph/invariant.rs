//! Debug-only invariant assertion helpers.

/// Debug-asserts a structural invariant with a message.
#[cfg(debug_assertions)]
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}
