//! Stack growth for deep recursion.
//!
//! The parser recurses once per operator of a right-chained complex
//! expression and once per nested function literal or call argument; the
//! resolver and evaluator walk the same shapes. A long `1 + 1 + ... + 1`
//! chain would exhaust a thread's default stack without this guard.
//!
//! On native targets [`ensure_sufficient_stack`] switches to a freshly
//! allocated segment when little stack remains. On wasm it calls straight
//! through.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expression_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining stack in bytes, when the platform can tell.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
