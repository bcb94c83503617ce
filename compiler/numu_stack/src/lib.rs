//! Stack growth for the recursive passes of the numu front end.
//!
//! Parsing, evaluation, and the structural tree algorithms all recurse once
//! per nesting level of the input. Source such as `((((...))))` or a long
//! right-grouped chain like `1+1+1+...` can exceed the default thread stack,
//! so every recursive entry point runs through [`ensure_sufficient_stack`].
//!
//! Native targets grow the stack on demand through `stacker`; on `wasm32`
//! the guard is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each additional stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(arena: &NodeArena, id: NodeId) -> usize {
///     ensure_sufficient_stack(|| {
///         1 + arena.children(id).iter().map(|c| depth(arena, *c)).max().unwrap_or(0)
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` has no segmented stacks; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
