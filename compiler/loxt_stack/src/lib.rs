//! Stack growth for deep recursion.
//!
//! Both the parser (`unary` and parenthesised expressions recurse once per
//! nesting level) and AST traversal recurse proportionally to the nesting
//! depth of the source expression. Wrapping those entry points in
//! [`ensure_sufficient_stack`] moves the limit from the thread's stack size
//! to available memory.
//!
//! On native targets the `stacker` crate switches to a freshly allocated
//! segment when the remaining stack drops below [`RED_ZONE`]. On `wasm32`
//! the closure is called directly.

/// Remaining stack below which a new segment is allocated (64 KiB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (2 MiB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
