//! Stack growth for deeply nested descriptors.
//!
//! Every nesting level of `array(...)`, `map(...)` or `row(...)` is one
//! level of recursion. Descriptors have no nesting ceiling, so recursion
//! goes through [`ensure_sufficient_stack`], which moves onto a freshly
//! allocated stack segment when the current one runs low.

/// Grow the stack when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(depth: usize) -> usize {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { 1 + nest(depth - 1) })
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        assert_eq!(nest(200_000), 200_000);
    }
}
