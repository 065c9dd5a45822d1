//! Stack growth for deep recursion.
//!
//! The parser recurses once per nested parenthesis or block and the
//! evaluator once per nested expression or statement. Long operator chains
//! such as `1 + 1 + ... + 1` build left-leaning trees as deep as the chain
//! is long, so both phases wrap their recursive entry points in
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On
//! `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_result_through() {
        assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
        let res: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(res, Err("boom".to_string()));
    }

    #[test]
    fn survives_deep_recursion() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(200_000), 200_000);
    }
}
