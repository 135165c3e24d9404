//! `state!` block syntax for sequencing `State` steps.
//!
//! A `state!` block reads as a list of steps run one after another, each
//! seeing the state left by the previous one. It expands to nested
//! [`State::bind`](crate::effect::State::bind) calls; nothing runs until the
//! resulting `State` is run.
//!
//! # Statements
//!
//! - `pattern <= computation;` runs `computation` and binds its value to any
//!   irrefutable pattern (`x`, `_`, `(a, b)`, `Game { score, .. }`)
//! - `computation;` runs `computation` and discards its value, the usual form
//!   for `put(..);` and `modify(..);`
//! - `let pattern = expression;` is a plain binding that touches no state
//!
//! The block ends with one of:
//!
//! - `yield expression`, the final value lifted with `State::pure`
//! - `computation` or `computation;`, a `State` whose value becomes the
//!   block's value
//!
//! # Examples
//!
//! ```rust
//! use statecraft::control::Pair;
//! use statecraft::effect::{State, get, modify};
//! use statecraft::state;
//!
//! let computation: State<i32, i32> = state! {
//!     before <= get::<i32>();
//!     modify(|s: i32| s + 1);
//!     after <= get::<i32>();
//!     yield before + after
//! };
//!
//! assert_eq!(computation.run_state(10), Pair::new(21, 11));
//! ```

#![forbid(unsafe_code)]

/// Sequences `State` steps, threading the state from each step to the next.
///
/// A statement is a bind when a top-level `<=` appears before its `;`, and a
/// discarded step otherwise. See the [module documentation](self) for the
/// full statement list.
///
/// # Examples
///
/// ```rust
/// use statecraft::control::Pair;
/// use statecraft::effect::{State, gets, put};
/// use statecraft::state;
///
/// let swap: State<(u32, u32), u32> = state! {
///     (left, right) <= gets(|pair: &(u32, u32)| *pair);
///     put((right, left));
///     let total = left + right;
///     yield total
/// };
///
/// assert_eq!(swap.run_state((4, 2)), Pair::new(6, (2, 4)));
/// ```
#[macro_export]
macro_rules! state {
    // Last statement: a value lifted into the State.
    (yield $value:expr) => {
        $crate::effect::State::pure($value)
    };

    // Plain binding; no state is read or written.
    (let $pattern:pat_param = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern = $value;
            $crate::state!($($rest)+)
        }
    };

    // `@step [head] tokens` scans one statement. `head` collects tokens up to
    // the first top-level `<=` (bind) or `;` (discard).
    (@step [$($head:tt)+] <= $($tail:tt)+) => {
        $crate::state!(@bind ($($head)+) $($tail)+)
    };

    (@step [$($head:tt)+] ; $($rest:tt)+) => {
        ($($head)+).bind(move |_| $crate::state!($($rest)+))
    };

    (@step [$($head:tt)+] ;) => {
        $($head)+
    };

    (@step [$($head:tt)+]) => {
        $($head)+
    };

    (@step [$($head:tt)*] $next:tt $($tail:tt)*) => {
        $crate::state!(@step [$($head)* $next] $($tail)*)
    };

    (@bind ($pattern:pat_param) $computation:expr ; $($rest:tt)+) => {
        $computation.bind(move |$pattern| $crate::state!($($rest)+))
    };

    ($($statements:tt)+) => {
        $crate::state!(@step [] $($statements)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::control::Pair;
    use crate::effect::{State, get, gets, modify, put};
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Tally {
        hits: u32,
        misses: u32,
    }

    #[rstest]
    fn single_computation_is_returned_as_is() {
        let computation: State<i32, i32> = state! { get() };
        assert_eq!(computation.run_state(3), Pair::new(3, 3));
    }

    #[rstest]
    fn yield_lifts_final_value() {
        let computation: State<i32, &str> = state! { yield "done" };
        assert_eq!(computation.run_state(3), Pair::new("done", 3));
    }

    #[rstest]
    fn bind_threads_state_between_steps() {
        let computation: State<i32, i32> = state! {
            first <= get::<i32>();
            _ <= put(first * 2);
            second <= get::<i32>();
            yield first + second
        };
        assert_eq!(computation.run_state(5), Pair::new(15, 10));
    }

    #[rstest]
    fn discarded_steps_still_change_state() {
        let computation: State<i32, i32> = state! {
            modify(|s: i32| s + 1);
            put(100);
            modify(|s: i32| s * 2);
            get::<i32>()
        };
        assert_eq!(computation.run_state(0), Pair::new(200, 200));
    }

    #[rstest]
    fn trailing_semicolon_keeps_last_computation() {
        let computation: State<i32, ()> = state! {
            modify(|s: i32| s - 1);
            modify(|s: i32| s - 1);
        };
        assert_eq!(computation.run_state(10), Pair::new((), 8));
    }

    #[rstest]
    fn tuple_pattern_binds_components() {
        let computation: State<(i32, i32), i32> = state! {
            (left, right) <= gets(|pair: &(i32, i32)| *pair);
            yield left - right
        };
        assert_eq!(computation.eval_state((9, 4)), 5);
    }

    #[rstest]
    fn struct_pattern_binds_fields() {
        let computation: State<Tally, u32> = state! {
            Tally { hits, .. } <= get::<Tally>();
            modify(move |tally: Tally| Tally { misses: tally.misses + hits, ..tally });
            Tally { misses, .. } <= get::<Tally>();
            yield misses
        };
        let initial = Tally { hits: 3, misses: 1 };
        assert_eq!(
            computation.run_state(initial),
            Pair::new(4, Tally { hits: 3, misses: 4 })
        );
    }

    #[rstest]
    fn let_binding_does_not_touch_state() {
        let computation: State<Vec<i32>, usize> = state! {
            modify(|mut stack: Vec<i32>| { stack.push(1); stack });
            let offset = 100;
            let (scale, _) = (2, "unused");
            length <= gets(|stack: &Vec<i32>| stack.len());
            yield length * scale + offset
        };
        assert_eq!(computation.run_state(vec![7]), Pair::new(104, vec![7, 1]));
    }

    #[rstest]
    fn comparison_inside_computation_is_not_a_bind() {
        let computation: State<i32, bool> = state! {
            modify(|s: i32| if s <= 3 { s + 10 } else { s });
            gets(|s: &i32| *s <= 13)
        };
        assert_eq!(computation.run_state(3), Pair::new(true, 13));
    }
}
