//! Free-function constructors for common `State` values.
//!
//! Each function delegates to the same-named associated function on
//! [`State`]. They read better in point-free code and inside `state!`
//! blocks, where `get()` is shorter than `State::get()`.
//!
//! # Examples
//!
//! ```rust
//! use statecraft::control::Pair;
//! use statecraft::effect::{get, gets, modify, pure, put};
//!
//! let program = get::<i32>()
//!     .bind(|current| put(current * 10))
//!     .then(modify(|s: i32| s + 1))
//!     .then(gets(|s: &i32| s.to_string()))
//!     .bind(|text| pure(format!("<{text}>")));
//!
//! assert_eq!(program.run_state(4), Pair::new("<41>".to_string(), 41));
//! ```

#![forbid(unsafe_code)]

use super::State;

/// Lifts a plain value into a `State` without touching the state.
///
/// # Examples
///
/// ```rust
/// use statecraft::effect::pure;
///
/// assert_eq!(pure::<i32, &str>("seven").run(9), ("seven", 9));
/// ```
pub fn pure<S, A>(value: A) -> State<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    State::pure(value)
}

/// Reads the current state as the value.
///
/// # Examples
///
/// ```rust
/// use statecraft::effect::get;
///
/// assert_eq!(get::<i32>().run(5), (5, 5));
/// ```
pub fn get<S>() -> State<S, S>
where
    S: Clone + 'static,
{
    State::get()
}

/// Unconditionally overwrites the state.
///
/// # Examples
///
/// ```rust
/// use statecraft::effect::put;
///
/// assert_eq!(put(2).run(1), ((), 2));
/// ```
pub fn put<S>(new_state: S) -> State<S, ()>
where
    S: Clone + 'static,
{
    State::put(new_state)
}

/// Replaces the state with `modifier(state)`.
///
/// # Examples
///
/// ```rust
/// use statecraft::effect::modify;
///
/// assert_eq!(modify(|s: i32| s - 1).exec_state(10), 9);
/// ```
pub fn modify<S, F>(modifier: F) -> State<S, ()>
where
    S: 'static,
    F: Fn(S) -> S + 'static,
{
    State::modify(modifier)
}

/// Derives a value from the current state without modifying it.
///
/// # Examples
///
/// ```rust
/// use statecraft::effect::gets;
///
/// assert_eq!(gets(|s: &String| s.len()).run("four".to_string()), (4, "four".to_string()));
/// ```
pub fn gets<S, A, F>(projection: F) -> State<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(&S) -> A + 'static,
{
    State::gets(projection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Pair;
    use rstest::rstest;

    #[rstest]
    fn modify_matches_get_then_put() {
        let double = |s: i32| s * 2;
        let via_modify = modify(double);
        let via_get_put = get().bind(move |s| put(double(s)));
        assert_eq!(via_modify.run_state(21), via_get_put.run_state(21));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    #[case(100)]
    fn constructors_match_associated_functions(#[case] initial: i32) {
        assert_eq!(get::<i32>().run_state(initial), State::get().run_state(initial));
        assert_eq!(put(1).run_state(initial), State::put(1).run_state(initial));
        assert_eq!(
            gets(|s: &i32| s + 1).run_state(initial),
            Pair::new(initial + 1, initial)
        );
        assert_eq!(pure::<i32, char>('x').run_state(initial), Pair::new('x', initial));
    }
}
