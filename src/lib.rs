//! # statecraft
//!
//! A minimal State monad for threading an evolving piece of state through a
//! sequence of pure computations.
//!
//! ## Overview
//!
//! - **Pair**: An immutable `(first, second)` tuple carrying a transition's
//!   value and resulting state
//! - **State**: A wrapped function `S -> Pair<A, S>` with `map`, `bind`,
//!   `join`, `map_state` and `with_state` combinators
//! - **Constructors**: `pure`, `get`, `put`, `modify`, `gets`
//!
//! Composition never runs anything. A composed `State` is executed only by
//! `run_state`, `eval_state` or `exec_state`.
//!
//! ## Feature Flags
//!
//! - `control`: [`Pair`](control::Pair)
//! - `effect`: [`State`](effect::State), the constructors and `state!`
//! - `serde`: `Serialize` / `Deserialize` for `Pair`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use statecraft::prelude::*;
//!
//! let program: State<Vec<String>, usize> = modify(|mut log: Vec<String>| {
//!     log.push("started".to_string());
//!     log
//! })
//! .then(gets(|log: &Vec<String>| log.len()));
//!
//! assert_eq!(
//!     program.run_state(Vec::new()),
//!     Pair::new(1, vec!["started".to_string()])
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use statecraft::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "effect")]
    pub use crate::state;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
