//! Stateful computation without shared mutable variables.
//!
//! # Base Monad
//!
//! - [`State`]: A computation `S -> Pair<A, S>` that is composed first and
//!   run later
//!
//! # Constructors
//!
//! [`pure`], [`get`], [`put`], [`modify`] and [`gets`] build the common
//! `State` values. Each is also an associated function on [`State`].
//!
//! # Do-Notation
//!
//! The [`state!`](crate::state) macro writes a chain of `bind` calls as a
//! sequence of steps.
//!
//! # Examples
//!
//! ```rust
//! use statecraft::control::Pair;
//! use statecraft::effect::{State, get, put};
//!
//! // Return the old counter value and bump the counter
//! let tick: State<u32, u32> = get().bind(|count: u32| put(count + 1).then(State::pure(count)));
//!
//! let twice = tick.clone().then(tick);
//! assert_eq!(twice.run_state(0), Pair::new(1, 2));
//! ```

#![forbid(unsafe_code)]

mod constructors;
mod state;
mod state_macro;

pub use constructors::{get, gets, modify, pure, put};
pub use state::State;
