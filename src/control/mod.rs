//! Control structures for functional programming.
//!
//! - [`Pair`]: An immutable ordered two-element tuple, the result carrier
//!   of every `State` transition
//!
//! # Examples
//!
//! ```rust
//! use statecraft::control::Pair;
//!
//! let pair = Pair::new("value", 1);
//! let (value, state) = pair.into_parts();
//! assert_eq!(value, "value");
//! assert_eq!(state, 1);
//! ```

mod pair;

pub use pair::Pair;
