//! Pair type - an immutable ordered two-element tuple.
//!
//! `Pair<A, B>` is the carrier every [`State`](crate::effect::State)
//! transition returns: the computed value in `first` and the resulting state
//! in `second`. Once built, a pair is never mutated; the transformation
//! methods consume it and hand back a new one.
//!
//! # Examples
//!
//! ```rust
//! use statecraft::control::Pair;
//!
//! let pair = Pair::new(42, "state");
//! assert_eq!(*pair.first(), 42);
//! assert_eq!(*pair.second(), "state");
//!
//! // Structural equality
//! assert_eq!(pair, Pair::new(42, "state"));
//!
//! // Build a new pair instead of mutating
//! let doubled = pair.map_first(|value| value * 2);
//! assert_eq!(doubled, Pair::new(84, "state"));
//! ```

#![forbid(unsafe_code)]

use std::fmt;

/// An immutable ordered pair `(first, second)`.
///
/// Two pairs are equal iff both components are equal. The fields are private;
/// read them with [`first`](Pair::first) and [`second`](Pair::second), or take
/// them apart with [`into_parts`](Pair::into_parts).
///
/// # Type Parameters
///
/// * `A` - The type of the first component (the value, in a `State` result)
/// * `B` - The type of the second component (the state, in a `State` result)
///
/// # Examples
///
/// ```rust
/// use statecraft::control::Pair;
///
/// let pair: Pair<i32, String> = Pair::new(1, "one".to_string());
/// let (number, word) = pair.into_parts();
/// assert_eq!(number, 1);
/// assert_eq!(word, "one");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    // =========================================================================
    // Construction and Access
    // =========================================================================

    /// Creates a new pair from its two components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// let pair = Pair::new("value", 10);
    /// assert_eq!(*pair.first(), "value");
    /// assert_eq!(*pair.second(), 10);
    /// ```
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Consumes the pair, returning the first component.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// assert_eq!(Pair::new(7, "ignored").into_first(), 7);
    /// ```
    #[inline]
    pub fn into_first(self) -> A {
        self.first
    }

    /// Consumes the pair, returning the second component.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// assert_eq!(Pair::new("ignored", 7).into_second(), 7);
    /// ```
    #[inline]
    pub fn into_second(self) -> B {
        self.second
    }

    /// Consumes the pair, returning both components as a tuple.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the first component, keeping the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// let pair = Pair::new(21, "state").map_first(|value| value * 2);
    /// assert_eq!(pair, Pair::new(42, "state"));
    /// ```
    #[inline]
    pub fn map_first<C, F>(self, function: F) -> Pair<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Pair::new(function(self.first), self.second)
    }

    /// Applies a function to the second component, keeping the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// let pair = Pair::new("value", 1).map_second(|state| state + 1);
    /// assert_eq!(pair, Pair::new("value", 2));
    /// ```
    #[inline]
    pub fn map_second<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        Pair::new(self.first, function(self.second))
    }

    /// Applies one function to each component.
    ///
    /// `pair.bimap(f, g)` is equivalent to `pair.map_first(f).map_second(g)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// let pair = Pair::new(3, "abc").bimap(|n| n * 10, str::len);
    /// assert_eq!(pair, Pair::new(30, 3));
    /// ```
    #[inline]
    pub fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Pair<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Pair::new(first_function(self.first), second_function(self.second))
    }

    /// Exchanges the two components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// assert_eq!(Pair::new(1, "one").swap(), Pair::new("one", 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Pair({}, {})", self.first, self.second)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, B> From<(A, B)> for Pair<A, B> {
    /// Converts a tuple into a `Pair`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    ///
    /// let pair: Pair<i32, &str> = (1, "one").into();
    /// assert_eq!(pair, Pair::new(1, "one"));
    /// ```
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    /// Converts a `Pair` into a tuple.
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pair_exposes_components() {
        let pair = Pair::new(42, "state");
        assert_eq!(*pair.first(), 42);
        assert_eq!(*pair.second(), "state");
    }

    #[rstest]
    #[case(Pair::new(1, 2), Pair::new(1, 2), true)]
    #[case(Pair::new(1, 2), Pair::new(1, 3), false)]
    #[case(Pair::new(1, 2), Pair::new(0, 2), false)]
    fn pair_equality_is_structural(
        #[case] left: Pair<i32, i32>,
        #[case] right: Pair<i32, i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    fn pair_map_first_keeps_second() {
        let pair = Pair::new(2, String::from("kept")).map_first(|value| value.to_string());
        assert_eq!(pair, Pair::new("2".to_string(), "kept".to_string()));
    }

    #[rstest]
    fn pair_tuple_conversions() {
        let pair: Pair<i32, char> = (5, 'x').into();
        let tuple: (i32, char) = pair.into();
        assert_eq!(tuple, (5, 'x'));
    }

    #[rstest]
    fn pair_display() {
        assert_eq!(format!("{}", Pair::new(1, "a")), "Pair(1, a)");
    }
}
