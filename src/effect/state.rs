//! State Monad - stateful computation.
//!
//! The State monad represents computations that thread a state through
//! a sequence of operations without mutating any shared variable.
//!
//! # Overview
//!
//! A `State<S, A>` encapsulates a function `S -> Pair<A, S>`, where `S` is the
//! state type and `A` is the value type. The function takes the current
//! state, produces a value, and returns a potentially different state.
//!
//! Composition is lazy: `map`, `bind`, `join` and friends only build a new
//! `State` around the old one. Nothing runs until one of `run_state`,
//! `eval_state`, `exec_state` or `run` is called.
//!
//! # Note on Type Classes
//!
//! State provides `map`, `bind`, `join`, `map2`, etc. directly on the type.
//! The wrapped function is an `Rc<dyn Fn>`, which forces `'static` bounds on
//! `S` and `A`.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `state.map(|x| x) == state`
//! - Composition: `state.map(f).map(g) == state.map(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(State::pure) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! ## State Laws
//!
//! - Get Put: `get().bind(put) == pure(())`
//! - Put Get: `put(s).then(get())` returns `s`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`
//! - Modify: `modify(f) == get().bind(|s| put(f(s)))`
//!
//! # Failure
//!
//! There is no error channel. A panic inside a wrapped function unwinds
//! through whichever run method invoked it; the `State` values themselves are
//! untouched and can be run again.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use statecraft::control::Pair;
//! use statecraft::effect::State;
//!
//! let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s + 1));
//! assert_eq!(state.run_state(10), Pair::new(20, 11));
//! ```
//!
//! Counter pattern:
//!
//! ```rust
//! use statecraft::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.eval_state(0), 3);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use crate::control::Pair;

/// A monad for computations that thread state through a sequence of operations.
///
/// `State<S, A>` represents a computation that, given an initial state of type `S`,
/// produces a value of type `A` and a new state of type `S`. It holds a recipe,
/// never a state.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The value type
///
/// # Examples
///
/// ```rust
/// use statecraft::control::Pair;
/// use statecraft::effect::State;
///
/// // Hand out the current counter value and advance the counter.
/// let next_id: State<u64, u64> = State::get()
///     .bind(|current: u64| State::put(current + 1).then(State::pure(current)));
///
/// let two_ids = next_id.clone().map2(next_id, |first, second| [first, second]);
/// assert_eq!(two_ids.run_state(10), Pair::new([10, 11], 12));
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Shared so that `join` can run a captured inner state and `State` is cheap to clone.
    run_function: Rc<dyn Fn(S) -> Pair<A, S>>,
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a new State from a state transition function.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the current state and returns
    ///   a `Pair` of (value, `new_state`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s + 1));
    /// assert_eq!(state.eval_state(10), 20);
    /// assert_eq!(state.exec_state(10), 11);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> Pair<A, S> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Wraps a `(value, state)` tuple-returning function.
    ///
    /// The tuple is converted into a `Pair` on every run, so existing
    /// functions written against plain tuples plug in unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// fn take_ticket(next: u32) -> (String, u32) {
    ///     (format!("ticket #{next}"), next + 1)
    /// }
    ///
    /// let dispenser = State::from_transition(take_ticket);
    /// assert_eq!(dispenser.run_state(7), Pair::new("ticket #7".to_string(), 8));
    /// ```
    pub fn from_transition<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self::new(move |state| Pair::from(transition(state)))
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Runs the State computation with the given initial state.
    ///
    /// The wrapped function's result is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s + 1, s * 2));
    /// assert_eq!(state.run_state(10), Pair::new(11, 20));
    /// ```
    pub fn run_state(&self, initial_state: S) -> Pair<A, S> {
        (self.run_function)(initial_state)
    }

    /// Runs the State computation and returns only the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s + 1));
    /// assert_eq!(state.eval_state(10), 20);
    /// ```
    pub fn eval_state(&self, initial_state: S) -> A {
        self.run_state(initial_state).into_first()
    }

    /// Runs the State computation and returns only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s + 1));
    /// assert_eq!(state.exec_state(10), 11);
    /// ```
    pub fn exec_state(&self, initial_state: S) -> S {
        self.run_state(initial_state).into_second()
    }

    /// Runs the State computation and returns the result as a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::from_transition(|s: i32| (s + 1, s * 2));
    /// let (result, final_state) = state.run(10);
    /// assert_eq!(result, 11);
    /// assert_eq!(final_state, 20);
    /// ```
    pub fn run(&self, initial_state: S) -> (A, S) {
        self.run_state(initial_state).into_parts()
    }

    /// Creates a State that returns a constant value without modifying the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// assert_eq!(state.run_state(42), Pair::new("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Pair::new(value.clone(), state))
    }

    /// Creates a State that projects a value from the current state.
    ///
    /// The state itself passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::effect::State;
    ///
    /// struct Config { port: u16 }
    ///
    /// let state: State<Config, u16> = State::gets(|config: &Config| config.port);
    /// assert_eq!(state.eval_state(Config { port: 8080 }), 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            Pair::new(value, state)
        })
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Maps a function over the value of this State, leaving the state alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// let mapped = state.map(|value| value * 2);
    /// assert_eq!(mapped.run_state(21), Pair::new(42, 21));
    /// ```
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| (original_function)(state).map_first(&function))
    }

    /// Maps a function over the whole `Pair` produced by this State.
    ///
    /// Unlike [`map`](State::map), the function sees and controls the
    /// resulting state as well as the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s));
    /// let mapped = state.map_state(|pair| pair.bimap(|value| value * 2, |s| s + 2));
    /// assert_eq!(mapped.run_state(42), Pair::new(168, 44));
    /// ```
    pub fn map_state<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(Pair<A, S>) -> Pair<B, S> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| function((original_function)(state)))
    }

    /// Transforms the input state before this State sees it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s));
    /// let adjusted = state.with_state(|s| s * 2);
    /// assert_eq!(adjusted.run_state(42), Pair::new(168, 84));
    /// ```
    #[must_use]
    pub fn with_state<F>(self, function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        let original_function = self.run_function;
        Self::new(move |state| (original_function)(function(state)))
    }

    /// Chains this State with a function that produces another State.
    ///
    /// The next State runs against the state left behind by this one.
    /// Defined as `self.map(function).join()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| Pair::new(s * 2, s + 1));
    /// let chained = state.bind(|value| State::new(move |s: i32| Pair::new(s + value, s)));
    /// assert_eq!(chained.run_state(42), Pair::new(84 + 43, 43));
    /// ```
    pub fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.map(function).join()
    }

    /// Same as [`bind`](State::bind), under the name `Option` and `Result` use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let bump: State<i32, i32> = State::new(|s: i32| Pair::new(s, s + 1));
    /// let total = bump.and_then(|before| State::gets(move |after: &i32| before + after));
    /// assert_eq!(total.run_state(10), Pair::new(21, 11));
    /// ```
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }

    /// Runs `next` after this State, keeping only `next`'s value.
    ///
    /// The state change made by `self` is kept; only its value is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let reset_then_read = State::put(0).then(State::gets(|s: &i32| s + 1));
    /// assert_eq!(reset_then_read.run_state(42), Pair::new(1, 0));
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }

    /// Runs this State and then `other`, merging both values with `function`.
    ///
    /// `other` starts from the state `self` leaves behind, exactly as with
    /// `bind`, but its construction cannot depend on `self`'s value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let draw = || State::new(|deck: Vec<u8>| {
    ///     let (top, rest) = deck.split_first().map_or((0, Vec::new()), |(top, rest)| (*top, rest.to_vec()));
    ///     Pair::new(top, rest)
    /// });
    ///
    /// let hand = draw().map2(draw(), |first, second| first + second);
    /// assert_eq!(hand.run_state(vec![3, 4, 5]), Pair::new(7, vec![5]));
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        State::new(move |state| {
            let (result_a, intermediate_state) = (self_function)(state).into_parts();
            (other_function)(intermediate_state).map_first(|result_b| function(result_a, result_b))
        })
    }

    /// Like [`map2`](State::map2), returning both values as a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let length = State::gets(|text: &String| text.len());
    /// let shout = State::modify(|text: String| text.to_uppercase()).then(State::get());
    /// assert_eq!(
    ///     length.product(shout).run_state("hey".to_string()),
    ///     Pair::new((3, "HEY".to_string()), "HEY".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<S, A> State<S, State<S, A>>
where
    S: 'static,
    A: 'static,
{
    /// Flattens a State whose value is itself a State.
    ///
    /// Running the result runs the outer transition to obtain the inner
    /// State and an intermediate state, then runs the inner State against
    /// that intermediate state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let nested: State<i32, State<i32, i32>> = State::new(|s: i32| Pair::new(s * 2, s + 1))
    ///     .map(|value| State::new(move |s: i32| Pair::new(s + value, s)));
    /// assert_eq!(nested.join().run_state(42), Pair::new(84 + 43, 43));
    /// ```
    pub fn join(self) -> State<S, A> {
        let outer_function = self.run_function;
        State::new(move |state| {
            let (inner, intermediate_state) = (outer_function)(state).into_parts();
            inner.run_state(intermediate_state)
        })
    }
}

// =============================================================================
// State Operations (as inherent methods)
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State whose value is the current state, left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// assert_eq!(state.run_state(42), Pair::new(42, 42));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| Pair::new(state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state with a new value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::control::Pair;
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, ()> = State::put(100);
    /// assert_eq!(state.run_state(42), Pair::new((), 100));
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| Pair::new((), new_state.clone()))
    }

    /// Creates a State that replaces the current state with `modifier(state)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statecraft::effect::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(state.exec_state(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| Pair::new((), modifier(state)))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
