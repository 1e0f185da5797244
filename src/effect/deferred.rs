//! Effect - a deferred nullary computation.
//!
//! An `Effect<A>` describes how to produce an `A` but does not produce it.
//! Construction and composition (`map`, `chain`, `ap`, ...) only build a new
//! description. The wrapped computation runs when [`Effect::run`] is called,
//! and runs once per call.
//!
//! `or_some` and `or_else` on `Effect<Option<A>>` are the exception: they have
//! to observe the result to pick a branch, so calling them runs the effect.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::effect::Effect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//!
//! let effect = Effect::new(move || {
//!     counter.set(counter.get() + 1);
//!     10
//! })
//! .map(|x| x * 2)
//! .chain(|x| Effect::of(x + 1));
//!
//! // Not executed yet
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(effect.run(), 21);
//! assert_eq!(calls.get(), 1);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use super::error::EffectPanic;
use crate::control::Either;
use crate::typeclass::Variant;

/// A deferred computation producing a value of type `A`.
///
/// The computation is shared between clones, so cloning an `Effect` is
/// cheap and running either clone runs the same computation. `Effect` is
/// neither `Send` nor `Sync`.
pub struct Effect<A> {
    thunk: Rc<dyn Fn() -> A>,
}

impl<A: 'static> Effect<A> {
    /// Creates an effect from a closure. The closure is not called.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            thunk: Rc::new(action),
        }
    }

    /// Wraps a ready value. Each run returns a clone of it.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Evaluates the composed computation and returns its result.
    ///
    /// Every call evaluates the whole chain again. A panic raised by the
    /// computation propagates to the caller unchanged; see
    /// [`Effect::attempt`] to capture it instead.
    pub fn run(&self) -> A {
        #[cfg(feature = "tracing")]
        tracing::trace!(value_type = std::any::type_name::<A>(), "running effect");
        (self.thunk)()
    }

    /// Transforms the eventual result with `function`.
    pub fn map<B, F>(self, function: F) -> Effect<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let thunk = self.thunk;
        Effect::new(move || function(thunk()))
    }

    /// Sequences an effect that depends on the eventual result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::effect::Effect;
    ///
    /// let effect = Effect::of(10).chain(|x| Effect::new(move || x * 3));
    /// assert_eq!(effect.run(), 30);
    /// ```
    pub fn chain<B, F>(self, function: F) -> Effect<B>
    where
        B: 'static,
        F: Fn(A) -> Effect<B> + 'static,
    {
        let thunk = self.thunk;
        Effect::new(move || function(thunk()).run())
    }

    /// Alias for [`Effect::chain`].
    pub fn and_then<B, F>(self, function: F) -> Effect<B>
    where
        B: 'static,
        F: Fn(A) -> Effect<B> + 'static,
    {
        self.chain(function)
    }

    /// Applies the function produced by this effect to the value produced by
    /// `other`. The receiver is evaluated first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::effect::Effect;
    ///
    /// let add = Effect::new(|| |x: i32| x + 1);
    /// assert_eq!(add.ap(Effect::of(41)).run(), 42);
    /// ```
    pub fn ap<B, C>(self, other: Effect<B>) -> Effect<C>
    where
        A: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        let function = self.thunk;
        let argument = other.thunk;
        Effect::new(move || {
            let apply = function();
            apply(argument())
        })
    }

    /// Combines the results of two effects with `function`.
    pub fn map2<B, C, F>(self, other: Effect<B>, function: F) -> Effect<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let first = self.thunk;
        let second = other.thunk;
        Effect::new(move || {
            let a = first();
            function(a, second())
        })
    }

    /// Pairs the results of two effects.
    pub fn product<B>(self, other: Effect<B>) -> Effect<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Runs this effect for its side effects, then `next`.
    pub fn then<B>(self, next: Effect<B>) -> Effect<B>
    where
        B: 'static,
    {
        self.map2(next, |_, b| b)
    }

    /// Folds the eventual result into `seed`. The seed is cloned on each run.
    pub fn reduce<B, F>(self, seed: B, function: F) -> Effect<B>
    where
        B: Clone + 'static,
        F: Fn(B, A) -> B + 'static,
    {
        self.map(move |value| function(seed.clone(), value))
    }

    /// Captures a panic raised by the computation as
    /// `Either::Left(EffectPanic)`. The result is still deferred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    /// use fantasia::effect::Effect;
    ///
    /// let safe = Effect::new(|| 42).attempt();
    /// assert_eq!(safe.run(), Either::Right(42));
    /// ```
    pub fn attempt(self) -> Effect<Either<EffectPanic, A>> {
        let thunk = self.thunk;
        Effect::new(move || match catch_unwind(AssertUnwindSafe(|| thunk())) {
            Ok(value) => Either::Right(value),
            Err(payload) => {
                let error = EffectPanic::from_payload(payload.as_ref());
                #[cfg(feature = "tracing")]
                tracing::warn!(panic_message = error.message(), "recovered panic inside effect");
                Either::Left(error)
            }
        })
    }
}

impl<A: 'static> Effect<Option<A>> {
    /// Runs the effect and returns its value, or `default` when it yields
    /// `None`.
    ///
    /// Unlike `map` and `chain`, this forces evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::effect::Effect;
    ///
    /// let lookup = Effect::new(|| None::<i32>);
    /// assert_eq!(lookup.or_some(7), 7);
    /// ```
    pub fn or_some(&self, default: A) -> A {
        #[cfg(feature = "tracing")]
        tracing::debug!("or_some forces effect evaluation");
        self.run().unwrap_or(default)
    }

    /// Runs the effect and returns its value, or calls `fallback` when it
    /// yields `None`.
    ///
    /// Unlike `map` and `chain`, this forces evaluation.
    pub fn or_else<F>(&self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!("or_else forces effect evaluation");
        self.run().unwrap_or_else(fallback)
    }
}

impl<A> Clone for Effect<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<A> Variant for Effect<A> {
    fn type_name(&self) -> &'static str {
        "Effect"
    }
}

/// Formats without running the computation.
impl<A> fmt::Display for Effect<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}(<deferred>)", self.type_name())
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Effect").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counted(calls: &Rc<Cell<i32>>, value: i32) -> Effect<i32> {
        let counter = Rc::clone(calls);
        Effect::new(move || {
            counter.set(counter.get() + 1);
            value
        })
    }

    #[rstest]
    fn composition_does_not_run() {
        let calls = Rc::new(Cell::new(0));
        let effect = counted(&calls, 1)
            .map(|x| x + 1)
            .chain(|x| Effect::of(x * 2))
            .reduce(10, |acc, x| acc + x);
        assert_eq!(calls.get(), 0);
        assert_eq!(effect.run(), 14);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn each_run_evaluates_once() {
        let calls = Rc::new(Cell::new(0));
        let effect = counted(&calls, 5).map(|x| x + 1);
        assert_eq!(effect.run(), 6);
        assert_eq!(effect.run(), 6);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn ap_applies_deferred_function() {
        let add = |a: i32| move |b: i32| a + b;
        let effect = Effect::of(add).ap(Effect::of(2)).ap(Effect::of(3));
        assert_eq!(effect.run(), 5);
    }

    #[rstest]
    fn map2_product_and_then() {
        assert_eq!(Effect::of(2).map2(Effect::of(3), |a, b| a * b).run(), 6);
        assert_eq!(Effect::of(1).product(Effect::of("a")).run(), (1, "a"));

        let calls = Rc::new(Cell::new(0));
        let sequenced = counted(&calls, 1).then(Effect::of("done"));
        assert_eq!(sequenced.run(), "done");
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn and_then_is_chain() {
        assert_eq!(Effect::of(4).and_then(|x| Effect::of(x + 1)).run(), 5);
    }

    #[rstest]
    #[case(Some(3), 3)]
    #[case(None, 9)]
    fn or_some_forces_evaluation(#[case] output: Option<i32>, #[case] expected: i32) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let effect = Effect::new(move || {
            counter.set(counter.get() + 1);
            output
        });
        assert_eq!(effect.or_some(9), expected);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn or_else_calls_fallback_only_when_empty() {
        assert_eq!(Effect::new(|| Some(1)).or_else(|| 2), 1);
        assert_eq!(Effect::new(|| None).or_else(|| 2), 2);
    }

    #[rstest]
    fn attempt_captures_panic() {
        let failing: Effect<i32> = Effect::new(|| panic!("oops"));
        let result = failing.attempt().run();
        assert_eq!(result, Either::Left(EffectPanic::new("oops")));
    }

    #[rstest]
    #[should_panic(expected = "boom")]
    fn run_propagates_panic() {
        let failing: Effect<i32> = Effect::new(|| panic!("boom"));
        failing.run();
    }

    #[rstest]
    fn display_does_not_run() {
        let calls = Rc::new(Cell::new(0));
        let effect = counted(&calls, 1);
        assert_eq!(effect.to_string(), "Effect(<deferred>)");
        assert_eq!(format!("{effect:?}"), "Effect { .. }");
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn clones_share_the_computation() {
        let calls = Rc::new(Cell::new(0));
        let effect = counted(&calls, 1);
        let copy = effect.clone();
        assert_eq!(effect.run() + copy.run(), 2);
        assert_eq!(calls.get(), 2);
    }
}
