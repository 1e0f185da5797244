//! Bifunctor type class - mapping the success side or the failure side.
//!
//! A `Bifunctor<E, A>` is a container whose failing shape carries `E` and
//! whose success shape carries `A`. `bimap` applies exactly one of its two
//! functions, chosen by the current shape.
//!
//! Arguments are ordered success first, failure second, the same order used
//! by [`Catamorphism::cata`](super::Catamorphism::cata).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|a| a, |e| e) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|a| g2(g1(a)), |e| f2(f1(e))) == bf.bimap(g1, f1).bimap(g2, f2)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Either;
//! use fantasia::typeclass::Bifunctor;
//!
//! let right: Either<String, i32> = Either::Right(21);
//! assert_eq!(right.bimap(|x| x * 2, |e: String| e.len()), Either::Right(42));
//!
//! let left: Either<String, i32> = Either::Left("boom".to_string());
//! assert_eq!(left.bimap(|x| x * 2, |e| e.len()), Either::Left(4));
//! ```
//!
//! # Design Note: `FnMut` on the failure side
//!
//! `Validation` keeps an ordered sequence of errors, and the failure function
//! is applied to each of them. The failure side is therefore `FnMut`; for
//! `Either` it is called at most once.

/// A type class for two-shaped containers that can map either side.
pub trait Bifunctor<E, A> {
    /// The same container with failure type `F` and success type `B`.
    type Target<F, B>;

    /// Applies `on_success` to a success payload or `on_failure` to a failure
    /// payload. Exactly one side is touched.
    fn bimap<B, F, S, G>(self, on_success: S, on_failure: G) -> Self::Target<F, B>
    where
        S: FnOnce(A) -> B,
        G: FnMut(E) -> F;

    /// Maps the failure side only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    /// use fantasia::typeclass::Bifunctor;
    ///
    /// let left: Either<i32, String> = Either::Left(404);
    /// assert_eq!(left.map_failure(|code| format!("HTTP {code}")), Either::Left("HTTP 404".to_string()));
    /// ```
    #[inline]
    fn map_failure<F, G>(self, on_failure: G) -> Self::Target<F, A>
    where
        Self: Sized,
        G: FnMut(E) -> F,
    {
        self.bimap(|a| a, on_failure)
    }

    /// Maps the success side only.
    #[inline]
    fn map_success<B, S>(self, on_success: S) -> Self::Target<E, B>
    where
        Self: Sized,
        S: FnOnce(A) -> B,
    {
        self.bimap(on_success, |e| e)
    }
}
