//! Non-empty ordered sequences.
//!
//! [`NonEmptyVec`] is the error payload of `Validation::Failure`. Holding the
//! first element outside the `Vec` makes an empty failure unrepresentable,
//! and its [`Semigroup`] instance (ordered concatenation) is what
//! `Validation::ap` uses to accumulate independent failures.

use std::fmt;
use std::iter::{Chain, Once, once};
use std::slice;
use std::vec;

use super::error::EmptySequenceError;
use crate::typeclass::Semigroup;

/// An ordered sequence with at least one element.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::NonEmptyVec;
/// use fantasia::typeclass::Semigroup;
///
/// let errors = NonEmptyVec::singleton("tax").combine(NonEmptyVec::new("discount", vec!["total"]));
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.head(), &"tax");
/// assert_eq!(errors.into_vec(), vec!["tax", "discount", "total"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a sequence from its first element and the rest.
    #[inline]
    pub const fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Creates a one-element sequence.
    #[inline]
    pub const fn singleton(head: T) -> Self {
        Self::new(head, Vec::new())
    }

    /// Returns `None` when `elements` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::<i32>::from_vec(vec![]).is_none());
    /// assert_eq!(NonEmptyVec::from_vec(vec![1, 2]).map(|v| v.len()), Some(2));
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Option<Self> {
        let mut elements = elements.into_iter();
        let head = elements.next()?;
        Some(Self::new(head, elements.collect()))
    }

    /// Returns the first element.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns every element after the first.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the number of elements, always at least one.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`; present for API symmetry with `Vec`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element at the end.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.tail.push(element);
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> Chain<Once<&T>, slice::Iter<'_, T>> {
        once(&self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element, keeping the order.
    pub fn map<U, F>(self, mut function: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = function(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Converts into a `Vec` with the same order.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }

    /// Renders every element, separated by `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::NonEmptyVec;
    ///
    /// let errors = NonEmptyVec::new("too low", vec!["too cheap"]);
    /// assert_eq!(errors.join_with("; "), "too low; too cheap");
    /// ```
    pub fn join_with(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = EmptySequenceError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(elements).ok_or(EmptySequenceError {
            context: "NonEmptyVec::try_from",
        })
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(sequence: NonEmptyVec<T>) -> Self {
        sequence.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = Chain<Once<&'a T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.join_with(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn singleton_has_one_element() {
        let sequence = NonEmptyVec::singleton(7);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.head(), &7);
        assert_eq!(sequence.last(), &7);
        assert!(sequence.tail().is_empty());
        assert!(!sequence.is_empty());
    }

    #[rstest]
    fn combine_concatenates_in_order() {
        let combined = NonEmptyVec::new(1, vec![2]).combine(NonEmptyVec::new(3, vec![4, 5]));
        assert_eq!(combined.into_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn combine_is_associative() {
        let a = NonEmptyVec::singleton("a");
        let b = NonEmptyVec::new("b", vec!["c"]);
        let c = NonEmptyVec::singleton("d");
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![1], Some(1))]
    #[case(vec![1, 2, 3], Some(3))]
    fn from_vec_rejects_only_empty(#[case] input: Vec<i32>, #[case] expected_len: Option<usize>) {
        assert_eq!(NonEmptyVec::from_vec(input).map(|sequence| sequence.len()), expected_len);
    }

    #[rstest]
    fn try_from_reports_context() {
        let error = NonEmptyVec::<i32>::try_from(Vec::new()).unwrap_err();
        assert_eq!(error.context, "NonEmptyVec::try_from");
    }

    #[rstest]
    fn push_and_iterate() {
        let mut sequence = NonEmptyVec::singleton(1);
        sequence.push(2);
        let collected: Vec<_> = sequence.iter().copied().collect();
        assert_eq!(collected, vec![1, 2]);
        let owned: Vec<_> = sequence.into_iter().collect();
        assert_eq!(owned, vec![1, 2]);
    }

    #[rstest]
    fn map_keeps_order() {
        let mapped = NonEmptyVec::new(1, vec![2, 3]).map(|n| n * 10);
        assert_eq!(Vec::from(mapped), vec![10, 20, 30]);
    }

    #[rstest]
    fn display_joins_with_comma() {
        assert_eq!(NonEmptyVec::new("e1", vec!["e2"]).to_string(), "e1, e2");
    }
}
