//! Non-empty vector type for collected error lists
//!
//! This module provides `NonEmptyVec<T>`, a vector guaranteed to contain at
//! least one element. The combinators in [`combine`](crate::combine) and
//! [`merge`](crate::merge) only consult their error reducer when at least one
//! input failed, so the reducer receives a `NonEmptyVec<E>` and the canonical
//! "take the first error" policy is total: no `Option`, no panic.
//!
//! # Examples
//!
//! ```
//! use confluence::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("a", vec!["b", "c"]);
//! assert_eq!(errors.head(), &"a");
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors.into_head(), "a");
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// Used throughout the crate as the ordered list of errors collected from
/// failed inputs, in input order. `head()` and `into_head()` always succeed,
/// which is what makes the first-error reduction policy total.
///
/// # Example
///
/// ```
/// use confluence::NonEmptyVec;
///
/// let errors = NonEmptyVec::new("first", vec!["second"]);
/// assert_eq!(errors.into_vec(), vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let one = NonEmptyVec::singleton(42);
    /// assert_eq!(one.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// Get the first element (always succeeds).
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get all elements except the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Consume the vector, returning the first element.
    ///
    /// This is the canonical "fail on first error" reducer:
    ///
    /// ```
    /// use confluence::{combine, DataResult, NonEmptyVec};
    ///
    /// let result = combine::combine(
    ///     vec![
    ///         DataResult::<i32, &str>::failure("a"),
    ///         DataResult::failure("b"),
    ///     ],
    ///     NonEmptyVec::into_head,
    ///     |values| values.len(),
    /// );
    /// assert_eq!(result, DataResult::Failure("a"));
    /// ```
    pub fn into_head(self) -> T {
        self.head
    }

    /// Get the number of elements. Always `>= 1`.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; exists to satisfy the `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Map a function over all elements, preserving order.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Fold all elements into one with an associative step, left to right.
    ///
    /// Total because there is always at least the head.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let errors = NonEmptyVec::new("a".to_string(), vec!["b".to_string()]);
    /// assert_eq!(errors.reduce(|acc, e| acc + &e), "ab");
    /// ```
    pub fn reduce<F>(self, mut step: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.tail.into_iter().fold(self.head, &mut step)
    }

    /// Convert to a regular `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = vec![self.head];
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements by reference.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T: Semigroup> NonEmptyVec<T> {
    /// Fold all elements into one via their [`Semigroup`] instance.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::NonEmptyVec;
    ///
    /// let errors = NonEmptyVec::new(vec![1], vec![vec![2], vec![3]]);
    /// assert_eq!(errors.reduce_combined(), vec![1, 2, 3]);
    /// ```
    pub fn reduce_combined(self) -> T {
        self.reduce(Semigroup::combine)
    }
}

// Semigroup: concatenation
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton(42);
        assert_eq!(nev.head(), &42);
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 3]);

        assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    }

    #[test]
    fn test_into_head_is_first_in_order() {
        let nev = NonEmptyVec::new("a", vec!["b", "c"]);
        assert_eq!(nev.into_head(), "a");
    }

    #[test]
    fn test_map_preserves_order() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(nev.map(|x| x * 2).into_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_reduce() {
        let nev = NonEmptyVec::new("a".to_string(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(nev.reduce(|acc, e| acc + &e), "abc");
    }

    #[test]
    fn test_reduce_singleton() {
        let nev = NonEmptyVec::singleton(7);
        assert_eq!(nev.reduce(|a, b| a + b), 7);
    }

    #[test]
    fn test_reduce_combined() {
        let nev = NonEmptyVec::new(vec!["x"], vec![vec!["y"], vec!["z"]]);
        assert_eq!(nev.reduce_combined(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_semigroup_concat() {
        let left = NonEmptyVec::new(1, vec![2]);
        let right = NonEmptyVec::new(3, vec![4]);
        assert_eq!(left.combine(right).into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iter_and_into_iter() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(nev.iter().sum::<i32>(), 6);
        assert_eq!(nev.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
