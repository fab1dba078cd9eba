//! Semigroup trait for associative error accumulation
//!
//! A Semigroup is a type with an associative binary operation. The combine and
//! merge algebras use it for their accumulate-all-errors conveniences
//! ([`combine_accumulated`](crate::combine::combine_accumulated)): every
//! collected error is folded into one with `combine` instead of keeping only
//! the first.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use confluence::Semigroup;
//!
//! let v1 = vec!["missing name".to_string()];
//! let v2 = vec!["bad email".to_string()];
//! assert_eq!(v1.combine(v2).len(), 2);
//!
//! let s1 = "a,".to_string();
//! let s2 = "b".to_string();
//! assert_eq!(s1.combine(s2), "a,b");
//! ```
//!
//! # Custom Implementations
//!
//! ```
//! use confluence::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct ErrorReport(Vec<String>);
//!
//! impl Semigroup for ErrorReport {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

/// A type that supports an associative binary operation.
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value; clone first if the original is still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
