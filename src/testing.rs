//! Testing utilities for code built on [`DataResult`](crate::DataResult)
//!
//! Assertion macros for the two variants and, behind the `proptest` feature,
//! an `Arbitrary` instance generating both variants.
//!
//! # Examples
//!
//! ```rust
//! use confluence::{assert_failure, assert_success, DataResult};
//!
//! let success = DataResult::<_, String>::success(42);
//! assert_success!(success);
//!
//! let failure = DataResult::<i32, _>::failure("error".to_string());
//! assert_failure!(failure);
//! ```

/// Assert that a result is a `Success`.
///
/// Panics with the failure payload otherwise.
///
/// # Example
///
/// ```rust
/// use confluence::{assert_success, DataResult};
///
/// let result = DataResult::<_, String>::success(42);
/// assert_success!(result);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        match $result {
            $crate::DataResult::Success(_) => {}
            $crate::DataResult::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a result is a `Failure`.
///
/// Panics with the success payload otherwise.
///
/// # Example
///
/// ```rust
/// use confluence::{assert_failure, DataResult};
///
/// let result = DataResult::<i32, _>::failure("error".to_string());
/// assert_failure!(result);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        match $result {
            $crate::DataResult::Failure(_) => {}
            $crate::DataResult::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a result is a `Failure` carrying a specific error.
///
/// # Example
///
/// ```rust
/// use confluence::{assert_failure_with, DataResult};
///
/// let result = DataResult::<i32, _>::failure("bad input");
/// assert_failure_with!(result, "bad input");
/// ```
#[macro_export]
macro_rules! assert_failure_with {
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::DataResult::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::DataResult::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::DataResult;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for DataResult<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(DataResult::success),
            any_with::<E>(e_params).prop_map(DataResult::failure),
        ]
        .boxed()
    }
}
