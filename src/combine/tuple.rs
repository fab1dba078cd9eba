//! Fixed-arity combine over heterogeneous tuples
//!
//! [`CombineTuple`] lifts the combine algebra onto tuples of two to six
//! results with independently-typed success values and a shared error type.
//! The tuple forms must be semantically identical to the arbitrary-arity
//! collection forms applied to the same inputs in the same order; the error
//! list handed to the reducer preserves input order either way.

use crate::{DataResult, NonEmptyVec, Semigroup};

/// Wrap each error into a one-element list so errors can accumulate pairwise.
fn seed<T, E>(result: DataResult<T, E>) -> DataResult<T, NonEmptyVec<E>> {
    match result {
        DataResult::Success(value) => DataResult::Success(value),
        DataResult::Failure(error) => DataResult::Failure(NonEmptyVec::singleton(error)),
    }
}

/// Pair two seeded results, concatenating error lists left to right.
fn and<A, B, E>(
    left: DataResult<A, NonEmptyVec<E>>,
    right: DataResult<B, NonEmptyVec<E>>,
) -> DataResult<(A, B), NonEmptyVec<E>> {
    match (left, right) {
        (DataResult::Success(a), DataResult::Success(b)) => DataResult::Success((a, b)),
        (DataResult::Failure(e1), DataResult::Failure(e2)) => DataResult::Failure(e1.combine(e2)),
        (DataResult::Failure(e), _) => DataResult::Failure(e),
        (_, DataResult::Failure(e)) => DataResult::Failure(e),
    }
}

/// Combine a heterogeneous tuple of results sharing one error type.
///
/// Implemented for tuples of arity 2 through 6. The success transform
/// receives the tuple of values `(T1, .., Tn)`; the error transform receives
/// the non-empty list of errors from the failed slots, in declaration order.
///
/// # Examples
///
/// ```
/// use confluence::{CombineTuple, DataResult};
///
/// let result = (
///     DataResult::<i32, String>::success(1),
///     DataResult::<&str, String>::success("two"),
/// )
///     .combine_first(|(n, s)| format!("{n}-{s}"));
///
/// assert_eq!(result, DataResult::Success("1-two".to_string()));
/// ```
pub trait CombineTuple<E>: Sized {
    /// The tuple of success values when every slot succeeded.
    type Values;

    /// Combine with result-returning transforms; see
    /// [`combine::flat_combine`](crate::combine::flat_combine).
    fn flat_combine<R, F, TE, TV>(self, transform_errors: TE, transform_values: TV) -> DataResult<R, F>
    where
        TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
        TV: FnOnce(Self::Values) -> DataResult<R, F>;

    /// Combine with plain-value transforms, auto-wrapped into
    /// `failure(..)` / `success(..)`.
    fn combine<R, F, TE, TV>(self, transform_errors: TE, transform_values: TV) -> DataResult<R, F>
    where
        TE: FnOnce(NonEmptyVec<E>) -> F,
        TV: FnOnce(Self::Values) -> R,
    {
        self.flat_combine(
            |errors| DataResult::failure(transform_errors(errors)),
            |values| DataResult::success(transform_values(values)),
        )
    }

    /// Combine under the canonical first-error policy.
    fn combine_first<R, TV>(self, transform_values: TV) -> DataResult<R, E>
    where
        TV: FnOnce(Self::Values) -> R,
    {
        self.combine(NonEmptyVec::into_head, transform_values)
    }
}

// Macro to implement CombineTuple for tuples of different sizes
macro_rules! impl_combine_tuple {
    // Two elements
    ($T1:ident, $T2:ident) => {
        impl<E, $T1, $T2> CombineTuple<E> for (DataResult<$T1, E>, DataResult<$T2, E>) {
            type Values = ($T1, $T2);

            #[allow(non_snake_case)]
            fn flat_combine<R, F, TE, TV>(
                self,
                transform_errors: TE,
                transform_values: TV,
            ) -> DataResult<R, F>
            where
                TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
                TV: FnOnce(Self::Values) -> DataResult<R, F>,
            {
                let ($T1, $T2) = self;
                and(seed($T1), seed($T2))
                    .fold(transform_values, transform_errors)
            }
        }
    };

    // Three elements
    ($T1:ident, $T2:ident, $T3:ident) => {
        impl<E, $T1, $T2, $T3> CombineTuple<E>
            for (DataResult<$T1, E>, DataResult<$T2, E>, DataResult<$T3, E>)
        {
            type Values = ($T1, $T2, $T3);

            #[allow(non_snake_case)]
            fn flat_combine<R, F, TE, TV>(
                self,
                transform_errors: TE,
                transform_values: TV,
            ) -> DataResult<R, F>
            where
                TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
                TV: FnOnce(Self::Values) -> DataResult<R, F>,
            {
                let ($T1, $T2, $T3) = self;
                and(and(seed($T1), seed($T2)), seed($T3))
                    .map(|((a, b), c)| (a, b, c))
                    .fold(transform_values, transform_errors)
            }
        }
    };

    // Four elements
    ($T1:ident, $T2:ident, $T3:ident, $T4:ident) => {
        impl<E, $T1, $T2, $T3, $T4> CombineTuple<E>
            for (
                DataResult<$T1, E>,
                DataResult<$T2, E>,
                DataResult<$T3, E>,
                DataResult<$T4, E>,
            )
        {
            type Values = ($T1, $T2, $T3, $T4);

            #[allow(non_snake_case)]
            fn flat_combine<R, F, TE, TV>(
                self,
                transform_errors: TE,
                transform_values: TV,
            ) -> DataResult<R, F>
            where
                TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
                TV: FnOnce(Self::Values) -> DataResult<R, F>,
            {
                let ($T1, $T2, $T3, $T4) = self;
                and(and(and(seed($T1), seed($T2)), seed($T3)), seed($T4))
                    .map(|(((a, b), c), d)| (a, b, c, d))
                    .fold(transform_values, transform_errors)
            }
        }
    };

    // Five elements
    ($T1:ident, $T2:ident, $T3:ident, $T4:ident, $T5:ident) => {
        impl<E, $T1, $T2, $T3, $T4, $T5> CombineTuple<E>
            for (
                DataResult<$T1, E>,
                DataResult<$T2, E>,
                DataResult<$T3, E>,
                DataResult<$T4, E>,
                DataResult<$T5, E>,
            )
        {
            type Values = ($T1, $T2, $T3, $T4, $T5);

            #[allow(non_snake_case)]
            fn flat_combine<R, F, TE, TV>(
                self,
                transform_errors: TE,
                transform_values: TV,
            ) -> DataResult<R, F>
            where
                TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
                TV: FnOnce(Self::Values) -> DataResult<R, F>,
            {
                let ($T1, $T2, $T3, $T4, $T5) = self;
                and(
                    and(and(and(seed($T1), seed($T2)), seed($T3)), seed($T4)),
                    seed($T5),
                )
                .map(|((((a, b), c), d), e)| (a, b, c, d, e))
                .fold(transform_values, transform_errors)
            }
        }
    };

    // Six elements
    ($T1:ident, $T2:ident, $T3:ident, $T4:ident, $T5:ident, $T6:ident) => {
        impl<E, $T1, $T2, $T3, $T4, $T5, $T6> CombineTuple<E>
            for (
                DataResult<$T1, E>,
                DataResult<$T2, E>,
                DataResult<$T3, E>,
                DataResult<$T4, E>,
                DataResult<$T5, E>,
                DataResult<$T6, E>,
            )
        {
            type Values = ($T1, $T2, $T3, $T4, $T5, $T6);

            #[allow(non_snake_case)]
            fn flat_combine<R, F, TE, TV>(
                self,
                transform_errors: TE,
                transform_values: TV,
            ) -> DataResult<R, F>
            where
                TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
                TV: FnOnce(Self::Values) -> DataResult<R, F>,
            {
                let ($T1, $T2, $T3, $T4, $T5, $T6) = self;
                and(
                    and(
                        and(and(and(seed($T1), seed($T2)), seed($T3)), seed($T4)),
                        seed($T5),
                    ),
                    seed($T6),
                )
                .map(|(((((a, b), c), d), e), f)| (a, b, c, d, e, f))
                .fold(transform_values, transform_errors)
            }
        }
    };
}

// Generate implementations for tuples of size 2 through 6
impl_combine_tuple!(T1, T2);
impl_combine_tuple!(T1, T2, T3);
impl_combine_tuple!(T1, T2, T3, T4);
impl_combine_tuple!(T1, T2, T3, T4, T5);
impl_combine_tuple!(T1, T2, T3, T4, T5, T6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_success() {
        let result = (
            DataResult::<i32, String>::success(1),
            DataResult::<&str, String>::success("x"),
        )
            .combine_first(|(n, s)| (n, s));
        assert_eq!(result, DataResult::Success((1, "x")));
    }

    #[test]
    fn test_fail_fast_uses_first_error_in_declaration_order() {
        let result = (
            DataResult::<i32, &str>::success(1),
            DataResult::<i32, &str>::failure("x"),
            DataResult::<i32, &str>::failure("y"),
        )
            .combine_first(|(a, b, c)| a + b + c);
        assert_eq!(result, DataResult::Failure("x"));
    }

    #[test]
    fn test_error_list_preserves_input_order() {
        let result: DataResult<i32, String> = (
            DataResult::<i32, String>::failure("a".to_string()),
            DataResult::<i32, String>::success(1),
            DataResult::<i32, String>::failure("b".to_string()),
        )
            .combine(|errors| errors.into_vec().join(","), |(a, b, c)| a + b + c);
        assert_eq!(result, DataResult::Failure("a,b".to_string()));
    }

    #[test]
    fn test_matches_collection_form() {
        let tuple = (
            DataResult::<i32, &str>::failure("a"),
            DataResult::<i32, &str>::failure("b"),
        )
            .combine(|errors| errors.into_vec().join("+"), |(a, b)| a + b);

        let list: DataResult<i32, String> = crate::combine::combine(
            vec![
                DataResult::<i32, &str>::failure("a"),
                DataResult::failure("b"),
            ],
            |errors| errors.into_vec().join("+"),
            |values| values.into_iter().sum(),
        );

        assert_eq!(tuple, list);
    }

    #[test]
    fn test_six_ary() {
        let result = (
            DataResult::<i32, String>::success(1),
            DataResult::<i32, String>::success(2),
            DataResult::<i32, String>::success(3),
            DataResult::<i32, String>::success(4),
            DataResult::<i32, String>::success(5),
            DataResult::<i32, String>::success(6),
        )
            .combine_first(|(a, b, c, d, e, f)| a + b + c + d + e + f);
        assert_eq!(result, DataResult::Success(21));
    }

    #[test]
    fn test_flat_combine_chains_into_new_result() {
        let result: DataResult<i32, String> = (
            DataResult::<i32, String>::success(2),
            DataResult::<i32, String>::success(3),
        )
            .flat_combine(
                |errors| DataResult::failure(errors.into_head()),
                |(a, b)| {
                    if a < b {
                        DataResult::success(a * b)
                    } else {
                        DataResult::failure("out of order".to_string())
                    }
                },
            );
        assert_eq!(result, DataResult::Success(6));
    }
}
