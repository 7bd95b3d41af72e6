//! Property-based tests for Functor and Applicative laws.
//!
//! This module verifies that every wrapper satisfies:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//! - **Applicative Identity**: `pure(|x| x).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`

#![cfg(feature = "typeclass")]

use fnkit::code_result::CodeResult;
use fnkit::error::ErrorCode;
use fnkit::outcome::Outcome;
use fnkit::typeclass::{Applicative, Functor};
use proptest::prelude::*;
use std::io::ErrorKind;

fn error_code() -> impl Strategy<Value = ErrorCode> {
    prop::sample::select(vec![
        ErrorKind::NotFound,
        ErrorKind::PermissionDenied,
        ErrorKind::TimedOut,
        ErrorKind::Other,
    ])
    .prop_map(ErrorCode::new)
}

fn code_result() -> impl Strategy<Value = CodeResult<i32>> {
    prop_oneof![
        any::<i32>().prop_map(CodeResult::Value),
        error_code().prop_map(CodeResult::<i32>::Error),
    ]
}

fn outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    any::<Result<i32, String>>().prop_map(Outcome::from)
}

// =============================================================================
// Option<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Option<i32>
    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// CodeResult<T> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for CodeResult<i32>
    #[test]
    fn prop_code_result_identity_law(value in code_result()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for CodeResult<i32>
    #[test]
    fn prop_code_result_composition_law(value in code_result()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| i64::from(n) * 3;

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Applicative Identity for CodeResult<i32>
    #[test]
    fn prop_code_result_applicative_identity(value in code_result()) {
        let identity_function: fn(i32) -> i32 = |x| x;
        let identity = <CodeResult<()>>::pure(identity_function);
        prop_assert_eq!(identity.apply(value), value);
    }

    /// Homomorphism for CodeResult<i32>
    #[test]
    fn prop_code_result_homomorphism(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |n| n.wrapping_sub(7);
        let left = <CodeResult<()>>::pure(function).apply(<CodeResult<()>>::pure(value));
        prop_assert_eq!(left, CodeResult::Value(function(value)));
    }
}

// =============================================================================
// Outcome<T, E> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Outcome<i32, String>
    #[test]
    fn prop_outcome_identity_law(value in outcome()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    /// Composition Law for Outcome<i32, String>
    #[test]
    fn prop_outcome_composition_law(value in outcome()) {
        let function1 = |n: i32| n.to_string();
        let function2 = |s: String| s.len();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap_ref agrees with fmap and leaves the source untouched
    #[test]
    fn prop_outcome_fmap_ref_matches_fmap(value in outcome()) {
        let by_ref = value.fmap_ref(|n| n.wrapping_neg());
        let by_value = value.clone().fmap(i32::wrapping_neg);
        prop_assert_eq!(by_ref, by_value);
    }

    /// map2 keeps the leftmost error
    #[test]
    fn prop_outcome_map2_leftmost_error(first in outcome(), second in outcome()) {
        let combined = first.clone().map2(second.clone(), |a, b| a.wrapping_add(b));
        let expected = match (first, second) {
            (Outcome::Ok(a), Outcome::Ok(b)) => Outcome::Ok(a.wrapping_add(b)),
            (Outcome::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        };
        prop_assert_eq!(combined, expected);
    }
}
