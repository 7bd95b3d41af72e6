//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `flat_map`: the next step receives the
//! held value and decides the next wrapper itself. The first absent value or
//! error stops the chain, and no later step runs.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::outcome::Outcome;
//! use fnkit::typeclass::Monad;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     Outcome::from(text.parse::<i32>().map_err(|_| format!("not a number: {text}")))
//! }
//!
//! let doubled = parse("21").flat_map(|n| Outcome::Ok(n * 2));
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let failed = parse("x").flat_map(|n| Outcome::Ok(n * 2));
//! assert_eq!(failed, Outcome::Err("not a number: x".to_string()));
//! ```

use super::applicative::Applicative;
use crate::code_result::CodeResult;
use crate::outcome::Outcome;

/// A type class for wrappers whose computations can be chained.
pub trait Monad: Applicative {
    /// Chains a computation that returns the same wrapper.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the held value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for CodeResult<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> CodeResult<B>
    where
        F: FnOnce(T) -> CodeResult<B>,
    {
        self.bind(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rstest::rstest;
    use std::cell::Cell;
    use std::io::ErrorKind;

    fn halve(value: i32) -> Option<i32> {
        (value % 2 == 0).then_some(value / 2)
    }

    #[rstest]
    #[case(Some(8), Some(2))]
    #[case(Some(6), None)]
    #[case(None, None)]
    fn option_flat_map_chain(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.flat_map(halve).flat_map(halve), expected);
    }

    #[rstest]
    fn code_result_flat_map_skips_after_error() {
        let calls = Cell::new(0);
        let result: CodeResult<i32> = CodeResult::Error(ErrorCode::new(ErrorKind::Interrupted));
        let chained = result.flat_map(|n| {
            calls.set(calls.get() + 1);
            CodeResult::Value(n + 1)
        });
        assert!(!chained.has_value());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn outcome_then_discards_value() {
        let first: Outcome<i32, String> = Outcome::Ok(1);
        assert_eq!(first.then(Outcome::Ok("next")), Outcome::Ok("next"));

        let failed: Outcome<i32, String> = Outcome::Err("stop".to_string());
        assert_eq!(failed.then(Outcome::Ok("next")), Outcome::Err("stop".to_string()));
    }
}
