//! Applicative type class - combining independent wrappers.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lifting a plain value into the wrapper
//! - `map2` / `map3`: combining several wrappers with one function
//! - `apply`: applying a wrapped function to a wrapped value
//!
//! When several operands hold errors, the leftmost error wins: `map2` reports
//! `self`'s error before `other`'s.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::outcome::Outcome;
//! use fnkit::typeclass::Applicative;
//!
//! let lifted: Outcome<i32, String> = <Outcome<(), String>>::pure(42);
//! assert_eq!(lifted, Outcome::Ok(42));
//!
//! let first: Outcome<i32, String> = Outcome::Ok(1);
//! let second: Outcome<i32, String> = Outcome::Err("missing".to_string());
//! assert_eq!(first.map2(second, |x, y| x + y), Outcome::Err("missing".to_string()));
//! ```

use super::functor::Functor;
use crate::code_result::CodeResult;
use crate::outcome::Outcome;

/// A type class for wrappers that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a plain value into the wrapper.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two wrappers with a binary function.
    ///
    /// The function runs only when both hold a value.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three wrappers with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the held values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the held function to the value held by `other`.
    ///
    /// An error held by `self` (the function side) is reported first.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// CodeResult<T> Implementation
// =============================================================================

impl<T> Applicative for CodeResult<T> {
    #[inline]
    fn pure<B>(value: B) -> CodeResult<B> {
        CodeResult::Value(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: CodeResult<B>, function: F) -> CodeResult<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (CodeResult::Value(a), CodeResult::Value(b)) => CodeResult::Value(function(a, b)),
            (CodeResult::Error(code), _) | (_, CodeResult::Error(code)) => CodeResult::Error(code),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: CodeResult<B>,
        third: CodeResult<C>,
        function: F,
    ) -> CodeResult<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (CodeResult::Value(a), CodeResult::Value(b), CodeResult::Value(c)) => {
                CodeResult::Value(function(a, b, c))
            }
            (CodeResult::Error(code), _, _)
            | (_, CodeResult::Error(code), _)
            | (_, _, CodeResult::Error(code)) => CodeResult::Error(code),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: CodeResult<B>) -> CodeResult<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => Outcome::Ok(function(a, b)),
            (Outcome::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Outcome::Ok(a), Outcome::Ok(b), Outcome::Ok(c)) => Outcome::Ok(function(a, b, c)),
            (Outcome::Err(error), _, _)
            | (_, Outcome::Err(error), _)
            | (_, _, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
