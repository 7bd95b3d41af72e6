//! Functor type class - mapping over the held value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::code_result::CodeResult;
//! use fnkit::error::ErrorCode;
//! use fnkit::typeclass::Functor;
//! use std::io::ErrorKind;
//!
//! let value: CodeResult<i32> = CodeResult::Value(5);
//! assert_eq!(value.fmap(|n| n.to_string()), CodeResult::Value("5".to_string()));
//!
//! // The error code passes through unchanged
//! let failed: CodeResult<i32> = CodeResult::Error(ErrorCode::new(ErrorKind::Other));
//! assert!(!failed.fmap(|n| n.to_string()).has_value());
//! ```

use super::higher::TypeConstructor;
use crate::code_result::CodeResult;
use crate::outcome::Outcome;

/// A type class for wrappers whose held value can be transformed.
///
/// Only the value side is transformed; an absent value or an error passes
/// through with its original payload.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value, consuming the wrapper.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the held value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`, keeping the structure.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// CodeResult<T> Implementation
// =============================================================================

impl<T> Functor for CodeResult<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> CodeResult<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> CodeResult<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(function(value)),
            Outcome::Err(error) => Outcome::Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rstest::rstest;
    use std::io::ErrorKind;

    #[rstest]
    #[case(Some(5), Some(10))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn code_result_fmap_ref_keeps_source() {
        let value = CodeResult::Value(String::from("abc"));
        let length = value.fmap_ref(String::len);
        assert_eq!(length, CodeResult::Value(3));
        assert_eq!(value.value(), "abc");
    }

    #[rstest]
    fn code_result_fmap_passes_error_through() {
        let code = ErrorCode::new(ErrorKind::TimedOut);
        let failed: CodeResult<i32> = CodeResult::Error(code);
        assert_eq!(failed.fmap(|n| n + 1).error_code(), Some(code));
    }

    #[rstest]
    fn outcome_fmap_ref_clones_error() {
        let failed: Outcome<i32, String> = Outcome::Err("bad".to_string());
        assert_eq!(failed.fmap_ref(|n| n + 1), Outcome::Err("bad".to_string()));
    }

    #[rstest]
    fn outcome_replace_and_void() {
        let ok: Outcome<i32, String> = Outcome::Ok(1);
        assert_eq!(ok.clone().replace("x"), Outcome::Ok("x"));
        assert_eq!(ok.void(), Outcome::Ok(()));
    }
}
