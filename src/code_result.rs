//! `CodeResult` - a value or an error code.
//!
//! `CodeResult<T>` holds either a value of type `T` or an [`ErrorCode`].
//! Exactly one alternative is active at any time; the default value activates
//! the value alternative with `T::default()`.
//!
//! Combinators short-circuit by propagating the stored error code:
//!
//! ```rust
//! use fnkit::code_result::CodeResult;
//! use fnkit::error::ErrorCode;
//! use std::io::ErrorKind;
//!
//! fn times_by_two(value: i32) -> CodeResult<i32> {
//!     CodeResult::Value(value * 2)
//! }
//!
//! fn refuse(_: i32) -> CodeResult<i32> {
//!     CodeResult::Error(ErrorCode::new(ErrorKind::InvalidInput))
//! }
//!
//! let one = CodeResult::Value(1);
//! assert_eq!((one | times_by_two | times_by_two).value(), &4);
//!
//! let failed = CodeResult::Value(1) | refuse | times_by_two;
//! assert_eq!(failed.error_code(), Some(ErrorCode::new(ErrorKind::InvalidInput)));
//! ```

use std::fmt;
use std::ops::BitOr;

use crate::error::{ErrorCode, UnwrapError};
use crate::outcome::Outcome;

/// A value of type `T` or an [`ErrorCode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeResult<T> {
    /// The value alternative.
    Value(T),
    /// The error-code alternative.
    Error(ErrorCode),
}

impl<T> CodeResult<T> {
    /// Returns `true` if the value alternative is active.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the stored error code, or `None` if a value is held.
    #[inline]
    pub const fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Value(_) => None,
            Self::Error(code) => Some(*code),
        }
    }

    /// Borrows the stored value.
    ///
    /// # Panics
    ///
    /// Panics if an error code is held. Check [`has_value`](Self::has_value)
    /// or use [`match_with`](Self::match_with) first.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Error(code) => panic!("called `CodeResult::value()` on an error: {code}"),
        }
    }

    /// Borrows the stored value, or returns an [`UnwrapError`] carrying the
    /// error code.
    ///
    /// # Errors
    ///
    /// Returns the stored error code wrapped in an [`UnwrapError`] if no value is held.
    #[inline]
    pub fn try_value(&self) -> Result<&T, UnwrapError<ErrorCode>> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(code) => Err(UnwrapError::new("CodeResult::value()", *code)),
        }
    }

    /// Returns the stored value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if an error code is held.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(code) => panic!("called `CodeResult::unwrap()` on an error: {code}"),
        }
    }

    /// Returns the stored value, or `fallback` if an error code is held.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => fallback,
        }
    }

    /// Converts into `Option<T>`, discarding an error code.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Replaces the contents with a value.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Replaces the contents with an error code.
    #[inline]
    pub fn set_error(&mut self, code: ErrorCode) {
        *self = Self::Error(code);
    }

    /// Exchanges the contents of two results.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Dispatches to exactly one callback based on the active alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::code_result::CodeResult;
    ///
    /// let result: CodeResult<i32> = CodeResult::default();
    /// let flag = result.match_with(|_| 1, |_| 2);
    /// assert_eq!(flag, 1);
    /// ```
    #[inline]
    pub fn match_with<R, OnValue, OnError>(self, on_value: OnValue, on_error: OnError) -> R
    where
        OnValue: FnOnce(T) -> R,
        OnError: FnOnce(ErrorCode) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Error(code) => on_error(code),
        }
    }

    /// Transforms the value, passing an error code through unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> CodeResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => CodeResult::Value(function(value)),
            Self::Error(code) => CodeResult::Error(code),
        }
    }

    /// Monadic bind: returns `function(value)` as-is, or propagates the error
    /// code without calling `function`.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> CodeResult<U>
    where
        F: FnOnce(T) -> CodeResult<U>,
    {
        match self {
            Self::Value(value) => function(value),
            Self::Error(code) => CodeResult::Error(code),
        }
    }

    /// Borrows the stored value.
    #[inline]
    pub const fn as_ref(&self) -> CodeResult<&T> {
        match self {
            Self::Value(value) => CodeResult::Value(value),
            Self::Error(code) => CodeResult::Error(*code),
        }
    }
}

impl<T: Default> Default for CodeResult<T> {
    /// The value alternative holding `T::default()`.
    fn default() -> Self {
        Self::Value(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for CodeResult<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Error(code) => formatter.debug_tuple("Error").field(code).finish(),
        }
    }
}

impl<T> From<ErrorCode> for CodeResult<T> {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        Self::Error(code)
    }
}

impl<T> From<Result<T, ErrorCode>> for CodeResult<T> {
    #[inline]
    fn from(result: Result<T, ErrorCode>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(code) => Self::Error(code),
        }
    }
}

impl<T> From<CodeResult<T>> for Result<T, ErrorCode> {
    #[inline]
    fn from(result: CodeResult<T>) -> Self {
        match result {
            CodeResult::Value(value) => Ok(value),
            CodeResult::Error(code) => Err(code),
        }
    }
}

impl<T> From<CodeResult<T>> for Outcome<T, ErrorCode> {
    #[inline]
    fn from(result: CodeResult<T>) -> Self {
        match result {
            CodeResult::Value(value) => Self::Ok(value),
            CodeResult::Error(code) => Self::Err(code),
        }
    }
}

impl<T, U, F> BitOr<F> for CodeResult<T>
where
    F: FnOnce(T) -> CodeResult<U>,
{
    type Output = CodeResult<U>;

    /// `result | function` is `result.bind(function)`.
    #[inline]
    fn bitor(self, function: F) -> Self::Output {
        self.bind(function)
    }
}
