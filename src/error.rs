//! Error values used by the wrapper types.
//!
//! - [`ErrorCode`]: the opaque error code stored by [`CodeResult`](crate::code_result::CodeResult)
//! - [`EmptyAccessError`]: reported by the checked accessor of an absent optional
//! - [`UnwrapError`]: carries the unexpected payload of a failed `try_unwrap`
//!
//! # Examples
//!
//! ```rust
//! use fnkit::error::ErrorCode;
//! use std::io::ErrorKind;
//!
//! let code = ErrorCode::new(ErrorKind::NotFound);
//! assert_eq!(code, ErrorCode::from(ErrorKind::NotFound));
//! assert_eq!(code.kind(), ErrorKind::NotFound);
//! ```

use std::io;

/// An opaque, equality-comparable error code.
///
/// Built from the platform error enumeration ([`io::ErrorKind`]) or from a raw
/// OS error number. Two codes are equal when both the kind and the raw number
/// (if any) are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ErrorCode {
    kind: io::ErrorKind,
    raw_os_error: Option<i32>,
}

impl ErrorCode {
    /// Creates an error code from an [`io::ErrorKind`].
    #[inline]
    pub const fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            raw_os_error: None,
        }
    }

    /// Creates an error code from a raw OS error number.
    ///
    /// The kind is resolved by the platform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::error::ErrorCode;
    ///
    /// let code = ErrorCode::from_raw_os_error(2);
    /// assert_eq!(code.raw_os_error(), Some(2));
    /// ```
    pub fn from_raw_os_error(code: i32) -> Self {
        Self {
            kind: io::Error::from_raw_os_error(code).kind(),
            raw_os_error: Some(code),
        }
    }

    /// Returns the error kind.
    #[inline]
    pub const fn kind(&self) -> io::ErrorKind {
        self.kind
    }

    /// Returns the raw OS error number, if the code was built from one.
    #[inline]
    pub const fn raw_os_error(&self) -> Option<i32> {
        self.raw_os_error
    }
}

impl From<io::ErrorKind> for ErrorCode {
    #[inline]
    fn from(kind: io::ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<&io::Error> for ErrorCode {
    fn from(error: &io::Error) -> Self {
        Self {
            kind: error.kind(),
            raw_os_error: error.raw_os_error(),
        }
    }
}

impl From<io::Error> for ErrorCode {
    fn from(error: io::Error) -> Self {
        Self::from(&error)
    }
}

/// Returned by [`OptionalExt::value`](crate::optional::OptionalExt::value) when
/// the optional holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("attempted to access the value of an empty optional")]
pub struct EmptyAccessError;

/// A failed unwrap, carrying the payload of the alternative that was active
/// instead of the requested one.
///
/// Calling `try_unwrap` on an `Err` yields an `UnwrapError` holding the error
/// payload; calling `try_unwrap_err` on an `Ok` yields one holding the ok payload.
///
/// # Examples
///
/// ```rust
/// use fnkit::outcome::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::Err("boom".to_string());
/// let error = outcome.try_unwrap().unwrap_err();
/// assert_eq!(error.payload(), "boom");
/// assert_eq!(error.into_payload(), "boom".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("called `{operation}` on the wrong alternative: {payload:?}")]
pub struct UnwrapError<P> {
    operation: &'static str,
    payload: P,
}

impl<P> UnwrapError<P> {
    /// Creates an unwrap error for `operation` carrying `payload`.
    #[inline]
    pub const fn new(operation: &'static str, payload: P) -> Self {
        Self { operation, payload }
    }

    /// The name of the operation that failed.
    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// A reference to the carried payload.
    #[inline]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the error and returns the carried payload.
    #[inline]
    pub fn into_payload(self) -> P {
        self.payload
    }
}
