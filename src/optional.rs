//! Checked access to the optional-value wrapper.
//!
//! [`Option<T>`] is the optional-value wrapper of this crate. The combinators
//! in [`combinator`](crate::combinator) and the type classes in
//! [`typeclass`](crate::typeclass) work on it directly; this module adds the
//! accessors that report an absent value as [`EmptyAccessError`] instead of
//! panicking.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::error::EmptyAccessError;
//! use fnkit::optional::OptionalExt;
//!
//! let present = Some(3);
//! assert_eq!(present.value(), Ok(&3));
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.value(), Err(EmptyAccessError));
//! ```

use crate::error::EmptyAccessError;

/// Checked accessors for [`Option`].
pub trait OptionalExt<T> {
    /// Borrows the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if no value is held.
    fn value(&self) -> Result<&T, EmptyAccessError>;

    /// Mutably borrows the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if no value is held.
    fn value_mut(&mut self) -> Result<&mut T, EmptyAccessError>;

    /// Moves the held value out.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if no value is held.
    fn into_value(self) -> Result<T, EmptyAccessError>;
}

impl<T> OptionalExt<T> for Option<T> {
    #[inline]
    fn value(&self) -> Result<&T, EmptyAccessError> {
        self.as_ref().ok_or(EmptyAccessError)
    }

    #[inline]
    fn value_mut(&mut self) -> Result<&mut T, EmptyAccessError> {
        self.as_mut().ok_or(EmptyAccessError)
    }

    #[inline]
    fn into_value(self) -> Result<T, EmptyAccessError> {
        self.ok_or(EmptyAccessError)
    }
}
