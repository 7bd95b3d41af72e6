//! Outcome type - a success payload or a typed error payload.
//!
//! This module provides the `Outcome<T, E>` type, which is either `Ok(T)` or
//! `Err(E)`. Exactly one alternative is active at any time. Unlike
//! [`CodeResult`](crate::code_result::CodeResult), the error side is not
//! restricted to a single error type.
//!
//! The method surface covers:
//!
//! - Querying the active alternative (`is_ok`, `is_err`, `is_ok_and`, `is_err_and`)
//! - Extraction (`unwrap`, `unwrap_err`, `try_unwrap`, `unwrap_or`, ...)
//! - Transformation of either side (`map`, `map_err`, `map_or`, `map_or_else`)
//! - Chaining (`and_then`, `or_else`, and the `|` operator)
//! - Projections (`as_ref`, `as_mut`, `cloned`, `copied`)
//!
//! # Examples
//!
//! ```rust
//! use fnkit::outcome::Outcome;
//!
//! fn times_by_two(value: i32) -> Outcome<i32, String> {
//!     Outcome::Ok(value * 2)
//! }
//!
//! fn times_by_three(value: i32) -> Outcome<i32, String> {
//!     Outcome::Ok(value * 3)
//! }
//!
//! let start: Outcome<i32, String> = Outcome::Ok(1);
//! let result = start | times_by_two | times_by_three;
//! assert_eq!(result.unwrap(), 6);
//! ```
//!
//! # Moving out of a borrowed outcome
//!
//! Binding through `&mut Outcome` moves the active payload into the function
//! and leaves the payload type's default behind, keeping the same alternative:
//!
//! ```rust
//! use fnkit::outcome::Outcome;
//!
//! let mut source: Outcome<String, f32> = Outcome::Ok("123".to_string());
//! let appended = &mut source | |mut text: String| {
//!     text.push('a');
//!     Outcome::<String, f32>::Ok(text)
//! };
//! assert_eq!(appended.unwrap(), "123a");
//! assert!(source.is_ok());
//! assert!(source.unwrap().is_empty());
//! ```

use std::fmt;
use std::ops::BitOr;

use crate::error::UnwrapError;

/// A value that is either a success payload or an error payload.
///
/// # Type Parameters
///
/// * `T` - The type of the ok payload
/// * `E` - The type of the err payload
///
/// # Examples
///
/// ```rust
/// use fnkit::outcome::Outcome;
///
/// let ok: Outcome<i32, f32> = Outcome::Ok(3);
/// let doubled = ok.map(|value| f64::from(value * 2));
/// assert_eq!(doubled, Outcome::Ok(6.0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success alternative.
    Ok(T),
    /// The error alternative.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Querying the active alternative
    // =========================================================================

    /// Returns `true` if the ok alternative is active.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the err alternative is active.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if the ok alternative is active and `predicate` holds on
    /// its payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, f32> = Outcome::Ok(1);
    /// assert!(ok.is_ok_and(|value| *value > 0));
    /// assert!(!ok.is_ok_and(|value| *value < 0));
    ///
    /// let err: Outcome<i32, f32> = Outcome::Err(4.0);
    /// assert!(!err.is_ok_and(|value| *value > 0));
    /// ```
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the err alternative is active and `predicate` holds on
    /// its payload.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Converts into `Option<T>`, discarding an error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding a success.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Returns the ok payload.
    ///
    /// # Panics
    ///
    /// Panics if the err alternative is active. The panic message carries the
    /// err payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::Ok(3);
    /// assert_eq!(ok.unwrap(), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use fnkit::outcome::Outcome;
    ///
    /// let err: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// err.unwrap(); // panics carrying "boom"
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}"),
        }
    }

    /// Returns the err payload.
    ///
    /// # Panics
    ///
    /// Panics if the ok alternative is active. The panic message carries the
    /// ok payload.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("called `Outcome::unwrap_err()` on an `Ok` value: {value:?}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the ok payload, or an [`UnwrapError`] carrying the err payload.
    ///
    /// This is the recoverable form of [`unwrap`](Self::unwrap).
    ///
    /// # Errors
    ///
    /// Returns the err payload wrapped in an [`UnwrapError`] if the err
    /// alternative is active.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::new("Outcome::unwrap()", error)),
        }
    }

    /// Returns the err payload, or an [`UnwrapError`] carrying the ok payload.
    ///
    /// # Errors
    ///
    /// Returns the ok payload wrapped in an [`UnwrapError`] if the ok
    /// alternative is active.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError<T>> {
        match self {
            Self::Ok(value) => Err(UnwrapError::new("Outcome::unwrap_err()", value)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the ok payload, or `fallback` if the err alternative is active.
    ///
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let err: Outcome<i32, f32> = Outcome::Err(3.0);
    /// assert_eq!(err.unwrap_or(23), 23);
    ///
    /// let ok: Outcome<i32, f32> = Outcome::Ok(3);
    /// assert_eq!(ok.unwrap_or(23), 3);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the ok payload, or computes one from the err payload.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Dispatches to exactly one of the callbacks based on the active
    /// alternative and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let err: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// let flag = err.match_with(|_| 1, |_| 2);
    /// assert_eq!(flag, 2);
    /// ```
    #[inline]
    pub fn match_with<R, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Like [`match_with`](Self::match_with), but borrows the payload.
    #[inline]
    pub fn match_ref<R, OnOk, OnErr>(&self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(&T) -> R,
        OnErr: FnOnce(&E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the ok payload, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the err payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let err: Outcome<i32, f32> = Outcome::Err(3.0);
    /// assert_eq!(err.map_err(|value| value * 2.0).unwrap_err(), 6.0);
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Transforms whichever payload is active.
    #[inline]
    pub fn bimap<U, G, F, H>(self, ok_function: F, err_function: H) -> Outcome<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_function(value)),
            Self::Err(error) => Outcome::Err(err_function(error)),
        }
    }

    /// Applies `function` to the ok payload and extracts the ok payload of its
    /// result, falling back to `default` if either step holds an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let double = |value: i32| Outcome::<f64, f32>::Ok(f64::from(2 * value));
    ///
    /// let ok: Outcome<i32, f32> = Outcome::Ok(3);
    /// assert_eq!(ok.map_or(22.3, double), 6.0);
    ///
    /// let err: Outcome<i32, f32> = Outcome::Err(3.0);
    /// assert_eq!(err.map_or(22.3, double), 22.3);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value).unwrap_or(default),
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to the ok payload and extracts the ok payload of its
    /// result; an error from either step is handed to `on_err`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_err: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value).unwrap_or_else(on_err),
            Self::Err(error) => on_err(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Monadic bind on the ok side.
    ///
    /// Returns `function(value)` as-is for `Ok(value)`; an error is re-wrapped
    /// at the function's result type without calling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let times_by_two = |value: i32| Outcome::<i32, String>::Ok(value * 2);
    /// let times_by_three = |value: i32| Outcome::<i32, String>::Ok(value * 3);
    ///
    /// let ok: Outcome<i32, String> = Outcome::Ok(3);
    /// assert_eq!(ok.and_then(times_by_two).and_then(times_by_three).unwrap(), 18);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Monadic bind on the err side.
    ///
    /// Returns `function(error)` as-is for `Err(error)`; a success is
    /// re-wrapped at the function's result type without calling it.
    #[inline]
    pub fn or_else<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Borrows the active payload.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows the active payload.
    ///
    /// Writing through the projection mutates `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let mut outcome: Outcome<i32, String> = Outcome::Ok(3);
    /// if let Outcome::Ok(value) = outcome.as_mut() {
    ///     *value = 22;
    /// }
    /// assert_eq!(outcome.unwrap(), 22);
    /// ```
    #[inline]
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replaces the contents with `Ok(value)`.
    #[inline]
    pub fn set_ok(&mut self, value: T) {
        *self = Self::Ok(value);
    }

    /// Replaces the contents with `Err(error)`.
    #[inline]
    pub fn set_err(&mut self, error: E) {
        *self = Self::Err(error);
    }

    /// Exchanges the contents of two outcomes.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Moves the active payload out, leaving the payload type's default in
    /// place under the same alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let mut source: Outcome<String, u8> = Outcome::Ok("abc".to_string());
    /// let taken = source.take();
    /// assert_eq!(taken, Outcome::Ok("abc".to_string()));
    /// assert_eq!(source, Outcome::Ok(String::new()));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self
    where
        T: Default,
        E: Default,
    {
        match self {
            Self::Ok(value) => Self::Ok(std::mem::take(value)),
            Self::Err(error) => Self::Err(std::mem::take(error)),
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the ok payload, or `T::default()` if the err alternative is active.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

// =============================================================================
// Owned copies of reference projections
// =============================================================================

impl<T: Clone, E: Clone> Outcome<&T, &E> {
    /// Produces an owned outcome by cloning the borrowed payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::outcome::Outcome;
    ///
    /// let source: Outcome<String, f32> = Outcome::Ok("text".to_string());
    /// let copy = source.as_ref().cloned();
    /// assert_eq!(copy, source);
    /// ```
    #[inline]
    pub fn cloned(self) -> Outcome<T, E> {
        self.bimap(T::clone, E::clone)
    }
}

impl<T: Copy, E: Copy> Outcome<&T, &E> {
    /// Produces an owned outcome by copying the borrowed payload.
    #[inline]
    pub fn copied(self) -> Outcome<T, E> {
        self.bimap(|value| *value, |error| *error)
    }
}

impl<T: Clone, E: Clone> Outcome<&mut T, &mut E> {
    /// Produces an owned outcome by cloning the borrowed payload.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E> {
        self.bimap(|value| value.clone(), |error| error.clone())
    }
}

impl<T: Copy, E: Copy> Outcome<&mut T, &mut E> {
    /// Produces an owned outcome by copying the borrowed payload.
    #[inline]
    pub fn copied(self) -> Outcome<T, E> {
        self.bimap(|value| *value, |error| *error)
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T: Default, E> Default for Outcome<T, E> {
    /// The ok alternative holding `T::default()`.
    fn default() -> Self {
        Self::Ok(T::default())
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

// =============================================================================
// Infix bind
// =============================================================================

impl<T, E, U, F> BitOr<F> for Outcome<T, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    type Output = Outcome<U, E>;

    /// `outcome | function` is `outcome.and_then(function)`.
    #[inline]
    fn bitor(self, function: F) -> Self::Output {
        self.and_then(function)
    }
}

impl<T, E, U, F> BitOr<F> for &mut Outcome<T, E>
where
    T: Default,
    E: Default,
    F: FnOnce(T) -> Outcome<U, E>,
{
    type Output = Outcome<U, E>;

    /// Moves the payload out of the borrowed outcome, then binds.
    #[inline]
    fn bitor(self, function: F) -> Self::Output {
        self.take().and_then(function)
    }
}

/// Free-function form of [`Outcome::match_with`].
///
/// # Examples
///
/// ```rust
/// use fnkit::outcome::{self, Outcome};
///
/// let ok: Outcome<i32, String> = Outcome::default();
/// assert_eq!(outcome::fold(ok, |_| 1, |_| 2), 1);
/// ```
#[inline]
pub fn fold<T, E, R, OnOk, OnErr>(outcome: Outcome<T, E>, on_ok: OnOk, on_err: OnErr) -> R
where
    OnOk: FnOnce(T) -> R,
    OnErr: FnOnce(E) -> R,
{
    outcome.match_with(on_ok, on_err)
}
