//! Free-function combinators shared by every wrapper.
//!
//! The same four operations work on [`Option`], [`CodeResult`] and
//! [`Outcome`]:
//!
//! - [`fmap`]: transform the held value
//! - [`applicative`]: apply a wrapped function to a wrapped value
//! - [`mbind`]: chain a function that returns a wrapper
//! - [`pipeline!`](crate::pipeline!): a left fold of `mbind`
//!
//! An absent value or an error short-circuits: no later function runs and the
//! first absence or error is the final result.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::combinator::{applicative, fmap, mbind};
//! use fnkit::pipeline;
//!
//! let doubled = fmap(Some(2), |x| x * 2);
//! assert_eq!(doubled, Some(4));
//!
//! let applied = applicative(Some(2), Some(|x: i32| x + 1));
//! assert_eq!(applied, Some(3));
//!
//! let halve = |x: i32| (x % 2 == 0).then_some(x / 2);
//! assert_eq!(mbind(Some(8), halve), Some(4));
//! assert_eq!(pipeline!(Some(8), halve, halve, halve, halve), None);
//! ```

use crate::code_result::CodeResult;
use crate::outcome::Outcome;
use crate::typeclass::{Applicative, Functor};

pub use crate::outcome::fold;

/// Monadic bind over a wrapper, including the borrowed form of [`Outcome`].
///
/// Unlike [`Monad`](crate::typeclass::Monad), `Bind` is also implemented for
/// `&mut Outcome<T, E>`: the active payload is moved into the function and the
/// payload type's default is left behind under the same alternative.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::Bind;
/// use fnkit::outcome::Outcome;
///
/// let mut source: Outcome<Vec<i32>, String> = Outcome::Ok(vec![1, 2]);
/// let length = (&mut source).mbind(|values| Outcome::Ok(values.len()));
/// assert_eq!(length, Outcome::Ok(2));
/// assert_eq!(source, Outcome::Ok(Vec::new()));
/// ```
pub trait Bind {
    /// The held value passed to the bound function.
    type Item;

    /// The wrapper produced by binding a function that yields `U`.
    type Rebind<U>;

    /// Passes the held value to `function` and returns its result as-is, or
    /// re-wraps the absence or error without calling `function`.
    fn mbind<U, F>(self, function: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Item) -> Self::Rebind<U>;
}

impl<T> Bind for Option<T> {
    type Item = T;
    type Rebind<U> = Option<U>;

    #[inline]
    fn mbind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(function)
    }
}

impl<T> Bind for CodeResult<T> {
    type Item = T;
    type Rebind<U> = CodeResult<U>;

    #[inline]
    fn mbind<U, F>(self, function: F) -> CodeResult<U>
    where
        F: FnOnce(T) -> CodeResult<U>,
    {
        self.bind(function)
    }
}

impl<T, E> Bind for Outcome<T, E> {
    type Item = T;
    type Rebind<U> = Outcome<U, E>;

    #[inline]
    fn mbind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(function)
    }
}

impl<T: Default, E: Default> Bind for &mut Outcome<T, E> {
    type Item = T;
    type Rebind<U> = Outcome<U, E>;

    #[inline]
    fn mbind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.take().and_then(function)
    }
}

/// Transforms the held value of any [`Functor`].
#[inline]
pub fn fmap<M, B, F>(monad: M, function: F) -> M::WithType<B>
where
    M: Functor,
    F: FnOnce(M::Inner) -> B,
{
    monad.fmap(function)
}

/// Applies the function held by `function` to the value held by `value`.
///
/// Both operands are already evaluated. When both hold an error, the error of
/// `value` is reported.
///
/// # Examples
///
/// ```rust
/// use fnkit::code_result::CodeResult;
/// use fnkit::combinator::applicative;
/// use fnkit::error::ErrorCode;
/// use std::io::ErrorKind;
///
/// let value: CodeResult<i32> = CodeResult::Error(ErrorCode::new(ErrorKind::NotFound));
/// let function: CodeResult<fn(i32) -> i32> = CodeResult::Error(ErrorCode::new(ErrorKind::TimedOut));
/// let applied = applicative(value, function);
/// assert_eq!(applied.error_code(), Some(ErrorCode::new(ErrorKind::NotFound)));
/// ```
#[inline]
pub fn applicative<M, B, F>(value: M, function: M::WithType<F>) -> M::WithType<B>
where
    M: Applicative,
    F: FnOnce(M::Inner) -> B,
{
    value.map2(function, |inner, function| function(inner))
}

/// Free-function form of [`Bind::mbind`].
#[inline]
pub fn mbind<M, U, F>(monad: M, function: F) -> M::Rebind<U>
where
    M: Bind,
    F: FnOnce(M::Item) -> M::Rebind<U>,
{
    monad.mbind(function)
}

/// Threads a wrapper through a series of binding functions from left to right.
///
/// `pipeline!(m, f, g, h)` is `mbind(mbind(mbind(m, f), g), h)`. The first
/// absence or error stops the chain; no function after it is called.
///
/// # Syntax
///
/// - `pipeline!(m)` - Returns `m` unchanged
/// - `pipeline!(m, f)` - Returns `mbind(m, f)`
/// - `pipeline!(m, f, g, ...)` - Binds each function in turn
///
/// # Examples
///
/// ```rust
/// use fnkit::outcome::Outcome;
/// use fnkit::pipeline;
///
/// fn times_by_two(value: i32) -> Outcome<i32, String> {
///     Outcome::Ok(value * 2)
/// }
///
/// fn refuse(value: i32) -> Outcome<i32, String> {
///     Outcome::Err(format!("refused {value}"))
/// }
///
/// let start: Outcome<i32, String> = Outcome::Ok(1);
/// assert_eq!(pipeline!(start.clone(), times_by_two, times_by_two), Outcome::Ok(4));
/// assert_eq!(
///     pipeline!(start, times_by_two, refuse, times_by_two),
///     Outcome::Err("refused 2".to_string())
/// );
/// ```
#[macro_export]
macro_rules! pipeline {
    ($monad:expr $(,)?) => {
        $monad
    };

    ($monad:expr, $function:expr $(,)?) => {
        $crate::combinator::mbind($monad, $function)
    };

    ($monad:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipeline!($crate::combinator::mbind($monad, $function), $($remaining_functions),+)
    };
}
