//! Currying for functions of one to six arguments.
//!
//! [`curried`] (or [`Curry::curry`]) turns an N-ary function into an adapter
//! that takes its arguments one at a time through `apply`. Each `apply` binds
//! one argument and returns the adapter waiting for the rest; the `apply` that
//! supplies the last argument calls the function and returns its result.
//!
//! Argument types are fixed by the wrapped function, so passing arguments out
//! of order or passing too many is a compile error.
//!
//! # Design Decisions
//!
//! The wrapped function is shared behind [`Rc`], and `apply` borrows the
//! adapter instead of consuming it. A partial application can therefore be
//! reused; the arguments bound so far are cloned into every application, so
//! they must implement [`Clone`].
//!
//! # Examples
//!
//! ```rust
//! use fnkit::curry::curried;
//!
//! fn volume(width: u32, height: u32, depth: u32) -> u32 {
//!     width * height * depth
//! }
//!
//! let curried_volume = curried(volume);
//! assert_eq!(curried_volume.apply(2).apply(3).apply(4), 24);
//!
//! // Partial applications can be reused
//! let flat = curried_volume.apply(10).apply(1);
//! assert_eq!(flat.apply(1), 10);
//! assert_eq!(flat.apply(5), 50);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// A curried function with `Bound` arguments supplied and `Pending` argument
/// types still to come.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `R` - The function's return type
/// * `Bound` - A tuple of the arguments bound so far
/// * `Pending` - A tuple of the argument types still expected, in order
pub struct Curried<F, R, Bound, Pending> {
    function: Rc<F>,
    bound: Bound,
    marker: PhantomData<fn(Pending) -> R>,
}

impl<F, R, Pending> Curried<F, R, (), Pending> {
    fn new(function: F) -> Self {
        Self {
            function: Rc::new(function),
            bound: (),
            marker: PhantomData,
        }
    }
}

impl<F, R, Bound, Pending> Curried<F, R, Bound, Pending> {
    /// The arguments bound so far.
    #[inline]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl<F, R, Bound: Clone, Pending> Clone for Curried<F, R, Bound, Pending> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            bound: self.bound.clone(),
            marker: PhantomData,
        }
    }
}

impl<F, R, Bound: fmt::Debug, Pending> fmt::Debug for Curried<F, R, Bound, Pending> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// Conversion of an N-ary function into its curried form.
///
/// Implemented for every `Fn` of one to six arguments. `Args` is the tuple of
/// the function's parameter types.
///
/// # Examples
///
/// ```rust
/// use fnkit::curry::Curry;
///
/// let greet = |greeting: &str, name: &str| format!("{greeting}, {name}!");
/// let hello = greet.curry().apply("Hello");
/// assert_eq!(hello.apply("world"), "Hello, world!");
/// ```
pub trait Curry<Args, R> {
    /// The adapter waiting for the first argument.
    type Curried;

    /// Wraps `self` in an adapter with no arguments bound.
    fn curry(self) -> Self::Curried;
}

/// Curries `function`.
///
/// Free-function form of [`Curry::curry`].
#[inline]
pub fn curried<F, Args, R>(function: F) -> F::Curried
where
    F: Curry<Args, R>,
{
    function.curry()
}

macro_rules! impl_curry {
    ($($Argument:ident),+) => {
        impl<F, R, $($Argument),+> Curry<($($Argument,)+), R> for F
        where
            F: Fn($($Argument),+) -> R,
        {
            type Curried = Curried<F, R, (), ($($Argument,)+)>;

            #[inline]
            fn curry(self) -> Self::Curried {
                Curried::new(self)
            }
        }
    };
}

impl_curry!(A1);
impl_curry!(A1, A2);
impl_curry!(A1, A2, A3);
impl_curry!(A1, A2, A3, A4);
impl_curry!(A1, A2, A3, A4, A5);
impl_curry!(A1, A2, A3, A4, A5, A6);

// =============================================================================
// Partial steps: bind one argument, more are pending
// =============================================================================

macro_rules! impl_partial_step {
    ([$($bound:ident: $Bound:ident),*], $next:ident: $Next:ident, [$($Rest:ident),+]) => {
        impl<F, R, $($Bound,)* $Next, $($Rest),+> Curried<F, R, ($($Bound,)*), ($Next, $($Rest,)+)>
        where
            F: Fn($($Bound,)* $Next, $($Rest),+) -> R,
            $($Bound: Clone,)*
        {
            /// Binds the next argument and returns the adapter waiting for the
            /// remaining ones.
            #[inline]
            #[allow(clippy::unit_arg, clippy::let_unit_value, clippy::clone_on_copy)]
            pub fn apply(&self, $next: $Next) -> Curried<F, R, ($($Bound,)* $Next,), ($($Rest,)+)> {
                let ($($bound,)*) = self.bound.clone();
                Curried {
                    function: Rc::clone(&self.function),
                    bound: ($($bound,)* $next,),
                    marker: PhantomData,
                }
            }
        }
    };
}

impl_partial_step!([], a1: A1, [A2]);
impl_partial_step!([], a1: A1, [A2, A3]);
impl_partial_step!([a1: A1], a2: A2, [A3]);
impl_partial_step!([], a1: A1, [A2, A3, A4]);
impl_partial_step!([a1: A1], a2: A2, [A3, A4]);
impl_partial_step!([a1: A1, a2: A2], a3: A3, [A4]);
impl_partial_step!([], a1: A1, [A2, A3, A4, A5]);
impl_partial_step!([a1: A1], a2: A2, [A3, A4, A5]);
impl_partial_step!([a1: A1, a2: A2], a3: A3, [A4, A5]);
impl_partial_step!([a1: A1, a2: A2, a3: A3], a4: A4, [A5]);
impl_partial_step!([], a1: A1, [A2, A3, A4, A5, A6]);
impl_partial_step!([a1: A1], a2: A2, [A3, A4, A5, A6]);
impl_partial_step!([a1: A1, a2: A2], a3: A3, [A4, A5, A6]);
impl_partial_step!([a1: A1, a2: A2, a3: A3], a4: A4, [A5, A6]);
impl_partial_step!([a1: A1, a2: A2, a3: A3, a4: A4], a5: A5, [A6]);

// =============================================================================
// Final steps: the last argument calls the function
// =============================================================================

macro_rules! impl_final_step {
    ([$($bound:ident: $Bound:ident),*], $last:ident: $Last:ident) => {
        impl<F, R, $($Bound,)* $Last> Curried<F, R, ($($Bound,)*), ($Last,)>
        where
            F: Fn($($Bound,)* $Last) -> R,
            $($Bound: Clone,)*
        {
            /// Supplies the last argument and calls the wrapped function.
            #[inline]
            #[allow(clippy::unit_arg, clippy::let_unit_value, clippy::clone_on_copy)]
            pub fn apply(&self, $last: $Last) -> R {
                let ($($bound,)*) = self.bound.clone();
                (self.function)($($bound,)* $last)
            }
        }
    };
}

impl_final_step!([], a1: A1);
impl_final_step!([a1: A1], a2: A2);
impl_final_step!([a1: A1, a2: A2], a3: A3);
impl_final_step!([a1: A1, a2: A2, a3: A3], a4: A4);
impl_final_step!([a1: A1, a2: A2, a3: A3, a4: A4], a5: A5);
impl_final_step!([a1: A1, a2: A2, a3: A3, a4: A4, a5: A5], a6: A6);
