//! Memoization of pure functions keyed by their argument tuple.
//!
//! - [`Memoized`] (built by [`memoize`]) caches every result of a plain
//!   function.
//! - [`RecursiveMemoized`] (built by [`recursive_memoize`]) caches a
//!   self-referential function. The function receives a [`MemoHandle`] as its
//!   first argument and recurses through it, so every recursive call shares
//!   the cache.
//!
//! Arguments are passed as a tuple, and the tuple is the cache key. For a given
//! key the wrapped function runs at most once per cache lifetime; later calls
//! return a clone of the cached result.
//!
//! # Locking
//!
//! Both adapters are safe to share between threads. A cache miss holds the lock
//! while the wrapped function runs, so concurrent calls are linearised.
//!
//! Calling a [`Memoized`] from inside its own wrapped function deadlocks; use
//! [`RecursiveMemoized`], whose lock is re-entrant, for self-referential
//! functions.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::memo::{recursive_memoize, MemoHandle};
//!
//! let fibonacci = recursive_memoize(|fib: &dyn MemoHandle<(u64,), u64>, n: u64| -> u64 {
//!     if n < 2 { n } else { fib.call((n - 1,)) + fib.call((n - 2,)) }
//! });
//!
//! assert_eq!(fibonacci.call((90,)), 2_880_067_194_370_816_120);
//! assert_eq!(fibonacci.len(), 91);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use parking_lot::{Mutex, ReentrantMutex};

/// A function called with its arguments packed in a tuple.
///
/// Implemented for every `Fn` of one to six arguments.
pub trait TupleFn<Args, R> {
    /// Unpacks `arguments` and calls the function.
    fn call_tuple(&self, arguments: Args) -> R;
}

/// A self-referential function called with a [`MemoHandle`] and its
/// arguments packed in a tuple.
///
/// Implemented for every `Fn(&dyn MemoHandle<Args, R>, A1, ..)` of one to six
/// arguments after the handle.
pub trait RecursiveFn<Args, R> {
    /// Unpacks `arguments` and calls the function with `handle` first.
    fn call_recursive(&self, handle: &dyn MemoHandle<Args, R>, arguments: Args) -> R;
}

/// The memoized function as seen from inside a recursive function.
pub trait MemoHandle<Args, R> {
    /// Returns the cached result for `arguments`, computing it on a miss.
    fn call(&self, arguments: Args) -> R;
}

macro_rules! impl_tuple_fn {
    ($($argument:ident: $Argument:ident),+) => {
        impl<F, R, $($Argument),+> TupleFn<($($Argument,)+), R> for F
        where
            F: Fn($($Argument),+) -> R,
        {
            #[inline]
            fn call_tuple(&self, ($($argument,)+): ($($Argument,)+)) -> R {
                self($($argument),+)
            }
        }

        impl<F, R, $($Argument),+> RecursiveFn<($($Argument,)+), R> for F
        where
            F: Fn(&dyn MemoHandle<($($Argument,)+), R>, $($Argument),+) -> R,
        {
            #[inline]
            fn call_recursive(
                &self,
                handle: &dyn MemoHandle<($($Argument,)+), R>,
                ($($argument,)+): ($($Argument,)+),
            ) -> R {
                self(handle, $($argument),+)
            }
        }
    };
}

impl_tuple_fn!(a1: A1);
impl_tuple_fn!(a1: A1, a2: A2);
impl_tuple_fn!(a1: A1, a2: A2, a3: A3);
impl_tuple_fn!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_tuple_fn!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_tuple_fn!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);

// =============================================================================
// Memoized
// =============================================================================

/// A function whose results are cached by argument tuple.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `Args` - The argument tuple, used as the cache key
/// * `R` - The cached result type
///
/// # Thread Safety
///
/// `Memoized` is `Send` and `Sync` when `F`, `Args` and `R` are. A miss holds
/// the cache lock while `F` runs.
pub struct Memoized<F, Args, R> {
    function: F,
    cache: Mutex<BTreeMap<Args, R>>,
}

/// Wraps `function` in a result cache.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let area = memoize(|width: u32, height: u32| {
///     calls.set(calls.get() + 1);
///     width * height
/// });
///
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn memoize<F, Args, R>(function: F) -> Memoized<F, Args, R>
where
    F: TupleFn<Args, R>,
{
    Memoized {
        function,
        cache: Mutex::new(BTreeMap::new()),
    }
}

impl<F, Args, R> Memoized<F, Args, R>
where
    F: TupleFn<Args, R>,
    Args: Ord + Clone,
    R: Clone,
{
    /// Returns the cached result for `arguments`, calling the wrapped function
    /// on a miss.
    ///
    /// The lock is not re-entrant: calling this from inside the wrapped
    /// function on the same thread deadlocks. Use [`recursive_memoize`] for
    /// self-referential functions.
    pub fn call(&self, arguments: Args) -> R {
        let mut cache = self.cache.lock();
        if let Some(result) = cache.get(&arguments) {
            tracing::trace!(entries = cache.len(), "memo cache hit");
            return result.clone();
        }
        tracing::trace!(entries = cache.len(), "memo cache miss");
        let result = self.function.call_tuple(arguments.clone());
        cache.insert(arguments, result.clone());
        result
    }
}

impl<F, Args, R> Memoized<F, Args, R> {
    /// The number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        tracing::debug!(entries = cache.len(), "clearing memo cache");
        cache.clear();
    }
}

impl<F, Args, R> fmt::Debug for Memoized<F, Args, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// RecursiveMemoized
// =============================================================================

/// A self-referential function whose results, including those of its
/// recursive calls, are cached by argument tuple.
///
/// The wrapped function receives `&dyn MemoHandle<Args, R>` as its first
/// argument; calling the handle goes through the cache.
///
/// # Thread Safety
///
/// `RecursiveMemoized` is `Send` and `Sync` when `F` is `Send + Sync` and
/// `Args` and `R` are `Send`. The re-entrant lock lets the wrapped function
/// recurse on the same thread while other threads wait.
pub struct RecursiveMemoized<F, Args, R> {
    function: F,
    cache: ReentrantMutex<RefCell<BTreeMap<Args, R>>>,
}

/// Wraps a self-referential `function` in a shared result cache.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::{recursive_memoize, MemoHandle};
///
/// let countdown = recursive_memoize(|next: &dyn MemoHandle<(u32,), u32>, n: u32| -> u32 {
///     if n == 0 { 11 } else { next.call((n - 1,)) }
/// });
///
/// assert_eq!(countdown.call((2,)), 11);
/// assert_eq!(countdown.len(), 3);
/// ```
pub fn recursive_memoize<F, Args, R>(function: F) -> RecursiveMemoized<F, Args, R>
where
    F: RecursiveFn<Args, R>,
{
    RecursiveMemoized {
        function,
        cache: ReentrantMutex::new(RefCell::new(BTreeMap::new())),
    }
}

impl<F, Args, R> MemoHandle<Args, R> for RecursiveMemoized<F, Args, R>
where
    F: RecursiveFn<Args, R>,
    Args: Ord + Clone,
    R: Clone,
{
    fn call(&self, arguments: Args) -> R {
        let cache = self.cache.lock();
        // The RefCell borrow must end before the wrapped function re-enters.
        let cached = cache.borrow().get(&arguments).cloned();
        if let Some(result) = cached {
            tracing::trace!("recursive memo cache hit");
            return result;
        }
        tracing::trace!("recursive memo cache miss");
        let result = self.function.call_recursive(self, arguments.clone());
        cache.borrow_mut().insert(arguments, result.clone());
        result
    }
}

impl<F, Args, R> RecursiveMemoized<F, Args, R>
where
    F: RecursiveFn<Args, R>,
    Args: Ord + Clone,
    R: Clone,
{
    /// Returns the cached result for `arguments`, calling the wrapped function
    /// on a miss.
    ///
    /// Inherent form of [`MemoHandle::call`].
    #[inline]
    pub fn call(&self, arguments: Args) -> R {
        MemoHandle::call(self, arguments)
    }
}

impl<F, Args, R> RecursiveMemoized<F, Args, R> {
    /// The number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().borrow().len()
    }

    /// Returns `true` if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().borrow().is_empty()
    }

    /// Drops every cached result.
    ///
    /// Calling this from inside the wrapped function empties the cache
    /// mid-recursion; results still being computed are inserted afterwards.
    pub fn clear(&self) {
        let cache = self.cache.lock();
        let mut entries = cache.borrow_mut();
        tracing::debug!(entries = entries.len(), "clearing recursive memo cache");
        entries.clear();
    }
}

impl<F, Args, R> fmt::Debug for RecursiveMemoized<F, Args, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RecursiveMemoized")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
