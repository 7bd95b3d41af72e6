//! # fnkit
//!
//! Functional programming primitives for Rust: result and optional
//! combinators, currying, and memoization.
//!
//! ## Overview
//!
//! - **Wrappers**: [`Option`], [`CodeResult`](code_result::CodeResult) (a value
//!   or an error code) and [`Outcome`](outcome::Outcome) (an ok or err payload)
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over those wrappers
//! - **Combinators**: `fmap`, `applicative`, `mbind` and the `pipeline!` macro
//! - **Currying**: one-argument-at-a-time application with reusable partials
//! - **Memoization**: plain and self-referential result caches
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the combinators built on them
//! - `curry`: The curry adapter
//! - `memo`: Memoization (pulls in `parking_lot` and `tracing`)
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//! use fnkit::pipeline;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     Outcome::from(text.parse::<i32>().map_err(|error| error.to_string()))
//! }
//!
//! let doubled = parse("21") | |value: i32| Outcome::Ok(value * 2);
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let halve = |value: i32| (value % 2 == 0).then_some(value / 2);
//! assert_eq!(pipeline!(Some(12), halve, halve), Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::code_result::CodeResult;
    pub use crate::error::{EmptyAccessError, ErrorCode, UnwrapError};
    pub use crate::optional::OptionalExt;
    pub use crate::outcome::Outcome;

    #[cfg(feature = "typeclass")]
    pub use crate::combinator::{Bind, applicative, fmap, mbind};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::{Curried, Curry, curried};

    #[cfg(feature = "memo")]
    pub use crate::memo::{MemoHandle, Memoized, RecursiveMemoized, memoize, recursive_memoize};
}

pub mod code_result;
pub mod error;
pub mod optional;
pub mod outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod combinator;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "memo")]
pub mod memo;
