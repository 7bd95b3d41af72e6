//! Type class traits over the wrapper types.
//!
//! This module provides the type classes that give the wrappers a common
//! combinator algebra:
//!
//! - [`TypeConstructor`]: emulates higher-kinded types with GATs
//! - [`Functor`]: mapping over the held value
//! - [`Applicative`]: lifting values and combining independent wrappers
//! - [`Monad`]: sequencing dependent computations
//!
//! Each trait is implemented for [`Option`], [`CodeResult`](crate::code_result::CodeResult)
//! and [`Outcome`](crate::outcome::Outcome).
//!
//! # Examples
//!
//! ```rust
//! use fnkit::outcome::Outcome;
//! use fnkit::typeclass::{Applicative, Functor, Monad};
//!
//! let first: Outcome<i32, String> = Outcome::Ok(1);
//! let second: Outcome<i32, String> = Outcome::Ok(2);
//!
//! let sum = first.map2(second, |x, y| x + y);
//! assert_eq!(sum, Outcome::Ok(3));
//!
//! let doubled = sum.fmap(|x| x * 2).flat_map(|x| Outcome::Ok(x + 1));
//! assert_eq!(doubled, Outcome::Ok(7));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
