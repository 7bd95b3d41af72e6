//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Outcome<_, E>`
//! directly. [`TypeConstructor`] names the held type (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`), which is enough to
//! state [`Functor`](super::Functor) and [`Monad`](super::Monad) generically.
//!
//! # Example
//!
//! ```rust
//! use fnkit::code_result::CodeResult;
//! use fnkit::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     let _ = value;
//!     Default::default()
//! }
//!
//! let relabeled: CodeResult<String> = relabel(CodeResult::Value(42));
//! assert_eq!(relabeled, CodeResult::Value(String::new()));
//! ```

use crate::code_result::CodeResult;
use crate::outcome::Outcome;

/// A type built by applying a one-argument type constructor.
///
/// # Associated Types
///
/// * `Inner` - the type the constructor was applied to
/// * `WithType<B>` - the same constructor applied to `B`; for a two-parameter
///   type such as `Outcome<T, E>` the error parameter is kept
pub trait TypeConstructor {
    /// The type held by this constructor application.
    type Inner;

    /// The same type constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for CodeResult<T> {
    type Inner = T;
    type WithType<B> = CodeResult<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn code_result_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<CodeResult<String>>();
    }

    #[test]
    fn outcome_with_type_preserves_error_type() {
        fn assert_outcome_with_type<T, E, B>()
        where
            Outcome<T, E>: TypeConstructor<Inner = T, WithType<B> = Outcome<B, E>>,
        {
        }

        assert_outcome_with_type::<i32, String, bool>();
        assert_outcome_with_type::<String, ErrorCode, i32>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Outcome<i32, String> as TypeConstructor>::WithType<f64>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_outcome_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_outcome_bool::<Step2>();

        let _: Step2 = Outcome::Err("kept".to_string());
    }
}
