//! Integration tests for `CodeResult<T>` and its combinators.
//!
//! `CodeResult` holds either a value or an `ErrorCode`; every combinator
//! short-circuits on the first error code it meets.

#![cfg(feature = "typeclass")]

use fnkit::code_result::CodeResult;
use fnkit::combinator::{applicative, fmap, mbind};
use fnkit::error::ErrorCode;
use fnkit::pipeline;
use rstest::rstest;
use std::io::ErrorKind;

fn io_error() -> ErrorCode {
    ErrorCode::new(ErrorKind::Other)
}

fn add_one(value: i32) -> CodeResult<i32> {
    CodeResult::Value(value + 1)
}

fn times_by_two(value: i32) -> CodeResult<i32> {
    CodeResult::Value(value * 2)
}

fn times_by_three(value: i32) -> CodeResult<i32> {
    CodeResult::Value(value * 3)
}

fn always_fails(_: i32) -> CodeResult<i32> {
    CodeResult::Error(io_error())
}

// =============================================================================
// fmap
// =============================================================================

#[rstest]
fn fmap_by_closure() {
    let one = CodeResult::Value(1);
    assert_eq!(fmap(one, |value| 2 * value).value(), &2);
}

#[rstest]
fn fmap_by_function() {
    fn double(value: i32) -> i32 {
        2 * value
    }
    assert_eq!(fmap(CodeResult::Value(1), double).value(), &2);
}

#[rstest]
fn fmap_keeps_error_code() {
    let failed: CodeResult<i32> = CodeResult::Error(io_error());
    let mapped = fmap(failed, |value| 2 * value);
    assert!(!mapped.has_value());
    assert_eq!(mapped.error_code(), Some(io_error()));
}

#[rstest]
fn fmap_changes_value_type() {
    let mapped: CodeResult<f64> = fmap(CodeResult::Value(1_i32), |value| f64::from(value));
    assert!((mapped.unwrap() - 1.0).abs() < f64::EPSILON);
}

// =============================================================================
// applicative
// =============================================================================

fn add_one_function() -> CodeResult<fn(i32) -> i32> {
    CodeResult::Value(|value| value + 1)
}

#[rstest]
fn applicative_applies_function() {
    let applied = applicative(CodeResult::Value(1), add_one_function());
    assert_eq!(applied.value(), &2);
}

#[rstest]
fn applicative_with_error_value() {
    let value: CodeResult<i32> = CodeResult::Error(io_error());
    assert!(!applicative(value, add_one_function()).has_value());
}

#[rstest]
fn applicative_with_error_function() {
    let function: CodeResult<fn(i32) -> i32> = CodeResult::Error(io_error());
    assert!(!applicative(CodeResult::Value(1), function).has_value());
}

#[rstest]
fn applicative_with_both_errors_reports_value_error() {
    let value: CodeResult<i32> = CodeResult::Error(ErrorCode::new(ErrorKind::NotFound));
    let function: CodeResult<fn(i32) -> i32> = CodeResult::Error(io_error());
    let applied = applicative(value, function);
    assert_eq!(applied.error_code(), Some(ErrorCode::new(ErrorKind::NotFound)));
}

#[rstest]
fn applicative_twice() {
    let applied = applicative(applicative(CodeResult::Value(1), add_one_function()), add_one_function());
    assert_eq!(applied.value(), &3);
}

// =============================================================================
// mbind, the | operator and pipeline!
// =============================================================================

#[rstest]
#[case(CodeResult::Value(2), Some(3))]
#[case(CodeResult::Error(io_error()), None)]
fn mbind_add_one(#[case] start: CodeResult<i32>, #[case] expected: Option<i32>) {
    assert_eq!(mbind(start, add_one).ok(), expected);
}

#[rstest]
#[case(CodeResult::Value(2))]
#[case(CodeResult::Error(io_error()))]
fn mbind_into_failing_function(#[case] start: CodeResult<i32>) {
    assert!(!mbind(start, always_fails).has_value());
}

#[rstest]
fn mbind_nested() {
    let result = mbind(mbind(CodeResult::Value(1), times_by_two), times_by_three);
    assert_eq!(result.value(), &6);
}

#[rstest]
fn pipe_operator_with_functions() {
    let result = CodeResult::Value(1) | times_by_two | times_by_three;
    assert_eq!(result.value(), &6);
}

#[rstest]
fn pipe_operator_with_closures() {
    let result = CodeResult::Value(1)
        | (|value: i32| CodeResult::Value(value * 2))
        | (|value: i32| CodeResult::Value(value * 3));
    assert_eq!(result.value(), &6);
}

#[rstest]
fn pipe_operator_changes_value_type() {
    let result = CodeResult::Value(1) | (|value: i32| CodeResult::Value(f64::from(value)));
    let value: f64 = result.unwrap();
    assert!((value - 1.0).abs() < f64::EPSILON);
}

#[rstest]
fn pipeline_short_circuits() {
    let result = pipeline!(CodeResult::Value(1), times_by_two, always_fails, times_by_three);
    assert_eq!(result.error_code(), Some(io_error()));
}

// =============================================================================
// Construction and conversion
// =============================================================================

#[rstest]
fn from_std_result() {
    let ok: CodeResult<i32> = Ok::<i32, ErrorCode>(1).into();
    let err: CodeResult<i32> = Err::<i32, ErrorCode>(io_error()).into();
    assert_eq!(ok, CodeResult::Value(1));
    assert_eq!(err, CodeResult::Error(io_error()));
}

#[rstest]
fn from_error_code() {
    let result: CodeResult<String> = io_error().into();
    assert_eq!(result.error_code(), Some(io_error()));
}

#[rstest]
fn into_std_result_supports_question_mark() {
    fn read(value: CodeResult<i32>) -> Result<i32, ErrorCode> {
        let inner = Result::<i32, ErrorCode>::from(value)?;
        Ok(inner + 1)
    }
    assert_eq!(read(CodeResult::Value(1)), Ok(2));
    assert_eq!(read(CodeResult::Error(io_error())), Err(io_error()));
}

#[rstest]
fn error_code_from_io_error_keeps_raw_number() {
    let error = std::io::Error::from_raw_os_error(2);
    let code = ErrorCode::from(&error);
    assert_eq!(code.raw_os_error(), Some(2));
    assert_eq!(code.kind(), error.kind());
}
