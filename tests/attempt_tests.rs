//! Unit tests for Attempt<T>.
//!
//! Attempt represents the outcome of a computation:
//! - `Success(T)`: The computation produced a value
//! - `Failure(ErrorValue)`: The computation failed
//!
//! Failures are carried unchanged until handled by `recover`, `or_else`,
//! `get_or_else` or `fold`.

#![cfg(feature = "control")]

use rstest::rstest;
use std::cell::Cell;
use std::num::ParseIntError;
use sumkit::control::{
    Attempt, Disjunction, ErrorValue, MessageError, NoMatchingElementError, Optional, PanicError,
};

// =============================================================================
// Test error types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("quota exceeded for {account}")]
struct QuotaError {
    account: String,
}

fn failed_with(message: &str) -> Attempt<i32> {
    Attempt::failure(ErrorValue::msg(message))
}

// =============================================================================
// Construction and Capture Boundary
// =============================================================================

#[rstest]
fn from_result_maps_ok_and_err() {
    let ok: Attempt<i32> = Ok::<i32, ParseIntError>(3).into();
    assert_eq!(ok, Attempt::success(3));

    let err: Attempt<i32> = "nope".parse::<i32>().into();
    assert!(err.error().exists(|error| error.is::<ParseIntError>()));
}

#[rstest]
fn failure_accepts_custom_errors() {
    let failed: Attempt<()> = Attempt::failure(QuotaError {
        account: "acme".to_string(),
    });
    let quota = failed.error().flat_map(|error| Optional::from(error.downcast_ref::<QuotaError>()));
    assert_eq!(quota.map(|quota| quota.account.as_str()), Optional::Present("acme"));
}

#[rstest]
fn catching_returns_success_for_normal_completion() {
    assert_eq!(Attempt::catching(|| "ok".len()), Attempt::success(2));
}

#[rstest]
fn catching_turns_panic_into_failure() {
    let failed: Attempt<i32> = Attempt::catching(|| panic!("risky computation failed"));
    let message = failed
        .error()
        .flat_map(|error| Optional::from(error.downcast_ref::<PanicError>()))
        .map(|panic| panic.message().to_string());
    assert_eq!(message, Optional::Present("risky computation failed".to_string()));
}

#[rstest]
fn try_catching_keeps_the_returned_error() {
    let failed = Attempt::<u32>::try_catching(|| {
        Err(QuotaError {
            account: "beta".to_string(),
        })
    });
    assert_eq!(
        failed.error().map(ToString::to_string),
        Optional::Present("quota exceeded for beta".to_string())
    );
}

// =============================================================================
// Fold and Queries
// =============================================================================

#[rstest]
fn fold_runs_exactly_one_branch() {
    let failure_calls = Cell::new(0);
    let success_calls = Cell::new(0);

    Attempt::success(1).fold(
        |_| failure_calls.set(failure_calls.get() + 1),
        |_| success_calls.set(success_calls.get() + 1),
    );
    failed_with("x").fold(
        |_| failure_calls.set(failure_calls.get() + 1),
        |_| success_calls.set(success_calls.get() + 1),
    );

    assert_eq!(failure_calls.get(), 1);
    assert_eq!(success_calls.get(), 1);
}

#[rstest]
#[case(Attempt::success(1), true)]
#[case(failed_with("x"), false)]
fn success_and_failed_queries(#[case] attempt: Attempt<i32>, #[case] is_success: bool) {
    assert_eq!(attempt.is_success(), is_success);
    assert_eq!(attempt.is_failed(), !is_success);
}

#[rstest]
fn foreach_and_exists_ignore_failures() {
    let seen = Cell::new(0);
    Attempt::success(5).foreach(|n| seen.set(*n));
    failed_with("x").foreach(|_| seen.set(-1));
    assert_eq!(seen.get(), 5);

    assert!(Attempt::success(5).exists(|n| *n == 5));
    assert!(!failed_with("x").exists(|_| true));
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn filter_on_success_with_false_predicate_yields_no_matching_element() {
    let result = Attempt::success(4).filter(|n| *n > 10);
    let rejected = result
        .error()
        .flat_map(|error| Optional::from(error.downcast_ref::<NoMatchingElementError>()))
        .map(|error| error.value().to_string());
    assert_eq!(rejected, Optional::Present("4".to_string()));
}

#[rstest]
fn filter_on_success_with_true_predicate_is_identity() {
    assert_eq!(Attempt::success(12).filter(|n| *n > 10), Attempt::success(12));
}

#[rstest]
fn filter_on_failure_returns_the_same_error() {
    let error = ErrorValue::msg("original");
    let failed: Attempt<i32> = Attempt::Failure(error.clone());
    let result = failed.filter(|_| false);
    assert!(result.error().exists(|carried| carried.ptr_eq(&error)));
}

#[rstest]
fn filter_captures_a_panicking_predicate() {
    let result = Attempt::success(vec![1, 2]).filter(|values| values[5] > 0);
    assert!(result.error().exists(|error| error.is::<PanicError>()));
}

#[rstest]
fn filter_not_rejects_matching_values() {
    assert_eq!(Attempt::success(3).filter_not(|n| *n > 10), Attempt::success(3));
    let rejected = Attempt::success(30).filter_not(|n| *n > 10);
    assert!(rejected.error().exists(|error| error.is::<NoMatchingElementError>()));
}

// =============================================================================
// Fallbacks and Recovery
// =============================================================================

#[rstest]
fn get_or_else_evaluates_default_only_on_failure() {
    let calls = Cell::new(0);
    let default = || {
        calls.set(calls.get() + 1);
        0
    };
    assert_eq!(Attempt::success(8).get_or_else(default), 8);
    assert_eq!(calls.get(), 0);
    assert_eq!(failed_with("x").get_or_else(default), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn recover_can_read_the_error_while_or_else_cannot() {
    let failed = failed_with("seven c");

    let recovered = failed
        .clone()
        .recover(|error| Attempt::success(i32::try_from(error.to_string().len()).unwrap_or(-1)));
    assert_eq!(recovered, Attempt::success(7));

    let replaced = failed.or_else(|| Attempt::success(0));
    assert_eq!(replaced, Attempt::success(0));
}

#[rstest]
fn recover_and_or_else_leave_success_untouched() {
    assert_eq!(Attempt::success(1).recover(|_| Attempt::success(2)), Attempt::success(1));
    assert_eq!(Attempt::success(1).or_else(|| Attempt::success(2)), Attempt::success(1));
}

#[rstest]
fn recover_may_fail_again() {
    let result = failed_with("first").recover(|error| {
        Attempt::failure(ErrorValue::msg(format!("{error}, then second")))
    });
    let message = result
        .error()
        .flat_map(|error| Optional::from(error.downcast_ref::<MessageError>()))
        .map(|message| message.0.clone());
    assert_eq!(message, Optional::Present("first, then second".to_string()));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn to_optional_discards_error() {
    assert_eq!(Attempt::success(2).to_optional(), Optional::Present(2));
    assert_eq!(failed_with("gone").to_optional(), Optional::Absent);
}

#[rstest]
fn into_result_and_disjunction_keep_error() {
    let error = ErrorValue::msg("kept");
    let failed: Attempt<i32> = Attempt::Failure(error.clone());

    assert_eq!(failed.clone().into_result(), Err(error.clone()));
    assert_eq!(failed.to_disjunction(), Disjunction::Left(error));
    assert_eq!(Attempt::success(1).into_result().ok(), Some(1));
}
