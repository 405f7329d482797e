//! Attempt type - a computation that either succeeded or failed.
//!
//! `Attempt<T>` is either `Success(T)` or `Failure(ErrorValue)`. A failure is
//! carried unchanged through `map`, `flat_map` and `filter` until a caller
//! handles it with `recover`, `or_else`, `get_or_else` or `fold`.
//!
//! Attempts are usually produced at a capture boundary:
//!
//! - [`Attempt::catching`] runs a closure and turns a panic into a failure
//! - [`Attempt::try_catching`] does the same for closures returning `Result`
//! - `From<Result<T, E>>` converts an existing result
//!
//! [`Attempt::filter`] is the only combinator that captures by itself: a
//! panicking predicate becomes a [`PanicError`] failure and a rejecting one
//! becomes a [`NoMatchingElementError`] failure.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::control::Attempt;
//!
//! let parsed: Attempt<i32> = "21".parse::<i32>().into();
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Attempt::success(42));
//!
//! let failed: Attempt<i32> = "twenty".parse::<i32>().into();
//! let recovered = failed.recover(|error| Attempt::success(error.to_string().len() as i32));
//! assert_eq!(recovered, Attempt::success(29));
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::disjunction::Disjunction;
use super::error::{ErrorValue, NoMatchingElementError, record_capture};
use super::optional::Optional;

/// The outcome of a computation that may have failed.
///
/// # Examples
///
/// ```rust
/// use sumkit::control::{Attempt, ErrorValue};
///
/// let success = Attempt::success(2);
/// assert!(success.is_success());
///
/// let failure: Attempt<i32> = Attempt::failure(ErrorValue::msg("nope"));
/// assert!(failure.is_failed());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with the carried error.
    Failure(ErrorValue),
}

impl<T> Attempt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error.
    #[inline]
    pub fn failure(error: impl Into<ErrorValue>) -> Self {
        Self::Failure(error.into())
    }

    /// Runs `computation`, turning a panic into a [`PanicError`] failure.
    ///
    /// [`PanicError`]: super::PanicError
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::{Attempt, PanicError};
    ///
    /// let ok = Attempt::catching(|| 6 * 7);
    /// assert_eq!(ok, Attempt::success(42));
    ///
    /// let values: Vec<i32> = Vec::new();
    /// let failed = Attempt::catching(|| values[3]);
    /// assert!(failed.error().exists(|error| error.is::<PanicError>()));
    /// ```
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(captured_panic("catching", &*payload)),
        }
    }

    /// Runs a fallible `computation`; both `Err` and panics become failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Attempt;
    ///
    /// let parsed = Attempt::try_catching(|| "12".parse::<u8>());
    /// assert_eq!(parsed, Attempt::success(12));
    ///
    /// let overflowed = Attempt::try_catching(|| "300".parse::<u8>());
    /// assert!(overflowed.is_failed());
    /// ```
    pub fn try_catching<E, F>(computation: F) -> Self
    where
        E: Into<ErrorValue>,
        F: FnOnce() -> Result<T, E>,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(result) => result.into(),
            Err(payload) => Self::Failure(captured_panic("try_catching", &*payload)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Attempt` by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::{Attempt, ErrorValue};
    ///
    /// let describe = |attempt: Attempt<i32>| {
    ///     attempt.fold(|error| format!("failed: {error}"), |n| format!("got {n}"))
    /// };
    ///
    /// assert_eq!(describe(Attempt::success(1)), "got 1");
    /// assert_eq!(describe(Attempt::failure(ErrorValue::msg("boom"))), "failed: boom");
    /// ```
    #[inline]
    pub fn fold<R, G, F>(self, on_failure: G, on_success: F) -> R
    where
        G: FnOnce(ErrorValue) -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the payload, yielding `Attempt<&T>`; a failure shares its error.
    #[inline]
    pub fn as_ref(&self) -> Attempt<&T> {
        match self {
            Self::Success(value) => Attempt::Success(value),
            Self::Failure(error) => Attempt::Failure(error.clone()),
        }
    }

    /// Returns the carried error, if any.
    #[inline]
    pub const fn error(&self) -> Optional<&ErrorValue> {
        match self {
            Self::Success(_) => Optional::Absent,
            Self::Failure(error) => Optional::Present(error),
        }
    }

    // =========================================================================
    // Sequencing and Mapping
    // =========================================================================

    /// Sequences a computation that may itself fail.
    ///
    /// A `Failure` is returned as is, without calling `function`.
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Attempt<R>
    where
        F: FnOnce(T) -> Attempt<R>,
    {
        self.fold(Attempt::Failure, function)
    }

    /// Transforms the payload of a `Success`.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Attempt<R>
    where
        F: FnOnce(T) -> R,
    {
        self.flat_map(|value| Attempt::Success(function(value)))
    }

    /// Runs a side effect on the payload of a `Success`.
    #[inline]
    pub fn foreach<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            function(value);
        }
    }

    /// Returns `true` if this is a `Success` and `predicate` holds for it.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps a `Success` only if `predicate` holds for its value.
    ///
    /// The predicate runs under panic capture. A panic yields a
    /// [`PanicError`](super::PanicError) failure; `false` yields a
    /// [`NoMatchingElementError`] failure naming the value. A `Failure` is
    /// returned unchanged and the predicate is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::{Attempt, NoMatchingElementError};
    ///
    /// assert_eq!(Attempt::success(12).filter(|n| *n > 10), Attempt::success(12));
    ///
    /// let rejected = Attempt::success(4).filter(|n| *n > 10);
    /// assert!(rejected.error().exists(|error| error.is::<NoMatchingElementError>()));
    /// ```
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        T: fmt::Debug,
        P: FnOnce(&T) -> bool,
    {
        let Self::Success(value) = &self else {
            return self;
        };
        match panic::catch_unwind(AssertUnwindSafe(|| predicate(value))) {
            Ok(true) => self,
            Ok(false) => {
                let error = ErrorValue::new(NoMatchingElementError::for_value(value));
                record_capture("filter", &error);
                Self::Failure(error)
            }
            Err(payload) => Self::Failure(captured_panic("filter", &*payload)),
        }
    }

    /// Keeps a `Success` only if `predicate` does not hold for its value.
    #[inline]
    #[must_use]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        T: fmt::Debug,
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    // =========================================================================
    // Fallbacks and Recovery
    // =========================================================================

    /// Returns the value, or evaluates `default` on failure.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|_| default(), |value| value)
    }

    /// Returns `self` on success, otherwise evaluates `alternative`.
    ///
    /// The alternative cannot see the error; use [`Attempt::recover`] for that.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative(),
        }
    }

    /// Replaces a `Failure` with the result of `function` applied to its error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::{Attempt, ErrorValue};
    ///
    /// let failed: Attempt<usize> = Attempt::failure(ErrorValue::msg("four"));
    /// let recovered = failed.recover(|error| Attempt::success(error.to_string().len()));
    /// assert_eq!(recovered, Attempt::success(4));
    /// ```
    #[inline]
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(ErrorValue) -> Self,
    {
        self.fold(function, Self::Success)
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Optional`, discarding any error.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        self.fold(|_| Optional::Absent, Optional::Present)
    }

    /// Converts into a `Result`.
    #[inline]
    #[must_use = "the converted result carries the failure"]
    pub fn into_result(self) -> Result<T, ErrorValue> {
        self.fold(Err, Ok)
    }

    /// Converts into a `Disjunction` with the error on the left.
    #[inline]
    pub fn to_disjunction(self) -> Disjunction<ErrorValue, T> {
        self.fold(Disjunction::Left, Disjunction::Right)
    }
}

fn captured_panic(site: &'static str, payload: &(dyn std::any::Any + Send)) -> ErrorValue {
    let error = ErrorValue::from_panic(payload);
    record_capture(site, &error);
    error
}

impl<T: fmt::Debug> fmt::Debug for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Into<ErrorValue>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

// =============================================================================
// Monad Implementation
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::TypeConstructor for Attempt<T> {
    type Inner = T;
    type WithType<B> = Attempt<B>;
}

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::Monad for Attempt<T> {
    #[inline]
    fn pure<B>(value: B) -> Attempt<B> {
        Attempt::Success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(T) -> Attempt<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::PanicError;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn flat_map_keeps_the_same_error() {
        let error = ErrorValue::msg("original");
        let failed: Attempt<i32> = Attempt::Failure(error.clone());
        let mapped = failed.flat_map(|n| Attempt::success(n + 1)).map(|n| n * 2);

        let carried = mapped.error();
        assert!(carried.exists(|carried| carried.ptr_eq(&error)));
    }

    #[rstest]
    fn filter_does_not_call_predicate_on_failure() {
        let calls = Cell::new(0);
        let failed: Attempt<i32> = Attempt::failure(ErrorValue::msg("early"));
        let result = failed.filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(result.is_failed());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn filter_captures_panicking_predicate() {
        let result = Attempt::success(1).filter(|_| panic!("predicate exploded"));
        let panic_message = result
            .error()
            .flat_map(|error| Optional::from(error.downcast_ref::<PanicError>()))
            .map(|panic| panic.message().to_string());
        assert_eq!(panic_message, Optional::Present("predicate exploded".to_string()));
    }

    #[rstest]
    fn try_catching_converts_err_and_panic() {
        let err = Attempt::<u8>::try_catching(|| "x".parse::<u8>());
        assert!(err.error().exists(|error| error.is::<std::num::ParseIntError>()));

        let panicked = Attempt::<u8>::try_catching(|| -> Result<u8, std::num::ParseIntError> {
            panic!("inside")
        });
        assert!(panicked.error().exists(|error| error.is::<PanicError>()));
    }

    #[rstest]
    fn conversions_discard_or_keep_error() {
        let error = ErrorValue::msg("lost");
        let failed: Attempt<i32> = Attempt::Failure(error.clone());
        assert_eq!(failed.clone().to_optional(), Optional::Absent);
        assert_eq!(failed.clone().into_result(), Err(error.clone()));
        assert_eq!(failed.to_disjunction(), Disjunction::Left(error));

        assert_eq!(Attempt::success(3).to_disjunction(), Disjunction::<ErrorValue, i32>::Right(3));
    }

    #[rstest]
    fn debug_renders_variant_names() {
        assert_eq!(format!("{:?}", Attempt::success(1)), "Success(1)");
        let failed: Attempt<i32> = Attempt::failure(ErrorValue::msg("m"));
        assert_eq!(format!("{failed:?}"), "Failure(MessageError(\"m\"))");
    }
}
