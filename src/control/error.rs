//! Error values carried by [`Attempt`](super::Attempt).
//!
//! [`ErrorValue`] is an opaque, cheaply cloneable carrier for whatever error a
//! computation raised. The containers never inspect it; they only move it
//! along until a caller observes it through `fold`, `recover` or `error`.
//!
//! The concrete error types defined here are the ones this crate produces
//! itself:
//!
//! - [`NoMatchingElementError`]: a predicate rejected a successful value
//! - [`PanicError`]: a computation panicked inside a capture boundary
//! - [`MessageError`]: a plain message, built by [`ErrorValue::msg`]

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// An opaque, shareable error carried by a failed computation.
///
/// Cloning an `ErrorValue` shares the underlying error; it is never copied.
/// Two values are equal when they share the same allocation, or when both
/// their `Display` and `Debug` renderings match. The `Debug` rendering names
/// the error type for derived impls, so errors of different types with the
/// same message compare unequal. [`ErrorValue::ptr_eq`] is the strict
/// identity check.
///
/// # Examples
///
/// ```rust
/// use sumkit::control::ErrorValue;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let error = ErrorValue::new(parse_error);
///
/// assert!(error.is::<std::num::ParseIntError>());
/// assert_eq!(error.to_string(), "invalid digit found in string");
/// ```
#[derive(Clone)]
pub struct ErrorValue(Arc<dyn Error + Send + Sync + 'static>);

impl ErrorValue {
    /// Wraps any error type.
    #[inline]
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Builds an error from a plain message.
    ///
    /// ```rust
    /// use sumkit::control::{ErrorValue, MessageError};
    ///
    /// let error = ErrorValue::msg("Division by zero");
    /// assert!(error.is::<MessageError>());
    /// assert_eq!(error.to_string(), "Division by zero");
    /// ```
    #[inline]
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// Wraps an already boxed error without re-boxing its contents.
    #[inline]
    #[must_use]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// Converts a panic payload caught by `catch_unwind` into an error.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::new(PanicError::from_payload(payload))
    }

    /// Returns the carried error as a trait object.
    #[inline]
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Returns `true` if the carried error is of type `E`.
    #[inline]
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.0.is::<E>()
    }

    /// Returns a reference to the carried error if it is of type `E`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` if both values share the same underlying error.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for ErrorValue
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for ErrorValue {
    #[inline]
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, formatter)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.0.to_string() == other.0.to_string()
                && format!("{:?}", self.0) == format!("{:?}", other.0))
    }
}

impl Eq for ErrorValue {}

/// The error produced when `Attempt::filter` rejects a successful value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("predicate does not hold for {value}")]
pub struct NoMatchingElementError {
    value: String,
}

impl NoMatchingElementError {
    pub(super) fn for_value<T: fmt::Debug>(value: &T) -> Self {
        Self {
            value: format!("{value:?}"),
        }
    }

    /// Debug rendering of the rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A panic caught at a capture boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("computation panicked: {message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());
        Self { message }
    }

    /// The panic message, when the payload was a string.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A plain message error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MessageError(pub String);

/// Records a failure created at a capture site.
#[inline]
pub(super) fn record_capture(site: &'static str, error: &ErrorValue) {
    #[cfg(feature = "tracing")]
    tracing::debug!(site, error = %error, "captured failure");
    #[cfg(not(feature = "tracing"))]
    let _ = (site, error);
}
