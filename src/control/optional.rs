//! Optional type - a value that may be absent.
//!
//! `Optional<T>` is either `Present(T)` or `Absent`. Absence carries no
//! diagnostic payload; use [`Attempt`] when the reason matters.
//!
//! Every combinator is written in terms of [`Optional::fold`] or
//! [`Optional::flat_map`], and fallbacks (`get_or_else`, `or_else`,
//! `contains`) are taken as closures so they only run when needed.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::control::Optional;
//!
//! let port: Optional<&str> = Optional::Present("8080");
//! let parsed = port
//!     .flat_map(|text| Optional::from(text.parse::<u16>().ok()))
//!     .filter(|port| *port > 1024);
//!
//! assert_eq!(parsed, Optional::Present(8080));
//! assert_eq!(Optional::<u16>::Absent.get_or_else(|| 80), 80);
//! ```

use std::fmt;

use super::attempt::Attempt;
use super::error::ErrorValue;

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use sumkit::control::Optional;
///
/// let present = Optional::Present(5);
/// assert_eq!(present.map(|n| n * 2), Optional::Present(10));
///
/// let absent: Optional<i32> = Optional::Absent;
/// assert_eq!(absent.map(|n| n * 2), Optional::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value of type `T`.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Optional` by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Optional;
    ///
    /// let present = Optional::Present(3);
    /// assert_eq!(present.fold(|| "none".to_string(), |n| n.to_string()), "3");
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.fold(|| "none".to_string(), |n| n.to_string()), "none");
    /// ```
    #[inline]
    pub fn fold<R, G, F>(self, on_absent: G, on_present: F) -> R
    where
        G: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the payload, yielding `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Sequencing and Mapping
    // =========================================================================

    /// Sequences a computation that may itself be absent.
    ///
    /// `Absent` short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent };
    ///
    /// assert_eq!(Optional::Present(8).flat_map(half), Optional::Present(4));
    /// assert_eq!(Optional::Present(7).flat_map(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        self.fold(|| Optional::Absent, function)
    }

    /// Transforms the payload when present.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        self.flat_map(|value| Optional::Present(function(value)))
    }

    /// Runs a side effect on the payload when present.
    #[inline]
    pub fn foreach<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        self.as_ref().fold(|| (), function);
    }

    // =========================================================================
    // Filtering and Queries
    // =========================================================================

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Optional;
    ///
    /// assert_eq!(Optional::Present(12).filter(|n| *n > 10), Optional::Present(12));
    /// assert_eq!(Optional::Present(4).filter(|n| *n > 10), Optional::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::Present(value)
            } else {
                Self::Absent
            }
        })
    }

    /// Keeps the value only if `predicate` does not hold for it.
    #[inline]
    #[must_use]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Returns `true` if present and `predicate` holds for the value.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.as_ref().fold(|| false, predicate)
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the value, or evaluates `default` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Optional;
    ///
    /// assert_eq!(Optional::Present(5).get_or_else(|| 0), 5);
    /// assert_eq!(Optional::Absent.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(default, |value| value)
    }

    /// Returns `self` when present, otherwise evaluates `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative(),
        }
    }

    /// Returns `true` if present and equal to the lazily computed `target`.
    ///
    /// `target` is never evaluated when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Optional;
    ///
    /// assert!(Optional::Present(3).contains(|| 3));
    /// assert!(!Optional::Present(3).contains(|| 4));
    /// assert!(!Optional::<i32>::Absent.contains(|| unreachable!()));
    /// ```
    #[inline]
    pub fn contains<F>(&self, target: F) -> bool
    where
        T: PartialEq,
        F: FnOnce() -> T,
    {
        self.exists(|value| *value == target())
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Attempt`, producing the error lazily when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::{Attempt, ErrorValue, Optional};
    ///
    /// let found = Optional::Present(1).to_attempt(|| ErrorValue::msg("missing"));
    /// assert_eq!(found, Attempt::success(1));
    ///
    /// let missing = Optional::<i32>::Absent.to_attempt(|| ErrorValue::msg("missing"));
    /// assert!(missing.is_failed());
    /// ```
    #[inline]
    pub fn to_attempt<F>(self, on_absent: F) -> Attempt<T>
    where
        F: FnOnce() -> ErrorValue,
    {
        self.fold(|| Attempt::Failure(on_absent()), Attempt::Success)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.fold(|| None, Some)
    }
}

// =============================================================================
// Monad Implementation
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::Monad for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}
