//! Disjunction type - a value that is one of two types.
//!
//! `Disjunction<L, R>` is either `Left(L)` or `Right(R)`. Neither side means
//! "success": using `Left` for errors is a caller convention, not a rule.
//! Transformations go through a projection that names the side being
//! transformed:
//!
//! - [`Disjunction::left_view`] yields a [`LeftProjection`]
//! - [`Disjunction::right_view`] yields a [`RightProjection`]
//!
//! Mapping a projection over the other side is a no-op that re-wraps the
//! payload untouched.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::control::Disjunction;
//!
//! let right: Disjunction<String, i32> = Disjunction::Right(3);
//! let doubled = right.right_view().map(|n| n * 2).into_disjunction();
//! assert_eq!(doubled, Disjunction::Right(6));
//!
//! let left: Disjunction<String, i32> = Disjunction::Left("bad".to_string());
//! let untouched = left.right_view().map(|n| n * 2).into_disjunction();
//! assert_eq!(untouched, Disjunction::Left("bad".to_string()));
//! ```

use std::fmt;

use super::optional::Optional;
use super::projection::{LeftProjection, RightProjection};

/// A value that can be one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use sumkit::control::Disjunction;
///
/// let value: Disjunction<&str, i32> = Disjunction::Left("left");
/// let described = value.fold(|text| text.len() as i32, |n| n);
/// assert_eq!(described, 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disjunction<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Disjunction<L, R> {
    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the disjunction by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Disjunction;
    ///
    /// let left: Disjunction<i32, String> = Disjunction::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Disjunction<i32, String> = Disjunction::Right("hello".to_string());
    /// assert_eq!(right.fold(|x| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<X, F, G>(self, on_left: F, on_right: G) -> X
    where
        F: FnOnce(L) -> X,
        G: FnOnce(R) -> X,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Views the disjunction as biased toward its left payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Disjunction;
    ///
    /// let right: Disjunction<i32, i32> = Disjunction::Right(7);
    /// let result = right.left_view().map(|x| x + 1).into_disjunction();
    /// assert_eq!(result, Disjunction::Right(7));
    /// ```
    #[inline]
    pub const fn left_view(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// Views the disjunction as biased toward its right payload.
    #[inline]
    pub const fn right_view(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Optional<L>`, consuming the disjunction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::{Disjunction, Optional};
    ///
    /// let left: Disjunction<i32, String> = Disjunction::Left(42);
    /// assert_eq!(left.left(), Optional::Present(42));
    ///
    /// let right: Disjunction<i32, String> = Disjunction::Right("hello".to_string());
    /// assert_eq!(right.left(), Optional::Absent);
    /// ```
    #[inline]
    pub fn left(self) -> Optional<L> {
        self.fold(Optional::Present, |_| Optional::Absent)
    }

    /// Converts into `Optional<R>`, consuming the disjunction.
    #[inline]
    pub fn right(self) -> Optional<R> {
        self.fold(|_| Optional::Absent, Optional::Present)
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Optional<&L> {
        match self {
            Self::Left(value) => Optional::Present(value),
            Self::Right(_) => Optional::Absent,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Optional<&R> {
        match self {
            Self::Left(_) => Optional::Absent,
            Self::Right(value) => Optional::Present(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Disjunction;
    ///
    /// let left: Disjunction<i32, String> = Disjunction::Left(42);
    /// assert_eq!(left.swap(), Disjunction::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Disjunction<R, L> {
        self.fold(Disjunction::Right, Disjunction::Left)
    }
}

impl<T> Disjunction<T, T> {
    /// Extracts the payload when both sides have the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumkit::control::Disjunction;
    ///
    /// let left: Disjunction<u8, u8> = Disjunction::Left(1);
    /// let right: Disjunction<u8, u8> = Disjunction::Right(2);
    /// assert_eq!(left.merge() + right.merge(), 3);
    /// ```
    #[inline]
    pub fn merge(self) -> T {
        self.fold(|value| value, |value| value)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Disjunction<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Disjunction<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Disjunction<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(disjunction: Disjunction<L, R>) -> Self {
        disjunction.fold(Err, Ok)
    }
}
