//! Side-biased views over a [`Disjunction`].
//!
//! A projection wraps a disjunction and decides which payload `map` and
//! `flat_map` transform. The other side passes through untouched; only its
//! type parameter position changes, e.g. `Right(r)` viewed through a
//! `LeftProjection<L, R>` and mapped with `L -> X` comes back as a
//! `Disjunction<X, R>` still holding `Right(r)`.

use super::disjunction::Disjunction;
use super::optional::Optional;

/// A view of a [`Disjunction`] biased toward its `Left` payload.
///
/// # Examples
///
/// ```rust
/// use sumkit::control::Disjunction;
///
/// let left: Disjunction<i32, String> = Disjunction::Left(20);
/// let result = left
///     .left_view()
///     .flat_map(|n| if n > 10 { Disjunction::Left(n * 2) } else { Disjunction::Right("small".to_string()) })
///     .into_disjunction();
/// assert_eq!(result, Disjunction::Left(40));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    disjunction: Disjunction<L, R>,
}

/// A view of a [`Disjunction`] biased toward its `Right` payload.
///
/// # Examples
///
/// ```rust
/// use sumkit::control::Disjunction;
///
/// let parsed: Disjunction<String, &str> = Disjunction::Right("12");
/// let result = parsed
///     .right_view()
///     .flat_map(|text| Disjunction::from(text.parse::<i32>().map_err(|error| error.to_string())))
///     .map(|n| n + 1)
///     .into_disjunction();
/// assert_eq!(result, Disjunction::Right(13));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    disjunction: Disjunction<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    #[inline]
    pub(super) const fn new(disjunction: Disjunction<L, R>) -> Self {
        Self { disjunction }
    }

    /// Transforms a `Left` payload; a `Right` is re-wrapped unchanged.
    #[inline]
    pub fn map<X, F>(self, function: F) -> LeftProjection<X, R>
    where
        F: FnOnce(L) -> X,
    {
        self.flat_map(|value| Disjunction::Left(function(value)))
    }

    /// Replaces a `Left` payload with the disjunction `function` returns.
    #[inline]
    pub fn flat_map<X, F>(self, function: F) -> LeftProjection<X, R>
    where
        F: FnOnce(L) -> Disjunction<X, R>,
    {
        LeftProjection::new(self.disjunction.fold(function, Disjunction::Right))
    }

    /// Returns the left payload, or evaluates `default` for a `Right`.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> L
    where
        F: FnOnce() -> L,
    {
        self.disjunction.fold(|value| value, |_| default())
    }

    /// Returns `true` if this is a `Left` and `predicate` holds for it.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        self.disjunction.left_ref().fold(|| false, predicate)
    }

    /// Runs a side effect on a `Left` payload.
    #[inline]
    pub fn foreach<F>(&self, function: F)
    where
        F: FnOnce(&L),
    {
        self.disjunction.left_ref().fold(|| (), function);
    }

    /// Converts into `Optional<L>`.
    #[inline]
    pub fn to_optional(self) -> Optional<L> {
        self.disjunction.left()
    }

    /// Borrows the wrapped disjunction.
    #[inline]
    pub const fn as_disjunction(&self) -> &Disjunction<L, R> {
        &self.disjunction
    }

    /// Unwraps the projection.
    #[inline]
    pub fn into_disjunction(self) -> Disjunction<L, R> {
        self.disjunction
    }
}

impl<L, R> RightProjection<L, R> {
    #[inline]
    pub(super) const fn new(disjunction: Disjunction<L, R>) -> Self {
        Self { disjunction }
    }

    /// Transforms a `Right` payload; a `Left` is re-wrapped unchanged.
    #[inline]
    pub fn map<X, F>(self, function: F) -> RightProjection<L, X>
    where
        F: FnOnce(R) -> X,
    {
        self.flat_map(|value| Disjunction::Right(function(value)))
    }

    /// Replaces a `Right` payload with the disjunction `function` returns.
    #[inline]
    pub fn flat_map<X, F>(self, function: F) -> RightProjection<L, X>
    where
        F: FnOnce(R) -> Disjunction<L, X>,
    {
        RightProjection::new(self.disjunction.fold(Disjunction::Left, function))
    }

    /// Returns the right payload, or evaluates `default` for a `Left`.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.disjunction.fold(|_| default(), |value| value)
    }

    /// Returns `true` if this is a `Right` and `predicate` holds for it.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        self.disjunction.right_ref().fold(|| false, predicate)
    }

    /// Runs a side effect on a `Right` payload.
    #[inline]
    pub fn foreach<F>(&self, function: F)
    where
        F: FnOnce(&R),
    {
        self.disjunction.right_ref().fold(|| (), function);
    }

    /// Converts into `Optional<R>`.
    #[inline]
    pub fn to_optional(self) -> Optional<R> {
        self.disjunction.right()
    }

    /// Borrows the wrapped disjunction.
    #[inline]
    pub const fn as_disjunction(&self) -> &Disjunction<L, R> {
        &self.disjunction
    }

    /// Unwraps the projection.
    #[inline]
    pub fn into_disjunction(self) -> Disjunction<L, R> {
        self.disjunction
    }
}

impl<L, R> From<LeftProjection<L, R>> for Disjunction<L, R> {
    #[inline]
    fn from(projection: LeftProjection<L, R>) -> Self {
        projection.disjunction
    }
}

impl<L, R> From<RightProjection<L, R>> for Disjunction<L, R> {
    #[inline]
    fn from(projection: RightProjection<L, R>) -> Self {
        projection.disjunction
    }
}

// =============================================================================
// Monad Implementations
//
// The trait's `flat_map` continues with a projection, while the inherent
// `flat_map` continues with a bare `Disjunction`.
// =============================================================================

#[cfg(feature = "typeclass")]
impl<L, R> crate::typeclass::TypeConstructor for LeftProjection<L, R> {
    type Inner = L;
    type WithType<B> = LeftProjection<B, R>;
}

#[cfg(feature = "typeclass")]
impl<L, R> crate::typeclass::Monad for LeftProjection<L, R> {
    #[inline]
    fn pure<B>(value: B) -> LeftProjection<B, R> {
        LeftProjection::new(Disjunction::Left(value))
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> LeftProjection<B, R>
    where
        F: FnOnce(L) -> LeftProjection<B, R>,
    {
        Self::flat_map(self, |value| function(value).disjunction)
    }
}

#[cfg(feature = "typeclass")]
impl<L, R> crate::typeclass::TypeConstructor for RightProjection<L, R> {
    type Inner = R;
    type WithType<B> = RightProjection<L, B>;
}

#[cfg(feature = "typeclass")]
impl<L, R> crate::typeclass::Monad for RightProjection<L, R> {
    #[inline]
    fn pure<B>(value: B) -> RightProjection<L, B> {
        RightProjection::new(Disjunction::Right(value))
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> RightProjection<L, B>
    where
        F: FnOnce(R) -> RightProjection<L, B>,
    {
        Self::flat_map(self, |value| function(value).disjunction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn left_map_on_right_is_a_no_op() {
        let right: Disjunction<i32, i32> = Disjunction::Right(7);
        let mapped: LeftProjection<String, i32> = right.left_view().map(|n| n.to_string());
        assert_eq!(mapped.into_disjunction(), Disjunction::Right(7));
    }

    #[rstest]
    fn right_flat_map_on_left_skips_function() {
        let calls = Cell::new(0);
        let left: Disjunction<&str, i32> = Disjunction::Left("bad");
        let result = left.right_view().flat_map(|n| {
            calls.set(calls.get() + 1);
            Disjunction::Right(n + 1)
        });
        assert_eq!(result.into_disjunction(), Disjunction::Left("bad"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Disjunction::Left(3), 3)]
    #[case(Disjunction::Right("x"), 0)]
    fn left_get_or_else(#[case] input: Disjunction<i32, &str>, #[case] expected: i32) {
        assert_eq!(input.left_view().get_or_else(|| 0), expected);
    }

    #[rstest]
    fn projection_queries_follow_their_side() {
        let right: Disjunction<&str, i32> = Disjunction::Right(4);
        assert!(right.right_view().exists(|n| *n == 4));
        assert!(!right.left_view().exists(|_| true));
        assert_eq!(right.right_view().to_optional(), Optional::Present(4));
        assert_eq!(right.left_view().to_optional(), Optional::Absent);

        let seen = Cell::new(0);
        right.right_view().foreach(|n| seen.set(*n));
        right.left_view().foreach(|_| seen.set(-1));
        assert_eq!(seen.get(), 4);
    }

    #[rstest]
    fn projections_convert_back_into_disjunction() {
        let value: Disjunction<u8, u8> = Disjunction::Left(1);
        let projection = value.right_view();
        assert_eq!(projection.as_disjunction(), &value);
        assert_eq!(Disjunction::from(projection), value);
    }
}
