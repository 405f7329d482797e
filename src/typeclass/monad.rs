//! Monad type class - sequencing computations within a context.
//!
//! Every container in this crate satisfies the same minimal algebraic shape:
//! a way to lift a raw value (`pure`) and a way to sequence a dependent
//! computation (`flat_map`). Mapping is derived from those two.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! ## Map Derivation
//!
//! ```text
//! m.fmap(f) == m.flat_map(|x| Self::pure(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumkit::control::Optional;
//! use sumkit::typeclass::Monad;
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(5);
//! let doubled = Monad::flat_map(lifted, |n| Optional::Present(n * 2));
//! assert_eq!(doubled, Optional::Present(10));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that support sequencing of computations.
///
/// Each container also exposes inherent `map`/`flat_map` methods with the same
/// meaning; this trait lets generic code treat them uniformly. Because the
/// inherent methods win method resolution, call the trait versions as
/// `Monad::flat_map(value, f)` when both are in scope.
///
/// # Examples
///
/// ```rust
/// use sumkit::control::Attempt;
/// use sumkit::typeclass::Monad;
///
/// fn increment<M>(value: M) -> M::WithType<i32>
/// where
///     M: Monad<Inner = i32>,
/// {
///     value.fmap(|n| n + 1)
/// }
///
/// assert_eq!(increment(Attempt::success(1)), Attempt::success(2));
/// ```
pub trait Monad: TypeConstructor + Sized {
    /// Lifts a raw value into the container.
    ///
    /// The receiver type only selects the constructor; its payload type is
    /// irrelevant, so `<Optional<()>>::pure(42)` yields `Optional<i32>`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the value inside the container and flattens the result.
    ///
    /// On the empty or failed branch the function is not called and the
    /// branch is carried over unchanged.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Maps the payload, derived as `flat_map(|x| pure(f(x)))`.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B,
    {
        self.flat_map(|value| Self::pure(function(value)))
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}
