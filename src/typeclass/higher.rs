//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` directly.
//! [`TypeConstructor`] names the constructor through a GAT so that
//! [`Monad`](super::Monad) can describe "the same container holding a
//! different payload".
//!
//! # Example
//!
//! ```rust
//! use sumkit::control::Optional;
//! use sumkit::typeclass::TypeConstructor;
//!
//! fn retype<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::Present(42);
//! let absent: Optional<String> = retype(present);
//! assert_eq!(absent, Optional::Absent);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The payload type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The payload type that this type constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`; for `RightProjection<L, R>` it is `R`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
