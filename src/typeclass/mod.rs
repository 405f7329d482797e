//! Type class traits for the containers in this crate.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Monad`]: Lifting (`pure`) and sequencing (`flat_map`), with `fmap` derived
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types stand in for them, which is enough to state
//! `Monad` once and implement it for `Optional`, `Attempt` and both
//! disjunction projections.
//!
//! # Examples
//!
//! ```rust
//! use sumkit::control::Optional;
//! use sumkit::typeclass::Monad;
//!
//! let x: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(x.fmap(|n| n + 1), Optional::Present(43));
//! ```

mod higher;
mod monad;

pub use higher::TypeConstructor;
pub use monad::Monad;
