//! # sumkit
//!
//! Algebraic containers for optional values, captured failures and two-sided
//! disjunctions, each with the same set of monadic combinators.
//!
//! ## Overview
//!
//! - **Optional**: `Present(T)` or `Absent`
//! - **Attempt**: `Success(T)` or `Failure(ErrorValue)`, with a capture
//!   boundary that turns errors and panics into failures
//! - **Disjunction**: `Left(L)` or `Right(R)`, transformed through side-biased
//!   projections
//! - **Type Classes**: the `Monad` contract (`pure`, `flat_map`, derived
//!   `fmap`) shared by all of the above
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor` and `Monad` traits and their impls
//! - `control`: the containers
//! - `tracing`: emit a `tracing` event whenever a failure is captured
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sumkit::prelude::*;
//!
//! let found = Optional::Present("42")
//!     .to_attempt(|| ErrorValue::msg("missing"))
//!     .flat_map(|text| Attempt::from(text.parse::<i32>()))
//!     .map(|n| n + 1);
//!
//! assert_eq!(found, Attempt::success(43));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sumkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
