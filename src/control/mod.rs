//! Algebraic containers.
//!
//! - [`Optional`]: a value that may be absent
//! - [`Attempt`]: a computation that succeeded or failed with an [`ErrorValue`]
//! - [`Disjunction`]: a value of one of two types, transformed through
//!   [`LeftProjection`] or [`RightProjection`]
//!
//! Every container is a closed enum. Combinators take the value by ownership
//! and return either the same value or a freshly built one; none of them
//! mutate in place.
//!
//! # Examples
//!
//! ## Capturing a failure
//!
//! ```rust
//! use sumkit::control::{Attempt, Optional};
//!
//! let port = Attempt::try_catching(|| "80a".parse::<u16>())
//!     .recover(|_| Attempt::success(8080))
//!     .filter(|port| *port > 1024)
//!     .to_optional();
//!
//! assert_eq!(port, Optional::Present(8080));
//! ```
//!
//! ## Choosing a side
//!
//! ```rust
//! use sumkit::control::Disjunction;
//!
//! let outcome: Disjunction<String, u32> = Disjunction::Right(20);
//! let total = outcome
//!     .right_view()
//!     .map(|n| n + 1)
//!     .get_or_else(|| 0);
//! assert_eq!(total, 21);
//! ```

mod attempt;
mod disjunction;
mod error;
mod optional;
mod projection;

pub use attempt::Attempt;
pub use disjunction::Disjunction;
pub use error::{ErrorValue, MessageError, NoMatchingElementError, PanicError};
pub use optional::Optional;
pub use projection::{LeftProjection, RightProjection};
