//! A result box for Rust
//!
//! This crate provides [`ResultBox`], a `Success`/`Failure` container that
//! captures the outcome of a computation as data. Callers inspect it, hook
//! side effects onto either branch and recover from selected failures before
//! finally unwrapping it back into ordinary `Result` propagation.
//!
//! ```rust
//! use resultbox::{Fallback, ResultBox};
//!
//! let port = ResultBox::of(|| "http".parse::<u16>())
//!     .on_failure(|cause| eprintln!("bad port: {cause}"))
//!     .recover(|cause| cause.to_string().contains("invalid"), Fallback::supplier(|| 8080));
//!
//! assert_eq!(port.get(), Ok(8080));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Lets the proc macros name `::resultbox` from inside this crate too
extern crate self as resultbox;

// Core modules
#[macro_use]
mod macros;
mod error;
mod result;
pub mod matchers;
pub mod traits;

// Re-export public API
pub use error::WrongVariant;
pub use result::{panic_message, Panic, ResultBox};
pub use traits::{Fallback, IntoResultBox};

// Re-export the proc macros
#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
pub use resultbox_macros::result_box;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing;
