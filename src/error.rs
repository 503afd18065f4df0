//! Errors raised by the box itself, as opposed to captured causes

use thiserror::Error;

/// Returned by [`ResultBox::get_cause`](crate::ResultBox::get_cause) on a `Success`
///
/// Captured causes are never wrapped in this type, so a `WrongVariant` always
/// means the caller unwrapped the wrong side of the box.
///
/// # Examples
///
/// ```rust
/// use resultbox::{ResultBox, WrongVariant};
///
/// let boxed: ResultBox<&str, String> = ResultBox::success("s");
/// assert_eq!(boxed.get_cause(), Err(WrongVariant));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("called `get_cause` on a `Success`, which holds no cause")]
pub struct WrongVariant;
