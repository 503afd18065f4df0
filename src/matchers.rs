//! Ready-made cause predicates for recovery
//!
//! Every function here returns a closure usable as the `matches` argument of
//! [`ResultBox::recover`](crate::ResultBox::recover) and
//! [`ResultBox::recover_with`](crate::ResultBox::recover_with).
//!
//! ```rust
//! use resultbox::{matchers, Panic, ResultBox};
//!
//! let boxed = ResultBox::catching(|| -> u8 { std::panic::panic_any(404_u16) })
//!     .recover(matchers::is::<u16, Panic>(), 0);
//! assert_eq!(boxed.get_or_resume(), 0);
//! ```

use std::any::Any;
use std::error::Error;

/// Accept every cause
pub fn any<C: ?Sized>() -> impl Fn(&C) -> bool {
    |_| true
}

/// Reject every cause
pub fn none<C: ?Sized>() -> impl Fn(&C) -> bool {
    |_| false
}

/// Accept causes equal to `expected`
pub fn eq<C: PartialEq>(expected: C) -> impl Fn(&C) -> bool {
    move |cause| *cause == expected
}

/// Invert another predicate
pub fn not<C: ?Sized, P>(predicate: P) -> impl Fn(&C) -> bool
where
    P: Fn(&C) -> bool,
{
    move |cause| !predicate(cause)
}

/// Accept type-erased causes whose concrete type is `E`
///
/// This is the matcher for panic payloads and other `dyn Any` causes.
pub fn is<E: 'static, C: AnyCause + ?Sized>() -> impl Fn(&C) -> bool {
    |cause| cause.holds::<E>()
}

/// Accept boxed errors whose concrete type is `E`
pub fn is_error<E: Error + 'static, C: ErrorCause + ?Sized>() -> impl Fn(&C) -> bool {
    |cause| cause.holds_error::<E>()
}

/// `dyn Any` causes whose concrete type can be tested at runtime
pub trait AnyCause {
    /// Check if the erased value is an `E`
    fn holds<E: 'static>(&self) -> bool;
}

impl AnyCause for dyn Any {
    fn holds<E: 'static>(&self) -> bool {
        self.is::<E>()
    }
}

impl AnyCause for dyn Any + Send {
    fn holds<E: 'static>(&self) -> bool {
        self.is::<E>()
    }
}

impl<T: AnyCause + ?Sized> AnyCause for Box<T> {
    fn holds<E: 'static>(&self) -> bool {
        (**self).holds::<E>()
    }
}

/// `dyn Error` causes whose concrete type can be tested at runtime
pub trait ErrorCause {
    /// Check if the erased error is an `E`
    fn holds_error<E: Error + 'static>(&self) -> bool;
}

impl ErrorCause for dyn Error {
    fn holds_error<E: Error + 'static>(&self) -> bool {
        self.is::<E>()
    }
}

impl ErrorCause for dyn Error + Send + Sync {
    fn holds_error<E: Error + 'static>(&self) -> bool {
        self.is::<E>()
    }
}

impl<T: ErrorCause + ?Sized> ErrorCause for Box<T> {
    fn holds_error<E: Error + 'static>(&self) -> bool {
        (**self).holds_error::<E>()
    }
}
