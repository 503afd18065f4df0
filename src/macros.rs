//! Declarative macros

/// Build a [`ResultBox`](crate::ResultBox) from an expression that may use `?`
///
/// The expression is wrapped in `Ok(..)` and run through
/// [`ResultBox::of`](crate::ResultBox::of), so any `?` inside it short-circuits
/// into a `Failure`. The cause type comes from context, the way it would for
/// a `Result`-returning closure.
///
/// # Examples
///
/// ```rust
/// use resultbox::{try_of, ResultBox};
/// use std::num::ParseIntError;
///
/// let sum: ResultBox<i32, ParseIntError> = try_of!("20".parse::<i32>()? + 1);
/// assert_eq!(sum.get(), Ok(21));
///
/// let bad: ResultBox<i32, ParseIntError> = try_of!({
///     let n: i32 = "twenty".parse()?;
///     n + 1
/// });
/// assert!(bad.is_failure());
/// ```
///
/// The cause type can also be given inline, before a `;`:
///
/// ```rust
/// use resultbox::try_of;
///
/// let boxed = try_of!(cause = String; "s");
/// assert_eq!(boxed.get(), Ok("s"));
///
/// // Qualified paths still parse as the expression
/// let zero = try_of!(cause = String; <u8 as Default>::default());
/// assert_eq!(zero.get(), Ok(0));
/// ```
#[macro_export]
macro_rules! try_of {
    // Explicit cause type
    (cause = $cause:ty; $body:expr) => {
        $crate::ResultBox::of(|| -> ::core::result::Result<_, $cause> {
            ::core::result::Result::Ok($body)
        })
    };

    // Cause inferred from context
    ($body:expr) => {
        $crate::ResultBox::of(|| ::core::result::Result::Ok($body))
    };
}

// Trace events for captures and recoveries; compiled out without the `tracing` feature
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}
