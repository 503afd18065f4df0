//! The Success/Failure box and its operations

use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::error::WrongVariant;
use crate::traits::Fallback;

/// Payload of a panic captured by [`ResultBox::catching`]
pub type Panic = Box<dyn Any + Send + 'static>;

/// Outcome of a computation, held as data
///
/// A box is either a `Success` carrying the computed value or a `Failure`
/// carrying the cause the computation failed with. Nothing inside a box is
/// ever replaced; hooks observe it and recovery builds new boxes.
///
/// # Examples
///
/// ```rust
/// use resultbox::ResultBox;
///
/// let parsed = ResultBox::of(|| "42".parse::<i32>());
/// assert!(parsed.is_success());
/// assert_eq!(parsed.get(), Ok(42));
///
/// let recovered = ResultBox::of(|| "4x".parse::<i32>()).recover(|_| true, 0);
/// assert_eq!(recovered.get(), Ok(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "a ResultBox may hold a captured failure, which should be handled"]
pub enum ResultBox<T, C> {
    /// The computation completed normally
    Success(T),
    /// The computation failed with the contained cause
    Failure(C),
}

impl<T, C> ResultBox<T, C> {
    /// Run `computation` now and capture its outcome
    ///
    /// `Ok(value)` becomes `Success(value)`. `Err(cause)` becomes
    /// `Failure(cause)`, with the cause moved into the box untouched, so the
    /// body of `computation` can use `?` freely.
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, C>,
    {
        match computation() {
            Ok(value) => ResultBox::Success(value),
            Err(cause) => {
                trace_event!(
                    cause = std::any::type_name::<C>(),
                    "computation failed, cause captured"
                );
                ResultBox::Failure(cause)
            }
        }
    }

    /// Build a `Success` directly
    pub fn success(value: T) -> Self {
        ResultBox::Success(value)
    }

    /// Build a `Failure` directly
    pub fn failure(cause: C) -> Self {
        ResultBox::Failure(cause)
    }

    /// Check if the box is a `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, ResultBox::Success(_))
    }

    /// Check if the box is a `Failure`
    pub fn is_failure(&self) -> bool {
        matches!(self, ResultBox::Failure(_))
    }

    /// Check if the box holds no success value, which is the same as being a `Failure`
    pub fn is_empty(&self) -> bool {
        !self.is_success()
    }

    /// Unwrap the value, handing the cause back as `Err` on a `Failure`
    ///
    /// This is where a captured failure turns back into ordinary error
    /// propagation:
    ///
    /// ```rust
    /// use resultbox::ResultBox;
    ///
    /// fn double(input: &str) -> Result<i32, std::num::ParseIntError> {
    ///     let n = ResultBox::of(|| input.parse::<i32>()).get()?;
    ///     Ok(n * 2)
    /// }
    ///
    /// assert_eq!(double("21"), Ok(42));
    /// assert!(double("x").is_err());
    /// ```
    pub fn get(self) -> Result<T, C> {
        match self {
            ResultBox::Success(value) => Ok(value),
            ResultBox::Failure(cause) => Err(cause),
        }
    }

    /// Unwrap the cause of a `Failure`
    ///
    /// A `Success` has no cause, so asking it for one yields [`WrongVariant`].
    pub fn get_cause(self) -> Result<C, WrongVariant> {
        match self {
            ResultBox::Success(_) => Err(WrongVariant),
            ResultBox::Failure(cause) => Ok(cause),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<T, C> {
        self.get()
    }

    /// Borrow both sides, leaving the box in place
    pub fn as_ref(&self) -> ResultBox<&T, &C> {
        match self {
            ResultBox::Success(value) => ResultBox::Success(value),
            ResultBox::Failure(cause) => ResultBox::Failure(cause),
        }
    }

    /// Borrow the value of a `Success`
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            ResultBox::Success(value) => Some(value),
            ResultBox::Failure(_) => None,
        }
    }

    /// Borrow the cause of a `Failure`
    pub fn cause_ref(&self) -> Option<&C> {
        match self {
            ResultBox::Success(_) => None,
            ResultBox::Failure(cause) => Some(cause),
        }
    }

    /// Run `consumer` with the value if this is a `Success`, then return the box unchanged
    pub fn on_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let ResultBox::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Run `consumer` with the cause if this is a `Failure`, then return the box unchanged
    pub fn on_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&C),
    {
        if let ResultBox::Failure(cause) = &self {
            consumer(cause);
        }
        self
    }

    /// Turn a matching `Failure` into a `Success` holding `fallback`
    ///
    /// `matches` is only called on a `Failure`, and at most once. When it
    /// accepts the cause, the fallback is resolved (a supplier runs exactly
    /// once) and wrapped in `Success`. Every other box is returned as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultbox::{Fallback, ResultBox};
    ///
    /// let failed: ResultBox<i32, &str> = ResultBox::failure("timeout");
    ///
    /// let by_value = failed.recover(|cause| *cause == "timeout", 21);
    /// let by_supplier = failed.recover(|cause| *cause == "timeout", Fallback::supplier(|| 21));
    /// assert_eq!(by_value, by_supplier);
    ///
    /// let untouched = failed.recover(|cause| *cause == "refused", 21);
    /// assert_eq!(untouched, failed);
    /// ```
    pub fn recover<'a, P, V>(self, matches: P, fallback: V) -> Self
    where
        P: FnOnce(&C) -> bool,
        V: Into<Fallback<'a, T>>,
    {
        match self {
            ResultBox::Failure(cause) => {
                if matches(&cause) {
                    trace_event!(
                        cause = std::any::type_name::<C>(),
                        "failure recovered into success"
                    );
                    ResultBox::Success(fallback.into().resolve())
                } else {
                    ResultBox::Failure(cause)
                }
            }
            success => success,
        }
    }

    /// Replace a matching `Failure` with the box supplied by `fallback`
    ///
    /// Same matching rules as [`ResultBox::recover`], but the fallback is a
    /// whole box and is returned exactly as produced, so a matched failure
    /// may be swapped for another `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultbox::{Fallback, ResultBox};
    ///
    /// let failed: ResultBox<i32, String> = ResultBox::failure("cache miss".to_string());
    /// let reloaded = failed.recover_with(
    ///     |cause| cause.contains("miss"),
    ///     Fallback::supplier(|| ResultBox::of(|| "21".parse::<i32>().map_err(|e| e.to_string()))),
    /// );
    /// assert_eq!(reloaded, ResultBox::Success(21));
    /// ```
    pub fn recover_with<'a, P, V>(self, matches: P, fallback: V) -> Self
    where
        P: FnOnce(&C) -> bool,
        V: Into<Fallback<'a, ResultBox<T, C>>>,
    {
        match self {
            ResultBox::Failure(cause) => {
                if matches(&cause) {
                    trace_event!(
                        cause = std::any::type_name::<C>(),
                        "failure replaced by fallback box"
                    );
                    fallback.into().resolve()
                } else {
                    ResultBox::Failure(cause)
                }
            }
            success => success,
        }
    }
}

impl<T> ResultBox<T, Panic> {
    /// Run `computation` now, capturing a panic as a `Failure`
    ///
    /// The panic payload is stored exactly as it was raised. The default panic
    /// hook still reports the panic; install a hook to silence it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultbox::ResultBox;
    ///
    /// let boxed = ResultBox::catching(|| -> i32 { panic!("boom") });
    /// assert!(boxed.is_failure());
    /// assert_eq!(boxed.panic_message(), Some("boom"));
    /// ```
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(computation) {
            Ok(value) => ResultBox::Success(value),
            Err(payload) => {
                trace_event!("computation panicked, payload captured");
                ResultBox::Failure(payload)
            }
        }
    }

    /// Unwrap the value, resuming the captured panic on a `Failure`
    pub fn get_or_resume(self) -> T {
        match self {
            ResultBox::Success(value) => value,
            ResultBox::Failure(payload) => panic::resume_unwind(payload),
        }
    }

    /// The message of a captured panic, when it was raised with one
    pub fn panic_message(&self) -> Option<&str> {
        self.cause_ref().and_then(panic_message)
    }
}

/// Extract the message from a panic payload raised by `panic!`
///
/// `panic!` with a literal produces a `&'static str` payload and with
/// format arguments a `String`; any other payload has no message.
pub fn panic_message(payload: &Panic) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

impl<T, C> From<Result<T, C>> for ResultBox<T, C> {
    fn from(result: Result<T, C>) -> Self {
        match result {
            Ok(value) => ResultBox::Success(value),
            Err(cause) => ResultBox::Failure(cause),
        }
    }
}

impl<T, C> From<ResultBox<T, C>> for Result<T, C> {
    fn from(boxed: ResultBox<T, C>) -> Self {
        boxed.get()
    }
}
