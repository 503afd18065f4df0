//! Core traits and helper types shared by the box operations

use crate::ResultBox;

/// A fallback payload for [`ResultBox::recover`] and [`ResultBox::recover_with`]
///
/// Either a ready value or a zero-argument supplier that is only called when
/// the recovery actually applies. Any `T` converts into `Fallback::Literal`,
/// so a bare value can be passed where a fallback is expected.
///
/// # Examples
///
/// ```rust
/// use resultbox::Fallback;
///
/// let literal: Fallback<i32> = 21.into();
/// let supplier = Fallback::supplier(|| 21);
/// assert_eq!(literal.resolve(), supplier.resolve());
/// ```
pub enum Fallback<'a, T> {
    /// A value used as-is
    Literal(T),
    /// A computation evaluated once, on demand
    Supplier(Box<dyn FnOnce() -> T + 'a>),
}

impl<'a, T> Fallback<'a, T> {
    /// Wrap a ready value
    pub fn value(value: T) -> Self {
        Fallback::Literal(value)
    }

    /// Wrap a supplier; it runs at most once, inside [`Fallback::resolve`]
    pub fn supplier<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Fallback::Supplier(Box::new(supplier))
    }

    /// Check whether this fallback still has to be computed
    pub fn is_supplier(&self) -> bool {
        matches!(self, Fallback::Supplier(_))
    }

    /// Produce the fallback value, running the supplier if there is one
    pub fn resolve(self) -> T {
        match self {
            Fallback::Literal(value) => value,
            Fallback::Supplier(supplier) => supplier(),
        }
    }
}

impl<'a, T> From<T> for Fallback<'a, T> {
    fn from(value: T) -> Self {
        Fallback::Literal(value)
    }
}

impl<'a, T: std::fmt::Debug> std::fmt::Debug for Fallback<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Fallback::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

/// Trait to convert result-shaped types into a [`ResultBox`]
///
/// This gives a uniform entry point for code that produces `Result`s and
/// wants to continue with box semantics.
pub trait IntoResultBox<T, C> {
    /// Convert into a box, mapping the error side to `Failure`
    fn into_result_box(self) -> ResultBox<T, C>;
}

impl<T, C> IntoResultBox<T, C> for Result<T, C> {
    fn into_result_box(self) -> ResultBox<T, C> {
        ResultBox::from(self)
    }
}

impl<T, C> IntoResultBox<T, C> for ResultBox<T, C> {
    fn into_result_box(self) -> ResultBox<T, C> {
        self
    }
}
