use crate::{Result, Value};

/// A value that computes its SQL representation on demand.
///
/// Implement it for domain types that should interpolate as their underlying
/// primitive (a nullable wrapper, an enum stored as text, ...). The provider
/// is invoked once per interpolation:
/// - `Ok(Some(value))` is classified like any other argument, but a provider
///   returned from a provider is rejected.
/// - `Ok(None)` renders as `NULL`.
/// - `Err(..)` aborts the call and is returned to the caller unchanged.
///
/// # Examples
/// ```rust
/// use quill_core::{Result, Value, ValueProvider, interpolate};
///
/// struct Email(Option<String>);
///
/// impl ValueProvider for Email {
///     fn provide(&self) -> Result<Option<Value>> {
///         Ok(self.0.clone().map(Into::into))
///     }
/// }
///
/// let sql = interpolate(
///     "UPDATE users SET email = ?",
///     &[Value::provider(Email(None))],
/// ).unwrap();
/// assert_eq!(sql, "UPDATE users SET email = NULL");
/// ```
pub trait ValueProvider: Send + Sync {
    fn provide(&self) -> Result<Option<Value>>;
}

impl<F> ValueProvider for F
where
    F: Fn() -> Result<Option<Value>> + Send + Sync,
{
    fn provide(&self) -> Result<Option<Value>> {
        self()
    }
}
