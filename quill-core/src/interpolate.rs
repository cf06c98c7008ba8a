use crate::{GenericSqlWriter, Result, SqlWriter, Value};

/// Produce `template` with every `?` replaced by the escaped literal of the
/// value in the same position.
///
/// Fails without partial output on the first error, see
/// [`crate::InterpolateError`] for the possible kinds.
///
/// ```rust
/// use quill_core::{InterpolateError, interpolate, values};
/// let sql = interpolate("SELECT * FROM x WHERE a = ? AND b = ?", &values![true, "it's"]).unwrap();
/// assert_eq!(sql, r"SELECT * FROM x WHERE a = 1 AND b = 'it\'s'");
///
/// let error = interpolate("a = ? AND b = ?", &values![1]).unwrap_err();
/// assert!(matches!(
///     error.downcast_ref::<InterpolateError>(),
///     Some(InterpolateError::ArgumentMismatch { placeholders: 2, values: 1 })
/// ));
/// ```
pub fn interpolate(template: &str, values: &[Value]) -> Result<String> {
    GenericSqlWriter::new().interpolate(template, values)
}
