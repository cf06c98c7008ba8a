/// Terminal failures of an interpolation call.
///
/// They travel inside [`crate::Error`], recover the kind with
/// `error.downcast_ref::<InterpolateError>()`. Failures raised by a
/// [`crate::ValueProvider`] are not wrapped and reach the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterpolateError {
    /// The number of placeholders differs from the number of values.
    #[error("Mismatch between the number of placeholders ({placeholders}) and values ({values})")]
    ArgumentMismatch { placeholders: usize, values: usize },
    /// A byte string is not valid UTF-8.
    #[error("Text value is not valid UTF-8")]
    NotValidText,
    /// A value has no literal representation.
    #[error("Value cannot be interpolated into a SQL literal")]
    InvalidValue,
    /// A list contains an element that has no literal representation, or
    /// whose kind differs from the other elements.
    #[error("List contains an element that cannot be interpolated")]
    InvalidListElement,
}

impl InterpolateError {
    /// Checks whether `error` carries this exact kind.
    pub fn is(&self, error: &crate::Error) -> bool {
        error.downcast_ref::<InterpolateError>() == Some(self)
    }
}
