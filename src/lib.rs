//! Quill splices positional arguments into SQL templates as escaped literals.
//!
//! ```rust
//! use quill::{interpolate, values};
//! let sql = interpolate(
//!     "SELECT * FROM users WHERE name = ? AND id IN ?",
//!     &values!["O'Brien", vec![1, 2, 3]],
//! )
//! .unwrap();
//! assert_eq!(sql, r"SELECT * FROM users WHERE name = 'O\'Brien' AND id IN (1,2,3)");
//! ```
//!
//! The output is meant for execution paths that do not support bound
//! parameters. Every failure is reported as an [`Error`], see
//! [`InterpolateError`] for the kinds raised by the engine itself.
pub use quill_core::*;
