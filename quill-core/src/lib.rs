mod as_value;
mod classify;
mod error;
mod interpolate;
mod provider;
mod scan;
mod util;
mod value;
mod writer;

pub use as_value::*;
pub use classify::*;
pub use error::*;
pub use interpolate::*;
pub use provider::*;
pub use scan::*;
pub use util::*;
pub use value::*;
pub use writer::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
