pub use crate::errors::{render_report, Error, Result};
pub use crate::failure::ParseFailure;

pub mod errors;
pub mod failure;
