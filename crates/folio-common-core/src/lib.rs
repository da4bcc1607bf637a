//! Folio common core types and utilities.

pub mod error;
pub mod result;

pub use error::{Error, Result};
pub use result::ResultExt;
