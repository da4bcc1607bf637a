//! Configuration types for Folio.
//!
//! This crate provides the configuration types used by Folio
//! for `.folio/config.yaml` files.

pub mod env;
pub mod loader;
pub mod types;


pub use env::*;
pub use loader::*;
pub use types::*;
