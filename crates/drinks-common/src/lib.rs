//! Common utilities shared across drinks crates.
//!
//! Provides terminal color handling and the error categories used to pick
//! process exit codes.

#![deny(clippy::all)]

mod color;
pub mod error_codes;

pub use color::Colors;
pub use color::init as color_init;
pub use error_codes::ErrorCategory;
