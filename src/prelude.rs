//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::error::PgOptionsError;
pub use crate::options::{PostgresOptions, SslKey, SslOptions, normalize};
pub use crate::properties::Properties;
pub use crate::types::PropertyValue;
