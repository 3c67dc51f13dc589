//! Typed connection-option normalization for PostgreSQL driver property sets.
//!
//! A caller on the connection-setup path hands over either a typed
//! [`PostgresOptions`] record or a loosely-typed JSON value; the latter is
//! validated once at the boundary. [`normalize`] turns the record into an
//! insertion-ordered [`Properties`] mapping of fixed driver identifiers,
//! ready to merge into the driver's connection configuration. Fields that
//! are unset, non-positive, or held a value of the wrong type are omitted
//! so the driver default applies.
//!
//! ```rust
//! use pg_options::prelude::*;
//! use pg_options::properties;
//!
//! let opts = PostgresOptions::new()
//!     .with_ssl(SslOptions::new("require"))
//!     .with_connect_timeout_seconds(2.5);
//! let props = normalize(Some(&opts)).unwrap();
//!
//! assert_eq!(
//!     props.get(properties::SSL_MODE).unwrap().as_text(),
//!     Some("require")
//! );
//! assert_eq!(
//!     props.get(properties::CONNECT_TIMEOUT).unwrap().as_int(),
//!     Some(&2500)
//! );
//! ```

pub mod error;
pub mod options;
pub mod prelude;
pub mod properties;
pub mod types;

pub use error::PgOptionsError;
pub use options::{PostgresOptions, SslKey, SslOptions, normalize};
pub use properties::Properties;
pub use types::PropertyValue;
