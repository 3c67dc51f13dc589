//! Typed PostgreSQL connection options and their normalization.
//!
//! [`PostgresOptions`] is the validated form of the loosely-typed options
//! record a caller supplies on the connection-setup path. Build one directly
//! with the `with_*` methods, or validate untrusted input once at the
//! boundary via [`PostgresOptions::from_value`]; then hand it to
//! [`normalize()`] for the driver property set.

mod normalize;
mod parse;

pub use normalize::{gated_positive, normalize, positive, timeout_millis};
pub use parse::{json_bool, json_int, json_seconds, json_string};

use crate::properties::Properties;

/// TLS settings for a connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SslOptions {
    /// Mode string passed through to the driver verbatim.
    pub mode: String,
    /// Optional client key material.
    pub key: Option<SslKey>,
}

impl SslOptions {
    #[must_use]
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            key: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: SslKey) -> Self {
        self.key = Some(key);
        self
    }
}

/// Client key material for TLS.
///
/// Path and password are stored as given; whether the file exists or the
/// password opens it is the driver's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SslKey {
    pub path: String,
    pub password: String,
}

impl SslKey {
    #[must_use]
    pub fn new(path: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            password: password.into(),
        }
    }
}

/// Options for configuring a PostgreSQL connection.
///
/// Every field is optional; an unset field leaves the driver default in
/// place. Timeouts are decimal seconds, converted to whole milliseconds
/// during normalization. The boolean flags are tri-state: `Some(false)`
/// is emitted as `false`, while `None` is omitted entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostgresOptions {
    pub ssl: Option<SslOptions>,
    pub connect_timeout_seconds: Option<f64>,
    pub socket_timeout_seconds: Option<f64>,
    pub login_timeout_seconds: Option<f64>,
    pub cancel_signal_timeout_seconds: Option<f64>,
    pub row_fetch_size: Option<i64>,
    pub db_metadata_cache_fields: Option<i64>,
    pub db_metadata_cache_fields_mib: Option<i64>,
    pub prepare_threshold: Option<i64>,
    pub prepared_statement_cache_queries: Option<i64>,
    pub prepared_statement_cache_size_mib: Option<i64>,
    pub tcp_keep_alive: Option<bool>,
    pub log_unclosed_connections: Option<bool>,
    pub binary_transfer: Option<bool>,
    pub logger_level: Option<String>,
    pub logger_file: Option<String>,
}

impl PostgresOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ssl(mut self, ssl: SslOptions) -> Self {
        self.ssl = Some(ssl);
        self
    }

    #[must_use]
    pub fn with_connect_timeout_seconds(mut self, seconds: f64) -> Self {
        self.connect_timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_socket_timeout_seconds(mut self, seconds: f64) -> Self {
        self.socket_timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_login_timeout_seconds(mut self, seconds: f64) -> Self {
        self.login_timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_cancel_signal_timeout_seconds(mut self, seconds: f64) -> Self {
        self.cancel_signal_timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_row_fetch_size(mut self, rows: i64) -> Self {
        self.row_fetch_size = Some(rows);
        self
    }

    #[must_use]
    pub fn with_db_metadata_cache_fields(mut self, fields: i64) -> Self {
        self.db_metadata_cache_fields = Some(fields);
        self
    }

    #[must_use]
    pub fn with_db_metadata_cache_fields_mib(mut self, mib: i64) -> Self {
        self.db_metadata_cache_fields_mib = Some(mib);
        self
    }

    #[must_use]
    pub fn with_prepare_threshold(mut self, executions: i64) -> Self {
        self.prepare_threshold = Some(executions);
        self
    }

    #[must_use]
    pub fn with_prepared_statement_cache_queries(mut self, queries: i64) -> Self {
        self.prepared_statement_cache_queries = Some(queries);
        self
    }

    #[must_use]
    pub fn with_prepared_statement_cache_size_mib(mut self, mib: i64) -> Self {
        self.prepared_statement_cache_size_mib = Some(mib);
        self
    }

    #[must_use]
    pub fn with_tcp_keep_alive(mut self, keep_alive: bool) -> Self {
        self.tcp_keep_alive = Some(keep_alive);
        self
    }

    #[must_use]
    pub fn with_log_unclosed_connections(mut self, log_unclosed: bool) -> Self {
        self.log_unclosed_connections = Some(log_unclosed);
        self
    }

    #[must_use]
    pub fn with_binary_transfer(mut self, binary: bool) -> Self {
        self.binary_transfer = Some(binary);
        self
    }

    #[must_use]
    pub fn with_logger_level(mut self, level: impl Into<String>) -> Self {
        self.logger_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_logger_file(mut self, file: impl Into<String>) -> Self {
        self.logger_file = Some(file.into());
        self
    }

    /// Normalize this record into the driver property set.
    ///
    /// Equivalent to `normalize(Some(self))`; see [`normalize()`] for the
    /// field-by-field rules.
    #[must_use]
    pub fn to_properties(&self) -> Properties {
        normalize::driver_properties(self)
    }
}
