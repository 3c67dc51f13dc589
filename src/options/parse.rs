use serde_json::{Map, Value};
use tracing::debug;

use crate::error::PgOptionsError;
use crate::options::{PostgresOptions, SslKey, SslOptions};

impl PostgresOptions {
    /// Validate a loosely-typed options value into a typed record.
    ///
    /// Type checking happens once, here: a field that is missing or holds a
    /// value of the wrong type becomes unset, so the rest of the crate never
    /// probes dynamic types again. Integer tunables only accept whole
    /// numbers; the timeout fields accept any number, read as decimal
    /// seconds.
    ///
    /// # Errors
    /// Returns [`PgOptionsError::ConfigError`] if `value` is not a JSON
    /// object.
    pub fn from_value(value: &Value) -> Result<Self, PgOptionsError> {
        let Value::Object(map) = value else {
            return Err(PgOptionsError::ConfigError(
                "options must be a mapping of option names to values".to_string(),
            ));
        };

        Ok(PostgresOptions {
            ssl: field(map, "ssl", ssl_options),
            connect_timeout_seconds: field(map, "connect_timeout_seconds", json_seconds),
            socket_timeout_seconds: field(map, "socket_timeout_seconds", json_seconds),
            login_timeout_seconds: field(map, "login_timeout_seconds", json_seconds),
            cancel_signal_timeout_seconds: field(map, "cancel_signal_timeout_seconds", json_seconds),
            row_fetch_size: field(map, "row_fetch_size", json_int),
            db_metadata_cache_fields: field(map, "db_metadata_cache_fields", json_int),
            db_metadata_cache_fields_mib: field(map, "db_metadata_cache_fields_mib", json_int),
            prepare_threshold: field(map, "prepare_threshold", json_int),
            prepared_statement_cache_queries: field(
                map,
                "prepared_statement_cache_queries",
                json_int,
            ),
            prepared_statement_cache_size_mib: field(
                map,
                "prepared_statement_cache_size_mib",
                json_int,
            ),
            tcp_keep_alive: field(map, "tcp_keep_alive", json_bool),
            log_unclosed_connections: field(map, "log_unclosed_connections", json_bool),
            binary_transfer: field(map, "binary_transfer", json_bool),
            logger_level: field(map, "logger_level", json_string),
            logger_file: field(map, "logger_file", json_string),
        })
    }

    /// Like [`PostgresOptions::from_value`], but maps JSON null to `None`,
    /// mirroring a caller that supplied no options at all.
    ///
    /// # Errors
    /// Returns [`PgOptionsError::ConfigError`] if `value` is neither null
    /// nor a JSON object.
    pub fn from_nullable_value(value: &Value) -> Result<Option<Self>, PgOptionsError> {
        if value.is_null() {
            return Ok(None);
        }
        Self::from_value(value).map(Some)
    }

    /// Parse JSON text and validate it as an options record.
    ///
    /// # Errors
    /// Returns [`PgOptionsError::JsonError`] for unparseable text and
    /// [`PgOptionsError::ConfigError`] for a readable value of the wrong
    /// shape.
    pub fn from_json_str(text: &str) -> Result<Option<Self>, PgOptionsError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_nullable_value(&value)
    }
}

fn field<T>(map: &Map<String, Value>, name: &str, coerce: fn(&Value) -> Option<T>) -> Option<T> {
    let value = map.get(name)?;
    let coerced = coerce(value);
    if coerced.is_none() {
        debug!(field = name, "ignoring option with unexpected type");
    }
    coerced
}

/// Extract a boolean; anything that is not a JSON boolean is unset.
#[must_use]
pub fn json_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// Extract a whole integer; fractional numbers and non-numbers are unset.
#[must_use]
pub fn json_int(value: &Value) -> Option<i64> {
    value.as_i64()
}

/// Extract a decimal seconds count; any JSON number qualifies.
#[must_use]
pub fn json_seconds(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Extract a string; non-strings are unset.
#[must_use]
pub fn json_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

fn ssl_options(value: &Value) -> Option<SslOptions> {
    let map = value.as_object()?;
    // Without a readable mode string there is nothing to tell the driver;
    // the whole block degrades to absent and the disabled sentinel applies.
    let mode = map.get("mode").and_then(json_string)?;
    let key = map.get("key").and_then(ssl_key);
    Some(SslOptions { mode, key })
}

fn ssl_key(value: &Value) -> Option<SslKey> {
    let map = value.as_object()?;
    Some(SslKey {
        path: map.get("path").and_then(json_string)?,
        password: map.get("password").and_then(json_string)?,
    })
}
