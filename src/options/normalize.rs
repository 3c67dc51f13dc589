use crate::options::{PostgresOptions, SslOptions};
use crate::properties::{
    BINARY_TRANSFER, CANCEL_SIGNAL_TIMEOUT, CONNECT_TIMEOUT, DB_METADATA_CACHE_FIELDS,
    DB_METADATA_CACHE_FIELDS_MIB, FILE_PREFIX, LOG_UNCLOSED_CONNECTIONS, LOGGER_FILE,
    LOGGER_LEVEL, LOGIN_TIMEOUT, PREPARE_THRESHOLD, PREPARED_STATEMENT_CACHE_QUERIES,
    PREPARED_STATEMENT_CACHE_SIZE_MIB, Properties, ROW_FETCH_SIZE, SOCKET_TIMEOUT, SSL_KEY,
    SSL_MODE, SSL_MODE_DISABLED, SSL_PASSWORD, TCP_KEEP_ALIVE,
};

/// Normalize a typed options record into the driver property set.
///
/// Absent input yields absent output; no mapping is allocated. Otherwise a
/// fresh [`Properties`] is populated field by field: unset fields stay
/// omitted so the driver default applies, timeouts become whole
/// milliseconds, and the TLS block always contributes an [`SSL_MODE`] entry
/// (the [`SSL_MODE_DISABLED`] sentinel when no block was supplied). Fields
/// are independent of each other except [`LOGGER_FILE`], which requires
/// [`LOGGER_LEVEL`], and the two MiB cache sizes (see [`gated_positive`]).
#[must_use]
pub fn normalize(options: Option<&PostgresOptions>) -> Option<Properties> {
    options.map(driver_properties)
}

pub(super) fn driver_properties(opts: &PostgresOptions) -> Properties {
    let mut props = Properties::new();

    add_ssl_options(opts.ssl.as_ref(), &mut props);

    if let Some(millis) = timeout_millis(opts.connect_timeout_seconds) {
        props.insert(CONNECT_TIMEOUT, millis);
    }
    if let Some(millis) = timeout_millis(opts.socket_timeout_seconds) {
        props.insert(SOCKET_TIMEOUT, millis);
    }
    if let Some(millis) = timeout_millis(opts.login_timeout_seconds) {
        props.insert(LOGIN_TIMEOUT, millis);
    }
    if let Some(rows) = positive(opts.row_fetch_size) {
        props.insert(ROW_FETCH_SIZE, rows);
    }
    if let Some(fields) = positive(opts.db_metadata_cache_fields) {
        props.insert(DB_METADATA_CACHE_FIELDS, fields);
    }
    if let Some(mib) = gated_positive(
        opts.db_metadata_cache_fields,
        opts.db_metadata_cache_fields_mib,
    ) {
        props.insert(DB_METADATA_CACHE_FIELDS_MIB, mib);
    }
    if let Some(executions) = positive(opts.prepare_threshold) {
        props.insert(PREPARE_THRESHOLD, executions);
    }
    if let Some(queries) = positive(opts.prepared_statement_cache_queries) {
        props.insert(PREPARED_STATEMENT_CACHE_QUERIES, queries);
    }
    if let Some(mib) = gated_positive(
        opts.prepared_statement_cache_queries,
        opts.prepared_statement_cache_size_mib,
    ) {
        props.insert(PREPARED_STATEMENT_CACHE_SIZE_MIB, mib);
    }
    if let Some(millis) = timeout_millis(opts.cancel_signal_timeout_seconds) {
        props.insert(CANCEL_SIGNAL_TIMEOUT, millis);
    }
    if let Some(keep_alive) = opts.tcp_keep_alive {
        props.insert(TCP_KEEP_ALIVE, keep_alive);
    }
    if let Some(level) = &opts.logger_level {
        props.insert(LOGGER_LEVEL, level.clone());
        // A log file without a level would never be consulted by the driver.
        if let Some(file) = &opts.logger_file {
            props.insert(LOGGER_FILE, file.clone());
        }
    }
    if let Some(log_unclosed) = opts.log_unclosed_connections {
        props.insert(LOG_UNCLOSED_CONNECTIONS, log_unclosed);
    }
    if let Some(binary) = opts.binary_transfer {
        props.insert(BINARY_TRANSFER, binary);
    }

    props
}

fn add_ssl_options(ssl: Option<&SslOptions>, props: &mut Properties) {
    match ssl {
        None => props.insert(SSL_MODE, SSL_MODE_DISABLED),
        Some(ssl) => {
            props.insert(SSL_MODE, ssl.mode.clone());
            if let Some(key) = &ssl.key {
                props.insert(SSL_KEY, format!("{FILE_PREFIX}{}", key.path));
                props.insert(SSL_PASSWORD, key.password.clone());
            }
        }
    }
}

/// Convert decimal seconds to whole milliseconds, truncating toward zero.
///
/// Unset and non-positive inputs yield `None`, as does a positive input so
/// small it truncates to zero milliseconds; in all three cases the driver
/// default applies.
#[must_use]
pub fn timeout_millis(seconds: Option<f64>) -> Option<i64> {
    let secs = seconds.filter(|s| *s > 0.0)?;
    let millis = (secs * 1000.0) as i64;
    (millis > 0).then_some(millis)
}

/// Keep an integer tunable only when it is set and strictly positive.
#[must_use]
pub fn positive(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v > 0)
}

/// Keep `value` only when its companion `gate` option is set at all.
///
/// The MiB cache sizes are honored only alongside their companion count
/// option; substitute [`positive`] on the value alone to treat the two
/// options independently.
#[must_use]
pub fn gated_positive(gate: Option<i64>, value: Option<i64>) -> Option<i64> {
    gate?;
    positive(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_fractional_seconds_toward_zero() {
        assert_eq!(timeout_millis(Some(2.5)), Some(2500));
        assert_eq!(timeout_millis(Some(0.9994)), Some(999));
    }

    #[test]
    fn drops_non_positive_and_sub_millisecond_timeouts() {
        assert_eq!(timeout_millis(None), None);
        assert_eq!(timeout_millis(Some(0.0)), None);
        assert_eq!(timeout_millis(Some(-3.0)), None);
        assert_eq!(timeout_millis(Some(0.0004)), None);
    }

    #[test]
    fn positive_filters_zero_and_negative() {
        assert_eq!(positive(Some(10)), Some(10));
        assert_eq!(positive(Some(0)), None);
        assert_eq!(positive(Some(-1)), None);
        assert_eq!(positive(None), None);
    }

    #[test]
    fn gate_must_be_set_for_value_to_pass() {
        assert_eq!(gated_positive(Some(1), Some(64)), Some(64));
        assert_eq!(gated_positive(None, Some(64)), None);
        // Gate presence is enough; its own value is not inspected here.
        assert_eq!(gated_positive(Some(0), Some(64)), Some(64));
        assert_eq!(gated_positive(Some(1), Some(0)), None);
    }
}
