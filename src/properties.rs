//! Property keys and the ordered property mapping handed to the driver.
//!
//! The output of [`normalize()`](crate::options::normalize()) is a flat set of
//! fixed driver-property identifiers. The constants below are the only keys
//! the crate ever emits; the caller merges the set into the driver's
//! connection configuration.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::PropertyValue;

/// TLS mode requested of the driver, copied verbatim from the options.
pub const SSL_MODE: &str = "ssl_mode";

/// Client key material, stored as a [`FILE_PREFIX`]-marked path.
pub const SSL_KEY: &str = "ssl_key";

/// Password protecting the client key material, stored verbatim.
pub const SSL_PASSWORD: &str = "ssl_password";

/// Connect timeout in whole milliseconds.
pub const CONNECT_TIMEOUT: &str = "connect_timeout";

/// Socket read timeout in whole milliseconds.
pub const SOCKET_TIMEOUT: &str = "socket_timeout";

/// Login timeout in whole milliseconds.
pub const LOGIN_TIMEOUT: &str = "login_timeout";

/// Cancel-signal timeout in whole milliseconds.
pub const CANCEL_SIGNAL_TIMEOUT: &str = "cancel_signal_timeout";

/// Number of rows fetched per round trip.
pub const ROW_FETCH_SIZE: &str = "row_fetch_size";

/// Field count of the database metadata cache.
pub const DB_METADATA_CACHE_FIELDS: &str = "db_metadata_cache_fields";

/// Size limit of the database metadata cache, in MiB.
pub const DB_METADATA_CACHE_FIELDS_MIB: &str = "db_metadata_cache_fields_mib";

/// Statement execution count after which the driver switches to a
/// server-side prepared statement.
pub const PREPARE_THRESHOLD: &str = "prepare_threshold";

/// Query count of the prepared-statement cache.
pub const PREPARED_STATEMENT_CACHE_QUERIES: &str = "prepared_statement_cache_queries";

/// Size limit of the prepared-statement cache, in MiB.
pub const PREPARED_STATEMENT_CACHE_SIZE_MIB: &str = "prepared_statement_cache_size_mib";

/// Whether the driver enables TCP keep-alive on the socket.
pub const TCP_KEEP_ALIVE: &str = "tcp_keep_alive";

/// Driver logger level.
pub const LOGGER_LEVEL: &str = "logger_level";

/// Driver logger output file; only meaningful alongside [`LOGGER_LEVEL`].
pub const LOGGER_FILE: &str = "logger_file";

/// Whether the driver logs connections left unclosed by the application.
pub const LOG_UNCLOSED_CONNECTIONS: &str = "log_unclosed_connections";

/// Whether the driver uses the binary wire format for transfers.
pub const BINARY_TRANSFER: &str = "binary_transfer";

/// Sentinel stored under [`SSL_MODE`] when no TLS block was supplied.
pub const SSL_MODE_DISABLED: &str = "disabled";

/// Marker prefixed to the client key path under [`SSL_KEY`].
pub const FILE_PREFIX: &str = "file:";

/// Insertion-ordered mapping from driver property name to value.
///
/// A fresh mapping is allocated per normalization call and ownership passes
/// to the caller on return. `insert` replaces an existing key in place, so
/// the mapping never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(&'static str, PropertyValue)>,
}

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the position of an already-present key.
    pub fn insert(&mut self, key: &'static str, value: impl Into<PropertyValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
