//! The two MiB cache sizes are only emitted when their companion count
//! option is set; `gated_positive` isolates that coupling, and `positive`
//! is the drop-in replacement that would treat the sizes independently.
//! Both behaviors are pinned down here so swapping one for the other is a
//! deliberate, visible change.

use pg_options::options::{gated_positive, positive};
use pg_options::prelude::*;
use pg_options::properties;

#[test]
fn test03_metadata_cache_size_requires_field_count() {
    let size_only = PostgresOptions::new().with_db_metadata_cache_fields_mib(64);
    let props = normalize(Some(&size_only)).unwrap();
    assert!(!props.contains_key(properties::DB_METADATA_CACHE_FIELDS_MIB));

    let both = PostgresOptions::new()
        .with_db_metadata_cache_fields(1000)
        .with_db_metadata_cache_fields_mib(64);
    let props = normalize(Some(&both)).unwrap();
    assert_eq!(
        props
            .get(properties::DB_METADATA_CACHE_FIELDS)
            .unwrap()
            .as_int(),
        Some(&1000)
    );
    assert_eq!(
        props
            .get(properties::DB_METADATA_CACHE_FIELDS_MIB)
            .unwrap()
            .as_int(),
        Some(&64)
    );
}

#[test]
fn test03_prepared_cache_size_requires_query_count() {
    let size_only = PostgresOptions::new().with_prepared_statement_cache_size_mib(8);
    let props = normalize(Some(&size_only)).unwrap();
    assert!(!props.contains_key(properties::PREPARED_STATEMENT_CACHE_SIZE_MIB));

    let both = PostgresOptions::new()
        .with_prepared_statement_cache_queries(256)
        .with_prepared_statement_cache_size_mib(8);
    let props = normalize(Some(&both)).unwrap();
    assert_eq!(
        props
            .get(properties::PREPARED_STATEMENT_CACHE_QUERIES)
            .unwrap()
            .as_int(),
        Some(&256)
    );
    assert_eq!(
        props
            .get(properties::PREPARED_STATEMENT_CACHE_SIZE_MIB)
            .unwrap()
            .as_int(),
        Some(&8)
    );
}

#[test]
fn test03_gate_presence_counts_even_when_companion_is_dropped() {
    // A non-positive companion is itself omitted from the output, yet it
    // still opens the gate for the size field.
    let opts = PostgresOptions::new()
        .with_db_metadata_cache_fields(0)
        .with_db_metadata_cache_fields_mib(64);
    let props = normalize(Some(&opts)).unwrap();

    assert!(!props.contains_key(properties::DB_METADATA_CACHE_FIELDS));
    assert_eq!(
        props
            .get(properties::DB_METADATA_CACHE_FIELDS_MIB)
            .unwrap()
            .as_int(),
        Some(&64)
    );
}

#[test]
fn test03_ungated_variant_emits_on_the_value_alone() {
    // The corrected behavior, should call sites ever switch helper.
    assert_eq!(positive(Some(64)), Some(64));
    assert_eq!(gated_positive(None, Some(64)), None);
}
