mod adapter;
mod catalog_queries;
mod introspect;
mod migrator;

pub use adapter::{XuguDatabase, connect};
pub use introspect::parse_primary_key_definition;
pub use migrator::{XuguMigrator, index_name};

/// Query-text accessors for tests and external tooling.
#[must_use]
pub fn table_names_query() -> &'static str {
    catalog_queries::TABLE_NAMES_QUERY
}

#[must_use]
pub fn primary_key_query() -> &'static str {
    catalog_queries::PRIMARY_KEY_QUERY
}

#[must_use]
pub fn index_columns_query() -> &'static str {
    catalog_queries::INDEX_COLUMNS_QUERY
}
