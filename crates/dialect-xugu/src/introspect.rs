use xgbridge_core::IndexMetadata;

/// Split a primary-key DEFINE string into its column names.
///
/// The catalog stores the whole key as one delimited string, e.g.
/// `"ID"` or `"COL1","COL2"`. Tokens are trimmed, unquoted, and empty
/// tokens dropped, so a trailing comma or an empty definition falls
/// out naturally as fewer (or zero) columns.
#[must_use]
pub fn parse_primary_key_definition(define: &str) -> Vec<String> {
    define
        .split(',')
        .map(|token| token.trim().trim_matches('"'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// One decoded row of the index-columns query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndexColumnRow {
    pub(crate) index_name: String,
    pub(crate) unique: bool,
    pub(crate) column: String,
}

/// Group raw (index, column) rows into per-index metadata, keeping
/// indexes in first-encounter order and columns in row order.
pub(crate) fn group_index_rows(table: &str, rows: &[IndexColumnRow]) -> Vec<IndexMetadata> {
    let mut indexes: Vec<IndexMetadata> = Vec::new();

    for row in rows {
        match indexes
            .iter_mut()
            .find(|index| index.name == row.index_name)
        {
            Some(index) => index.columns.push(row.column.clone()),
            None => indexes.push(IndexMetadata {
                name: row.index_name.clone(),
                table: table.to_string(),
                columns: vec![row.column.clone()],
                unique: row.unique,
            }),
        }
    }

    indexes
}
