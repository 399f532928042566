use xgbridge_dialect_xugu::{index_columns_query, primary_key_query, table_names_query};

#[test]
fn table_names_query_orders_by_name() {
    let query = table_names_query();
    assert!(query.contains("USER_TABLES"));
    assert!(query.to_ascii_uppercase().contains("ORDER BY"));
}

#[test]
fn lookup_queries_bind_the_table_name() {
    for query in [primary_key_query(), index_columns_query()] {
        assert!(
            query.contains("TABLE_NAME = ?"),
            "table name must be bound, not interpolated: {query}"
        );
    }
}

#[test]
fn primary_key_query_targets_the_constraint_define_string() {
    let query = primary_key_query();
    assert!(query.contains("USER_CONSTRAINTS"));
    assert!(query.contains("DEFINE"));
}
