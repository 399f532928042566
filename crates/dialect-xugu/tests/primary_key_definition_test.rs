use xgbridge_dialect_xugu::parse_primary_key_definition;

#[test]
fn single_column_definition_yields_one_name() {
    assert_eq!(parse_primary_key_definition("\"ID\""), vec!["ID"]);
}

#[test]
fn composite_definition_keeps_column_order() {
    assert_eq!(
        parse_primary_key_definition("\"A\",\"B\",\"C\""),
        vec!["A", "B", "C"]
    );
}

#[test]
fn whitespace_around_tokens_is_stripped() {
    assert_eq!(
        parse_primary_key_definition(" \"COL1\" , \"COL2\" "),
        vec!["COL1", "COL2"]
    );
}

#[test]
fn unquoted_tokens_pass_through() {
    assert_eq!(parse_primary_key_definition("ID"), vec!["ID"]);
}

#[test]
fn empty_definition_yields_no_columns() {
    assert!(parse_primary_key_definition("").is_empty());
}

#[test]
fn trailing_comma_does_not_produce_an_empty_column() {
    assert_eq!(
        parse_primary_key_definition("\"COL1\",\"COL2\","),
        vec!["COL1", "COL2"]
    );
}

#[test]
fn definition_of_only_separators_is_empty() {
    assert!(parse_primary_key_definition(", ,").is_empty());
}
