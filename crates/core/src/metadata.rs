//! Catalog metadata records returned by introspection. Each call
//! materializes the full result before returning; nothing here holds a
//! cursor open.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub table: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMetadata {
    pub name: String,
    pub table: String,
    /// Column names in the order the catalog reports them.
    pub columns: Vec<String>,
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyMetadata {
    pub column: String,
    pub dest_table: String,
    pub dest_column: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewMetadata {
    pub name: String,
    pub definition: Option<String>,
}
