use crate::{
    ColumnMetadata, ForeignKeyMetadata, IndexMetadata, MigrationOp, Result, Row, Statement,
    ViewMetadata,
};

/// The surface an ORM runtime drives. Introspection methods return
/// fully materialized sequences; an absent table yields an empty
/// sequence, never an error.
pub trait Database {
    /// Run a row-producing statement.
    fn query(&mut self, statement: &Statement) -> Result<Vec<Row>>;

    /// Run a statement for its effect, returning the affected row
    /// count.
    fn execute(&mut self, statement: &Statement) -> Result<u64>;

    /// Make prior statements durable. Delegated to the driver; with
    /// autocommit on this is typically a no-op.
    fn commit(&mut self) -> Result<()>;

    fn tables(&mut self) -> Result<Vec<String>>;
    fn views(&mut self) -> Result<Vec<ViewMetadata>>;
    fn columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>>;
    fn primary_keys(&mut self, table: &str) -> Result<Vec<String>>;
    fn indexes(&mut self, table: &str) -> Result<Vec<IndexMetadata>>;
    fn foreign_keys(&mut self, table: &str) -> Result<Vec<ForeignKeyMetadata>>;

    /// Best-effort; a failed close is logged and swallowed because the
    /// caller cannot act on it.
    fn close(&mut self);
}

/// Translates abstract schema changes into dialect DDL. Rendering is
/// pure: no statement executes here.
pub trait SchemaMigrator {
    fn render(&self, op: &MigrationOp) -> Result<Vec<Statement>>;
}
