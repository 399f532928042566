mod adapter;
mod config;
mod driver;
mod error;
mod metadata;
mod migration;
mod statement;

pub use adapter::{Database, SchemaMigrator};
pub use config::{ConnectionConfig, DEFAULT_CHARSET, DEFAULT_PORT, PASSWORD_MASK};
pub use driver::{Connection, Driver};
pub use error::{
    CatalogError, ConnectError, DriverError, DriverResult, Error, ExecutionError, GenerateError,
    Result,
};
pub use metadata::{ColumnMetadata, ForeignKeyMetadata, IndexMetadata, ViewMetadata};
pub use migration::MigrationOp;
pub use statement::{Row, Statement, Value};

#[cfg(test)]
mod tests {
    use super::{MigrationOp, Result, SchemaMigrator, Statement};

    struct StubMigrator;

    impl SchemaMigrator for StubMigrator {
        fn render(&self, op: &MigrationOp) -> Result<Vec<Statement>> {
            match op {
                MigrationOp::RenameTable { old, new } => {
                    Ok(vec![Statement::new(format!("RENAME {old} {new}"))])
                }
                _ => Ok(Vec::new()),
            }
        }
    }

    #[test]
    fn smoke_render_through_the_trait_object() {
        let migrator: &dyn SchemaMigrator = &StubMigrator;
        let statements = migrator
            .render(&MigrationOp::RenameTable {
                old: "a".to_string(),
                new: "b".to_string(),
            })
            .expect("render should succeed");

        assert_eq!(statements, vec![Statement::new("RENAME a b")]);
    }
}
