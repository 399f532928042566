use xgbridge_core::{GenerateError, MigrationOp, Result, SchemaMigrator, Statement};

/// Renders schema-migration operations into Xugu DDL. One statement
/// per operation, except `SetSearchPath`, which the dialect has no
/// concept for and renders to nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct XuguMigrator;

impl XuguMigrator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaMigrator for XuguMigrator {
    fn render(&self, op: &MigrationOp) -> Result<Vec<Statement>> {
        let rendered = match op {
            MigrationOp::RenameTable { old, new } => {
                vec![format!("ALTER TABLE {old} RENAME TO {new}")]
            }
            MigrationOp::AddColumn { table, definition } => {
                vec![format!("ALTER TABLE {table} ADD COLUMN {definition}")]
            }
            MigrationOp::DropColumn { table, column } => {
                vec![format!("ALTER TABLE {table} DROP COLUMN {column}")]
            }
            MigrationOp::RenameColumn { table, old, new } => {
                vec![format!("ALTER TABLE {table} RENAME COLUMN {old} TO {new}")]
            }
            MigrationOp::AddIndex {
                table,
                columns,
                unique,
            } => {
                let name = index_name(table, columns);
                let unique_keyword = if *unique { "UNIQUE " } else { "" };
                vec![format!(
                    "CREATE {unique_keyword}INDEX {name} ON {table} ({})",
                    columns.join(", ")
                )]
            }
            MigrationOp::DropIndex { index, .. } => vec![format!("DROP INDEX {index}")],
            MigrationOp::AlterColumnType {
                table,
                column,
                data_type,
                cast,
            } => {
                if cast.is_some() {
                    return Err(GenerateError::Unsupported {
                        operation: op.name(),
                        reason: format!(
                            "xugu cannot cast `{table}.{column}` in place while changing its type"
                        ),
                    }
                    .into());
                }
                vec![format!("ALTER TABLE {table} ALTER COLUMN {column} {data_type}")]
            }
            MigrationOp::SetSearchPath { .. } => Vec::new(),
        };

        Ok(rendered.into_iter().map(Statement::new).collect())
    }
}

/// Deterministic index name derived from the table and column list.
/// There is no collision detection; callers ensure uniqueness.
#[must_use]
pub fn index_name(table: &str, columns: &[String]) -> String {
    format!("{table}_{}_idx", columns.join("_"))
}
