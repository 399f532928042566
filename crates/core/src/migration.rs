/// One dialect-independent schema change. Operations are stateless
/// value objects: the migrator renders them to statements and the
/// caller discards them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOp {
    RenameTable {
        old: String,
        new: String,
    },
    AddColumn {
        table: String,
        /// Full column definition fragment as the ORM rendered it,
        /// e.g. `age INTEGER NOT NULL DEFAULT 0`.
        definition: String,
    },
    DropColumn {
        table: String,
        column: String,
    },
    RenameColumn {
        table: String,
        old: String,
        new: String,
    },
    AddIndex {
        table: String,
        columns: Vec<String>,
        unique: bool,
    },
    DropIndex {
        table: String,
        index: String,
    },
    AlterColumnType {
        table: String,
        column: String,
        /// Target type fragment, e.g. `VARCHAR(120)`.
        data_type: String,
        /// Cast expression requested by the caller. The dialect cannot
        /// cast in place, so a present hint is an unsupported request.
        cast: Option<String>,
    },
    SetSearchPath {
        schema: String,
    },
}

impl MigrationOp {
    /// Short operation label used in error and log messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MigrationOp::RenameTable { .. } => "rename_table",
            MigrationOp::AddColumn { .. } => "add_column",
            MigrationOp::DropColumn { .. } => "drop_column",
            MigrationOp::RenameColumn { .. } => "rename_column",
            MigrationOp::AddIndex { .. } => "add_index",
            MigrationOp::DropIndex { .. } => "drop_index",
            MigrationOp::AlterColumnType { .. } => "alter_column_type",
            MigrationOp::SetSearchPath { .. } => "set_search_path",
        }
    }
}
