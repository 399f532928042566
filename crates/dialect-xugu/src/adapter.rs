use std::{collections::HashSet, fmt};

use tracing::{debug, error, trace};
use xgbridge_core::{
    CatalogError, ColumnMetadata, ConnectError, Connection, ConnectionConfig, Database, Driver,
    DriverError, Error, ExecutionError, ForeignKeyMetadata, IndexMetadata, PASSWORD_MASK, Result,
    Row, Statement, Value, ViewMetadata,
};

use crate::{
    catalog_queries,
    introspect::{self, IndexColumnRow},
};

const UNSET_HOST_LABEL: &str = "<unset>";
const COMMIT_LABEL: &str = "COMMIT";

/// Synchronous adapter over one native connection. A single logical
/// caller owns it; pooling is an outer decorator's concern.
pub struct XuguDatabase {
    connection: Box<dyn Connection>,
}

/// Open a native connection through `driver`, applying the dialect's
/// port and charset defaults. Every parameter is logged at debug with
/// the password replaced by the fixed mask; a failure is logged with
/// the same context and surfaced unchanged as the error's source.
pub fn connect(driver: &dyn Driver, config: &ConnectionConfig) -> Result<XuguDatabase> {
    let effective = effective_config(config);

    debug!(
        host = effective.host.as_deref().unwrap_or(UNSET_HOST_LABEL),
        port = effective.port_or_default(),
        database = %effective.database,
        user = effective.user.as_deref().unwrap_or_default(),
        password = effective.password.as_ref().map(|_| PASSWORD_MASK).unwrap_or_default(),
        charset = effective.charset_or_default(),
        autocommit = effective.autocommit,
        "connecting to xugu"
    );

    match driver.connect(&effective) {
        Ok(connection) => {
            debug!("xugu connection established");
            Ok(XuguDatabase { connection })
        }
        Err(source) => {
            let connect_error = ConnectError {
                host: effective
                    .host
                    .clone()
                    .unwrap_or_else(|| UNSET_HOST_LABEL.to_string()),
                port: effective.port_or_default(),
                database: effective.database.clone(),
                source,
            };
            error!(error = %connect_error, "xugu connect failed");
            Err(connect_error.into())
        }
    }
}

impl XuguDatabase {
    /// Wrap an already-open native connection, e.g. one handed out by
    /// an external pool.
    #[must_use]
    pub fn from_connection(connection: Box<dyn Connection>) -> Self {
        Self { connection }
    }

    fn run_query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        trace!(sql, params = %ParamList(params), "executing statement");
        self.connection
            .query(sql, params)
            .map_err(|source| execution_error(sql, source))
    }

    fn run_execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        trace!(sql, params = %ParamList(params), "executing statement");
        self.connection
            .execute(sql, params)
            .map_err(|source| execution_error(sql, source))
    }
}

impl Database for XuguDatabase {
    fn query(&mut self, statement: &Statement) -> Result<Vec<Row>> {
        self.run_query(&statement.sql, &statement.params)
    }

    fn execute(&mut self, statement: &Statement) -> Result<u64> {
        self.run_execute(&statement.sql, &statement.params)
    }

    fn commit(&mut self) -> Result<()> {
        trace!("committing transaction");
        self.connection
            .commit()
            .map_err(|source| execution_error(COMMIT_LABEL, source))
    }

    fn tables(&mut self) -> Result<Vec<String>> {
        let query = catalog_queries::TABLE_NAMES_QUERY;
        let rows = self.run_query(query, &[])?;
        rows.iter()
            .map(|row| row_string(row, 0, query, "TABLE_NAME"))
            .collect()
    }

    fn views(&mut self) -> Result<Vec<ViewMetadata>> {
        let query = catalog_queries::VIEW_NAMES_QUERY;
        let rows = self.run_query(query, &[])?;
        rows.iter()
            .map(|row| {
                Ok(ViewMetadata {
                    name: row_string(row, 0, query, "VIEW_NAME")?,
                    definition: row_opt_string(row, 1, query, "DEFINE")?,
                })
            })
            .collect()
    }

    fn columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>> {
        let primary_keys: HashSet<String> = self.primary_keys(table)?.into_iter().collect();

        let query = catalog_queries::TABLE_COLUMNS_QUERY;
        let rows = self.run_query(query, &[table_param(table)])?;
        rows.iter()
            .map(|row| {
                let name = row_string(row, 0, query, "COL_NAME")?;
                Ok(ColumnMetadata {
                    primary_key: primary_keys.contains(&name),
                    name,
                    data_type: row_string(row, 1, query, "TYPE_NAME")?,
                    nullable: !row_flag(row, 2, query, "NOT_NULL")?,
                    table: table.to_string(),
                    default: row_opt_string(row, 3, query, "DEF_VAL")?,
                })
            })
            .collect()
    }

    fn primary_keys(&mut self, table: &str) -> Result<Vec<String>> {
        let query = catalog_queries::PRIMARY_KEY_QUERY;
        let rows = self.run_query(query, &[table_param(table)])?;

        let mut columns = Vec::new();
        for row in &rows {
            if let Some(define) = row_opt_string(row, 0, query, "DEFINE")? {
                columns.extend(introspect::parse_primary_key_definition(&define));
            }
        }
        Ok(columns)
    }

    fn indexes(&mut self, table: &str) -> Result<Vec<IndexMetadata>> {
        let query = catalog_queries::INDEX_COLUMNS_QUERY;
        let rows = self.run_query(query, &[table_param(table)])?;
        let decoded = rows
            .iter()
            .map(|row| {
                Ok(IndexColumnRow {
                    index_name: row_string(row, 0, query, "INDEX_NAME")?,
                    unique: row_flag(row, 1, query, "IS_UNIQUE")?,
                    column: row_string(row, 2, query, "COL_NAME")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(introspect::group_index_rows(table, &decoded))
    }

    fn foreign_keys(&mut self, table: &str) -> Result<Vec<ForeignKeyMetadata>> {
        let query = catalog_queries::FOREIGN_KEYS_QUERY;
        let rows = self.run_query(query, &[table_param(table)])?;
        rows.iter()
            .map(|row| {
                Ok(ForeignKeyMetadata {
                    column: row_string(row, 0, query, "COLUMN_NAME")?,
                    dest_table: row_string(row, 1, query, "REFERENCED_TABLE_NAME")?,
                    dest_column: row_string(row, 2, query, "REFERENCED_COLUMN_NAME")?,
                    table: table.to_string(),
                })
            })
            .collect()
    }

    fn close(&mut self) {
        if let Err(source) = self.connection.close() {
            debug!(error = %source, "xugu close failed; ignoring");
        }
    }
}

/// The catalog stores object names upper-cased; lookups bind the
/// upper-cased name rather than interpolating it into the SQL text.
fn table_param(table: &str) -> Value {
    Value::Text(table.to_uppercase())
}

fn execution_error(sql: &str, source: DriverError) -> Error {
    let execution_error = ExecutionError {
        sql: sql.to_string(),
        source,
    };
    error!(error = %execution_error, "statement failed");
    execution_error.into()
}

fn effective_config(config: &ConnectionConfig) -> ConnectionConfig {
    let mut effective = config.clone();
    effective.port = Some(config.port_or_default());
    effective.charset = Some(config.charset_or_default().to_string());
    effective
}

fn row_string(row: &Row, index: usize, query: &'static str, column: &'static str) -> Result<String> {
    match row.get(index) {
        Some(Value::Text(text)) => Ok(text.clone()),
        Some(_) => Err(CatalogError::UnexpectedType {
            query,
            column,
            expected: "text",
        }
        .into()),
        None => Err(CatalogError::MissingColumn {
            query,
            column,
            index,
        }
        .into()),
    }
}

fn row_opt_string(
    row: &Row,
    index: usize,
    query: &'static str,
    column: &'static str,
) -> Result<Option<String>> {
    match row.get(index) {
        Some(Value::Null) => Ok(None),
        Some(Value::Text(text)) => Ok(Some(text.clone())),
        Some(_) => Err(CatalogError::UnexpectedType {
            query,
            column,
            expected: "text or null",
        }
        .into()),
        None => Err(CatalogError::MissingColumn {
            query,
            column,
            index,
        }
        .into()),
    }
}

fn row_flag(row: &Row, index: usize, query: &'static str, column: &'static str) -> Result<bool> {
    match row.get(index).and_then(Value::as_bool) {
        Some(flag) => Ok(flag),
        None => match row.get(index) {
            Some(_) => Err(CatalogError::UnexpectedType {
                query,
                column,
                expected: "boolean flag",
            }
            .into()),
            None => Err(CatalogError::MissingColumn {
                query,
                column,
                index,
            }
            .into()),
        },
    }
}

struct ParamList<'a>(&'a [Value]);

impl fmt::Display for ParamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
