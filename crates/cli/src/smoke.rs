use xgbridge_core::{Database, Result, Statement, Value};

const SMOKE_TABLE: &str = "xgbridge_smoke";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeReport {
    pub inserted_rows: u64,
    pub selected_rows: usize,
}

/// The manual connectivity check: create a scratch table, insert with
/// bound parameters, read back, drop. Works over any [`Database`] so
/// embedders can run it against their own driver.
pub fn run_smoke(database: &mut dyn Database) -> Result<SmokeReport> {
    database.execute(&Statement::new(format!(
        "CREATE TABLE {SMOKE_TABLE} (id INTEGER IDENTITY PRIMARY KEY, name VARCHAR, age INTEGER)"
    )))?;

    let inserted_rows = database.execute(&Statement::with_params(
        format!("INSERT INTO {SMOKE_TABLE} (name, age) VALUES (?, ?)"),
        vec![Value::from("test1"), Value::from(18i64)],
    ))?;

    let rows = database.query(&Statement::new(format!(
        "SELECT name, age FROM {SMOKE_TABLE}"
    )))?;

    database.execute(&Statement::new(format!("DROP TABLE {SMOKE_TABLE}")))?;

    Ok(SmokeReport {
        inserted_rows,
        selected_rows: rows.len(),
    })
}
