use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

use xgbridge_core::{Connection, ConnectionConfig, Driver, DriverResult, Row, Value};

/// A statement the fake connection received, with its bind parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Rows(Vec<Row>),
    Affected(u64),
    Fail(String),
}

/// Build a catalog-style row out of text cells.
#[must_use]
pub fn text_row(cells: &[&str]) -> Row {
    cells.iter().map(|cell| Value::Text((*cell).to_string())).collect()
}

/// Driver double with a FIFO script of outcomes. Each `query` or
/// `execute` consumes the next scripted entry; an exhausted script
/// answers with no rows / zero affected, which matches the empty
/// catalog contract the adapter relies on.
#[derive(Default)]
pub struct FakeDriver {
    script: Arc<Mutex<VecDeque<ScriptedOutcome>>>,
    log: Arc<Mutex<Vec<ExecutedStatement>>>,
    commits: Arc<Mutex<u64>>,
    connect_failure: Option<String>,
    close_failure: Arc<Mutex<Option<String>>>,
}

impl FakeDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver whose `connect` always fails with `message`.
    #[must_use]
    pub fn refusing(message: impl Into<String>) -> Self {
        Self {
            connect_failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn respond_rows(&self, rows: Vec<Row>) {
        self.push(ScriptedOutcome::Rows(rows));
    }

    pub fn respond_affected(&self, count: u64) {
        self.push(ScriptedOutcome::Affected(count));
    }

    pub fn fail_next(&self, message: impl Into<String>) {
        self.push(ScriptedOutcome::Fail(message.into()));
    }

    pub fn fail_close(&self, message: impl Into<String>) {
        *self
            .close_failure
            .lock()
            .expect("close failure lock should not be poisoned") = Some(message.into());
    }

    /// Everything the connection was asked to run, in order.
    #[must_use]
    pub fn executed(&self) -> Vec<ExecutedStatement> {
        self.log
            .lock()
            .expect("statement log lock should not be poisoned")
            .clone()
    }

    /// How many times the connection was asked to commit.
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        *self
            .commits
            .lock()
            .expect("commit counter lock should not be poisoned")
    }

    fn push(&self, outcome: ScriptedOutcome) {
        self.script
            .lock()
            .expect("script lock should not be poisoned")
            .push_back(outcome);
    }
}

impl Driver for FakeDriver {
    fn connect(&self, _config: &ConnectionConfig) -> DriverResult<Box<dyn Connection>> {
        if let Some(message) = &self.connect_failure {
            return Err(Box::new(io::Error::other(message.clone())));
        }

        Ok(Box::new(FakeConnection {
            script: Arc::clone(&self.script),
            log: Arc::clone(&self.log),
            commits: Arc::clone(&self.commits),
            close_failure: Arc::clone(&self.close_failure),
        }))
    }
}

struct FakeConnection {
    script: Arc<Mutex<VecDeque<ScriptedOutcome>>>,
    log: Arc<Mutex<Vec<ExecutedStatement>>>,
    commits: Arc<Mutex<u64>>,
    close_failure: Arc<Mutex<Option<String>>>,
}

impl FakeConnection {
    fn record(&self, sql: &str, params: &[Value]) {
        self.log
            .lock()
            .expect("statement log lock should not be poisoned")
            .push(ExecutedStatement {
                sql: sql.to_string(),
                params: params.to_vec(),
            });
    }

    fn next_outcome(&self) -> Option<ScriptedOutcome> {
        self.script
            .lock()
            .expect("script lock should not be poisoned")
            .pop_front()
    }
}

impl Connection for FakeConnection {
    fn query(&mut self, sql: &str, params: &[Value]) -> DriverResult<Vec<Row>> {
        self.record(sql, params);
        match self.next_outcome() {
            Some(ScriptedOutcome::Rows(rows)) => Ok(rows),
            Some(ScriptedOutcome::Affected(_)) | None => Ok(Vec::new()),
            Some(ScriptedOutcome::Fail(message)) => Err(Box::new(io::Error::other(message))),
        }
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> DriverResult<u64> {
        self.record(sql, params);
        match self.next_outcome() {
            Some(ScriptedOutcome::Affected(count)) => Ok(count),
            Some(ScriptedOutcome::Rows(_)) | None => Ok(0),
            Some(ScriptedOutcome::Fail(message)) => Err(Box::new(io::Error::other(message))),
        }
    }

    fn commit(&mut self) -> DriverResult<()> {
        *self
            .commits
            .lock()
            .expect("commit counter lock should not be poisoned") += 1;
        Ok(())
    }

    fn close(&mut self) -> DriverResult<()> {
        let failure = self
            .close_failure
            .lock()
            .expect("close failure lock should not be poisoned")
            .take();
        match failure {
            Some(message) => Err(Box::new(io::Error::other(message))),
            None => Ok(()),
        }
    }
}
