use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Whatever the native client raised, carried unchanged as `source`.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;
pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error(transparent)]
    Execute(#[from] ExecutionError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Native connect failure. No retries happen at this layer; the error
/// carries the target (never the password) and the driver error.
#[derive(Debug, Error)]
#[error("failed to connect to xugu at {host}:{port}, database `{database}`")]
pub struct ConnectError {
    pub host: String,
    pub port: u16,
    pub database: String,
    #[source]
    pub source: DriverError,
}

/// Statement failure. The original driver error is preserved as
/// `source` so callers can inspect it unmutated.
#[derive(Debug, Error)]
#[error("statement failed: {sql}")]
pub struct ExecutionError {
    pub sql: String,
    #[source]
    pub source: DriverError,
}

impl ExecutionError {
    pub fn statement_failed<E>(sql: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            sql: sql.into(),
            source: Box::new(source),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The dialect cannot express the requested migration. Raised
    /// before any SQL is rendered.
    #[error("operation `{operation}` is not supported by the xugu dialect: {reason}")]
    Unsupported {
        operation: &'static str,
        reason: String,
    },
}

/// Malformed catalog metadata. Absent rows are not an error; a row
/// that is present but missing or mis-typing a column is.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog query `{query}` returned a row without column {index} (`{column}`)")]
    MissingColumn {
        query: &'static str,
        column: &'static str,
        index: usize,
    },
    #[error("catalog query `{query}` returned `{column}` with an unexpected type; expected {expected}")]
    UnexpectedType {
        query: &'static str,
        column: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::{ConnectError, Error, ExecutionError};
    use std::{error::Error as StdError, io};

    #[test]
    fn execution_error_keeps_the_native_error_as_source() {
        let native = io::Error::other("connection reset by peer");
        let error = Error::from(ExecutionError::statement_failed("SELECT 1", native));

        let source = error.source().expect("source must be preserved");
        assert_eq!(source.to_string(), "connection reset by peer");
    }

    #[test]
    fn connect_error_message_names_the_target_only() {
        let error = ConnectError {
            host: "10.28.25.75".to_string(),
            port: 5138,
            database: "SYSTEM".to_string(),
            source: Box::new(io::Error::other("login refused")),
        };

        let message = error.to_string();
        assert!(message.contains("10.28.25.75:5138"));
        assert!(!message.contains("login refused"));
    }
}
