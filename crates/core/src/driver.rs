use crate::{ConnectionConfig, DriverResult, Row, Value};

/// Entry point into a native client library. The real xgcondb binding
/// lives outside this repository; embedders hand an implementation to
/// `xgbridge_dialect_xugu::connect`.
pub trait Driver {
    fn connect(&self, config: &ConnectionConfig) -> DriverResult<Box<dyn Connection>>;
}

/// One native connection. A single logical caller uses it at a time;
/// pooling and thread safety belong to an outer decorator, not here.
/// All calls block on network I/O, and any timeout is the native
/// client's to enforce.
pub trait Connection {
    /// Run a statement that produces rows. Parameters bind to `?`
    /// placeholders positionally.
    fn query(&mut self, sql: &str, params: &[Value]) -> DriverResult<Vec<Row>>;

    /// Run a statement for its effect, returning the affected row
    /// count.
    fn execute(&mut self, sql: &str, params: &[Value]) -> DriverResult<u64>;

    /// Make prior statements durable. With autocommit on (the
    /// default) the native client commits as it goes and may treat
    /// this as a no-op.
    fn commit(&mut self) -> DriverResult<()>;

    fn close(&mut self) -> DriverResult<()>;
}
