use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing_subscriber::fmt::MakeWriter;
use xgbridge_core::ConnectionConfig;
use xgbridge_dialect_xugu::connect;
use xgbridge_testkit::FakeDriver;

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer lock")).into_owned()
    }
}

struct LogWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter(Arc::clone(&self.0))
    }
}

#[test]
fn connect_logs_every_parameter_with_the_password_masked() {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let driver = FakeDriver::new();
        let mut config = ConnectionConfig::for_database("SYSTEM");
        config.host = Some("10.28.25.75".to_string());
        config.user = Some("SYSDBA".to_string());
        config.password = Some("s3cr3t-login".to_string());
        connect(&driver, &config).expect("fake connect");
    });

    let output = buffer.contents();
    assert!(output.contains("connecting to xugu"));
    assert!(output.contains("10.28.25.75"));
    assert!(output.contains("5138"));
    assert!(!output.contains("s3cr3t-login"));
    assert!(output.contains("password=\"***\""));
}
