mod fake_driver;

pub use fake_driver::{ExecutedStatement, FakeDriver, text_row};
