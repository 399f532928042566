use std::{collections::BTreeMap, fmt};

pub const DEFAULT_PORT: u16 = 5138;
pub const DEFAULT_CHARSET: &str = "utf8";
pub const PASSWORD_MASK: &str = "***";

/// Parameters for one connection attempt. Built from the merged service
/// configuration, handed to the driver, and discarded once the
/// connection is established.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub charset: Option<String>,
    /// Commit each statement as it executes. Callers wanting explicit
    /// transaction control clear this and call `commit` themselves.
    pub autocommit: bool,
    pub extra: BTreeMap<String, String>,
}

impl ConnectionConfig {
    #[must_use]
    pub fn for_database(database: impl Into<String>) -> Self {
        Self {
            host: None,
            port: None,
            database: database.into(),
            user: None,
            password: None,
            charset: None,
            autocommit: true,
            extra: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    #[must_use]
    pub fn charset_or_default(&self) -> &str {
        self.charset.as_deref().unwrap_or(DEFAULT_CHARSET)
    }
}

// Hand-written so the password can never leak through `{:?}`.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| PASSWORD_MASK))
            .field("charset", &self.charset)
            .field("autocommit", &self.autocommit)
            .field("extra", &self.extra)
            .finish()
    }
}
