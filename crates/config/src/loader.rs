use std::{
    collections::BTreeMap,
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;
use tracing::info;
use xgbridge_core::ConnectionConfig;

use crate::lock::LockFile;

pub const SECRET_MASK: &str = "********";
/// Secrets may come from the environment instead of the config file.
pub const DATABASE_PASSWORD_ENV: &str = "XGBRIDGE_DATABASE_PASSWORD";

const LOCAL_PREFIX: &str = "local.";
const LOCK_FILE_NAME: &str = ".lock";
const DATABASE_SECTION: &str = "database";
const SECRET_KEYS: [&str; 5] = ["password", "access_key", "secret_key", "secret", "sas_token"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid YAML in config file `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config file `{path}` must be a YAML mapping")]
    NotMapping { path: PathBuf },
    #[error("config section `{section}` has an unexpected shape")]
    Section {
        section: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config section `{DATABASE_SECTION}` is missing")]
    MissingDatabaseSection,
    #[error("config section `{DATABASE_SECTION}` names no database")]
    MissingDatabaseName,
    #[error("invalid port value `{raw}` in config section `{DATABASE_SECTION}`")]
    InvalidPort { raw: String },
    #[error("failed to acquire config lock `{path}`")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write config file `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize config")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },
}

/// The merged service configuration: one YAML mapping, read once at
/// startup and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    values: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatabaseSection {
    host: Option<String>,
    port: Option<PortValue>,
    database: Option<String>,
    /// Older deployments spell the database name `name`.
    name: Option<String>,
    user: Option<String>,
    password: Option<String>,
    charset: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

impl ServiceConfig {
    /// Load `path`, overlaying a sibling `local.`-prefixed variant if
    /// one exists. Local entries win.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut values = read_mapping_file(path)?;
        if let Some(local_path) = local_variant(path)
            && local_path.exists()
        {
            values.extend(read_mapping_file(&local_path)?);
        }
        Ok(Self { values })
    }

    /// Parse an already-fetched document, e.g. one served by a remote
    /// configuration service.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let values = parse_mapping(yaml, Path::new("<inline>"))?;
        Ok(Self { values })
    }

    /// Top-level lookup. An absent key falls back to the environment
    /// variable spelled as the upper-cased key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.values.get(key) {
            return Some(value.clone());
        }
        env::var(key.to_ascii_uppercase()).ok().map(Value::String)
    }

    /// Extract the `database` section as connection parameters. The
    /// password prefers [`DATABASE_PASSWORD_ENV`] over the file.
    pub fn database_config(&self) -> Result<ConnectionConfig, ConfigError> {
        let section_value = self
            .values
            .get(DATABASE_SECTION)
            .ok_or(ConfigError::MissingDatabaseSection)?;
        let section: DatabaseSection = serde_yaml::from_value(section_value.clone())
            .map_err(|source| ConfigError::Section {
                section: DATABASE_SECTION,
                source,
            })?;

        let database = section
            .database
            .or(section.name)
            .ok_or(ConfigError::MissingDatabaseName)?;

        let mut config = ConnectionConfig::for_database(database);
        config.host = section.host;
        config.port = section.port.map(parse_port).transpose()?;
        config.user = section.user;
        config.password = env::var(DATABASE_PASSWORD_ENV).ok().or(section.password);
        config.charset = section.charset;
        Ok(config)
    }

    /// YAML rendering with secret-bearing entries replaced by the
    /// fixed mask. The only form of the config that may be printed.
    #[must_use]
    pub fn masked(&self) -> String {
        let mut masked = self.values.clone();
        for value in masked.values_mut() {
            mask_secrets(value);
        }
        serde_yaml::to_string(&masked).unwrap_or_default()
    }

    /// Log the masked configuration for startup diagnostics.
    pub fn log_summary(&self) {
        info!(config = %self.masked(), "loaded service configuration");
    }
}

/// Read-modify-write of one top-level entry, guarded by a sibling
/// `.lock` file so concurrent writers from other processes exclude
/// each other. The lock is released unconditionally, write or fail.
pub fn update_config(path: &Path, key: &str, value: Value) -> Result<(), ConfigError> {
    let lock_path = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(LOCK_FILE_NAME);
    let _lock = LockFile::acquire(lock_path.clone()).map_err(|source| ConfigError::Lock {
        path: lock_path,
        source,
    })?;

    let mut values = if path.exists() {
        read_mapping_file(path)?
    } else {
        BTreeMap::new()
    };
    values.insert(key.to_string(), value);

    let rendered = serde_yaml::to_string(&values).map_err(|source| ConfigError::Serialize { source })?;
    fs::write(path, rendered).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_mapping_file(path: &Path) -> Result<BTreeMap<String, Value>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_mapping(&text, path)
}

fn parse_mapping(yaml: &str, path: &Path) -> Result<BTreeMap<String, Value>, ConfigError> {
    let document: Value = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        // An empty document parses as null; treat it as an empty mapping.
        Value::Null => Ok(BTreeMap::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| match key.as_str() {
                Some(key) => Ok((key.to_string(), value)),
                None => Err(ConfigError::NotMapping {
                    path: path.to_path_buf(),
                }),
            })
            .collect(),
        _ => Err(ConfigError::NotMapping {
            path: path.to_path_buf(),
        }),
    }
}

fn local_variant(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    Some(path.with_file_name(format!("{LOCAL_PREFIX}{file_name}")))
}

fn parse_port(port: PortValue) -> Result<u16, ConfigError> {
    match port {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { raw }),
    }
}

fn mask_secrets(value: &mut Value) {
    let Value::Mapping(mapping) = value else {
        return;
    };

    for (key, entry) in mapping.iter_mut() {
        let is_secret = key
            .as_str()
            .is_some_and(|key| SECRET_KEYS.contains(&key));
        if is_secret {
            *entry = Value::String(SECRET_MASK.to_string());
        } else {
            mask_secrets(entry);
        }
    }
}
