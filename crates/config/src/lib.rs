//! Service configuration for xgbridge deployments.
//!
//! The deployment ships one YAML mapping (`service_conf.yaml`) with an
//! optional `local.service_conf.yaml` overlay next to it; local entries
//! win. Secrets may come from the environment instead of the file, and
//! anything printed for diagnostics goes through [`ServiceConfig::masked`].

mod loader;
mod lock;

pub use loader::{ConfigError, DATABASE_PASSWORD_ENV, SECRET_MASK, ServiceConfig, update_config};
