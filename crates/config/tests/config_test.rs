use std::fs;

use serde_yaml::Value;
use xgbridge_config::{DATABASE_PASSWORD_ENV, SECRET_MASK, ServiceConfig, update_config};

const GLOBAL_CONF: &str = r#"
database:
  host: 10.28.25.75
  port: "5138"
  name: SYSTEM
  user: SYSDBA
  password: SYSDBA
  charset: utf8
http_port: 9380
"#;

#[test]
fn database_section_becomes_connection_parameters() {
    let config = ServiceConfig::from_yaml(GLOBAL_CONF).expect("parse");
    let connection = config.database_config().expect("database section");

    assert_eq!(connection.host.as_deref(), Some("10.28.25.75"));
    assert_eq!(connection.port, Some(5138));
    assert_eq!(connection.database, "SYSTEM");
    assert_eq!(connection.user.as_deref(), Some("SYSDBA"));
    assert_eq!(connection.charset.as_deref(), Some("utf8"));
}

#[test]
fn database_key_wins_over_legacy_name_key() {
    let config = ServiceConfig::from_yaml(
        "database:\n  database: PRIMARY\n  name: LEGACY\n",
    )
    .expect("parse");
    assert_eq!(config.database_config().expect("section").database, "PRIMARY");
}

#[test]
fn invalid_port_is_rejected_not_defaulted() {
    let config =
        ServiceConfig::from_yaml("database:\n  name: SYSTEM\n  port: not-a-port\n").expect("parse");
    assert!(config.database_config().is_err());
}

#[test]
fn masked_rendering_never_contains_secrets() {
    let config = ServiceConfig::from_yaml(
        "database:\n  host: 10.28.25.75\n  name: SYSTEM\n  password: s3cr3t\nminio:\n  access_key: ak-value\n  secret_key: sk-value\n",
    )
    .expect("parse");
    let rendered = config.masked();

    assert!(!rendered.contains("s3cr3t"));
    assert!(!rendered.contains("ak-value"));
    assert!(!rendered.contains("sk-value"));
    assert!(rendered.contains(SECRET_MASK));
    assert!(rendered.contains("10.28.25.75"));
}

#[test]
fn non_mapping_document_is_an_error() {
    assert!(ServiceConfig::from_yaml("- just\n- a\n- list\n").is_err());
}

#[test]
fn empty_document_is_an_empty_config() {
    let config = ServiceConfig::from_yaml("").expect("parse");
    assert!(config.database_config().is_err());
}

#[test]
fn local_overlay_wins_over_global_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let global_path = dir.path().join("service_conf.yaml");
    fs::write(&global_path, GLOBAL_CONF).expect("write global");
    fs::write(
        dir.path().join("local.service_conf.yaml"),
        "http_port: 19380\n",
    )
    .expect("write local");

    let config = ServiceConfig::load(&global_path).expect("load");
    assert_eq!(config.get("http_port"), Some(Value::Number(19380.into())));
    // Entries only present globally survive the overlay.
    assert!(config.get("database").is_some());
}

#[test]
fn env_variable_answers_for_absent_keys() {
    // Key chosen to be unique to this test binary.
    unsafe { std::env::set_var("XGBRIDGE_TEST_FALLBACK", "from-env") };
    let config = ServiceConfig::from_yaml("{}").expect("parse");

    assert_eq!(
        config.get("xgbridge_test_fallback"),
        Some(Value::String("from-env".to_string()))
    );
    assert!(config.get("xgbridge_test_absent").is_none());
}

#[test]
fn password_env_override_beats_the_file() {
    unsafe { std::env::set_var(DATABASE_PASSWORD_ENV, "from-env-secret") };
    let config = ServiceConfig::from_yaml(GLOBAL_CONF).expect("parse");
    let connection = config.database_config().expect("database section");
    assert_eq!(connection.password.as_deref(), Some("from-env-secret"));
    unsafe { std::env::remove_var(DATABASE_PASSWORD_ENV) };
}

#[test]
fn update_rewrites_one_entry_and_releases_the_lock() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("service_conf.yaml");
    fs::write(&path, "http_port: 9380\n").expect("write");

    update_config(&path, "http_port", Value::Number(9381.into())).expect("update");

    let reloaded = ServiceConfig::load(&path).expect("reload");
    assert_eq!(reloaded.get("http_port"), Some(Value::Number(9381.into())));
    // The lock file must be gone after the write.
    assert!(!dir.path().join(".lock").exists());

    // A second update proves the lock was released.
    update_config(&path, "http_port", Value::Number(9382.into())).expect("second update");
}
