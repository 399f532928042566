use std::fs;

use xgbridge_cli::{Cli, CliError, Command, DdlCommand, render_runtime_error, run};

fn run_to_string(cli: Cli) -> Result<String, CliError> {
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).expect("command output should be utf-8"))
}

fn cli_with(command: Command, config: std::path::PathBuf) -> Cli {
    Cli { config, command }
}

#[test]
fn ddl_add_index_prints_the_rendered_statement() {
    let output = run_to_string(cli_with(
        Command::Ddl {
            op: DdlCommand::AddIndex {
                table: "orders".to_string(),
                columns: vec!["user_id".to_string(), "status".to_string()],
                unique: true,
            },
        },
        std::path::PathBuf::from("unused.yaml"),
    ))
    .expect("ddl rendering needs no config or connection");

    assert_eq!(
        output.trim(),
        "CREATE UNIQUE INDEX orders_user_id_status_idx ON orders (user_id, status)"
    );
}

#[test]
fn config_command_prints_masked_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("service_conf.yaml");
    fs::write(&path, "database:\n  name: SYSTEM\n  password: s3cr3t\n").expect("write config");

    let output = run_to_string(cli_with(Command::Config, path)).expect("config command");
    assert!(!output.contains("s3cr3t"));
    assert!(output.contains("SYSTEM"));
}

#[test]
fn connect_requiring_commands_fail_without_a_native_driver() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("service_conf.yaml");
    fs::write(&path, "database:\n  name: SYSTEM\n").expect("write config");

    let error = run_to_string(cli_with(Command::Tables, path)).expect_err("no driver built in");
    assert!(matches!(error, CliError::NoNativeDriver));

    let rendered = render_runtime_error(error);
    assert!(rendered.starts_with("[driver]"));
    assert!(rendered.contains("Driver trait"));
}

#[test]
fn missing_config_file_renders_as_a_config_error() {
    let error = run_to_string(cli_with(
        Command::Config,
        std::path::PathBuf::from("/nonexistent/service_conf.yaml"),
    ))
    .expect_err("missing file");

    let rendered = render_runtime_error(error);
    assert!(rendered.starts_with("[config]"));
}
