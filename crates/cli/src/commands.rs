use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand};
use xgbridge_config::ServiceConfig;
use xgbridge_core::{Database, Driver, MigrationOp, SchemaMigrator};
use xgbridge_dialect_xugu::{XuguMigrator, connect};

use crate::{
    error_presentation::{CliError, CliResult},
    smoke::run_smoke,
};

const DEFAULT_CONFIG_PATH: &str = "conf/service_conf.yaml";

#[derive(Debug, Parser)]
#[command(name = "xgbridge", about = "Operational commands for the xugu adapter")]
pub struct Cli {
    /// Service configuration file (a `local.` variant next to it is
    /// overlaid automatically).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the merged configuration with secrets masked
    Config,
    /// Render migration DDL without connecting
    Ddl {
        #[command(subcommand)]
        op: DdlCommand,
    },
    /// List the tables the connected database exposes
    Tables,
    /// List the columns of one table
    Columns { table: String },
    /// Connect, create a scratch table, insert, select, drop
    Smoke,
}

#[derive(Debug, Subcommand)]
pub enum DdlCommand {
    RenameTable {
        old: String,
        new: String,
    },
    AddColumn {
        table: String,
        definition: String,
    },
    DropColumn {
        table: String,
        column: String,
    },
    RenameColumn {
        table: String,
        old: String,
        new: String,
    },
    AddIndex {
        table: String,
        columns: Vec<String>,
        #[arg(long)]
        unique: bool,
    },
    DropIndex {
        table: String,
        index: String,
    },
}

impl From<DdlCommand> for MigrationOp {
    fn from(command: DdlCommand) -> Self {
        match command {
            DdlCommand::RenameTable { old, new } => MigrationOp::RenameTable { old, new },
            DdlCommand::AddColumn { table, definition } => {
                MigrationOp::AddColumn { table, definition }
            }
            DdlCommand::DropColumn { table, column } => MigrationOp::DropColumn { table, column },
            DdlCommand::RenameColumn { table, old, new } => {
                MigrationOp::RenameColumn { table, old, new }
            }
            DdlCommand::AddIndex {
                table,
                columns,
                unique,
            } => MigrationOp::AddIndex {
                table,
                columns,
                unique,
            },
            DdlCommand::DropIndex { table, index } => MigrationOp::DropIndex { table, index },
        }
    }
}

pub fn run(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    match cli.command {
        Command::Config => {
            let config = ServiceConfig::load(&cli.config)?;
            write_line(out, &config.masked());
            Ok(())
        }
        Command::Ddl { op } => run_ddl(op, out),
        Command::Tables => with_database(&cli.config, out, |database, out| {
            for table in database.tables()? {
                write_line(out, &table);
            }
            Ok(())
        }),
        Command::Columns { table } => with_database(&cli.config, out, |database, out| {
            for column in database.columns(&table)? {
                write_line(
                    out,
                    &format!(
                        "{}\t{}\t{}",
                        column.name,
                        column.data_type,
                        if column.nullable { "NULL" } else { "NOT NULL" }
                    ),
                );
            }
            Ok(())
        }),
        Command::Smoke => with_database(&cli.config, out, |database, out| {
            let report = run_smoke(database)?;
            write_line(
                out,
                &format!(
                    "smoke ok: {} row(s) inserted, {} row(s) read back",
                    report.inserted_rows, report.selected_rows
                ),
            );
            Ok(())
        }),
    }
}

fn run_ddl(command: DdlCommand, out: &mut dyn Write) -> CliResult<()> {
    let statements = XuguMigrator::new().render(&MigrationOp::from(command))?;
    if statements.is_empty() {
        write_line(out, "-- no statements for this operation");
    }
    for statement in statements {
        write_line(out, &statement.sql);
    }
    Ok(())
}

fn with_database(
    config_path: &std::path::Path,
    out: &mut dyn Write,
    action: impl FnOnce(&mut dyn Database, &mut dyn Write) -> CliResult<()>,
) -> CliResult<()> {
    let service_config = ServiceConfig::load(config_path)?;
    service_config.log_summary();
    let connection_config = service_config.database_config()?;
    let driver = native_driver()?;
    let mut database = connect(driver.as_ref(), &connection_config)?;

    let outcome = action(&mut database, out);
    database.close();
    outcome
}

/// The xgcondb client has no published Rust binding; embedders link
/// one by implementing `xgbridge_core::Driver` and wiring it here.
fn native_driver() -> CliResult<Box<dyn Driver>> {
    Err(CliError::NoNativeDriver)
}

fn write_line(out: &mut dyn Write, line: &str) {
    // Output errors (closed pipe) are not worth surfacing here.
    let _ = writeln!(out, "{line}");
}
