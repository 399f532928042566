mod commands;
mod error_presentation;
mod smoke;

pub use commands::{Cli, Command, DdlCommand, run};
pub use error_presentation::{CliError, CliResult, render_runtime_error};
pub use smoke::{SmokeReport, run_smoke};
