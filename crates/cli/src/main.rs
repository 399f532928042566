use clap::Parser;
use tracing_subscriber::EnvFilter;
use xgbridge_cli::{Cli, render_runtime_error, run};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    if let Err(error) = run(cli, &mut stdout) {
        eprintln!("{}", render_runtime_error(error));
        std::process::exit(1);
    }
}
