pub mod capability;
pub mod cli;
pub mod config;
pub mod probe;
pub mod python;
pub mod report;

use std::process::ExitCode;

use anyhow::Context;
use cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    setup_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load().context("load config")?,
    };
    config.validate()?;

    let root = match cli.root {
        Some(path) => path,
        None => std::env::current_dir().context("determine working directory")?,
    };
    let python_override = cli.python.or_else(|| config.python.clone());

    let report = probe::run_all(&config, &root, python_override.as_deref());
    println!("{}", report.to_json()?);

    let readiness = report.readiness();
    tracing::debug!(code = readiness.exit_code(), outcome = ?readiness, "probes complete");
    Ok(ExitCode::from(readiness.exit_code()))
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
