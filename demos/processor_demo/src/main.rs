//! Processor demo entry-point: load config, run the batch, report the outcome.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use processor_demo::config::{CommandLine, load_config};
use processor_demo::error::{DemoError, Result};
use processor_demo::pipeline::run_batch;
use processor_demo::report::write_summary;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = CommandLine::parse();
    run(&cli).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &CommandLine) -> Result<()> {
    let config = load_config(cli)?;
    config
        .validate()
        .into_result()
        .map_err(DemoError::InvalidConfig)?;
    let outcome = run_batch(&config);
    write_summary(&mut std::io::stdout().lock(), &config, &outcome)?;
    outcome.into_result().map_err(DemoError::Operation)?;
    Ok(())
}
