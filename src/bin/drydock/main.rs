//! Drydock CLI - a minimal build orchestrator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drydock::ops::build;
use drydock::{Config, Shell};

mod cli;

use cli::Cli;

fn main() {
    // Parse CLI
    let cli = Cli::parse();
    let shell = Shell::from_flags(cli.quiet);

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("drydock=debug")
    } else {
        EnvFilter::new("drydock=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // The only place a failed build turns into an exit status
    if let Err(e) = run(&cli, &shell) {
        shell.error(e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, shell: &Shell) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let summary = build(&config, shell)?;
    tracing::debug!(
        "compiled {} source file(s) across {} module(s)",
        summary.source_count(),
        summary.modules.len()
    );

    Ok(())
}
