//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Drydock - clean, discover and compile the framework and app modules
#[derive(Parser)]
#[command(name = "drydock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the failure line, if any
    #[arg(short, long)]
    pub quiet: bool,

    /// Read toolchain and module layout from a toml file instead of the
    /// built-in framework/app layout
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
