use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lapwatch", version, about = "A terminal stopwatch with lap recording")]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the refresh interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Write the default config to the config path and exit
    #[arg(long)]
    pub write_default_config: bool,
}
