use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "print-number")]
#[command(about = "Prints a message to stdout. Requires a non-negative integer argument.")]
#[command(version)]
pub struct CliArgs {
    /// Number to print; negative values are rejected after parsing
    #[arg(allow_negative_numbers = true, required_unless_present = "describe")]
    pub number: Option<i64>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the module metadata as JSON and exit
    #[arg(long)]
    pub describe: bool,
}
