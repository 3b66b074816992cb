use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vyconsole")]
#[command(about = "Validate, normalize, and diff router configuration snapshots")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare two configuration snapshot files and show differences.
    Diff(DiffArgs),
    /// Check a single value against a network primitive format.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Additional line prefixes to treat as unchanged.
    #[arg(long)]
    pub ignore: Vec<String>,
    /// Profile TOML file with ignore prefixes. Defaults to the embedded profile.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Skip the built-in default ignore prefixes.
    #[arg(long)]
    pub no_default_ignores: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub summary: bool,
    /// Write the diff to a timestamped file in this directory.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum CheckKind {
    Ipv4,
    Ipv6,
    Address,
    Mac,
    Port,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Format to check against.
    #[arg(value_enum)]
    pub kind: CheckKind,
    /// The value to check.
    pub value: String,
    /// For `port`: accept `start-end` ranges.
    #[arg(long)]
    pub range: bool,
    /// For `address`: accept a `/prefix` suffix.
    #[arg(long)]
    pub cidr: bool,
    /// For `address`: check against IPv6 instead of IPv4.
    #[arg(long)]
    pub ipv6: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
