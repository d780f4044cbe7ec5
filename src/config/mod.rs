pub mod aws;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::engine::Command;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ses-suppress", version)]
#[command(about = "Manage the AWS SES account-level suppression list")]
pub struct CliConfig {
    /// Optional TOML file with retry settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}
