pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LineConfirmation, SesSuppressionApi};
pub use config::toml_config::TomlConfig;
pub use core::engine::{Command, CommandOutcome, ListFormat, SuppressionEngine};
pub use core::retry::RetryPolicy;
pub use domain::model::{ListPage, SuppressedDestination, SuppressionReason};
pub use domain::ports::{ConfirmationProvider, SuppressionApi};
pub use utils::error::{Result, SuppressError};
