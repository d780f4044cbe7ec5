use crate::core::deleter::{BulkDeleter, DeletionReport};
use crate::core::lister::fetch_all_destinations;
use crate::core::retry::RetryPolicy;
use crate::core::summary::Summary;
use crate::core::{ConfirmationProvider, SuppressedDestination, SuppressionApi};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ListFormat {
    #[default]
    Csv,
    Json,
}

/// The tool's subcommands. Each one lists the whole suppression list first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum Command {
    /// Lists all suppressed email destinations
    #[cfg_attr(
        feature = "cli",
        command(
            name = "listAll",
            alias = "list-all",
            long_about = "Retrieves and lists all the suppressed email destinations\nfrom your AWS SES account."
        )
    )]
    ListAll {
        /// Output format
        #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = ListFormat::Csv))]
        format: ListFormat,
    },

    /// Summarizes the suppressed email destinations by reason
    #[cfg_attr(
        feature = "cli",
        command(
            name = "summary",
            long_about = "Summarizes all the suppressed email destinations by reason\nfrom your AWS SES account."
        )
    )]
    Summary,

    /// Deletes all suppressed email destinations
    #[cfg_attr(
        feature = "cli",
        command(
            name = "deleteAll",
            alias = "delete-all",
            long_about = "Deletes all the suppressed email destinations\nfrom your AWS SES account."
        )
    )]
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Listed { count: usize },
    Summarized(Summary),
    Deleted(DeletionReport),
}

pub struct SuppressionEngine<A: SuppressionApi> {
    api: A,
    policy: RetryPolicy,
}

impl<A: SuppressionApi> SuppressionEngine<A> {
    pub fn new(api: A) -> Self {
        Self::with_policy(api, RetryPolicy::default())
    }

    pub fn with_policy(api: A, policy: RetryPolicy) -> Self {
        Self { api, policy }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn run<C, W>(
        &self,
        command: &Command,
        confirmation: &mut C,
        out: &mut W,
    ) -> Result<CommandOutcome>
    where
        C: ConfirmationProvider + ?Sized,
        W: Write + ?Sized,
    {
        tracing::info!("🚀 Running {:?}", command);
        let destinations = fetch_all_destinations(&self.api).await?;

        let outcome = match command {
            Command::ListAll { format } => {
                write_destinations(&destinations, *format, out)?;
                CommandOutcome::Listed {
                    count: destinations.len(),
                }
            }
            Command::Summary => {
                let summary = Summary::from_destinations(&destinations);
                summary.write_to(out)?;
                CommandOutcome::Summarized(summary)
            }
            Command::DeleteAll => {
                let report = BulkDeleter::new(&self.api, self.policy)
                    .delete_all(&destinations, confirmation, out)
                    .await?;
                CommandOutcome::Deleted(report)
            }
        };

        out.flush()?;
        Ok(outcome)
    }
}

/// CSV (`EmailAddress,Reason,LastUpdateTime`) or a JSON array.
pub fn write_destinations<W: Write + ?Sized>(
    destinations: &[SuppressedDestination],
    format: ListFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ListFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            if destinations.is_empty() {
                writer.write_record(["EmailAddress", "Reason", "LastUpdateTime"])?;
            }
            for destination in destinations {
                writer.serialize(destination)?;
            }
            writer.flush()?;
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, destinations)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
