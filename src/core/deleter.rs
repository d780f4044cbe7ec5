use crate::core::retry::RetryPolicy;
use crate::core::summary::Summary;
use crate::core::{ConfirmationProvider, SuppressedDestination, SuppressionApi};
use crate::utils::error::{Result, SuppressError};
use std::io::Write;

pub const CONFIRMATION_WORD: &str = "delete";
pub const CONFIRMATION_PROMPT: &str = "If you want to continue, type 'delete' to proceed: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { attempts: u32 },
    /// 重試次數用完仍被限流，照樣往下一筆
    ThrottledOut { attempts: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub processed: usize,
    pub total: usize,
}

/// `true` only for the literal confirmation word, ignoring case and surrounding whitespace.
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRMATION_WORD)
}

pub struct BulkDeleter<'a, A: SuppressionApi + ?Sized> {
    api: &'a A,
    policy: RetryPolicy,
}

impl<'a, A: SuppressionApi + ?Sized> BulkDeleter<'a, A> {
    pub fn new(api: &'a A, policy: RetryPolicy) -> Self {
        Self { api, policy }
    }

    /// Previews, asks for confirmation, then deletes every destination in order.
    ///
    /// A declined confirmation returns `SuppressError::Cancelled` before any delete call.
    /// A non-throttling failure stops the batch; earlier deletions are not rolled back.
    pub async fn delete_all<C, W>(
        &self,
        destinations: &[SuppressedDestination],
        confirmation: &mut C,
        out: &mut W,
    ) -> Result<DeletionReport>
    where
        C: ConfirmationProvider + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(
            out,
            "You are about to delete the following suppressed email destinations:"
        )?;
        Summary::from_destinations(destinations).write_to(out)?;
        writeln!(
            out,
            "Do you really want to delete all suppressed email destinations? This action cannot be undone."
        )?;
        out.flush()?;

        let answer = confirmation.ask(CONFIRMATION_PROMPT)?;
        if !is_confirmed(&answer) {
            tracing::info!("Deletion declined at the confirmation prompt");
            return Err(SuppressError::Cancelled);
        }

        writeln!(out, "Deleting suppressed email destinations:")?;
        let total = destinations.len();
        for (index, destination) in destinations.iter().enumerate() {
            match self.delete_with_retry(&destination.email_address).await? {
                DeleteOutcome::Deleted { attempts } => tracing::debug!(
                    "Deleted {} after {} attempt(s)",
                    destination.email_address,
                    attempts
                ),
                DeleteOutcome::ThrottledOut { attempts } => tracing::warn!(
                    "⚠️ Giving up on {} after {} throttled attempt(s)",
                    destination.email_address,
                    attempts
                ),
            }
            writeln!(out, "Progress: {}/{}", index + 1, total)?;
            out.flush()?;
        }
        writeln!(out)?;
        writeln!(out, "Deletion complete.")?;

        Ok(DeletionReport {
            processed: total,
            total,
        })
    }

    pub async fn delete_with_retry(&self, email_address: &str) -> Result<DeleteOutcome> {
        let mut attempt = 0;
        loop {
            match self.api.delete_destination(email_address).await {
                Ok(()) => {
                    return Ok(DeleteOutcome::Deleted {
                        attempts: attempt + 1,
                    })
                }
                Err(e) if e.is_throttling() => {
                    if !self.policy.has_next(attempt) {
                        return Ok(DeleteOutcome::ThrottledOut {
                            attempts: attempt + 1,
                        });
                    }
                    let delay = self.policy.delay_after(attempt);
                    tracing::warn!(
                        "🔄 Throttled deleting {} (attempt {}/{}), retrying in {:?}",
                        email_address,
                        attempt + 1,
                        self.policy.max_attempts,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
