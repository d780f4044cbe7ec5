use crate::core::{ListPage, SuppressedDestination, SuppressionApi, SuppressionReason};
use crate::utils::error::{Result, SuppressError};
use async_trait::async_trait;
use aws_sdk_sesv2::error::{DisplayErrorContext, SdkError};
use aws_sdk_sesv2::operation::delete_suppressed_destination::DeleteSuppressedDestinationError;
use aws_sdk_sesv2::operation::list_suppressed_destinations::ListSuppressedDestinationsError;
use aws_sdk_sesv2::types::SuppressedDestinationSummary;
use aws_sdk_sesv2::Client as SesClient;
use chrono::{DateTime, Utc};

/// `SuppressionApi` backed by the SES v2 account-level suppression list.
#[derive(Debug, Clone)]
pub struct SesSuppressionApi {
    client: SesClient,
}

impl SesSuppressionApi {
    pub fn new(client: SesClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SuppressionApi for SesSuppressionApi {
    async fn list_page(&self, next_token: Option<String>) -> Result<ListPage> {
        let output = self
            .client
            .list_suppressed_destinations()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(map_list_error)?;

        let destinations = output
            .suppressed_destination_summaries()
            .iter()
            .map(to_destination)
            .collect::<Result<Vec<_>>>()?;

        Ok(ListPage {
            destinations,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn delete_destination(&self, email_address: &str) -> Result<()> {
        self.client
            .delete_suppressed_destination()
            .email_address(email_address)
            .send()
            .await
            .map_err(|e| map_delete_error(email_address, e))?;
        Ok(())
    }
}

fn to_destination(summary: &SuppressedDestinationSummary) -> Result<SuppressedDestination> {
    let updated = summary.last_update_time();
    let last_update_time: DateTime<Utc> =
        DateTime::from_timestamp(updated.secs(), updated.subsec_nanos()).ok_or_else(|| {
            SuppressError::ListError {
                message: format!(
                    "LastUpdateTime out of range for {}: {:?}",
                    summary.email_address(),
                    updated
                ),
            }
        })?;

    Ok(SuppressedDestination::new(
        summary.email_address(),
        SuppressionReason::from(summary.reason().as_str()),
        last_update_time,
    ))
}

fn map_list_error<R>(err: SdkError<ListSuppressedDestinationsError, R>) -> SuppressError
where
    R: std::fmt::Debug,
{
    let throttled = err
        .as_service_error()
        .is_some_and(ListSuppressedDestinationsError::is_too_many_requests_exception);
    let message = DisplayErrorContext(&err).to_string();

    if throttled {
        SuppressError::Throttled { message }
    } else {
        SuppressError::ListError { message }
    }
}

fn map_delete_error<R>(
    email_address: &str,
    err: SdkError<DeleteSuppressedDestinationError, R>,
) -> SuppressError
where
    R: std::fmt::Debug,
{
    let throttled = err
        .as_service_error()
        .is_some_and(DeleteSuppressedDestinationError::is_too_many_requests_exception);
    let message = DisplayErrorContext(&err).to_string();

    if throttled {
        SuppressError::Throttled { message }
    } else {
        SuppressError::DeleteError {
            email_address: email_address.to_string(),
            message,
        }
    }
}
