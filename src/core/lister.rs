use crate::core::{SuppressedDestination, SuppressionApi};
use crate::utils::error::Result;

/// Walks every page of the suppression list and returns the records in service order.
///
/// Errors are returned as-is; this path never retries.
pub async fn fetch_all_destinations<A>(api: &A) -> Result<Vec<SuppressedDestination>>
where
    A: SuppressionApi + ?Sized,
{
    let mut destinations = Vec::new();
    let mut next_token: Option<String> = None;
    let mut page_number = 0usize;

    loop {
        page_number += 1;
        let page = api.list_page(next_token.take()).await?;

        tracing::debug!(
            "📄 Page {}: {} destinations, more pages: {}",
            page_number,
            page.destinations.len(),
            page.next_token.is_some()
        );
        destinations.extend(page.destinations);

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    tracing::info!(
        "Fetched {} suppressed destinations across {} page(s)",
        destinations.len(),
        page_number
    );
    Ok(destinations)
}
