use crate::domain::model::ListPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote suppression list. Implementations must report rate limiting
/// as `SuppressError::Throttled` so the deleter can tell it apart.
#[async_trait]
pub trait SuppressionApi: Send + Sync {
    async fn list_page(&self, next_token: Option<String>) -> Result<ListPage>;
    async fn delete_destination(&self, email_address: &str) -> Result<()>;
}

/// Supplies the user's typed answer to a confirmation prompt.
pub trait ConfirmationProvider {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}
