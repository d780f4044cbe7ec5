pub mod deleter;
pub mod engine;
pub mod lister;
pub mod retry;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{ListPage, SuppressedDestination, SuppressionReason};
pub use crate::domain::ports::{ConfirmationProvider, SuppressionApi};
pub use crate::utils::error::Result;
