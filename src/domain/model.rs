use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why SES refuses to deliver to an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuppressionReason {
    Bounce,
    Complaint,
    /// 服務端回傳但本工具不認識的值，原樣保留
    Other(String),
}

impl SuppressionReason {
    pub fn as_str(&self) -> &str {
        match self {
            SuppressionReason::Bounce => "BOUNCE",
            SuppressionReason::Complaint => "COMPLAINT",
            SuppressionReason::Other(value) => value,
        }
    }
}

impl From<&str> for SuppressionReason {
    fn from(value: &str) -> Self {
        match value {
            "BOUNCE" => SuppressionReason::Bounce,
            "COMPLAINT" => SuppressionReason::Complaint,
            other => SuppressionReason::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SuppressionReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One entry of the account-level suppression list, as returned by a single listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuppressedDestination {
    pub email_address: String,
    pub reason: SuppressionReason,
    pub last_update_time: DateTime<Utc>,
}

impl SuppressedDestination {
    pub fn new(
        email_address: impl Into<String>,
        reason: SuppressionReason,
        last_update_time: DateTime<Utc>,
    ) -> Self {
        Self {
            email_address: email_address.into(),
            reason,
            last_update_time,
        }
    }
}

/// One response of the listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub destinations: Vec<SuppressedDestination>,
    pub next_token: Option<String>,
}
