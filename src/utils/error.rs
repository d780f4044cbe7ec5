use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuppressError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Failed to list suppressed destinations: {message}")]
    ListError { message: String },

    #[error("Request throttled by SES: {message}")]
    Throttled { message: String },

    #[error("Failed to delete {email_address}: {message}")]
    DeleteError {
        email_address: String,
        message: String,
    },

    #[error("Operation cancelled.")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SuppressError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    RemoteApi,
    RateLimit,
    UserAbort,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SuppressError {
    /// 只有 TooManyRequestsException 會被重試
    pub fn is_throttling(&self) -> bool {
        matches!(self, SuppressError::Throttled { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SuppressError::ConfigError { .. }
            | SuppressError::InvalidConfigValueError { .. }
            | SuppressError::ConfigParseError(_) => ErrorCategory::Configuration,
            SuppressError::ListError { .. } | SuppressError::DeleteError { .. } => {
                ErrorCategory::RemoteApi
            }
            SuppressError::Throttled { .. } => ErrorCategory::RateLimit,
            SuppressError::Cancelled => ErrorCategory::UserAbort,
            SuppressError::IoError(_)
            | SuppressError::CsvError(_)
            | SuppressError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserAbort => ErrorSeverity::Low,
            ErrorCategory::RateLimit => ErrorSeverity::Medium,
            ErrorCategory::RemoteApi | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set AWS_REGION (or a region in your AWS profile) and check the config file"
            }
            ErrorCategory::RemoteApi => {
                "Check your AWS credentials and that they allow ses:ListSuppressedDestinations / ses:DeleteSuppressedDestination"
            }
            ErrorCategory::RateLimit => "Wait a moment and run the command again",
            ErrorCategory::UserAbort => "Type 'delete' at the prompt to confirm",
            ErrorCategory::Output => "Check that standard output is writable",
        }
    }

    /// 所有已處理的錯誤都以 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Writes the failure to the right stream and returns the process exit code.
///
/// Cancellation and remote API failures go to `out`; everything else goes to `err`.
pub fn report<O, E>(error: &anyhow::Error, out: &mut O, err: &mut E) -> i32
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let Some(e) = error.downcast_ref::<SuppressError>() else {
        let _ = writeln!(err, "❌ {:#}", error);
        return 1;
    };

    tracing::debug!(
        "Command failed (Category: {:?}, Severity: {:?})",
        e.category(),
        e.severity()
    );

    match e.category() {
        ErrorCategory::UserAbort | ErrorCategory::RemoteApi | ErrorCategory::RateLimit => {
            let _ = writeln!(out, "{:#}", error);
            let _ = out.flush();
        }
        ErrorCategory::Configuration | ErrorCategory::Output => {
            let _ = writeln!(err, "❌ {:#}", error);
            let _ = writeln!(err, "💡 Suggestion: {}", e.recovery_suggestion());
        }
    }
    e.exit_code()
}
