use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Display is the bare status line ("404 Not Found"), matching what the
    // feed host answered.
    #[error("{0}")]
    FeedStatus(String),

    #[error("Feed decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Mail API rejected the message ({status}): {body}")]
    Delivery { status: String, body: String },

    #[error("Missing credential: {name} is not set")]
    MissingCredential { name: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Feed,
    Delivery,
    Config,
}

impl DigestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DigestError::Http(_) => ErrorCategory::Network,
            DigestError::FeedStatus(_) | DigestError::Decode(_) => ErrorCategory::Feed,
            DigestError::Delivery { .. } => ErrorCategory::Delivery,
            DigestError::MissingCredential { .. } | DigestError::InvalidConfigValue { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Exit code for the process when this error aborts a run. Delivery
    /// failures get their own code so cron wrappers can tell "feed was down"
    /// from "mail API refused the message".
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Feed => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Delivery => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DigestError::Http(e) => format!("Could not reach the remote host: {}", e),
            DigestError::FeedStatus(status) => {
                format!("The feed host answered with '{}' instead of the feed", status)
            }
            DigestError::Decode(e) => {
                format!("The feed response did not match the expected JSON shape: {}", e)
            }
            DigestError::Delivery { status, .. } => {
                format!("The mail API did not accept the message ({})", status)
            }
            DigestError::MissingCredential { name } => {
                format!("Mail API credential {} is not set", name)
            }
            DigestError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and that the configured URLs are reachable".to_string()
            }
            ErrorCategory::Feed => {
                "Verify the feed name exists and that the host still serves the JSON listing"
                    .to_string()
            }
            ErrorCategory::Delivery => {
                "Check the mail API credentials and the response body for the rejection reason"
                    .to_string()
            }
            ErrorCategory::Config => {
                "Fix the flag or environment variable and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
