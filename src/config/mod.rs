use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DigestError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const MAIL_API_USER_VAR: &str = "MAIL_API_USER";
pub const MAIL_API_KEY_VAR: &str = "MAIL_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "feed-digest")]
#[command(about = "Fetches a subreddit JSON feed and emails it as an HTML digest")]
pub struct CliConfig {
    #[arg(long, default_value = "golang")]
    pub feed: String,

    #[arg(long, default_value = "https://www.reddit.com")]
    pub feed_base_url: String,

    #[arg(long, default_value = "https://api.sendgrid.com/api/mail.send.json")]
    pub mail_api_url: String,

    #[arg(long, default_value = "taco@cat.limo")]
    pub from_address: String,

    #[arg(long, default_value = "rbin@sendgrid.com")]
    pub to_address: String,

    #[arg(long, default_value = "Robin Johnson")]
    pub to_name: String,

    #[arg(long, default_value = "Your Daily Golang News")]
    pub subject: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_base_url(&self) -> &str {
        &self.feed_base_url
    }

    fn feed(&self) -> &str {
        &self.feed
    }

    fn mail_api_url(&self) -> &str {
        &self.mail_api_url
    }

    fn from_address(&self) -> &str {
        &self.from_address
    }

    fn to_address(&self) -> &str {
        &self.to_address
    }

    fn to_name(&self) -> &str {
        &self.to_name
    }

    fn subject(&self) -> &str {
        &self.subject
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_base_url", &self.feed_base_url)?;
        validate_url("mail_api_url", &self.mail_api_url)?;
        validate_non_empty_string("feed", &self.feed)?;
        validate_non_empty_string("from_address", &self.from_address)?;
        validate_non_empty_string("to_address", &self.to_address)?;
        validate_non_empty_string("subject", &self.subject)?;
        Ok(())
    }
}

/// Mail API credentials. Read from the environment only, never from flags or
/// source literals.
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub key: String,
}

impl Credentials {
    pub fn new(user: String, key: String) -> Self {
        Self { user, key }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            user: require_env(MAIL_API_USER_VAR)?,
            key: require_env(MAIL_API_KEY_VAR)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("key", &"***")
            .finish()
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(DigestError::MissingCredential {
            name: name.to_string(),
        }),
    }
}
