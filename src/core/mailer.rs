use crate::config::Credentials;
use crate::domain::model::OutboundMessage;
use crate::domain::ports::Mailer;
use crate::utils::error::{DigestError, Result};
use reqwest::Client;

/// Submits messages to an HTTP transactional mail API.
///
/// Success is an explicit 2xx from the API; everything else is a
/// `Delivery` error carrying the status line and response body.
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl HttpMailer {
    pub fn new(endpoint: String, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            credentials,
        }
    }
}

#[async_trait::async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        tracing::debug!("Submitting message to mail API: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.credentials.user, Some(&self.credentials.key))
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Mail API accepted the message ({})", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DigestError::Delivery {
            status: status.to_string(),
            body,
        })
    }
}
