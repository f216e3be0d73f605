use crate::core::format::render_digest;
use crate::core::{ConfigProvider, Entry, Mailer, Pipeline};
use crate::domain::model::{FeedEnvelope, OutboundMessage};
use crate::utils::error::{DigestError, Result};
use reqwest::{Client, StatusCode};

pub struct DigestPipeline<M: Mailer, C: ConfigProvider> {
    mailer: M,
    config: C,
    client: Client,
}

impl<M: Mailer, C: ConfigProvider> DigestPipeline<M, C> {
    pub fn new(mailer: M, config: C) -> Self {
        Self {
            mailer,
            config,
            client: Client::new(),
        }
    }

    fn feed_url(&self) -> String {
        format!(
            "{}/r/{}.json",
            self.config.feed_base_url().trim_end_matches('/'),
            self.config.feed()
        )
    }
}

#[async_trait::async_trait]
impl<M: Mailer, C: ConfigProvider> Pipeline for DigestPipeline<M, C> {
    async fn fetch(&self) -> Result<Vec<Entry>> {
        let url = self.feed_url();
        tracing::debug!("Fetching feed: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Feed response status: {}", status);

        if status != StatusCode::OK {
            return Err(DigestError::FeedStatus(status.to_string()));
        }

        let body = response.text().await?;
        let envelope: FeedEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.into_entries())
    }

    fn render(&self, entries: &[Entry]) -> String {
        render_digest(entries)
    }

    async fn deliver(&self, html_body: String) -> Result<()> {
        let message = OutboundMessage {
            from: self.config.from_address().to_string(),
            to: self.config.to_address().to_string(),
            to_name: self.config.to_name().to_string(),
            subject: self.config.subject().to_string(),
            html_body,
        };
        self.mailer.send(&message).await
    }
}
