use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct DigestSummary {
    pub entry_count: usize,
    pub body_bytes: usize,
}

/// Drives one fetch → render → deliver pass. Errors propagate to the caller;
/// exit-code mapping stays in the entry point so the pipeline is testable
/// without terminating the process.
pub struct DigestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DigestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<DigestSummary> {
        tracing::info!("Fetching feed entries...");
        let entries = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} entries", entries.len());

        let html_body = self.pipeline.render(&entries);
        tracing::debug!("Rendered digest body ({} bytes)", html_body.len());

        let summary = DigestSummary {
            entry_count: entries.len(),
            body_bytes: html_body.len(),
        };

        tracing::info!("Sending digest email...");
        self.pipeline.deliver(html_body).await?;
        tracing::info!("Digest delivered");

        Ok(summary)
    }
}
