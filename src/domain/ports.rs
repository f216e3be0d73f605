use crate::domain::model::{Entry, OutboundMessage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn feed_base_url(&self) -> &str;
    fn feed(&self) -> &str;
    fn mail_api_url(&self) -> &str;
    fn from_address(&self) -> &str;
    fn to_address(&self) -> &str;
    fn to_name(&self) -> &str;
    fn subject(&self) -> &str;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Entry>>;
    fn render(&self, entries: &[Entry]) -> String;
    async fn deliver(&self, html_body: String) -> Result<()>;
}
