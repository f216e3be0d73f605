pub mod digest;
pub mod format;
pub mod mailer;
pub mod pipeline;

pub use crate::domain::model::{Entry, OutboundMessage};
pub use crate::domain::ports::{ConfigProvider, Mailer, Pipeline};
pub use crate::utils::error::Result;
