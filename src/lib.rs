pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Credentials};
pub use core::digest::{DigestEngine, DigestSummary};
pub use core::mailer::HttpMailer;
pub use core::pipeline::DigestPipeline;
pub use utils::error::{DigestError, Result};
