use clap::Parser;
use feed_digest::utils::{logger, validation::Validate};
use feed_digest::{CliConfig, Credentials, DigestEngine, DigestPipeline, HttpMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting feed-digest");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Credential loading failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let mailer = HttpMailer::new(config.mail_api_url.clone(), credentials);
    let pipeline = DigestPipeline::new(mailer, config);
    let engine = DigestEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "Digest run completed: {} entries, {} byte body",
                summary.entry_count,
                summary.body_bytes
            );
            println!("✅ Digest email sent ({} entries)", summary.entry_count);
        }
        Err(e) => {
            tracing::error!("Digest run failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
