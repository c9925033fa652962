/// Lizard - a serverless HTTP endpoint that returns one lizard photo.
///
/// Each invocation resolves an image through a single linear pipeline:
/// 1. Build a search query (user override or a random seed phrase)
/// 2. Collect candidates from the configured source (SerpApi or a page scrape)
/// 3. Drop denylisted hosts, keywords and vector graphics, then shuffle
/// 4. Fetch candidates in order until one really serves `image/*` bytes
/// 5. Fall back to a static hotlink-friendly image if nothing worked
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution behind an HTTP trigger
/// - reqwest for all outbound HTTP
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use lizard::api::handler::{build_resolver, handle_request};
/// use lizard::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     lizard::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let resolver = build_resolver(&config);
///
///     let event = serde_json::json!({
///         "requestContext": { "http": { "method": "GET" } },
///         "queryStringParameters": { "format": "json" }
///     });
///     let response = handle_request(&resolver, &event).await;
///     println!("{}", response["body"]);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod resolver;
pub mod search;
pub mod utils;

pub use errors::LizardError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda binary; repeated calls are ignored.
///
/// # Example
///
/// ```
/// lizard::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    #[cfg(feature = "debug-logs")]
    let level = tracing_subscriber::filter::LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let level = tracing_subscriber::filter::LevelFilter::INFO;

    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(level))
        .try_init();
}
