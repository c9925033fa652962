//! API Lambda handler.
//!
//! This module handles:
//! - CORS preflight (answered before any configuration is read)
//! - Wiring the configured image source and fetcher into a [`Resolver`]
//! - Choosing between binary and `format=json` debug responses

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::clients::{HttpImageFetcher, shared_http_client};
use crate::core::config::AppConfig;
use crate::resolver::Resolver;
use crate::search;

pub use self::function_handler as handler;

/// Lambda handler for the image endpoint.
///
/// # Errors
///
/// Never returns `Err` in practice: configuration and resolution failures are
/// rendered as JSON error responses.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let payload = event.payload;

    if parsing::is_preflight(&payload) {
        return Ok(helpers::preflight());
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::err_response(500, e.reason()));
        }
    };

    let resolver = build_resolver(&config);
    info!(source = resolver.source_kind().as_str(), "Handling image request");

    Ok(handle_request(&resolver, &payload).await)
}

/// Builds the resolver for this deployment's configuration.
#[must_use]
pub fn build_resolver(config: &AppConfig) -> Resolver {
    let http = shared_http_client();
    Resolver::new(
        search::from_config(config, http.clone()),
        Box::new(HttpImageFetcher::new(http)),
        config,
    )
}

/// Renders the gateway response for one request event.
pub async fn handle_request(resolver: &Resolver, payload: &Value) -> Value {
    if parsing::is_preflight(payload) {
        return helpers::preflight();
    }

    let user_query = parsing::query_param(payload, "q");
    let debug = parsing::wants_json(payload);

    match resolver.resolve(user_query.as_deref()).await {
        Ok(resolved) if debug => helpers::debug_response(&resolved),
        Ok(resolved) => helpers::image_response(&resolved.image),
        Err(failure) => helpers::failure_response(&failure),
    }
}
