use api::AppState;
use axum::Router;
use provider::{QuoteError, YahooQuoteClient};

use crate::config::Config;

/// Builds the proxy router around the one shared upstream client instance.
pub fn build_app(config: &Config) -> Result<Router, QuoteError> {
    let fetcher = YahooQuoteClient::with_base_url(config.upstream_base_url.clone())?;
    let state = AppState::new(fetcher, config.allowed_origin.as_str());

    Ok(api::router(state))
}
