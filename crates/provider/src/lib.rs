pub mod error;
pub mod yahoo;

use std::future::Future;

use serde_json::Value;

pub use error::QuoteError;
pub use yahoo::YahooQuoteClient;

/// The single upstream capability the proxy consumes: look up the current
/// quote for one ticker symbol. The payload is opaque to this system and is
/// relayed to the caller unmodified.
pub trait QuoteFetcher: Send + Sync + 'static {
    fn fetch_quote(&self, symbol: &str)
        -> impl Future<Output = Result<Value, QuoteError>> + Send;
}
