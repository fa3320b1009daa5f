use std::future::Future;

use serde::Deserialize;
use serde_json::Value;

use crate::{error::QuoteError, QuoteFetcher};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
// Yahoo rejects requests carrying the default reqwest agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance quote client. Built once per server lifetime and shared
/// across requests; the underlying connection pool is reused.
#[derive(Debug, Clone)]
pub struct YahooQuoteClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    result: Option<Vec<Value>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    description: String,
}

impl YahooQuoteClient {
    pub fn new() -> Result<Self, QuoteError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, QuoteError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| QuoteError::BuildClient(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn quote_url(&self, symbol: &str) -> String {
        format!("{}/v7/finance/quote?symbols={}", self.base_url, symbol)
    }

    fn extract_quote(body: &str) -> Result<Value, QuoteError> {
        let envelope: QuoteEnvelope =
            serde_json::from_str(body).map_err(|err| QuoteError::ParseError(err.to_string()))?;

        if let Some(error) = envelope.quote_response.error {
            return Err(QuoteError::ApiError {
                code: error.code,
                description: error.description,
            });
        }

        let mut result = envelope.quote_response.result.ok_or(QuoteError::NoQuote)?;
        if result.is_empty() {
            return Err(QuoteError::NoQuote);
        }

        Ok(result.remove(0))
    }
}

impl QuoteFetcher for YahooQuoteClient {
    fn fetch_quote(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Value, QuoteError>> + Send {
        let url = self.quote_url(symbol);
        let http = self.http.clone();

        async move {
            let response = http
                .get(&url)
                .send()
                .await
                .map_err(|err| QuoteError::RequestFailed(err.to_string()))?;
            let body = response
                .text()
                .await
                .map_err(|err| QuoteError::RequestFailed(err.to_string()))?;

            Self::extract_quote(&body)
        }
    }
}
