use std::fmt;

#[derive(Debug)]
pub enum QuoteError {
    BuildClient(String),
    RequestFailed(String),
    ParseError(String),
    ApiError { code: String, description: String },
    NoQuote,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildClient(msg) => write!(f, "could not build upstream client: {msg}"),
            Self::RequestFailed(msg) => write!(f, "upstream request failed: {msg}"),
            Self::ParseError(msg) => write!(f, "upstream response could not be parsed: {msg}"),
            Self::ApiError { code, description } => {
                write!(f, "upstream api error [{code}]: {description}")
            }
            Self::NoQuote => write!(f, "upstream returned no quote"),
        }
    }
}

impl std::error::Error for QuoteError {}
