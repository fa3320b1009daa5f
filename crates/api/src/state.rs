use std::sync::Arc;

use provider::QuoteFetcher;

/// Per-server state shared by every request: the one upstream client
/// instance and the configured CORS origin. Both are read-only, so handlers
/// need no locking.
#[derive(Debug)]
pub struct AppState<F> {
    fetcher: Arc<F>,
    allowed_origin: Arc<str>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            allowed_origin: Arc::clone(&self.allowed_origin),
        }
    }
}

impl<F: QuoteFetcher> AppState<F> {
    pub fn new(fetcher: F, allowed_origin: impl Into<Arc<str>>) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            allowed_origin: allowed_origin.into(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}
