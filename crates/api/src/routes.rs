use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use provider::QuoteFetcher;
use serde::Serialize;

use crate::{cors::cors_headers, state::AppState};

pub fn router<F: QuoteFetcher>(state: AppState<F>) -> Router {
    // One entry point for every path, like the original single fetch
    // handler: the path is ignored, only the method and query matter.
    Router::new().fallback(proxy_entry::<F>).with_state(state)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

async fn proxy_entry<F: QuoteFetcher>(
    method: Method,
    State(state): State<AppState<F>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let headers = cors_headers(state.allowed_origin());

    if method == Method::OPTIONS {
        return (StatusCode::OK, headers).into_response();
    }

    // First occurrence wins, and an empty value counts as absent, matching
    // URL search-params lookup semantics.
    let symbol = params
        .into_iter()
        .find(|(key, _)| key == "symbol")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty());

    let Some(symbol) = symbol else {
        return (
            StatusCode::BAD_REQUEST,
            headers,
            Json(ErrorBody {
                error: "No symbol provided",
            }),
        )
            .into_response();
    };

    match state.fetcher().fetch_quote(&symbol).await {
        Ok(quote) => (StatusCode::OK, headers, Json(quote)).into_response(),
        Err(err) => {
            // The cause stays server-side; callers only ever see the one
            // opaque not-found shape.
            log::error!("upstream quote lookup failed for {symbol}: {err}");
            (
                StatusCode::NOT_FOUND,
                headers,
                Json(ErrorBody {
                    error: "Stock not found",
                }),
            )
                .into_response()
        }
    }
}
