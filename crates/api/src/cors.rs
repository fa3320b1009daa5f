use axum::http::{header, HeaderName};

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// The three fixed CORS headers attached to every proxy response. The origin
/// is the single configured development origin; no credentials, no wildcard.
pub fn cors_headers(allowed_origin: &str) -> [(HeaderName, String); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allowed_origin.to_string(),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            ALLOWED_METHODS.to_string(),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            ALLOWED_HEADERS.to_string(),
        ),
    ]
}
