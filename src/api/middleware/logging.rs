//! Request/response logging middleware with sensitive data redaction

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::MatchedPath,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, Level};

use crate::api::types::ApiError;

/// Upper bound for buffering a body to log it; matches axum's default body limit
const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;
const MAX_LOGGED_BODY_CHARS: usize = 1024;

static PASSWORD_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([A-Za-z_]*[Pp]assword[A-Za-z_]*)"\s*:\s*"(?:[^"\\]|\\.)*""#)
        .expect("password field pattern is valid")
});

/// Middleware to log HTTP requests and responses with sensitive data redaction.
///
/// Does not open its own span; `TraceLayer` already does. At debug level JSON
/// request bodies are logged with every password field replaced.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let headers_log = redact_headers(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let request = if tracing::enabled!(Level::DEBUG) && is_json(&request) {
        if loggable_length(&request).is_some() {
            match log_body(request, &request_id).await {
                Ok(request) => request,
                Err(err) => return err.into_response(),
            }
        } else {
            debug!(request_id = %request_id, "Request body not logged: unknown or oversized length");
            request
        }
    } else {
        request
    };

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

async fn log_body(request: Request<Body>, request_id: &str) -> Result<Request<Body>, ApiError> {
    let (parts, body) = request.into_parts();
    // Same status and envelope the Json extractor gives for an unreadable body
    let bytes = to_bytes(body, MAX_LOGGED_BODY_BYTES).await.map_err(|err| {
        ApiError::bad_request(format!("Could not read request body: {}", err))
            .with_code("json_parse_error")
    })?;

    if !bytes.is_empty() {
        let text = String::from_utf8_lossy(&bytes);
        debug!(
            request_id = %request_id,
            body = %truncate_for_log(&redact_json_sensitive_fields(&text), MAX_LOGGED_BODY_CHARS),
            "Request body"
        );
    }

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Declared body length, if it is small enough to buffer for the log
///
/// Bodies without a `Content-Length` are streamed through untouched so the
/// handler's own extractor decides how to reject them.
fn loggable_length(request: &Request<Body>) -> Option<usize> {
    request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|len| *len <= MAX_LOGGED_BODY_BYTES)
}

fn is_json(request: &Request<Body>) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Render the loggable headers, redacting credentials
fn redact_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| {
            let value = if is_sensitive_header(name.as_str()) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };
            format!("{}={}", name, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "cookie" | "set-cookie" | "proxy-authorization"
    )
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "accept"
            | "origin"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "authorization"
            | "cookie"
    )
}

/// Replace the value of every JSON string field whose name mentions a password
pub fn redact_json_sensitive_fields(json: &str) -> String {
    PASSWORD_FIELD_RE
        .replace_all(json, r#""$1":"[REDACTED]""#)
        .into_owned()
}

/// Truncate long strings for logging
pub fn truncate_for_log(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}...[truncated]", &s[..cut]),
    }
}
