//! Cross-cutting request middleware.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) as early as possible
//! - Emit one access-log record per request
//! - Convert handler panics into 500 responses instead of dropped connections

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID source for `SetRequestIdLayer`.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Access-log middleware.
///
/// Records path, status, method, query, client IP, user agent, error summary
/// and processing time for every request under the `access` target.
pub async fn access_log(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let path = request.uri().path().to_owned();
    let query = request.uri().query().unwrap_or("").to_owned();
    let method = request.method().clone();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let error_summary = if status.is_client_error() || status.is_server_error() {
        status.canonical_reason().unwrap_or("")
    } else {
        ""
    };
    tracing::info!(
        target: "access",
        request_id = %request_id,
        status = status.as_u16(),
        method = %method,
        path = %path,
        query = %query,
        ip = %addr.ip(),
        user_agent = %user_agent,
        errors = %error_summary,
        cost_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}
