//! The single responder behind every path.
//!
//! Also serves as the liveness/readiness probe target: ECS, load balancers and
//! container health checks only need a 200 from any path.

use axum::response::IntoResponse;
use http::header::CONTENT_TYPE;

use crate::config::{CONTENT_TYPE_TEXT_PLAIN, GREETING};

/// Greeting handler.
///
/// Takes no extractors, so method, path, headers and body never influence the
/// response.
pub async fn greet() -> impl IntoResponse {
    ([(CONTENT_TYPE, CONTENT_TYPE_TEXT_PLAIN)], GREETING)
}
