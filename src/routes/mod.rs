//! Router construction.
//!
//! There is no routing: the greeting handler is installed as the fallback, so
//! every method and path reaches it. Request tracing wraps everything.

pub mod greeting;

use axum::{middleware, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;

/// Creates the Axum router answering every request with the greeting.
pub fn create_router() -> Router {
    Router::new()
        .fallback(greeting::greet)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
