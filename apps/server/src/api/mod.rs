mod health;
mod merge;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::ErrorParts, main_lib::AppState};

/// Correlation header: an incoming id is honored, otherwise one is
/// generated; either way it is echoed on the response and included in
/// error envelopes.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);

    Router::new()
        .route("/health", get(health::health))
        .route("/info", get(health::info))
        .route("/excel/merge", post(merge::merge_workbooks))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
        .layer(cors)
        // basic hardening headers
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(middleware::from_fn(with_correlation_id))
        // Router::layer nests later layers outermost: the set layer has to
        // wrap the propagate layer so generated ids reach the response too.
        .layer(PropagateRequestIdLayer::new(correlation_header.clone()))
        .layer(SetRequestIdLayer::new(correlation_header, MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// Re-renders error envelopes with the request's correlation id, so the
/// body carries the same id the response header does.
async fn with_correlation_id(request: Request, next: Next) -> Response {
    let correlation_id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let response = next.run(request).await;

    let Some(parts) = response.extensions().get::<ErrorParts>().cloned() else {
        return response;
    };
    let Some(correlation_id) = correlation_id else {
        return response;
    };

    let envelope = json!({
        "error": {
            "code": parts.code,
            "message": parts.message,
            "correlationId": correlation_id,
        }
    });
    let bytes = match serde_json::to_vec(&envelope) {
        Ok(bytes) => bytes,
        Err(_) => return response,
    };
    let (mut head, _) = response.into_parts();
    head.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(head, Body::from(bytes))
}
