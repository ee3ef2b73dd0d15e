//! HTTP surface of the commute service: `/health` at the root, the ride
//! registry under `/api`, and the middleware every request passes through.
//!
//! `main.rs` and the integration tests both call [`build_app_router`].

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Correlation header set on every request and echoed on the response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Preflight cache lifetime handed to browsers.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Assemble the service router.
///
/// Outermost layer first: CORS, request id, tracing (the span carries the
/// request id), request-id echo, the `REQUEST_TIMEOUT_SECS` deadline (408),
/// panic recovery (500). Handlers see only requests that survived all of
/// them.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(request_trace_layer())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// One INFO span and one INFO completion event per request.
fn request_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// CORS for the mobile/web client origins in `CORS_ORIGINS`.
///
/// Only the verbs the ride registry serves are allowed, and only the
/// headers a JSON client with a bearer token sends.
///
/// # Panics
///
/// Panics on an origin that is not a valid header value, so a bad
/// `CORS_ORIGINS` stops the server at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .unwrap_or_else(|e| panic!("CORS_ORIGINS entry '{origin}' is invalid: {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
