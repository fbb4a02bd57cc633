//! HTTP request/response tracing middleware.

use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Route recorded for requests that matched no route table entry.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Opens the per-request span.
///
/// Besides method, URI and version the span carries `route`, the matched
/// route template (`/owners/{ownerId}/pets/{petId}`), so requests for
/// different owners and pets group under one route in the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSpan;

impl<B> MakeSpan<B> for RouteSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or(UNMATCHED_ROUTE);

        tracing::info_span!(
            "request",
            method = %request.method(),
            route,
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// Creates the request tracing layer.
///
/// Must be added with `Router::layer` so the matched route is known when
/// the span opens.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET route=/owners/{ownerId} uri=/owners/1 version=HTTP/1.1}: started processing request
/// INFO request{method=GET route=/owners/{ownerId} uri=/owners/1 version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RouteSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RouteSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
