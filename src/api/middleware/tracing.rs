//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::extract::Request;
use axum::response::Response;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::Span;

type MakeSpan = fn(&Request) -> Span;
type OnResponse = fn(&Response, Duration, &Span);
type OnFailure = fn(ServerErrorsFailureClass, Duration, &Span);

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method and path. Responses are
/// logged with status and latency in milliseconds; 5xx responses are also
/// logged at `ERROR`.
///
/// Pipeline calls can take several seconds (redirects, metadata, and
/// downloads each have their own timeout), so latency is always recorded.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/get_download_link}: response status=200 latency_ms=412
/// ERROR request{method=POST path=/download_video}: server error class=Status code: 500 latency_ms=3
/// ```
pub fn layer()
-> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan, (), OnResponse, (), (), OnFailure>
{
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_request(())
        .on_response(on_response as OnResponse)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(on_failure as OnFailure)
}

fn make_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "response"
    );
}

fn on_failure(class: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        %class,
        latency_ms = latency.as_millis() as u64,
        "server error"
    );
}
