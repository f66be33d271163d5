use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub async fn assign_trace_id(mut req: Request<Body>, next: Next) -> Response {
    let trace_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(trace_id.clone());

    let span = tracing::info_span!(
        "request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path()
    );

    async move {
        let started = Instant::now();
        tracing::debug!("request started");

        let mut res = next.run(req).await;
        tracing::info!(
            status = res.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );

        res.headers_mut().insert(
            "X-Trace-Id",
            HeaderValue::from_str(&trace_id).unwrap_or(HeaderValue::from_static("invalid")),
        );
        res
    }
    .instrument(span)
    .await
}
