//! Request logging and timing middleware.
//!
//! Every request, success or failure, is logged with its method, path,
//! response status, and elapsed wall-clock time.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

/// Log method, path, status, and elapsed time for each request
pub async fn track_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    info!(
        "{} {} -> {} in {:.6}s",
        method,
        path,
        response.status().as_u16(),
        elapsed.as_secs_f64()
    );

    response
}
