//! HTTP request metrics middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

use crate::interfaces::http::router::API_PREFIX;

/// Records per request:
///
/// - `http_requests_total{method,route,area,status}`
/// - `http_request_duration_seconds{method,route,area}`
///
/// `route` is the matched template, so `/api/v1/products/{id}` stays one
/// series. Requests the router could not match share `route="unmatched"`.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().as_str().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_owned(), |mp| mp.as_str().to_owned());
    let area = storefront_area(&route);

    let started = Instant::now();
    let response = next.run(request).await;
    let seconds = started.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();
    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "area" => area,
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "route" => route,
        "area" => area
    )
    .record(seconds);

    response
}

/// Storefront area a route belongs to: the first segment below the API
/// prefix, `pages` for the gate landing pages and `system` for the rest.
fn storefront_area(route: &str) -> &'static str {
    let Some(rest) = route.strip_prefix(API_PREFIX) else {
        return match route {
            "/login" | "/unauthorized" => "pages",
            _ => "system",
        };
    };
    match rest.trim_start_matches('/').split('/').next() {
        Some("products") => "catalog",
        Some("session") | Some("account") => "session",
        Some("franchisee") => "franchisee",
        Some("supplier") => "supplier",
        Some("admin") => "admin",
        _ => "other",
    }
}
