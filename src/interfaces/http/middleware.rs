//! Access gate middleware for Axum
//!
//! Runs the route guard before any handler. Handlers behind it only run
//! when the decision is `Allow`; every other decision is answered here.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::common::ApiResponse;
use crate::application::{Navigation, RouteGuard, RouteNavigator};
use crate::domain::Decision;

/// State consumed by [`access_gate_middleware`]
#[derive(Clone)]
pub struct GateState {
    pub guard: RouteGuard,
    pub navigator: RouteNavigator,
}

/// Bearer token of the request, stored in request extensions once the
/// gate has allowed the request.
#[derive(Clone, Debug, Default)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Body sent along with a gate redirect
#[derive(Debug, Serialize, ToSchema)]
pub struct GateRedirect {
    /// `redirect_login` or `redirect_unauthorized`
    pub decision: String,
    /// Where the client should navigate
    pub location: String,
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Authorize the request against the route table and either run the handler
/// or answer with the navigation outcome.
pub async fn access_gate_middleware(
    State(state): State<GateState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let location = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let token = bearer_token(request.headers());

    let decision = state.guard.check(&location, token.as_deref()).await;

    match state.navigator.navigate(&decision) {
        Navigation::Render => {
            request.extensions_mut().insert(SessionToken(token));
            next.run(request).await
        }
        Navigation::Wait { retry_after } => {
            let body = ApiResponse::<()>::error("Session is still loading, retry shortly");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::RETRY_AFTER, retry_after.as_secs().max(1).to_string())],
                Json(body),
            )
                .into_response()
        }
        Navigation::Redirect { location } => redirect_response(&decision, location),
    }
}

fn redirect_response(decision: &Decision, location: String) -> Response {
    let message = match decision {
        Decision::RedirectUnauthorized => "Insufficient permissions",
        _ => "Authentication required",
    };
    let header_value = HeaderValue::from_str(&location).ok();
    let body = ApiResponse {
        success: false,
        data: Some(GateRedirect {
            decision: decision.label().to_string(),
            location,
        }),
        error: Some(message.to_string()),
    };

    let mut response = (StatusCode::SEE_OTHER, Json(body)).into_response();
    if let Some(value) = header_value {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}
