//! Session handlers: mock login, sign-out, current account and the pages
//! the access gate redirects to

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{AccountResponse, LoginPageQuery, LoginRequest, LoginResponse, PageDescriptor};
use crate::application::access::safe_return_path;
use crate::interfaces::http::common::{api_error, ApiError, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::SessionToken;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/session/login",
    tag = "Session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Unknown or disabled account"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state
        .identity
        .login(&request.username)
        .await
        .map_err(api_error)?;

    Ok(Json(ApiResponse::success(LoginResponse {
        token: result.token,
        token_type: "Bearer".to_string(),
        account: result.account,
        redirect_to: safe_return_path(request.redirect.as_deref()),
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/account/logout",
    tag = "Session",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<EmptyData>),
        (status = 303, description = "Not signed in, redirected to login")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    let Some(token) = token.as_deref() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Missing session token")),
        ));
    };
    state.identity.logout(token).await.map_err(api_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    get,
    path = "/api/v1/account",
    tag = "Session",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed-in account", body = ApiResponse<AccountResponse>),
        (status = 303, description = "Not signed in, redirected to login")
    )
)]
pub async fn current_account(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let session = state.identity.current(token.as_deref()).await;
    let account = state
        .identity
        .current_account(token.as_deref())
        .await
        .map_err(api_error)?
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Account no longer exists")),
            )
        })?;

    Ok(Json(ApiResponse::success(AccountResponse { account, session })))
}

#[utoipa::path(
    get,
    path = "/login",
    tag = "Session",
    params(LoginPageQuery),
    responses((status = 200, description = "Login page", body = ApiResponse<PageDescriptor>))
)]
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Json<ApiResponse<PageDescriptor>> {
    Json(ApiResponse::success(PageDescriptor {
        page: "login".to_string(),
        message: "Sign in with POST /api/v1/session/login".to_string(),
        redirect: query.redirect.map(|r| safe_return_path(Some(&r))),
    }))
}

#[utoipa::path(
    get,
    path = "/unauthorized",
    tag = "Session",
    responses((status = 403, description = "Unauthorized page", body = ApiResponse<PageDescriptor>))
)]
pub async fn unauthorized_page() -> (StatusCode, Json<ApiResponse<PageDescriptor>>) {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse {
            success: false,
            data: Some(PageDescriptor {
                page: "unauthorized".to_string(),
                message: "Your role does not have access to this page".to_string(),
                redirect: None,
            }),
            error: Some("Insufficient permissions".to_string()),
        }),
    )
}

/// Account id of the session behind `token`. Only reachable behind the
/// access gate, so a missing id means the account was removed mid-session.
pub(crate) async fn session_user_id(state: &AppState, token: &SessionToken) -> Result<String, ApiError> {
    state
        .identity
        .current(token.as_deref())
        .await
        .user_id
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Session has no account")),
            )
        })
}
