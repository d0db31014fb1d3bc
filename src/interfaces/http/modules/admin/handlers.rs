//! Admin panel handlers

use axum::{extract::State, Json};

use crate::application::PageRequest;
use crate::domain::{Account, Order};
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, PaginationParams, ValidatedQuery,
};
use crate::interfaces::http::modules::franchisee::OrderResponse;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "All accounts", body = ApiResponse<PaginatedResponse<Account>>),
        (status = 303, description = "Not signed in or not an admin"),
        (status = 503, description = "Session still loading")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Account>>>, ApiError> {
    let page = state
        .pages
        .paginate::<Account, _>(state.accounts.as_ref(), PageRequest::from(&params))
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/orders",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "All orders, newest first", body = ApiResponse<PaginatedResponse<OrderResponse>>),
        (status = 303, description = "Not signed in or not an admin"),
        (status = 503, description = "Session still loading")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<OrderResponse>>>, ApiError> {
    let page = state
        .pages
        .paginate::<Order, _>(state.orders.as_ref(), PageRequest::from(&params))
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(page.map(OrderResponse::from).into())))
}
