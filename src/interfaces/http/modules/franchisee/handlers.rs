//! Franchisee dashboard handlers

use axum::{extract::State, Extension, Json};

use super::dto::OrderResponse;
use crate::application::PageRequest;
use crate::domain::Order;
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, PaginationParams, ValidatedQuery,
};
use crate::interfaces::http::middleware::SessionToken;
use crate::interfaces::http::modules::session::handlers::session_user_id;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/franchisee/orders",
    tag = "Franchisee",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Orders of the signed-in franchisee, newest first", body = ApiResponse<PaginatedResponse<OrderResponse>>),
        (status = 303, description = "Not signed in or not a franchisee"),
        (status = 503, description = "Session still loading")
    )
)]
pub async fn list_my_orders(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<OrderResponse>>>, ApiError> {
    let franchisee_id = session_user_id(&state, &token).await?;
    let orders = state
        .orders
        .find_by_franchisee(&franchisee_id)
        .await
        .map_err(api_error)?;

    let page = state
        .pages
        .paginate::<Order, _>(&orders, PageRequest::from(&params))
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(page.map(OrderResponse::from).into())))
}
