//! Supplier catalog handlers

use axum::{extract::State, Extension, Json};

use crate::application::PageRequest;
use crate::domain::Product;
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, PaginationParams, ValidatedQuery,
};
use crate::interfaces::http::middleware::SessionToken;
use crate::interfaces::http::modules::session::handlers::session_user_id;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/supplier/products",
    tag = "Supplier",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Products supplied by the signed-in supplier", body = ApiResponse<PaginatedResponse<Product>>),
        (status = 303, description = "Not signed in or not a supplier"),
        (status = 503, description = "Session still loading")
    )
)]
pub async fn list_my_products(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Product>>>, ApiError> {
    let supplier_id = session_user_id(&state, &token).await?;
    let products = state
        .catalog
        .find_by_supplier(&supplier_id)
        .await
        .map_err(api_error)?;

    let page = state
        .pages
        .paginate::<Product, _>(&products, PageRequest::from(&params))
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(page.into())))
}
