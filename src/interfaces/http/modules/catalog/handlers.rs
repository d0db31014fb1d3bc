//! Public catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::PageRequest;
use crate::domain::{DomainError, Product};
use crate::interfaces::http::common::{
    api_error, ApiError, ApiResponse, PaginatedResponse, PaginationParams, ValidatedQuery,
};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Catalog",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of the catalog", body = ApiResponse<PaginatedResponse<Product>>),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<Product>>>, ApiError> {
    let page = state
        .pages
        .paginate::<Product, _>(state.catalog.as_ref(), PageRequest::from(&params))
        .await
        .map_err(api_error)?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Catalog",
    params(("id" = u32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<Product>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state
        .catalog
        .find_by_id(id)
        .await
        .map_err(api_error)?
        .ok_or_else(|| api_error(DomainError::not_found("Product", "id", id.to_string())))?;
    Ok(Json(ApiResponse::success(product)))
}
