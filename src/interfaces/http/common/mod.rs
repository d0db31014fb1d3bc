//! Common HTTP types: response envelope, pagination query and response

pub mod validated_json;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::{Page, PageRequest};
use crate::domain::{DomainError, PageModel};

pub use validated_json::{ValidatedJson, ValidatedQuery};

/// Standard API response envelope.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

impl From<DomainError> for ApiResponse<()> {
    fn from(e: DomainError) -> Self {
        ApiResponse::error(e.to_string())
    }
}

/// Map a domain error to its HTTP status and error envelope.
pub fn api_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
    };
    (status, Json(ApiResponse::from(e)))
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Pagination query parameters for list endpoints
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-based). Out-of-range pages are clamped, so `0` reads
    /// as the first page and pages past the end as the last.
    pub page: Option<u32>,
    /// Items per page. Defaults to the configured page size; values above
    /// the configured maximum are clamped.
    #[validate(range(min = 1, message = "per_page must be at least 1"))]
    pub per_page: Option<u32>,
    /// Page-button budget of the pagination bar (3–15)
    #[validate(range(min = 3, max = 15, message = "buttons must be between 3 and 15"))]
    pub buttons: Option<u32>,
}

impl From<&PaginationParams> for PageRequest {
    fn from(params: &PaginationParams) -> Self {
        PageRequest {
            page: params.page,
            per_page: params.per_page,
            max_page_buttons: params.buttons,
        }
    }
}

/// One page of a list together with its pagination bar model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Items across all pages
    pub total: u64,
    pub per_page: u32,
    pub pagination: PageModel,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items,
            total: page.total_items,
            per_page: page.per_page,
            pagination: page.pagination,
        }
    }
}
