//! Session DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Account, Session};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64, message = "username is required"))]
    pub username: String,
    /// Location preserved by a login redirect; returned as `redirect_to`
    #[validate(length(max = 2048, message = "redirect is too long"))]
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub account: Account,
    /// Where the client should continue after signing in
    pub redirect_to: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub account: Account,
    pub session: Session,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginPageQuery {
    /// Location to return to after signing in
    pub redirect: Option<String>,
}

/// Description of a front-end page the gate redirects to
#[derive(Debug, Serialize, ToSchema)]
pub struct PageDescriptor {
    pub page: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}
