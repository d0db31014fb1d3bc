use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::access::Role;

/// Storefront account used by the mock login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}
