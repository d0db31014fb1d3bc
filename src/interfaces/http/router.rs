//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, EmptyData, PaginatedResponse, PaginationParams};
use super::middleware::{access_gate_middleware, GateRedirect};
use super::modules::{admin, catalog, franchisee, health, metrics, request_id, session, supplier};
use super::state::AppState;
use crate::domain::{Account, Order, PageItem, PageModel, Product, Role, Session};

/// Prefix of every JSON API route
pub const API_PREFIX: &str = "/api/v1";

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token from POST /api/v1/session/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        metrics::prometheus_metrics,
        // Session
        session::login,
        session::logout,
        session::current_account,
        session::login_page,
        session::unauthorized_page,
        // Catalog
        catalog::list_products,
        catalog::get_product,
        // Franchisee
        franchisee::list_my_orders,
        // Supplier
        supplier::list_my_products,
        // Admin
        admin::list_users,
        admin::list_orders,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            PaginationParams,
            PageModel,
            PageItem,
            PaginatedResponse<Product>,
            PaginatedResponse<Account>,
            PaginatedResponse<franchisee::OrderResponse>,
            GateRedirect,
            // Domain
            Role,
            Session,
            Account,
            Product,
            Order,
            // Session
            session::LoginRequest,
            session::LoginResponse,
            session::AccountResponse,
            session::PageDescriptor,
            // Orders
            franchisee::OrderResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health and metrics endpoints"),
        (name = "Session", description = "Mock login, sign-out and the pages the access gate redirects to"),
        (name = "Catalog", description = "Public product browsing"),
        (name = "Franchisee", description = "Franchisee order dashboard"),
        (name = "Supplier", description = "Supplier catalog"),
        (name = "Admin", description = "Admin panel: accounts and orders"),
    ),
    info(
        title = "Storefront API",
        version = "1.0.0",
        description = "Multi-role storefront over mock data: paginated catalog and role-gated dashboards",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// Every route runs behind the access gate; routes without an entry in the
/// route table are public.
pub fn create_api_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let session_routes = Router::new().route("/login", post(session::login));

    let account_routes = Router::new()
        .route("/", get(session::current_account))
        .route("/logout", post(session::logout));

    let catalog_routes = Router::new()
        .route("/", get(catalog::list_products))
        .route("/{id}", get(catalog::get_product));

    let franchisee_routes = Router::new().route("/orders", get(franchisee::list_my_orders));

    let supplier_routes = Router::new().route("/products", get(supplier::list_my_products));

    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .route("/orders", get(admin::list_orders));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health & metrics
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        // Gate landing pages
        .route("/login", get(session::login_page))
        .route("/unauthorized", get(session::unauthorized_page))
        // API
        .nest(&format!("{API_PREFIX}/session"), session_routes)
        .nest(&format!("{API_PREFIX}/account"), account_routes)
        .nest(&format!("{API_PREFIX}/products"), catalog_routes)
        .nest(&format!("{API_PREFIX}/franchisee"), franchisee_routes)
        .nest(&format!("{API_PREFIX}/supplier"), supplier_routes)
        .nest(&format!("{API_PREFIX}/admin"), admin_routes)
        // Middleware (last added runs first)
        .layer(middleware::from_fn_with_state(
            state.gate.clone(),
            access_gate_middleware,
        ))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .with_state(state)
}
