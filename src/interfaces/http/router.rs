//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{IdentityService, TollService};
use crate::config::AppConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::{auth, health, interchanges, tolls};

/// Services the router dispatches to
#[derive(Clone)]
pub struct ApiServices {
    pub tolls: Arc<TollService>,
    pub identity: Arc<IdentityService>,
}

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
                        .bearer_format("JWT")
                        .description(Some("JWT from /api/v1/auth/login (the `token` cookie also works)"))
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
        health::health_check,
        auth::register,
        auth::login,
        auth::get_current_user,
        interchanges::list_interchanges,
        tolls::record_entry,
        tolls::record_exit,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::UserInfo,
            interchanges::InterchangeDto,
            tolls::GateRequest,
            tolls::VehicleEntryDto,
            tolls::EntryResponse,
            tolls::ExitResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database status"),
        (name = "Authentication", description = "Operator registration and login"),
        (name = "Interchanges", description = "Stations on the motorway"),
        (name = "Tolls", description = "Vehicle entry and exit with toll calculation"),
    ),
    info(
        title = "Toll Gate Service API",
        version = "1.0.0",
        description = "Distance-based motorway toll billing",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `db` is pinged by `/health`; pass `None` when running on the in-memory store.
pub fn create_api_router(
    services: ApiServices,
    app_config: &AppConfig,
    metrics_handle: PrometheusHandle,
    db: Option<DatabaseConnection>,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: services.identity.jwt_config().clone(),
    };

    let auth_state = auth::AuthHandlerState {
        identity: services.identity.clone(),
        secure_cookies: app_config.security.secure_cookies,
    };

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Gate routes (protected)
    let toll_routes = Router::new()
        .route("/entry", post(tolls::record_entry))
        .route("/exit", post(tolls::record_exit))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(tolls::TollHandlerState {
            tolls: services.tolls.clone(),
        });

    let interchange_routes = Router::new()
        .route("/interchanges", get(interchanges::list_interchanges))
        .with_state(services.tolls);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: metrics_handle,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        .nest("/api/v1", interchange_routes)
        .nest("/api/v1", toll_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
