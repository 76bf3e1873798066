pub mod error;
pub mod feed;
pub mod models;
pub mod routes;
pub mod store;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Router,
};
// Conditionally import SwaggerUi only when needed (not test)
#[cfg(not(test))]
use utoipa_swagger_ui::SwaggerUi;
// Conditionally import CORS only when needed (not test)
#[cfg(not(test))]
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
// Conditionally import Governor only when needed (not test)
#[cfg(not(test))]
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
#[cfg(not(test))]
use std::num::NonZeroU32;
#[cfg(not(test))]
use std::sync::Arc;

use store::{RecordStore, SessionStore};

/// Shared application state: the pushed record snapshots and the session
/// lifecycle owner. Cheap to clone; all handlers see the same stores.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    pub records: RecordStore,
    pub sessions: SessionStore,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Feed API",
        version = "0.1.0",
        description = "Classifies, filters and shares job postings for the board's client surface"
    ),
    paths(
        health_check,
        routes::jobs::list_jobs,
        routes::jobs::get_job,
        routes::jobs::share_job,
        routes::jobs::replace_jobs,
        routes::jobs::replace_applications,
        routes::session::login,
        routes::session::current_session,
        routes::session::logout
    ),
    components(schemas(
        models::Job,
        models::Company,
        models::Application,
        models::Session,
        models::JobSubmission,
        models::ExperienceLevel,
        feed::JobTab,
        feed::ShareAction,
        feed::SharePlatform,
        routes::jobs::FeedItem,
        routes::jobs::FeedResponse,
        routes::jobs::SnapshotResponse,
        routes::session::LoginRequest
    ))
)]
struct ApiDoc;

/// Create the application with all routes and middleware, starting from
/// an empty record store.
pub fn create_app() -> Router {
    create_app_with_state(AppState::default())
}

/// Same as [`create_app`], but over caller-supplied stores. Used by tests
/// that want to pre-seed records.
pub fn create_app_with_state(state: AppState) -> Router {
    // Build our API documentation (needed regardless for ApiDoc::openapi())
    let api_doc = ApiDoc::openapi();

    // --- Define API routes separately ---
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route(
            "/jobs",
            get(routes::jobs::list_jobs).put(routes::jobs::replace_jobs),
        )
        .route("/jobs/{id}", get(routes::jobs::get_job))
        .route("/jobs/{id}/share", get(routes::jobs::share_job))
        .route("/applications", put(routes::jobs::replace_applications))
        .route(
            "/session",
            get(routes::session::current_session)
                .post(routes::session::login)
                .delete(routes::session::logout),
        )
        .with_state(state);

    // --- Conditionally apply layers and Swagger UI only when NOT running tests ---
    #[cfg(not(test))]
    let (docs_router, rate_limited_api_routes) = {
        // Create Swagger UI router
        let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc);

        // Configure Rate Limiting
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .period(std::time::Duration::from_secs(60))
                .burst_size(NonZeroU32::new(60).unwrap().into())
                .finish()
                .unwrap(),
        );
        // Apply Governor layer ONLY to the api_routes defined above
        let rate_limited_api_routes = api_routes.layer(GovernorLayer {
            config: governor_conf,
        });

        (docs_router, rate_limited_api_routes)
    };

    // For test builds, use the original api_routes and an empty router for docs
    #[cfg(test)]
    let (docs_router, rate_limited_api_routes) = {
        let _ = api_doc;
        (Router::new(), api_routes)
    };

    // --- Build the final application router ---
    let mut app = Router::new()
        .merge(rate_limited_api_routes)
        .merge(docs_router);

    // --- Apply CORS to the whole app (both API and docs) if needed ---
    #[cfg(not(test))]
    {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app
}
