//! Smart Laziness service entry point.
//!
//! Loads configuration, wires the Postgres adapters and the session
//! validator into the feature routers, and serves the API.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use smart_laziness::adapters::auth::{GoTrueConfig, GoTrueSessionValidator};
use smart_laziness::adapters::http::middleware::{auth_middleware, AuthState};
use smart_laziness::adapters::http::{
    assessment_routes, automation_routes, dashboard_routes, decision_routes, metrics_routes,
    AssessmentAppState, AutomationAppState, DashboardAppState, DecisionAppState, MetricsAppState,
};
use smart_laziness::adapters::postgres::{
    PgAssessmentRepository, PgAutomationRepository, PgDecisionRepository, PgProfileRepository,
    PgTeamMetricsReader,
};
use smart_laziness::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let validator = GoTrueSessionValidator::new(
        GoTrueConfig::new(&config.auth.issuer_url, &config.auth.audience)
            .with_cache_duration(config.auth.jwks_cache_ttl()),
    );
    let auth_state: AuthState = Arc::new(validator);

    let profiles = Arc::new(PgProfileRepository::new(pool.clone()));
    let assessments = Arc::new(PgAssessmentRepository::new(pool.clone()));
    let decisions = Arc::new(PgDecisionRepository::new(pool.clone()));
    let automations = Arc::new(PgAutomationRepository::new(pool.clone()));
    let metrics_reader = Arc::new(PgTeamMetricsReader::new(pool.clone()));

    let api = Router::new()
        .nest(
            "/api/assessments",
            assessment_routes(AssessmentAppState {
                assessments: assessments.clone(),
            }),
        )
        .nest(
            "/api/dashboard",
            dashboard_routes(DashboardAppState {
                profiles: profiles.clone(),
                decisions: decisions.clone(),
                automations: automations.clone(),
            }),
        )
        .nest(
            "/api/decisions",
            decision_routes(DecisionAppState { decisions }),
        )
        .nest(
            "/api/automations",
            automation_routes(AutomationAppState { automations }),
        )
        .nest(
            "/api/team",
            metrics_routes(MetricsAppState {
                reader: metrics_reader,
            }),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    let app = Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server))
                .layer(TimeoutLayer::new(config.server.request_timeout())),
        );

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_new(&server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn health() -> &'static str {
    "ok"
}
