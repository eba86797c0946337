//! Screening backend entry point.
//!
//! Loads configuration, validates the instrument catalog, wires the
//! content-store adapter into the submission handler, and serves the HTTP
//! API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use screening_backend::adapters::content_store::SanityResultStore;
use screening_backend::adapters::http::screening::{screening_routes, ScreeningHandlers};
use screening_backend::application::handlers::screening::SubmitScreeningHandler;
use screening_backend::config::AppConfig;
use screening_backend::domain::instrument::catalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;

    // A malformed instrument definition must never reach a respondent.
    catalog::validate_catalog()?;
    tracing::info!(
        instruments = catalog::all_instruments().len(),
        "instrument catalog validated"
    );

    let store = Arc::new(SanityResultStore::new(&config.content_store)?);
    let submit_handler = Arc::new(SubmitScreeningHandler::new(store));
    let handlers = ScreeningHandlers::new(submit_handler);

    let app = Router::new()
        .nest("/api/screenings", screening_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "screening backend listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    }
}
