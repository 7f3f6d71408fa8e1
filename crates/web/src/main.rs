use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use importer::{RosterConfig, sources::fallback::snapshot_2025};
use storage::{SnapshotStore, models::TeamPalette};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use features::{constructors, drivers, season};
use middleware::auth::ApiKeys;
use state::{AppState, Refresher, spawn_scheduled_refresh};

#[derive(OpenApi)]
#[openapi(
    paths(
        drivers::handlers::list_drivers,
        drivers::handlers::get_driver,
        constructors::handlers::list_constructors,
        constructors::handlers::get_constructor,
        season::handlers::get_summary,
        season::handlers::get_results,
        season::handlers::get_timeline,
        season::handlers::refresh_season,
    ),
    components(
        schemas(
            storage::models::Driver,
            storage::models::Constructor,
            storage::models::RaceResult,
            storage::models::ResultEntry,
            storage::models::DataOrigin,
            storage::dto::season::SeasonSummary,
            storage::dto::season::RefreshResponse,
            storage::dto::timeline::TimelinePoint,
        )
    ),
    tags(
        (name = "drivers", description = "Driver standings"),
        (name = "constructors", description = "Constructor standings"),
        (name = "season", description = "Season results and refresh"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting F1 season API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let palette = match &config.team_palette_path {
        Some(path) => {
            tracing::info!("Loading team palette from: {}", path.display());
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read team palette {}", path.display()))?;
            TeamPalette::from_json(&json).context("Invalid team palette")?
        }
        None => TeamPalette::season_2025(),
    };

    let store = SnapshotStore::new(&config.snapshot_path);
    let initial = if store.exists().await {
        tracing::info!("Loading snapshot from: {}", config.snapshot_path.display());
        store.load().await.context("Failed to load season snapshot")?
    } else {
        tracing::info!("No snapshot found, serving built-in 2025 data");
        snapshot_2025()
    };

    let source = config
        .season_source
        .build(palette, config.fetch_timeout)
        .context("Failed to build season source")?;
    let refresher = Refresher::new(
        Arc::from(source),
        Some(store),
        RosterConfig {
            fetch_timeout: config.fetch_timeout,
            ..RosterConfig::default()
        },
    );
    let state = AppState::new(initial, refresher);

    match config.refresh_interval {
        Some(every) => {
            tracing::info!("Refreshing season data every {:?}", every);
            spawn_scheduled_refresh(state.clone(), every);
        }
        None => tracing::info!("Scheduled refresh disabled"),
    }

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, manual refresh is disabled");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = features::router(state, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
