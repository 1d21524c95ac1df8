mod api;
mod config;
#[cfg(feature = "postgres")]
mod db;
#[cfg(feature = "postgres")]
mod models;
#[cfg(feature = "postgres")]
mod pg_store;
#[cfg(feature = "postgres")]
mod schema;

use anyhow::Context;
use axum::extract::MatchedPath;
use axum::http::Request;
use cookbook_core::store::{IngredientStore, MemoryStore, RecipeStore};
use cookbook_core::Catalog;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ServerConfig;

/// Console logging filtered by RUST_LOG.
fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

type Stores = (Arc<dyn RecipeStore>, Arc<dyn IngredientStore>);

#[cfg(feature = "postgres")]
fn open_stores(config: &ServerConfig) -> anyhow::Result<Stores> {
    if let Some(url) = &config.database_url {
        let store = Arc::new(pg_store::PgStore::new(db::create_pool(url)?));
        tracing::info!("Using PostgreSQL store");
        let stores: Stores = (store.clone(), store);
        return Ok(stores);
    }
    Ok(memory_stores())
}

#[cfg(not(feature = "postgres"))]
fn open_stores(config: &ServerConfig) -> anyhow::Result<Stores> {
    if config.database_url.is_some() {
        tracing::warn!("DATABASE_URL is set but this build has no postgres support; using in-memory store");
    }
    Ok(memory_stores())
}

fn memory_stores() -> Stores {
    tracing::info!("Using in-memory store");
    let store = Arc::new(MemoryStore::new());
    (store.clone(), store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .context("Failed to render OpenAPI document")?;
        println!("{}", spec);
        return Ok(());
    }

    init_telemetry();

    let config = ServerConfig::from_env()?;
    let (recipe_store, ingredient_store) = open_stores(&config)?;

    if config.seed {
        cookbook_core::seed::load_into(&*recipe_store, &*ingredient_store)
            .context("Failed to load seed data")?;
    }

    let state: api::AppState = Arc::new(Catalog::new(recipe_store, ingredient_store));

    let app = api::router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched_path,
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &Span| {
                    let status = response.status().as_u16();
                    if status >= 500 {
                        tracing::error!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request failed with server error"
                        );
                    } else {
                        tracing::info!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request completed"
                        );
                    }
                },
            )
            .on_failure(
                |error: tower_http::classify::ServerErrorsFailureClass,
                 latency: std::time::Duration,
                 _span: &Span| {
                    tracing::error!(
                        error = %error,
                        latency_ms = %latency.as_millis(),
                        "request failed"
                    );
                },
            ),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    let addr = listener.local_addr()?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("OpenAPI spec available at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
