use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use gallery_catalog::modules::access::adapters::outbound::role_directory_in_memory::InMemoryRoleDirectory;
use gallery_catalog::modules::catalog::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use gallery_catalog::modules::catalog::adapters::outbound::translator::PrefixTranslator;
use gallery_catalog::modules::catalog::core::seed::load_seed;
use gallery_catalog::shared::infrastructure::local_store::in_memory::InMemoryLocalStore;
use gallery_catalog::shell::config::Config;
use gallery_catalog::shell::graphql::GRAPHQL_PATH;
use gallery_catalog::shell::http::router;
use gallery_catalog::shell::state::{Adapters, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt().with_env_filter(EnvFilter::try_new(&config.log_level)?).init();

    let seed = load_seed(config.seed_path.as_deref())?;
    tracing::info!(projects = seed.len(), "seed set loaded");
    if config.allow_mock_identity {
        tracing::warn!("mock identity and test mode are enabled");
    }

    // In-memory adapters until the hosted backends are wired in
    let state = AppState::new(
        &config,
        Adapters {
            seed,
            projects: Arc::new(InMemoryProjectStore::new()),
            local_store: Arc::new(InMemoryLocalStore::new()),
            roles: Arc::new(InMemoryRoleDirectory::new()),
            translator: Arc::new(PrefixTranslator),
        },
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_address, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
