use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use users_api::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use users_api::shared::http::auth::AuthPolicy;
use users_api::shell::config::Config;
use users_api::shell::http::router;
use users_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Ok(path) = dotenv {
        tracing::info!("loaded environment from {}", path.display());
    }

    let config = Config::from_env()?;

    let store = Arc::new(InMemoryUserStore::new());
    let auth = AuthPolicy::new(config.api_token.clone(), config.protect_list_users);
    let app = router(AppState::new(store, auth));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
