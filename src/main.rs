//! Entry point: load config, wire dependencies, and run the server.

use authgate::auth::{AuthAppService, JwtSecret};
use authgate::config::Config;
use authgate::db;
use authgate::directory::PgUserDirectory;
use authgate::{create_app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db_pool).await?;

    let directory = Arc::new(PgUserDirectory::new(db_pool));
    let jwt_secret = JwtSecret::new(config.jwt_secret.clone(), config.jwt_expires_in);
    let state = AppState::new(AuthAppService::new(directory, jwt_secret));

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
