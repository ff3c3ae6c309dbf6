use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use certforge_api::routes::app_router;
use certforge_api::AppState;
use certforge_service::{CertService, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 1. Load Config (Fails fast if invalid)
    let config = Config::from_env()?;

    // 2. Connect to Postgres
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // 3. Ensure the schema exists (embedded build-order assets)
    certforge_db::schema::rebuild_database(&pool).await?;

    // 4. Serve
    let bind_addr = config.bind_addr.clone();
    let service = CertService::new(pool, config);
    let app = app_router(AppState { service });

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
