use tracing_subscriber::{EnvFilter, fmt};

use accounts::shell::config::AppConfig;
use accounts::shell::http::router;
use accounts::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let app = router(AppState::in_memory(&config));

    let addr = config.bind_addr();
    tracing::info!("Register endpoint: http://{}/register", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
