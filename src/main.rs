mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "storefront failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    if dotenvy::dotenv().is_err() {
        tracing::debug!("no .env file; using process environment");
    }

    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config).map_err(StartupError::Router)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, assets = %config.assets_dir.display(), "storefront listening");
    axum::serve(listener, app).await?;
    Ok(())
}
