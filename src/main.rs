use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use event_registration_api::app::create_app;
use event_registration_api::config::AppConfig;
use event_registration_api::db::pool::{create_pool, run_migrations};
use event_registration_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let dotenv_result = dotenv();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  if let Err(e) = dotenv_result {
    tracing::warn!(error = %e, ".env file not loaded");
  }

  let config = AppConfig::from_env()?;

  let pool = create_pool(&config.database).await?;
  run_migrations(&pool).await?;

  let app_state = SharedAppState::new(pool.clone());
  let app = create_app(app_state);

  let address = config.server_address();
  let listener = tokio::net::TcpListener::bind(&address)
    .await
    .with_context(|| format!("Failed to bind {}", address))?;

  tracing::info!("Server running on http://{}", address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

  pool.close().await;
  tracing::info!("Database pool closed");

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
