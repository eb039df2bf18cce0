use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_SECRET: &str = "default-secret-change-in-production";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  /// Loaded for parity with deployments that set it; no route checks tokens.
  pub jwt_secret: String,
  pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  pub connect_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    let port = env::var("PORT")
      .ok()
      .and_then(|p| p.parse().ok())
      .unwrap_or(DEFAULT_PORT);

    let jwt_secret = match env::var("JWT_SECRET") {
      Ok(secret) if !secret.is_empty() => secret,
      _ => {
        tracing::warn!("JWT_SECRET not set, using default (not secure for production)");
        DEFAULT_JWT_SECRET.to_string()
      }
    };

    Ok(Self {
      port,
      jwt_secret,
      database: DatabaseConfig::from_env()?,
    })
  }

  pub fn server_address(&self) -> String {
    format!("0.0.0.0:{}", self.port)
  }
}

impl DatabaseConfig {
  pub fn from_env() -> Result<Self> {
    let url = env::var("DATABASE_URL").context("DATABASE_URL environment variable must be set")?;

    let max_connections = env::var("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "10".to_string())
      .parse()
      .unwrap_or(10);

    let connect_timeout_secs = env::var("DB_CONNECT_TIMEOUT")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .unwrap_or(30);

    Ok(Self {
      url,
      max_connections,
      connect_timeout: Duration::from_secs(connect_timeout_secs),
    })
  }
}
