use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod server;

use config::Config;

const DEFAULT_LOG_FILTER: &str = "pingd=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // When invoked as a Docker HEALTHCHECK, hit /ping and exit immediately.
    // This avoids needing any external tool (curl/wget) in the container image.
    if std::env::args().nth(1).as_deref() == Some("--healthcheck") {
        return healthcheck().await;
    }

    // Config comes first so `log_level` can seed the filter.
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .init();

    run(config).await
}

/// Bind the configured port and serve until the process dies.
///
/// A bind failure is logged once and returned as a [`error::ServerError::Bind`].
async fn run(config: Config) -> anyhow::Result<()> {
    let listener = server::bind(config.port).await.inspect_err(|e| {
        error!(error = %e, addr_in_use = e.is_addr_in_use(), "failed to start listener");
    })?;

    info!(addr = %listener.local_addr()?, "Starting server on :{}", config.port);

    server::serve(listener).await.context("ping server error")?;

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured `log_level`, then the default.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_directive(config).into())
}

fn fallback_directive(config: &Config) -> &str {
    config.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
}

/// Lightweight healthcheck: GET /ping and exit 0 on success, 1 otherwise.
/// Invoked via `pingd --healthcheck` from Docker HEALTHCHECK.
async fn healthcheck() -> anyhow::Result<()> {
    let port = Config::from_env()?.port;

    let healthy = probe(&format!("http://127.0.0.1:{port}/ping")).await?;

    std::process::exit(if healthy { 0 } else { 1 });
}

/// `Ok(true)` when `url` answers with a success status.
async fn probe(url: &str) -> anyhow::Result<bool> {
    let resp = reqwest::get(url)
        .await
        .with_context(|| format!("probing {url}"))?;
    Ok(resp.status().is_success())
}
