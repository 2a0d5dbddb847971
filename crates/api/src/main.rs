use std::sync::Arc;

use anyhow::Context;

use fundscope_api::app::{build_app, AppServices};
use fundscope_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    fundscope_observability::init(config.log_format);

    let services = AppServices::load(&config.artifacts).context("failed to load model artifacts")?;
    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
