mod config;
mod routes;

use anyhow::{Context, Result};
use scoped_i18n::{LanguageRegistry, load_from_paths};
use tracing::info;

use crate::config::Config;
use crate::routes::{AppState, router};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = Config::from_env().context("Invalid I18N_* configuration")?;
    info!("Starting scoped-i18n web server");

    // The store is fully populated before any request is served
    let i18n = load_from_paths(&config.standard, config.files.as_slice())
        .context("Failed to load message files")?;
    info!(
        "Loaded {} messages from {} path(s) using standard '{}'",
        i18n.record_count(),
        config.files.len(),
        i18n.standard()
    );
    if config.readonly {
        info!("Read-only mode: message writes are disabled");
    }

    let addr = config.addr.clone();
    let state = AppState::new(i18n, LanguageRegistry::builtin(), config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
