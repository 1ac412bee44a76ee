//! Zava AR server
//!
//! Entry point serving the navigation shell.

use std::sync::Arc;

use mimalloc::MiMalloc;

use zava_ar::config::AppConfig;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenvy::dotenv();

    zava_ar::telemetry::init();

    let config = Arc::new(AppConfig::load()?);
    zava_ar::server::start_server(config).await
}
