use std::sync::Arc;

use shoes_core::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), shoes_core::Error> {
    shoes_core::logging::init("shoes")?;

    let cfg = Arc::new(Config::load()?);
    let catalog = Arc::new(cfg.load_catalog()?);
    match &cfg.catalog_path {
        Some(path) => info!(path = %path.display(), "catalog loaded from file"),
        None => info!("using built-in catalog"),
    }

    shoes_telegram::router::run_polling(cfg, catalog)
        .await
        .map_err(|e| shoes_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
