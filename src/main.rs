use dotenv::dotenv;
use tracing::{info, warn};

use novaforge_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Guards must stay alive so the non-blocking file writers keep flushing.
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting NovaForge CRM Backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    // Create and start the App
    let app = novaforge_backend::app::app::App::new().await;
    app.start().await;
}
