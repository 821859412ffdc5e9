use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

use talkinghead_backend::app;
use talkinghead_backend::config::settings::AppConfig;
use talkinghead_backend::infrastructure::process::executor::CommandExecutor;
use talkinghead_backend::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();
    config
        .ensure_data_dirs()
        .expect("Failed to create data directories");

    let state = AppState::new(config.clone(), Arc::new(CommandExecutor));
    let app = app::create_app(state).await;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
