use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::process::executor::SynthesisExecutor;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub executor: Arc<dyn SynthesisExecutor>,
}

impl AppState {
    pub fn new(config: AppConfig, executor: Arc<dyn SynthesisExecutor>) -> Self {
        Self { config, executor }
    }
}
