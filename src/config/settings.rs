use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

use crate::config::env::{self, EnvKey};

/// The dev-only fallback token. Deployments are expected to set
/// TALKING_HEAD_SERVICE_TOKEN via .env or the container environment.
const DEFAULT_API_TOKEN: &str = "my-secret-token";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub api_token: String,
    pub data_dir: PathBuf,
    pub sadtalker_dir: PathBuf,
    pub sadtalker_command: String,
    pub keep_job_data: bool,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn new() -> Self {
        if env::get(EnvKey::ApiToken).is_err() {
            warn!("TALKING_HEAD_SERVICE_TOKEN not set, using the default dev token");
        }

        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 8000),
            api_token: env::get_or(EnvKey::ApiToken, DEFAULT_API_TOKEN),
            data_dir: PathBuf::from(env::get_or(EnvKey::DataDir, "/app/data")),
            sadtalker_dir: PathBuf::from(env::get_or(EnvKey::SadTalkerDir, "/app")),
            sadtalker_command: env::get_or(EnvKey::SadTalkerCommand, "python3"),
            keep_job_data: env::get_parsed(EnvKey::KeepJobData, true),
            max_upload_bytes: env::get_parsed(EnvKey::MaxUploadBytes, 100 * 1024 * 1024),
        }
    }

    /// Root directory that job working directories are created under.
    pub fn results_dir(&self) -> PathBuf {
        self.data_dir.join("results")
    }

    pub fn ensure_data_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.results_dir())
    }
}
