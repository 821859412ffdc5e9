use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    ApiToken,
    DataDir,
    SadTalkerDir,
    SadTalkerCommand,
    KeepJobData,
    MaxUploadBytes,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::ApiToken => "TALKING_HEAD_SERVICE_TOKEN",
            EnvKey::DataDir => "DATA_DIR",
            EnvKey::SadTalkerDir => "SADTALKER_DIR",
            EnvKey::SadTalkerCommand => "SADTALKER_COMMAND",
            EnvKey::KeepJobData => "KEEP_JOB_DATA",
            EnvKey::MaxUploadBytes => "MAX_UPLOAD_BYTES",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
