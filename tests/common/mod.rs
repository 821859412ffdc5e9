#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use talkinghead_backend::app;
use talkinghead_backend::config::settings::AppConfig;
use talkinghead_backend::infrastructure::process::executor::{
    InvocationResult, InvocationSpec, SynthesisExecutor,
};
use talkinghead_backend::state::AppState;

pub const TEST_TOKEN: &str = "test-token";
pub const BOUNDARY: &str = "x-test-boundary-7f3a";

/// What the fake synthesis tool should do when invoked.
pub enum FakeOutcome {
    /// Exit zero after writing `file_name` (may contain subdirectories)
    /// under the `--result_dir` passed on the command line.
    WriteVideo { file_name: String, data: Vec<u8> },
    /// Exit with the given non-zero code, producing nothing.
    ExitNonZero(i32),
    /// Exit zero without producing any file.
    NoOutput,
}

pub struct FakeExecutor(pub FakeOutcome);

fn result_dir(spec: &InvocationSpec) -> PathBuf {
    let pos = spec
        .args
        .iter()
        .position(|a| a == "--result_dir")
        .expect("invocation must pass --result_dir");
    PathBuf::from(&spec.args[pos + 1])
}

#[async_trait]
impl SynthesisExecutor for FakeExecutor {
    async fn run(&self, spec: &InvocationSpec) -> std::io::Result<InvocationResult> {
        match &self.0 {
            FakeOutcome::WriteVideo { file_name, data } => {
                let dest = result_dir(spec).join(file_name);
                if let Some(parent) = dest.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&dest, data)?;
                Ok(InvocationResult {
                    success: true,
                    exit_code: Some(0),
                    stderr: String::new(),
                })
            }
            FakeOutcome::ExitNonZero(code) => Ok(InvocationResult {
                success: false,
                exit_code: Some(*code),
                stderr: "synthetic inference failure".to_string(),
            }),
            FakeOutcome::NoOutput => Ok(InvocationResult {
                success: true,
                exit_code: Some(0),
                stderr: String::new(),
            }),
        }
    }
}

pub fn test_config(data_dir: &Path) -> AppConfig {
    AppConfig {
        server_port: 0,
        api_token: TEST_TOKEN.to_string(),
        data_dir: data_dir.to_path_buf(),
        sadtalker_dir: data_dir.to_path_buf(),
        sadtalker_command: "python3".to_string(),
        keep_job_data: true,
        max_upload_bytes: 16 * 1024 * 1024,
    }
}

pub async fn test_app(data_dir: &Path, outcome: FakeOutcome) -> Router {
    let config = test_config(data_dir);
    config.ensure_data_dirs().unwrap();
    let state = AppState::new(config, Arc::new(FakeExecutor(outcome)));
    app::create_app(state).await
}

/// Build a multipart/form-data body with jobId, image and audio parts.
pub fn multipart_body(job_id: Option<&str>, image: &[u8], audio: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(id) = job_id {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"jobId\"\r\n\r\n{id}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"face.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(image);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"audio\"; filename=\"voice.wav\"\r\nContent-Type: audio/wav\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(audio);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    body
}

pub fn talking_head_request(token: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/v1/talking-head")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    builder.body(Body::from(body)).unwrap()
}

/// Names of job directories currently under the results root.
pub fn job_dirs(data_dir: &Path) -> Vec<String> {
    let results = data_dir.join("results");
    let mut names: Vec<String> = std::fs::read_dir(results)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
