use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::info;

/// One external-tool invocation: program, argument list and the directory
/// the child runs in (the tool's install dir, not the job dir).
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Outcome of a finished child process. `stderr` is captured for logging
/// only and is never returned to API clients.
#[derive(Debug)]
pub struct InvocationResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Boundary around child-process execution so the job runner can be tested
/// with a fake executor instead of a real inference install.
#[async_trait]
pub trait SynthesisExecutor: Send + Sync {
    async fn run(&self, spec: &InvocationSpec) -> std::io::Result<InvocationResult>;
}

/// Production executor backed by `tokio::process::Command`. Blocks the
/// calling task until the child exits; no timeout, no cancellation.
pub struct CommandExecutor;

#[async_trait]
impl SynthesisExecutor for CommandExecutor {
    async fn run(&self, spec: &InvocationSpec) -> std::io::Result<InvocationResult> {
        info!("Spawning {} {}", spec.program, spec.args.join(" "));

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(InvocationResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
