use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tokio::fs::File;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::JobError;
use crate::common::upload::UploadedFile;
use crate::infrastructure::process::executor::InvocationSpec;
use crate::state::AppState;

/// One job's scratch area under the results root. Created per request,
/// never looked up again afterwards.
pub struct JobWorkspace {
    pub dir: PathBuf,
    pub image_path: PathBuf,
    pub audio_path: PathBuf,
    pub output_dir: PathBuf,
}

/// The located output artifact, opened before cleanup runs so streaming
/// still works when the retention policy deletes the job directory.
pub struct JobVideo {
    pub file: File,
    pub content_length: u64,
}

pub struct JobService;

impl JobService {
    /// End-to-end run for one request: stage inputs, invoke the synthesis
    /// tool, locate the newest output video, then apply the retention
    /// policy. Cleanup runs whether or not inference succeeded; if staging
    /// itself failed there is nothing to clean.
    pub async fn run_job(
        state: &AppState,
        job_id: &str,
        image: &UploadedFile,
        audio: &UploadedFile,
    ) -> Result<JobVideo, JobError> {
        let workspace = Self::stage(&state.config.results_dir(), job_id, image, audio).await?;

        info!("Running synthesis job {}", job_id);
        let outcome = Self::synthesize(state, &workspace).await;

        Self::cleanup(&workspace.dir, state.config.keep_job_data).await;

        outcome
    }

    /// Create `<results>/<jobId>_<uuid>` and copy both uploads into it
    /// under their original filenames. The random suffix keeps concurrent
    /// requests with the same jobId from colliding.
    pub async fn stage(
        results_dir: &Path,
        job_id: &str,
        image: &UploadedFile,
        audio: &UploadedFile,
    ) -> Result<JobWorkspace, JobError> {
        let dir = results_dir.join(format!("{}_{}", job_id, Uuid::new_v4().simple()));
        tokio::fs::create_dir_all(&dir).await?;

        let image_path = image.persist(&dir).await?;
        let audio_path = audio.persist(&dir).await?;

        let output_dir = dir.join("output");
        tokio::fs::create_dir_all(&output_dir).await?;

        Ok(JobWorkspace {
            dir,
            image_path,
            audio_path,
            output_dir,
        })
    }

    async fn synthesize(state: &AppState, workspace: &JobWorkspace) -> Result<JobVideo, JobError> {
        let spec = Self::invocation_spec(state, workspace);

        let result = state
            .executor
            .run(&spec)
            .await
            .map_err(|e| JobError::InferenceFailed(format!("failed to spawn process: {}", e)))?;

        if !result.success {
            return Err(JobError::InferenceFailed(format!(
                "exit code {:?}, stderr: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        let video_path =
            find_latest_mp4(&workspace.output_dir).ok_or(JobError::OutputNotFound)?;
        info!("Generated video: {}", video_path.display());

        let file = File::open(&video_path).await?;
        let content_length = file.metadata().await?.len();

        Ok(JobVideo {
            file,
            content_length,
        })
    }

    /// Fixed SadTalker argument set; only the three paths vary per job.
    fn invocation_spec(state: &AppState, workspace: &JobWorkspace) -> InvocationSpec {
        let args = vec![
            "inference.py".to_string(),
            "--driven_audio".to_string(),
            workspace.audio_path.to_string_lossy().into_owned(),
            "--source_image".to_string(),
            workspace.image_path.to_string_lossy().into_owned(),
            "--result_dir".to_string(),
            workspace.output_dir.to_string_lossy().into_owned(),
            "--enhancer".to_string(),
            "gfpgan".to_string(),
            "--still".to_string(),
            "--preprocess".to_string(),
            "full".to_string(),
        ];

        InvocationSpec {
            program: state.config.sadtalker_command.clone(),
            args,
            cwd: state.config.sadtalker_dir.clone(),
        }
    }

    /// Delete the job directory unless the retention policy keeps it.
    /// Deletion errors are logged and swallowed.
    async fn cleanup(dir: &Path, keep: bool) {
        if keep {
            return;
        }
        if let Err(e) = tokio::fs::remove_dir_all(dir).await {
            warn!("Failed to clean up job dir {}: {}", dir.display(), e);
        }
    }
}

/// Recursively scan `dir` for `.mp4` files and return the one with the
/// newest modification time, if any. The tool nests its result under
/// timestamped subdirectories, so a flat listing is not enough.
pub fn find_latest_mp4(dir: &Path) -> Option<PathBuf> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&current) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "mp4") {
                let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
                    continue;
                };
                if newest.as_ref().is_none_or(|(t, _)| modified > *t) {
                    newest = Some((modified, path));
                }
            }
        }
    }

    newest.map(|(_, path)| path)
}
