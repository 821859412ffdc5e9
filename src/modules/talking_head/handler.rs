use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use tracing::info;

use super::error::JobError;
use super::service::JobService;
use crate::common::upload::{self, UploadedFile};
use crate::state::AppState;

/// Generate a talking-head video from an image and an audio clip.
///
/// Blocks for the whole inference run and streams the resulting MP4 back.
#[utoipa::path(
    post,
    path = "/v1/talking-head",
    request_body(content = super::dto::TalkingHeadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Generated video", body = Vec<u8>, content_type = "video/mp4"),
        (status = 400, description = "Missing or malformed form field"),
        (status = 401, description = "Invalid authorization token"),
        (status = 500, description = "Inference failed or no output video produced")
    ),
    tag = "TalkingHead",
    security(("bearer_auth" = []))
)]
pub async fn generate_talking_head(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, JobError> {
    let mut job_id: Option<String> = None;
    let mut image: Option<UploadedFile> = None;
    let mut audio: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| JobError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "jobId" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| JobError::BadRequest(format!("Invalid jobId field: {}", e)))?;
                job_id = Some(text);
            }
            "image" => {
                let file = upload::read_field(field, "image.png")
                    .await
                    .map_err(|e| JobError::BadRequest(e.to_string()))?;
                image = Some(file);
            }
            "audio" => {
                let file = upload::read_field(field, "audio.wav")
                    .await
                    .map_err(|e| JobError::BadRequest(e.to_string()))?;
                audio = Some(file);
            }
            _ => {}
        }
    }

    let job_id = job_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| JobError::BadRequest("jobId field is required".to_string()))?;
    let image = image.ok_or_else(|| JobError::BadRequest("image field is required".to_string()))?;
    let audio = audio.ok_or_else(|| JobError::BadRequest("audio field is required".to_string()))?;

    info!("Received talking-head job {}", job_id);

    let video = JobService::run_job(&state, &job_id, &image, &audio).await?;

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "video/mp4")
        .header(header::CONTENT_LENGTH, video.content_length)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}_output.mp4\"", job_id),
        )
        .body(Body::from_stream(ReaderStream::new(video.file)))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.into_response());

    Ok(response)
}
