use serde::Serialize;
use utoipa::ToSchema;

/// Multipart form for `POST /v1/talking-head`. Documentation schema only;
/// the handler reads the fields off the multipart stream itself.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalkingHeadForm {
    /// Caller-supplied opaque job identifier, used as the work-dir prefix
    /// and in the download filename.
    pub job_id: String,
    /// Source face image.
    #[schema(value_type = String, format = Binary)]
    pub image: String,
    /// Driving audio clip.
    #[schema(value_type = String, format = Binary)]
    pub audio: String,
}
