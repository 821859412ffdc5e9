use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601 timestamp of when the check ran.
    pub timestamp: String,
}
