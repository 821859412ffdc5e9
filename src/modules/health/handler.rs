use axum::Json;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::dto::HealthResponse;

/// Simple health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp,
    })
}
