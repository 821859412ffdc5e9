use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::modules::talking_head::error::JobError;
use crate::state::AppState;

/// Static bearer-token check. The whole `Authorization` value must equal
/// `Bearer <token>` exactly; anything else is rejected before the request
/// body is touched, so a rejected request leaves no files behind.
pub async fn auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, JobError> {
    let expected = format!("Bearer {}", state.config.api_token);

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);

    if !authorized {
        return Err(JobError::Unauthorized);
    }

    Ok(next.run(req).await)
}
