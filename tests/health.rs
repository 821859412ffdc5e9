mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower::ServiceExt;

use common::{FakeOutcome, test_app};

async fn get_health(app: axum::Router) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_returns_ok_without_auth() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), FakeOutcome::NoOutput).await;

    let (status, json) = get_health(app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    // timestamp must be well-formed ISO-8601
    OffsetDateTime::parse(json["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();
}

#[tokio::test]
async fn health_timestamp_increases_across_calls() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), FakeOutcome::NoOutput).await;

    let (_, first) = get_health(app.clone()).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (_, second) = get_health(app).await;

    let t1 = OffsetDateTime::parse(first["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();
    let t2 = OffsetDateTime::parse(second["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();
    assert!(t2 > t1);
}
