use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

async fn get_status(uri: &str) -> axum::response::Response {
    api_routes()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = get_status("/healthz").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_systems() {
    let resp = get_status("/").await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/systems");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let resp = get_status("/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
