mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_root_serves_landing_page() {
    let (server, _repository) = common::create_memory_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<title>ShrinkIt</title>"));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let (server, _repository) = common::create_memory_server();

    let response = server
        .get("/")
        .add_header("Origin", common::ALLOWED_ORIGIN)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let (server, _repository) = common::create_memory_server();

    let response = server
        .get("/")
        .add_header("Origin", "https://evil.example")
        .await;

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}

#[tokio::test]
async fn test_cors_preflight_for_shorten() {
    let (server, _repository) = common::create_memory_server();

    let response = server
        .method(Method::OPTIONS, "/shorten")
        .add_header("Origin", common::ALLOWED_ORIGIN)
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type")
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::ALLOWED_ORIGIN
    );

    let methods = response.header("access-control-allow-methods");
    let methods = methods.to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("GET"));
}
