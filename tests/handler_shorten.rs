mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::json;
use shrinkit::api::dto::RedirectionResponse;
use shrinkit::domain::repositories::RedirectionRepository;
use shrinkit::utils::code_generator::is_short_code;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_success() {
    let (server, repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["shortUrl"].as_str().unwrap();

    assert!(is_short_code(code));
    assert_eq!(json["originalUrl"], "https://example.com");
    assert_eq!(json["newUrl"], format!("{}/{}", common::BASE_URL, code));
    assert!(json["id"].is_number());
    assert!(json["createdAt"].is_string());

    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_response_deserializes() {
    let (server, _repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://rust-lang.org" }))
        .await;

    let body = response.json::<RedirectionResponse>();
    assert_eq!(body.original_url, "https://rust-lang.org");
    assert!(body.new_url.ends_with(&body.short_url));
}

#[tokio::test]
async fn test_shorten_codes_are_letters_only() {
    let (server, _repository) = common::create_memory_server();

    for i in 0..50 {
        let response = server
            .post("/shorten")
            .json(&json!({ "originalUrl": format!("https://example.com/{i}") }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let json = response.json::<serde_json::Value>();
        assert!(is_short_code(json["shortUrl"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_records() {
    let (server, repository) = common::create_memory_server();

    let first = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://dup.example" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://dup.example" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["id"], second["id"]);
    assert_ne!(first["shortUrl"], second["shortUrl"]);
    assert_eq!(repository.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_ignores_client_supplied_code() {
    let (server, _repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://example.com",
            "shortUrl": "custom-alias"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_ne!(json["shortUrl"], "custom-alias");
    assert!(is_short_code(json["shortUrl"].as_str().unwrap()));
}

#[tokio::test]
async fn test_shorten_accepts_malformed_url() {
    let (server, _repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "not a url at all" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_shorten_rejects_url_with_control_character() {
    let (server, repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request body");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_shorten_is_a_code_lookup() {
    let (server, _repository) = common::create_memory_server();

    let response = server.get("/shorten").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found");
}

#[tokio::test]
async fn test_shorten_missing_original_url() {
    let (server, repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request body");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_empty_original_url() {
    let (server, repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request body");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let (server, repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .bytes(Bytes::from_static(b"{\"originalUrl\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request body");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_without_json_content_type() {
    let (server, repository) = common::create_memory_server();

    let response = server
        .post("/shorten")
        .text("https://example.com")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request body");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_storage_failure() {
    let server = common::create_test_server(Arc::new(common::UnreachableRepository));

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error saving data");
}
