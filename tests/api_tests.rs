//! API integration tests

use library_records::{api, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a server on an ephemeral port and return its API base URL
async fn spawn_app() -> String {
    let app = api::create_router(AppState::new(AppConfig::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}/api/v1", addr)
}

async fn create(client: &Client, url: String, body: Value) -> Value {
    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_book_lifecycle() {
    let base = spawn_app().await;
    let client = Client::new();

    let book = create(
        &client,
        format!("{}/books", base),
        json!({ "title": "Dune", "author": "Herbert" }),
    )
    .await;
    assert_eq!(book["id"], 1);
    assert_eq!(book["title"], "Dune");
    assert!(book["updated_at"].is_null());
    let created_at = book["created_at"].as_u64().expect("created_at is a number");

    let response = client
        .put(format!("{}/books/1", base))
        .json(&json!({ "title": "Dune Messiah", "author": "Herbert" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["created_at"].as_u64(), Some(created_at));
    assert!(updated["updated_at"].as_u64().expect("updated_at is set") > created_at);

    let response = client
        .delete(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(deleted, updated);

    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchRecord");
    assert_eq!(body["message"], "book 1 not found");
}

#[tokio::test]
async fn test_list_students() {
    let base = spawn_app().await;
    let client = Client::new();

    let empty: Value = client
        .get(format!("{}/students", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(empty, json!([]));

    let ada = create(
        &client,
        format!("{}/students", base),
        json!({ "name": "Ada", "email": "ada@example.org" }),
    )
    .await;
    let alan = create(
        &client,
        format!("{}/students", base),
        json!({ "name": "Alan", "email": "alan@example.org" }),
    )
    .await;

    let all: Value = client
        .get(format!("{}/students", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(all, json!([ada, alan]));
}

#[tokio::test]
async fn test_loan_with_dangling_references() {
    let base = spawn_app().await;
    let client = Client::new();

    let loan = create(
        &client,
        format!("{}/loans", base),
        json!({ "student_id": 41, "book_id": 42, "loan_date": 1700000000 }),
    )
    .await;
    assert_eq!(loan["student_id"], 41);
    assert_eq!(loan["book_id"], 42);
    assert_eq!(loan["loan_date"], 1700000000u64);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/loans/9", base))
        .json(&json!({ "student_id": 1, "book_id": 1, "loan_date": 0 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/students/9", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], 1);
}

#[tokio::test]
async fn test_malformed_payload_is_rejected() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Dune" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");

    let ready: Value = client
        .get(format!("{}/ready", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(ready["books"], 0);
}

#[tokio::test]
async fn test_malformed_path_id_is_rejected() {
    let base = spawn_app().await;
    let client = Client::new();

    for path in ["books/abc", "students/-1", "loans/18446744073709551616"] {
        let response = client
            .get(format!("{}/{}", base, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", path);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["code"], 2, "{}", path);
        assert_eq!(body["error"], "BadValue", "{}", path);
    }

    let response = client
        .delete(format!("{}/books/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}
