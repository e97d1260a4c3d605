use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use noticeboard::{db, seed, server};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create an app over an empty in-memory database
async fn setup_empty_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    server::build_router(db)
}

// Helper to create an app over the demo dataset
async fn setup_seeded_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_demo_data(&db).await.expect("Failed to seed DB");
    server::build_router(db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

fn as_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

fn notice_payload() -> Value {
    json!({
        "title": "Notice TEST title",
        "description": "Notice TEST description"
    })
}

#[tokio::test]
async fn test_list_notices_empty() {
    let app = setup_empty_app().await;

    let (status, body) = send(&app, "GET", "/notices/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn test_list_notices_content_type_is_json() {
    let app = setup_seeded_app().await;

    let req = Request::builder()
        .uri("/notices/")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_list_seeded_notices() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "GET", "/notices/", None).await;

    assert_eq!(status, StatusCode::OK);
    let notices = as_json(&body);
    let notices = notices.as_array().unwrap();
    assert_eq!(notices.len(), 4);
    let ids: Vec<i64> = notices.iter().map(|n| n["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_collection_path_without_trailing_slash() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "GET", "/notices", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body).as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_get_notice_by_id() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "GET", "/notices/1", None).await;

    assert_eq!(status, StatusCode::OK);
    let notice = as_json(&body);
    assert_eq!(notice["id"], 1);
    assert_eq!(notice["title"], "Notice 1 title");
    assert_eq!(notice["description"], "Notice 1 description");
    assert_eq!(notice["author"]["id"], 1);
    assert_eq!(notice["author"]["firstName"], "John");
    assert_eq!(notice["author"]["lastName"], "Doe");
    assert!(notice["creationDate"].is_string());
}

#[tokio::test]
async fn test_get_notice_not_found() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "GET", "/notices/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_id_beyond_32_bits_is_not_found() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "GET", "/notices/4294967296", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, _) = send(&app, "PUT", "/notices/4294967296", Some(notice_payload())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/notices/4294967296", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_notice_with_non_numeric_id() {
    let app = setup_seeded_app().await;

    let (status, _) = send(&app, "GET", "/notices/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_notice() {
    let app = setup_empty_app().await;

    let (status, body) = send(&app, "POST", "/notices/", Some(notice_payload())).await;

    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    assert!(created["id"].is_i64());
    assert!(created["creationDate"].is_string());
    assert_eq!(created["title"], "Notice TEST title");
    assert_eq!(created["description"], "Notice TEST description");
    assert!(created["author"].is_null());

    // Read it back
    let uri = format!("/notices/{}", created["id"]);
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), created);
}

#[tokio::test]
async fn test_create_notice_ignores_client_id() {
    let app = setup_seeded_app().await;

    let mut payload = notice_payload();
    payload["id"] = json!(1);
    payload["creationDate"] = json!("1999-01-01T00:00:00+00:00");

    let (status, body) = send(&app, "POST", "/notices/", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    assert_eq!(created["id"], 5);
    assert_ne!(created["creationDate"], "1999-01-01T00:00:00+00:00");

    // Notice 1 is untouched
    let (_, body) = send(&app, "GET", "/notices/1", None).await;
    assert_eq!(as_json(&body)["title"], "Notice 1 title");
}

#[tokio::test]
async fn test_create_notice_with_author_reference() {
    let app = setup_seeded_app().await;

    let mut payload = notice_payload();
    payload["author"] = json!({ "id": 2 });

    let (status, body) = send(&app, "POST", "/notices/", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    let created = as_json(&body);
    assert_eq!(created["author"]["id"], 2);
    assert_eq!(created["author"]["firstName"], "Jane");
}

#[tokio::test]
async fn test_create_notice_with_unknown_author_is_rejected() {
    let app = setup_seeded_app().await;

    let mut payload = notice_payload();
    payload["author"] = json!({ "id": 99, "firstName": "Ghost", "lastName": "Writer" });

    let (status, body) = send(&app, "POST", "/notices/", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(as_json(&body)["error"].is_string());

    let (_, body) = send(&app, "GET", "/notices/", None).await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_notice_with_malformed_body() {
    let app = setup_empty_app().await;

    let req = Request::builder()
        .uri("/notices/")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert!(response.status().is_client_error());

    // Missing required field
    let (status, _) = send(&app, "POST", "/notices/", Some(json!({ "title": "only" }))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_update_notice() {
    let app = setup_seeded_app().await;

    let (_, before) = send(&app, "GET", "/notices/4", None).await;
    let before = as_json(&before);

    let payload = json!({
        "id": 77,
        "title": "New Title",
        "description": "New Description"
    });
    let (status, body) = send(&app, "PUT", "/notices/4", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Object with id 4 was updated.");

    let (status, after) = send(&app, "GET", "/notices/4", None).await;
    assert_eq!(status, StatusCode::OK);
    let after = as_json(&after);
    assert_eq!(after["id"], 4);
    assert_eq!(after["title"], "New Title");
    assert_eq!(after["description"], "New Description");
    assert_eq!(after["creationDate"], before["creationDate"]);
    assert_eq!(after["author"], before["author"]);

    let (status, _) = send(&app, "GET", "/notices/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_notice_not_found() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "PUT", "/notices/999", Some(notice_payload())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_delete_notice() {
    let app = setup_seeded_app().await;

    let (status, body) = send(&app, "DELETE", "/notices/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, "GET", "/notices/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_notice_twice() {
    let app = setup_seeded_app().await;

    let (status, _) = send(&app, "DELETE", "/notices/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", "/notices/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_size_after_creates_and_deletes() {
    let app = setup_empty_app().await;

    let mut ids = Vec::new();
    for i in 1..=5 {
        let payload = json!({
            "title": format!("Notice {}", i),
            "description": format!("Notice description {}", i)
        });
        let (status, body) = send(&app, "POST", "/notices/", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(as_json(&body)["id"].as_i64().unwrap());
    }

    for id in &ids[..2] {
        let (status, _) = send(&app, "DELETE", &format!("/notices/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (status, body) = send(&app, "GET", "/notices/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body).as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_empty_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let json = as_json(&body);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
    assert_eq!(json["service"], "noticeboard");
}

#[tokio::test]
async fn test_openapi_document_lists_schemas() {
    let app = setup_empty_app().await;

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let schemas = &as_json(&body)["components"]["schemas"];
    assert!(schemas["NoticeDto"].is_object());
    assert!(schemas["BoardDto"].is_object());
    assert!(schemas["AuthorDto"].is_object());
    assert!(schemas["AuthorRefDto"].is_object());
}
