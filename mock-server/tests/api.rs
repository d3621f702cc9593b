use std::{collections::HashMap, sync::Arc};

use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_db, Db};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn db(entries: &[(i64, &str)]) -> Db {
    let bodies: HashMap<i64, String> = entries.iter().map(|(id, body)| (*id, body.to_string())).collect();
    Arc::new(tokio::sync::RwLock::new(bodies))
}

// --- seeded data ---

#[tokio::test]
async fn get_first_todo() {
    let resp = app().oneshot(get("/todos/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    let todo: serde_json::Value = body_json(resp).await;
    assert_eq!(
        todo,
        serde_json::json!({
            "userId": 1,
            "id": 1,
            "title": "delectus aut autem",
            "completed": false
        })
    );
}

#[tokio::test]
async fn get_completed_todo() {
    let resp = app().oneshot(get("/todos/4")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: serde_json::Value = body_json(resp).await;
    assert_eq!(todo["completed"], true);
}

#[tokio::test]
async fn get_unknown_todo_returns_404() {
    let resp = app().oneshot(get("/todos/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_non_numeric_id_returns_400() {
    let resp = app().oneshot(get("/todos/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- caller-supplied bodies ---

#[tokio::test]
async fn serves_stored_body_verbatim() {
    let resp = app_with_db(db(&[(1, "{{")])).oneshot(get("/todos/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "{{");
}

#[tokio::test]
async fn serves_empty_body() {
    let resp = app_with_db(db(&[(1, "")])).oneshot(get("/todos/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn empty_store_returns_404() {
    let resp = app_with_db(db(&[])).oneshot(get("/todos/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_changes_are_visible() {
    let store = db(&[]);
    let router = app_with_db(store.clone());
    store.write().await.insert(1, r#"{"ok":true}"#.to_string());

    let resp = router.oneshot(get("/todos/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["ok"], true);
}
