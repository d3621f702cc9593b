use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// Raw response bodies keyed by todo id. Bodies are stored verbatim so tests
/// can serve malformed or empty payloads.
pub type Db = Arc<RwLock<HashMap<i64, String>>>;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedTodo {
    user_id: i64,
    id: i64,
    title: &'static str,
    completed: bool,
}

const SEED: &[SeedTodo] = &[
    SeedTodo { user_id: 1, id: 1, title: "delectus aut autem", completed: false },
    SeedTodo { user_id: 1, id: 2, title: "quis ut nam facilis et officia qui", completed: false },
    SeedTodo { user_id: 1, id: 3, title: "fugiat veniam minus", completed: false },
    SeedTodo { user_id: 1, id: 4, title: "et porro tempora", completed: true },
];

/// A store holding the first JSONPlaceholder todos.
pub fn seeded_db() -> Db {
    let bodies = SEED
        .iter()
        .filter_map(|todo| serde_json::to_string(todo).ok().map(|body| (todo.id, body)))
        .collect();
    Arc::new(RwLock::new(bodies))
}

pub fn app() -> Router {
    app_with_db(seeded_db())
}

pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/todos/{id}", get(get_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_db(listener, seeded_db()).await
}

pub async fn run_with_db(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<impl IntoResponse, StatusCode> {
    let bodies = db.read().await;
    let body = bodies.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, bytes = body.len(), "serving todo");
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
