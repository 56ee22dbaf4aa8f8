//! Router and request handlers.
//!
//! # Responsibility
//! - Mount all four CRUD verbs on `/api/todos` with the id carried in the
//!   request body, matching the original verb+body protocol.
//! - Reject every other verb with 405 and an `Allow` list.
//!
//! # Invariants
//! - PATCH answers 200 with a JSON `null` body when no task matched; DELETE
//!   answers 200 unconditionally. Not-found is never a transport error on
//!   this surface.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use fancytodo_core::{Priority, Task, TaskId};
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::SharedState;

const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE";

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/todos",
            get(list_todos)
                .post(create_todo)
                .patch(update_todo)
                .delete(delete_todo)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": fancytodo_core::core_version(),
    }))
}

async fn list_todos(State(state): State<SharedState>) -> Json<Vec<Task>> {
    Json(state.service.read().list().to_vec())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub text: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub priority: Priority,
}

async fn create_todo(
    State(state): State<SharedState>,
    Json(body): Json<CreateTodoRequest>,
) -> (StatusCode, Json<Task>) {
    let mut service = state.service.write();
    let created = service
        .create(body.text, body.due_date, body.priority)
        .clone();
    (StatusCode::CREATED, Json(created))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    pub priority: Priority,
}

/// Wholesale field replacement; a missing match is still a 200, with a
/// `null` body.
async fn update_todo(
    State(state): State<SharedState>,
    Json(body): Json<UpdateTodoRequest>,
) -> Json<Option<Task>> {
    let mut service = state.service.write();
    let updated = service
        .update(body.id, body.text, body.completed, body.due_date, body.priority)
        .cloned();
    Json(updated)
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: TaskId,
}

/// Reports success regardless of whether anything matched.
async fn delete_todo(
    State(state): State<SharedState>,
    Json(body): Json<DeleteTodoRequest>,
) -> Json<Value> {
    let removed = state.service.write().remove(body.id);
    if !removed {
        info!("event=http_delete module=router status=no_match id={}", body.id);
    }
    Json(json!({ "message": "Todo deleted" }))
}

async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        format!("Method {method} Not Allowed"),
    )
}
