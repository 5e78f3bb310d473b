// HTTP surface of the task store.
//
// Every mutating endpoint re-reads the full list before rendering, so the
// response always reflects a fresh read of the store, never a cached copy.
//
//   GET    /
//   GET    /mostrar_tareas
//   POST   /crear_tarea
//   GET    /editar_tarea/{id}
//   PUT    /actualizar_tarea/{id}
//   POST   /toggle_tarea/{id}
//   DELETE /eliminar_tarea/{id}
//   DELETE /eliminar_todas_las_tareas

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{delete, get, post, put},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use tareas_core::{TaskDto, TaskError};

use crate::render;
use crate::AppContext;

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/mostrar_tareas", get(list_tasks))
        .route("/crear_tarea", post(create_task))
        .route("/editar_tarea/{id}", get(edit_task))
        .route("/actualizar_tarea/{id}", put(update_task))
        .route("/toggle_tarea/{id}", post(toggle_task))
        .route("/eliminar_tarea/{id}", delete(delete_task))
        .route("/eliminar_todas_las_tareas", delete(delete_all_tasks))
        .with_state(ctx)
}

type ApiError = (StatusCode, Json<Value>);

fn map_err(err: TaskError) -> ApiError {
    match err {
        TaskError::EmptyName => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "task name must not be empty" })),
        ),
        TaskError::Database(e) => {
            error!("database error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal server error" })),
            )
        }
    }
}

/// Fresh read of the store rendered as the full page.
async fn full_page(ctx: &AppContext) -> Result<Html<String>, ApiError> {
    let tasks = ctx.service.list().await.map_err(map_err)?;
    Ok(Html(render::page(&tasks, None)))
}

async fn index(State(ctx): State<Arc<AppContext>>) -> Result<Html<String>, ApiError> {
    full_page(&ctx).await
}

async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<TaskDto>>, ApiError> {
    Ok(Json(ctx.service.list().await.map_err(map_err)?))
}

#[derive(Deserialize)]
struct CreateTaskForm {
    nombre: String,
}

async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Form(form): Form<CreateTaskForm>,
) -> Result<Html<String>, ApiError> {
    ctx.service.create(&form.nombre).await.map_err(map_err)?;
    full_page(&ctx).await
}

/// Pre-filled edit form for the given task. An absent id falls back to the
/// plain list page instead of a 404.
async fn edit_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let editing = ctx
        .service
        .get(id)
        .await
        .map_err(map_err)?
        .map(TaskDto::from_entity);
    let tasks = ctx.service.list().await.map_err(map_err)?;
    Ok(Html(render::page(&tasks, editing.as_ref())))
}

#[derive(Deserialize)]
struct UpdateTaskForm {
    nombre: String,
    /// When present, the update sets both fields atomically; when absent it
    /// is a rename that leaves the completion flag alone.
    completa: Option<bool>,
}

async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    Form(form): Form<UpdateTaskForm>,
) -> Result<Html<String>, ApiError> {
    match form.completa {
        Some(completed) => ctx.service.replace(id, &form.nombre, completed).await,
        None => ctx.service.rename(id, &form.nombre).await,
    }
    .map_err(map_err)?;
    full_page(&ctx).await
}

async fn toggle_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    // Missing ids are a no-op; the caller just gets the current list back.
    ctx.service.toggle_completed(id).await.map_err(map_err)?;
    full_page(&ctx).await
}

async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    ctx.service.delete(id).await.map_err(map_err)?;
    full_page(&ctx).await
}

async fn delete_all_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Html<String>, ApiError> {
    ctx.service.clear_all().await.map_err(map_err)?;
    full_page(&ctx).await
}
