//! Task management API endpoints.
//!
//! Binds the `/tasks` endpoints to the facade:
//! - List tasks (paginated, sorted)
//! - Create task
//! - Get task by id
//! - Update task (full replacement)
//! - Delete task
//!
//! Handlers validate input before any facade call and map `TaskError`
//! to an HTTP status; no layer below knows about status codes.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::store::{sort_column, PageRequest, SortDirection};
use crate::task::{TaskCreate, TaskError, TaskUpdate};

use super::routes::AppState;
use super::types::{CreateTaskRequest, PageQuery, PageResponse, TaskResponse, UpdateTaskRequest};

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks))
        .route("/", post(create_task))
        .route("/:id", get(get_task))
        .route("/:id", put(update_task))
        .route("/:id", delete(delete_task))
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Turn the pagination query into a validated page request, collecting
/// every violated constraint rather than stopping at the first.
fn validate_page_query(query: &PageQuery) -> Result<PageRequest, TaskError> {
    let mut violations = Vec::new();

    if query.property.trim().is_empty() {
        violations.push("property must not be blank".to_string());
    } else if sort_column(&query.property).is_none() {
        violations.push(format!("unknown sort property: {}", query.property));
    }

    let direction = match SortDirection::from_str(&query.direction) {
        Some(direction) => direction,
        None => {
            violations.push(format!(
                "direction must be ASC or DESC, got: {}",
                query.direction
            ));
            SortDirection::Asc
        }
    };

    if !violations.is_empty() {
        return Err(TaskError::Validation(violations));
    }

    Ok(PageRequest {
        page: query.page,
        size: query.size,
        property: query.property.clone(),
        direction,
    })
}

fn validate_create(req: &CreateTaskRequest) -> Result<TaskCreate, TaskError> {
    let mut violations = Vec::new();

    if req.title.trim().is_empty() {
        violations.push("title must not be blank".to_string());
    }

    if !violations.is_empty() {
        return Err(TaskError::Validation(violations));
    }

    Ok(TaskCreate {
        title: req.title.clone(),
        description: req.description.clone(),
        due_date: req.due_date,
    })
}

fn validate_update(req: &UpdateTaskRequest) -> Result<TaskUpdate, TaskError> {
    let mut violations = Vec::new();

    if req.title.trim().is_empty() {
        violations.push("title must not be blank".to_string());
    }

    if !violations.is_empty() {
        return Err(TaskError::Validation(violations));
    }

    Ok(TaskUpdate {
        title: req.title.clone(),
        description: req.description.clone(),
        due_date: req.due_date,
        completed: req.completed,
    })
}

/// Map a task error to its HTTP status at the outermost boundary.
fn error_response(err: TaskError) -> (StatusCode, String) {
    let status = match err {
        TaskError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskError::NotFound { .. } => StatusCode::NOT_FOUND,
        TaskError::Storage(_) => {
            tracing::error!("storage failure: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /tasks - List one page of tasks.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<TaskResponse>>, (StatusCode, String)> {
    let page = validate_page_query(&query).map_err(error_response)?;
    let response = state.tasks.find_tasks(&page).await.map_err(error_response)?;
    Ok(Json(response))
}

/// POST /tasks - Create a new task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), (StatusCode, String)> {
    let params = validate_create(&req).map_err(error_response)?;
    let task = state.tasks.create(params).await.map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id} - Get a task by id.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, (StatusCode, String)> {
    state
        .tasks
        .find_by_id(id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// PUT /tasks/{id} - Replace all mutable fields of a task.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, (StatusCode, String)> {
    let params = validate_update(&req).map_err(error_response)?;
    state
        .tasks
        .update(id, params)
        .await
        .map(Json)
        .map_err(error_response)
}

/// DELETE /tasks/{id} - Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.tasks.delete(id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
