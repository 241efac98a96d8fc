use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use engine::{describe_trigger, WorkflowDefinition, WorkflowDraft, WorkflowId, WorkflowStatus};
use store::{StoreError, WorkflowStore};

use crate::AppState;

#[derive(serde::Deserialize)]
pub struct SetStatusDto {
    pub status: WorkflowStatus,
}

/// The human-readable rendering the detail pane shows.
#[derive(serde::Serialize)]
pub struct WorkflowSummary {
    pub trigger: String,
    pub actions: Vec<String>,
}

fn error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::EmptyName | StoreError::NoActions => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidTransition { .. } => StatusCode::CONFLICT,
    }
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkflowDefinition>>, StatusCode> {
    let store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(store.list()))
}

pub async fn get(
    Path(id): Path<WorkflowId>,
    State(state): State<AppState>,
) -> Result<Json<WorkflowDefinition>, StatusCode> {
    let store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    store.get(id).map(Json).map_err(|e| error_status(&e))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<WorkflowDraft>,
) -> Result<(StatusCode, Json<WorkflowDefinition>), StatusCode> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    match store.create(draft) {
        Ok(workflow) => Ok((StatusCode::CREATED, Json(workflow))),
        Err(e) => Err(error_status(&e)),
    }
}

pub async fn update(
    Path(id): Path<WorkflowId>,
    State(state): State<AppState>,
    Json(draft): Json<WorkflowDraft>,
) -> Result<Json<WorkflowDefinition>, StatusCode> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    store.update(id, draft).map(Json).map_err(|e| error_status(&e))
}

pub async fn delete(
    Path(id): Path<WorkflowId>,
    State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    match store.delete(id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_status(&e)),
    }
}

pub async fn set_status(
    Path(id): Path<WorkflowId>,
    State(state): State<AppState>,
    Json(payload): Json<SetStatusDto>,
) -> Result<Json<WorkflowDefinition>, StatusCode> {
    let mut store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    store
        .set_status(id, payload.status)
        .map(Json)
        .map_err(|e| error_status(&e))
}

pub async fn summary(
    Path(id): Path<WorkflowId>,
    State(state): State<AppState>,
) -> Result<Json<WorkflowSummary>, StatusCode> {
    let store = state
        .store
        .lock()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let workflow = store.get(id).map_err(|e| error_status(&e))?;

    Ok(Json(WorkflowSummary {
        trigger: describe_trigger(&workflow.trigger),
        actions: actions::render_actions(&workflow.actions),
    }))
}
