use axum::extract::{Path, State};
use axum::Json;
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{AcceptRequestRequest, AcceptedResponse, CancelledResponse, CreateRequestRequest};
use super::repo::{self, HelpRequest};

#[instrument(skip(state, payload))]
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequestRequest>,
) -> Result<Json<HelpRequest>, ApiError> {
    if payload.title.trim().is_empty() {
        warn!("create_request rejected: empty title");
        return Err(ApiError::Validation("Title must not be empty.".into()));
    }
    if payload.requester_name.trim().is_empty() {
        warn!("create_request rejected: empty requester name");
        return Err(ApiError::Validation(
            "Requester name must not be empty.".into(),
        ));
    }

    let request = repo::create(
        &state.db,
        payload.title.trim(),
        payload.description.as_deref(),
        payload.required_skills.as_deref(),
        payload.requester_name.trim(),
        payload.location.as_deref(),
    )
    .await?;
    info!(request_id = request.id, title = %request.title, "request created");
    Ok(Json(request))
}

#[instrument(skip(state))]
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<HelpRequest>>, ApiError> {
    let requests = repo::list(&state.db).await?;
    Ok(Json(requests))
}

#[instrument(skip(state, payload))]
pub async fn accept_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AcceptRequestRequest>,
) -> Result<Json<AcceptedResponse>, ApiError> {
    let assignment = repo::accept(&state.db, id, payload.volunteer_id).await?;
    info!(
        request_id = assignment.request_id,
        volunteer_id = assignment.volunteer_id,
        "request accepted"
    );
    Ok(Json(AcceptedResponse {
        request_id: assignment.request_id,
        volunteer_id: assignment.volunteer_id,
        status: assignment.status,
    }))
}

#[instrument(skip(state))]
pub async fn cancel_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CancelledResponse>, ApiError> {
    let status = repo::cancel(&state.db, id).await?;
    info!(request_id = id, "request cancelled");
    Ok(Json(CancelledResponse { id, status }))
}
