use axum::extract::{Path, State};
use axum::Json;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{CreateUserRequest, OfferSkillRequest, SkillOfferingResponse};
use super::repo::{self, User};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    payload.email = payload.email.trim().to_string();

    if payload.name.trim().is_empty() {
        warn!("create_user rejected: empty name");
        return Err(ApiError::Validation("Name must not be empty.".into()));
    }
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "create_user rejected: invalid email");
        return Err(ApiError::Validation("Invalid email address.".into()));
    }

    let user = repo::create(
        &state.db,
        payload.name.trim(),
        &payload.email,
        payload.skills.as_deref(),
    )
    .await?;
    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = repo::list(&state.db).await?;
    Ok(Json(users))
}

#[instrument(skip(state, payload))]
pub async fn offer_skill(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OfferSkillRequest>,
) -> Result<Json<SkillOfferingResponse>, ApiError> {
    if payload.skill.trim().is_empty() {
        warn!(user_id = id, "offer_skill rejected: empty skill");
        return Err(ApiError::Validation("Skill must not be empty.".into()));
    }

    let offering = repo::offer_skill(&state.db, id, payload.skill.trim()).await?;
    info!(user_id = offering.user_id, skill = %offering.skill, "skill offered");
    Ok(Json(SkillOfferingResponse {
        user_id: offering.user_id,
        skill: offering.skill,
    }))
}
