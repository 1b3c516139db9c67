use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use crate::error::ApiError;

/// Lifecycle state of a help request. Transitions only move forward:
/// `open -> accepted`, `open -> cancelled`, `accepted -> cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RequestStatus {
    Open,
    Accepted,
    Cancelled,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestStatus::Open => "open",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Cancelled => "cancelled",
        })
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HelpRequest {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub requester_name: String,
    pub location: Option<String>,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct Assignment {
    pub id: i64,
    pub request_id: i64,
    pub volunteer_id: i64,
    pub status: String,
    pub accepted_at: OffsetDateTime,
}

pub async fn create(
    db: &SqlitePool,
    title: &str,
    description: Option<&str>,
    required_skills: Option<&str>,
    requester_name: &str,
    location: Option<&str>,
) -> Result<HelpRequest, ApiError> {
    let request = sqlx::query_as::<_, HelpRequest>(
        r#"
        INSERT INTO requests (title, description, required_skills, requester_name, location)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, description, required_skills, requester_name, location, status
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(required_skills)
    .bind(requester_name)
    .bind(location)
    .fetch_one(db)
    .await?;
    Ok(request)
}

pub async fn list(db: &SqlitePool) -> Result<Vec<HelpRequest>, ApiError> {
    let requests = sqlx::query_as::<_, HelpRequest>(
        r#"
        SELECT id, title, description, required_skills, requester_name, location, status
        FROM requests
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(requests)
}

/// Assigns a volunteer to an open request. The status flip is a single
/// conditional UPDATE inside the transaction, so two concurrent accepts
/// cannot both observe `open`; the loser sees zero affected rows.
pub async fn accept(
    db: &SqlitePool,
    request_id: i64,
    volunteer_id: i64,
) -> Result<Assignment, ApiError> {
    let mut tx = db.begin().await?;

    let volunteer = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
        .bind(volunteer_id)
        .fetch_optional(&mut *tx)
        .await?;
    if volunteer.is_none() {
        return Err(ApiError::NotFound(format!(
            "Volunteer {volunteer_id} not found."
        )));
    }

    let updated = sqlx::query("UPDATE requests SET status = ? WHERE id = ? AND status = ?")
        .bind(RequestStatus::Accepted)
        .bind(request_id)
        .bind(RequestStatus::Open)
        .execute(&mut *tx)
        .await?;

    if updated.rows_affected() == 0 {
        let status =
            sqlx::query_scalar::<_, RequestStatus>("SELECT status FROM requests WHERE id = ?")
                .bind(request_id)
                .fetch_optional(&mut *tx)
                .await?;
        return Err(match status {
            None => ApiError::NotFound(format!("Request {request_id} not found.")),
            Some(status) => ApiError::InvalidState(format!(
                "Request {request_id} is {status}; only open requests can be accepted."
            )),
        });
    }

    let assignment = sqlx::query_as::<_, Assignment>(
        r#"
        INSERT INTO request_assignments (request_id, volunteer_id, accepted_at)
        VALUES (?, ?, ?)
        RETURNING id, request_id, volunteer_id, status, accepted_at
        "#,
    )
    .bind(request_id)
    .bind(volunteer_id)
    .bind(OffsetDateTime::now_utc())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(assignment)
}

/// Cancels a request. Cancellation is terminal: a second cancel is rejected
/// rather than treated as a no-op. Existing assignments stay behind as
/// historical records.
pub async fn cancel(db: &SqlitePool, request_id: i64) -> Result<RequestStatus, ApiError> {
    let mut tx = db.begin().await?;

    let updated = sqlx::query("UPDATE requests SET status = ? WHERE id = ? AND status <> ?")
        .bind(RequestStatus::Cancelled)
        .bind(request_id)
        .bind(RequestStatus::Cancelled)
        .execute(&mut *tx)
        .await?;

    if updated.rows_affected() == 0 {
        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM requests WHERE id = ?")
            .bind(request_id)
            .fetch_optional(&mut *tx)
            .await?;
        return Err(match exists {
            None => ApiError::NotFound(format!("Request {request_id} not found.")),
            Some(_) => ApiError::InvalidState(format!(
                "Request {request_id} is already cancelled."
            )),
        });
    }

    tx.commit().await?;
    Ok(RequestStatus::Cancelled)
}
