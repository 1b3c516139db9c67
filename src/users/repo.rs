use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SkillOffering {
    pub id: i64,
    pub user_id: i64,
    pub skill: String,
    pub created_at: OffsetDateTime,
}

/// Inserts a user, relying on the unique index on `email` rather than a
/// pre-check. Two concurrent registrations with the same email race at the
/// store and exactly one wins.
pub async fn create(
    db: &SqlitePool,
    name: &str,
    email: &str,
    skills: Option<&str>,
) -> Result<User, ApiError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, skills)
        VALUES (?, ?, ?)
        RETURNING id, name, email, skills
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(skills)
    .fetch_one(db)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ApiError::DuplicateEmail,
        _ => ApiError::Database(e),
    })?;
    Ok(user)
}

pub async fn list(db: &SqlitePool) -> Result<Vec<User>, ApiError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, skills
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(users)
}

/// Records a skill offering for a volunteer. A missing volunteer surfaces
/// as a foreign-key violation on the insert.
pub async fn offer_skill(
    db: &SqlitePool,
    user_id: i64,
    skill: &str,
) -> Result<SkillOffering, ApiError> {
    let offering = sqlx::query_as::<_, SkillOffering>(
        r#"
        INSERT INTO volunteer_skills (user_id, skill, created_at)
        VALUES (?, ?, ?)
        RETURNING id, user_id, skill, created_at
        "#,
    )
    .bind(user_id)
    .bind(skill)
    .bind(OffsetDateTime::now_utc())
    .fetch_one(db)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            ApiError::NotFound(format!("Volunteer {user_id} not found."))
        }
        _ => ApiError::Database(e),
    })?;
    Ok(offering)
}
