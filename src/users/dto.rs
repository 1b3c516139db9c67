use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub skills: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OfferSkillRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct SkillOfferingResponse {
    pub user_id: i64,
    pub skill: String,
}
