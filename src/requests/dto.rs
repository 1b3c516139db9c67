use serde::{Deserialize, Serialize};

use super::repo::RequestStatus;

#[derive(Debug, Deserialize)]
pub struct CreateRequestRequest {
    pub title: String,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub requester_name: String,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AcceptRequestRequest {
    pub volunteer_id: i64,
}

#[derive(Debug, Serialize)]
pub struct AcceptedResponse {
    pub request_id: i64,
    pub volunteer_id: i64,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CancelledResponse {
    pub id: i64,
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_response_serializes_lowercase_status() {
        let response = CancelledResponse {
            id: 3,
            status: RequestStatus::Cancelled,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"id":3,"status":"cancelled"}"#);
    }

    #[test]
    fn accepted_response_serialization() {
        let response = AcceptedResponse {
            request_id: 1,
            volunteer_id: 2,
            status: "accepted".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"request_id":1,"volunteer_id":2,"status":"accepted"}"#
        );
    }
}
