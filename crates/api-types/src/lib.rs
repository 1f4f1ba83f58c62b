//! Wire types for the judge0 submissions API.
//!
//! Requests are issued with `base64_encoded=true&fields=*`, so text fields
//! carry the transport encoding and responses may include more fields than
//! are modelled here; unknown fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Body of `POST /submissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubmissionBody {
    pub language_id: u32,
    pub source_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
}

/// Response of `POST /submissions` with `wait=false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubmissionResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub id: u16,
    pub description: String,
}

/// Response of `GET /submissions/{token}`.
///
/// `time` arrives as a decimal string and `memory` as a number; both are
/// null while the submission has not finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDetails {
    #[serde(default)]
    pub status: Option<StatusInfo>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub memory: Option<f64>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_skips_absent_stdin() {
        let body = CreateSubmissionBody {
            language_id: 63,
            source_code: "Y29uc29sZS5sb2coMSk=".to_string(),
            stdin: None,
        };

        let json = serde_json::to_string(&body).expect("serialize create body");
        assert_eq!(
            json,
            r#"{"language_id":63,"source_code":"Y29uc29sZS5sb2coMSk="}"#
        );
    }

    #[test]
    fn create_response_round_trip_json() {
        let response = CreateSubmissionResponse {
            token: "abc123".to_string(),
        };

        let json = serde_json::to_string(&response).expect("serialize create response");
        let decoded: CreateSubmissionResponse =
            serde_json::from_str(&json).expect("deserialize create response");

        assert_eq!(decoded, response);
    }

    #[test]
    fn details_deserialize_from_full_poll_response() {
        let raw = r#"{
            "source_code": "Y29uc29sZS5sb2coMSk=",
            "language_id": 63,
            "stdout": "MQo=",
            "status_id": 3,
            "stderr": null,
            "compile_output": null,
            "message": null,
            "exit_code": 0,
            "token": "abc123",
            "time": "0.035",
            "memory": 7668,
            "finished_at": "2026-08-26T12:00:02.000Z",
            "status": { "id": 3, "description": "Accepted" }
        }"#;

        let details: SubmissionDetails = serde_json::from_str(raw).expect("deserialize details");
        let status = details.status.expect("status should be present");

        assert_eq!(status.id, 3);
        assert_eq!(status.description, "Accepted");
        assert_eq!(details.stdout.as_deref(), Some("MQo="));
        assert_eq!(details.memory, Some(7668.0));
        assert_eq!(details.time.as_deref(), Some("0.035"));
    }

    #[test]
    fn details_tolerate_in_flight_response() {
        let raw = r#"{ "status": { "id": 2, "description": "Processing" } }"#;

        let details: SubmissionDetails = serde_json::from_str(raw).expect("deserialize details");

        assert_eq!(details.status.expect("status").id, 2);
        assert!(details.stdout.is_none());
        assert!(details.time.is_none());
    }
}
