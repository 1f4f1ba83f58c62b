use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use super::{SubmissionStatus, TranscodeError, transcode};

/// Payload for creating a remote submission. Text fields hold the
/// transport encoding, not plain text; the request is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub target_id: u32,
    pub source_code: String,
    pub stdin: Option<String>,
}

impl SubmissionRequest {
    pub fn new(target_id: u32, source_code: &str, stdin: Option<&str>) -> Self {
        Self {
            target_id,
            source_code: transcode::encode(source_code),
            stdin: stdin.map(transcode::encode),
        }
    }
}

/// Opaque handle identifying one submission for status polling.
/// Issued by the remote service; never reusable across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmissionToken(String);

impl SubmissionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SubmissionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One status query's answer. Output fields are still transport-encoded;
/// decoding happens only when a terminal result is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSnapshot {
    pub status: SubmissionStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub memory_kb: Option<f64>,
    pub time_sec: Option<f64>,
}

impl SubmissionSnapshot {
    pub fn with_status(status: SubmissionStatus) -> Self {
        Self {
            status,
            stdout: None,
            stderr: None,
            compile_output: None,
            memory_kb: None,
            time_sec: None,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission quota exceeded")]
    QuotaExceeded,
    #[error("submission request failed: {0}")]
    Transient(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("status query failed: {0}")]
    Network(String),
    #[error("failed to decode submission output: {0}")]
    Decode(#[from] TranscodeError),
}

/// Seam to the remote execution service. One network request per call,
/// no retries at this layer; retrying is the caller's decision.
#[async_trait]
pub trait JudgeBackend: Send + Sync {
    async fn create_submission(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionToken, SubmitError>;

    async fn fetch_submission(
        &self,
        token: &SubmissionToken,
    ) -> Result<SubmissionSnapshot, PollError>;
}
