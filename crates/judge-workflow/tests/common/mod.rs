use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use bianyi_code_core::domain::{
    JudgeBackend, PollError, SubmissionRequest, SubmissionSnapshot, SubmissionStatus,
    SubmissionToken, SubmitError,
};

/// Backend double that replays a scripted sequence of status snapshots.
/// Once the script runs out it keeps reporting `Queued`, which models a
/// never-terminating remote job.
pub struct ScriptedBackend {
    token: String,
    create_error: Option<SubmitError>,
    fetch_error: Option<PollError>,
    script: Mutex<VecDeque<SubmissionSnapshot>>,
    create_calls: AtomicU32,
    fetch_calls: AtomicU32,
    last_request: Mutex<Option<SubmissionRequest>>,
}

impl ScriptedBackend {
    pub fn with_script(token: &str, script: Vec<SubmissionSnapshot>) -> Self {
        Self {
            token: token.to_string(),
            create_error: None,
            fetch_error: None,
            script: Mutex::new(script.into()),
            create_calls: AtomicU32::new(0),
            fetch_calls: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing_create(error: SubmitError) -> Self {
        let mut backend = Self::with_script("unused-token", Vec::new());
        backend.create_error = Some(error);
        backend
    }

    pub fn failing_fetch(token: &str, error: PollError) -> Self {
        let mut backend = Self::with_script(token, Vec::new());
        backend.fetch_error = Some(error);
        backend
    }

    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SubmissionRequest> {
        self.last_request
            .lock()
            .expect("last_request lock should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl JudgeBackend for ScriptedBackend {
    async fn create_submission(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionToken, SubmitError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .expect("last_request lock should not be poisoned") = Some(request.clone());

        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }
        Ok(SubmissionToken::new(self.token.clone()))
    }

    async fn fetch_submission(
        &self,
        _token: &SubmissionToken,
    ) -> Result<SubmissionSnapshot, PollError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.fetch_error {
            return Err(error.clone());
        }

        let mut script = self
            .script
            .lock()
            .expect("script lock should not be poisoned");
        Ok(script
            .pop_front()
            .unwrap_or_else(|| SubmissionSnapshot::with_status(SubmissionStatus::Queued)))
    }
}

pub fn snapshot(status: SubmissionStatus) -> SubmissionSnapshot {
    SubmissionSnapshot::with_status(status)
}

pub fn accepted_with_stdout(encoded_stdout: &str) -> SubmissionSnapshot {
    SubmissionSnapshot {
        status: SubmissionStatus::Accepted,
        stdout: Some(encoded_stdout.to_string()),
        stderr: None,
        compile_output: None,
        memory_kb: Some(3036.0),
        time_sec: Some(0.002),
    }
}
