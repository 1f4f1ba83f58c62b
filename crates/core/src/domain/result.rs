use super::SubmissionStatus;

/// Decoded outcome of one completed submission. Produced once when the
/// poll loop observes a terminal status; replaced by the next submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub status: SubmissionStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub memory_kb: Option<f64>,
    pub time_sec: Option<f64>,
}

impl ExecutionResult {
    /// The text the output panel should show for this result.
    ///
    /// Compile errors show the compiler output, accepted runs show stdout,
    /// time-limit results show a fixed message, and every other terminal
    /// status shows stderr.
    pub fn display_output(&self) -> String {
        match self.status {
            SubmissionStatus::CompileError => self.compile_output.clone().unwrap_or_default(),
            SubmissionStatus::Accepted => self.stdout.clone().unwrap_or_default(),
            SubmissionStatus::TimeLimitExceeded => "Time Limit Exceeded".to_string(),
            _ => self.stderr.clone().unwrap_or_default(),
        }
    }
}
