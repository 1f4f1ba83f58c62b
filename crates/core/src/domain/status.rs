/// Lifecycle state of a remote submission, mapped from the judge0
/// `status.id` field. Only `Queued` and `Processing` are non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Queued,
    Processing,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompileError,
    RuntimeError,
    Other(u16),
}

impl SubmissionStatus {
    pub fn from_status_id(id: u16) -> Self {
        match id {
            1 => Self::Queued,
            2 => Self::Processing,
            3 => Self::Accepted,
            4 => Self::WrongAnswer,
            5 => Self::TimeLimitExceeded,
            6 => Self::CompileError,
            7..=12 => Self::RuntimeError,
            other => Self::Other(other),
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Queued | Self::Processing)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Queued => "In Queue",
            Self::Processing => "Processing",
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::CompileError => "Compilation Error",
            Self::RuntimeError => "Runtime Error",
            Self::Other(13) => "Internal Error",
            Self::Other(14) => "Exec Format Error",
            Self::Other(_) => "Unknown Status",
        }
    }
}
