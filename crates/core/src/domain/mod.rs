mod backend;
mod result;
mod status;
mod target;
pub mod transcode;

pub use backend::{
    JudgeBackend, PollError, SubmissionRequest, SubmissionSnapshot, SubmissionToken, SubmitError,
};
pub use result::ExecutionResult;
pub use status::SubmissionStatus;
pub use target::{ExecutionTarget, default_target, find_target, targets};
pub use transcode::{TranscodeError, decode, encode};
