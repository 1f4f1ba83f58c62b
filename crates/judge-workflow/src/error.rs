use bianyi_code_core::domain::{PollError, SubmitError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("源代码为空")]
    EmptySource,

    #[error("不支持的执行目标: {0}")]
    UnknownTarget(u32),

    #[error("已有提交在执行中")]
    SubmissionInFlight,

    #[error("提交失败: {0}")]
    Submit(#[from] SubmitError),

    #[error("状态轮询失败: {0}")]
    Poll(#[from] PollError),

    #[error("轮询次数达到上限: {attempts}")]
    PollBudgetExhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
