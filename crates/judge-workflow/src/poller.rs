//! 提交状态轮询器。
//!
//! 按固定间隔串行查询提交状态，直到出现终态或查询失败；
//! 等待通过 `tokio::time::sleep` 挂起任务，不阻塞线程。

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use bianyi_code_core::domain::{
    ExecutionResult, JudgeBackend, PollError, SubmissionSnapshot, SubmissionStatus,
    SubmissionToken, transcode,
};

use crate::error::{Result, WorkflowError};
use crate::events::{EventBroadcaster, WorkflowEvent};

/// 状态轮询器。
pub struct StatusPoller {
    backend: Arc<dyn JudgeBackend>,
    events: Arc<EventBroadcaster>,
    interval: Duration,
    max_attempts: Option<u32>,
}

impl StatusPoller {
    /// 创建状态轮询器。
    ///
    /// `max_attempts` 为 `None` 时不设轮询上限。
    pub fn new(
        backend: Arc<dyn JudgeBackend>,
        events: Arc<EventBroadcaster>,
        interval: Duration,
        max_attempts: Option<u32>,
    ) -> Self {
        Self {
            backend,
            events,
            interval,
            max_attempts,
        }
    }

    /// 轮询直到提交达到终态，返回解码后的执行结果。
    ///
    /// 查询严格串行：下一次查询在上一次返回并等满间隔后才发出。
    /// 查询失败立即中止，不做重试。
    #[tracing::instrument(skip(self))]
    pub async fn poll_until_done(&self, token: &SubmissionToken) -> Result<ExecutionResult> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let snapshot = self.backend.fetch_submission(token).await?;
            let status = snapshot.status;

            info!(
                token = %token,
                attempt,
                status = status.description(),
                "submission status polled"
            );
            self.events.emit(WorkflowEvent::StatusPolled {
                token: token.to_string(),
                attempt,
                status: status.description().to_string(),
                terminal: status.is_terminal(),
            });

            if status.is_terminal() {
                return Ok(assemble_result(snapshot)?);
            }

            if let Some(max) = self.max_attempts {
                if attempt >= max {
                    return Err(WorkflowError::PollBudgetExhausted { attempts: attempt });
                }
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}

/// 将终态快照解码为执行结果。
///
/// 超时结果不做任何解码，展示文本固定；其余终态按需解码各输出字段。
fn assemble_result(snapshot: SubmissionSnapshot) -> std::result::Result<ExecutionResult, PollError> {
    let decode_field = |field: &Option<String>| -> std::result::Result<Option<String>, PollError> {
        field
            .as_deref()
            .map(transcode::decode)
            .transpose()
            .map_err(PollError::from)
    };

    let (stdout, stderr, compile_output) = match snapshot.status {
        SubmissionStatus::TimeLimitExceeded => (None, None, None),
        _ => (
            decode_field(&snapshot.stdout)?,
            decode_field(&snapshot.stderr)?,
            decode_field(&snapshot.compile_output)?,
        ),
    };

    Ok(ExecutionResult {
        status: snapshot.status,
        stdout,
        stderr,
        compile_output,
        memory_kb: snapshot.memory_kb,
        time_sec: snapshot.time_sec,
    })
}
