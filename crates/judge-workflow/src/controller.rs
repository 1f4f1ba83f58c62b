//! 提交工作流控制器。
//!
//! 控制器独占持有工作流状态，负责 提交 → 轮询 → 通知 的编排。
//! 同一时刻最多允许一个提交在执行中；提交任务被取消时，
//! 守卫析构会把状态复位，控制器始终可继续使用。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use bianyi_code_core::domain::{
    ExecutionResult, JudgeBackend, SubmissionRequest, SubmissionToken, SubmitError, find_target,
};

use crate::client::Judge0Client;
use crate::config::WorkflowConfig;
use crate::error::{Result, WorkflowError};
use crate::events::{EventBroadcaster, EventStream, WorkflowEvent};
use crate::poller::StatusPoller;

const SUCCESS_MESSAGE: &str = "Compiled Successfully!";
const QUOTA_MESSAGE: &str = "Quota of 100 requests exceeded for the Day";
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong! Please try again.";

const SUCCESS_DURATION_MS: u64 = 1_000;
const QUOTA_DURATION_MS: u64 = 10_000;
const ERROR_DURATION_MS: u64 = 1_000;

/// 正在执行中的提交的元数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSubmission {
    pub token: SubmissionToken,
    pub started_at: DateTime<Utc>,
}

/// 工作流状态，由控制器独占持有。
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    pub processing: bool,
    pub last_result: Option<ExecutionResult>,
    pub active: Option<ActiveSubmission>,
}

/// 工作流控制器。
pub struct WorkflowController {
    backend: Arc<dyn JudgeBackend>,
    events: Arc<EventBroadcaster>,
    poller: StatusPoller,
    state: Mutex<WorkflowState>,
}

impl WorkflowController {
    /// 基于给定后端创建控制器。
    pub fn new(config: &WorkflowConfig, backend: Arc<dyn JudgeBackend>) -> Self {
        info!(
            poll_interval_ms = config.poll_interval_ms,
            max_poll_attempts = ?config.max_poll_attempts,
            event_buffer_size = config.event_buffer_size,
            "initializing workflow controller"
        );

        let events = Arc::new(EventBroadcaster::new(config.event_buffer_size));
        let poller = StatusPoller::new(
            backend.clone(),
            events.clone(),
            config.poll_interval(),
            config.max_poll_attempts,
        );

        Self {
            backend,
            events,
            poller,
            state: Mutex::new(WorkflowState::default()),
        }
    }

    /// 基于配置创建使用 judge0 HTTP 后端的控制器。
    pub fn with_judge0(config: &WorkflowConfig) -> Self {
        let backend = Arc::new(Judge0Client::new(config.judge.clone()));
        Self::new(config, backend)
    }

    /// 提交源代码并等待执行结果。
    ///
    /// 源代码为空或已有提交在执行中时直接拒绝，不发出网络请求。
    /// 执行结果中的编译/运行错误属于正常完成；只有传输或解码
    /// 失败才算工作流失败，失败后 `last_result` 保持不变。
    #[tracing::instrument(skip(self, source_code, stdin))]
    pub async fn submit(
        &self,
        source_code: &str,
        target_id: u32,
        stdin: &str,
    ) -> Result<ExecutionResult> {
        if source_code.is_empty() {
            return Err(WorkflowError::EmptySource);
        }
        if find_target(target_id).is_none() {
            return Err(WorkflowError::UnknownTarget(target_id));
        }

        let _guard = InFlightGuard::acquire(&self.state)?;

        let request = SubmissionRequest::new(target_id, source_code, Some(stdin));
        let token = match self.backend.create_submission(&request).await {
            Ok(token) => token,
            Err(SubmitError::QuotaExceeded) => {
                warn!(target_id, "submission rejected: quota exceeded");
                self.events
                    .emit(WorkflowEvent::error_notice(QUOTA_MESSAGE, QUOTA_DURATION_MS));
                return Err(SubmitError::QuotaExceeded.into());
            }
            Err(err) => {
                warn!(target_id, error = %err, "submission request failed");
                self.events.emit(WorkflowEvent::error_notice(
                    GENERIC_ERROR_MESSAGE,
                    ERROR_DURATION_MS,
                ));
                return Err(err.into());
            }
        };

        lock_state(&self.state).active = Some(ActiveSubmission {
            token: token.clone(),
            started_at: Utc::now(),
        });
        self.events.emit(WorkflowEvent::SubmissionCreated {
            token: token.to_string(),
        });

        match self.poller.poll_until_done(&token).await {
            Ok(result) => {
                info!(
                    token = %token,
                    status = result.status.description(),
                    "submission completed"
                );
                lock_state(&self.state).last_result = Some(result.clone());
                self.events.emit(WorkflowEvent::SubmissionCompleted {
                    status: result.status.description().to_string(),
                    output: result.display_output(),
                });
                self.events.emit(WorkflowEvent::success_notice(
                    SUCCESS_MESSAGE,
                    SUCCESS_DURATION_MS,
                ));
                Ok(result)
            }
            Err(err) => {
                warn!(token = %token, error = %err, "polling failed");
                self.events.emit(WorkflowEvent::error_notice(
                    GENERIC_ERROR_MESSAGE,
                    ERROR_DURATION_MS,
                ));
                Err(err)
            }
        }
    }

    /// 是否有提交正在执行中。
    pub fn is_processing(&self) -> bool {
        lock_state(&self.state).processing
    }

    /// 最近一次成功完成的执行结果。
    pub fn last_result(&self) -> Option<ExecutionResult> {
        lock_state(&self.state).last_result.clone()
    }

    /// 正在执行中的提交的元数据。
    pub fn active_submission(&self) -> Option<ActiveSubmission> {
        lock_state(&self.state).active.clone()
    }

    /// 当前工作流状态快照。
    pub fn state(&self) -> WorkflowState {
        lock_state(&self.state).clone()
    }

    /// 订阅工作流事件。
    pub fn subscribe_events(&self) -> EventStream {
        self.events.subscribe()
    }
}

fn lock_state(state: &Mutex<WorkflowState>) -> MutexGuard<'_, WorkflowState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 单飞守卫：获取时置位 processing，析构时复位并清空 active。
/// 提交任务无论正常返回、出错还是被取消，状态都会复位。
struct InFlightGuard<'a> {
    state: &'a Mutex<WorkflowState>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(state: &'a Mutex<WorkflowState>) -> Result<Self> {
        let mut guard = lock_state(state);
        if guard.processing {
            return Err(WorkflowError::SubmissionInFlight);
        }
        guard.processing = true;
        Ok(Self { state })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut guard = lock_state(self.state);
        guard.processing = false;
        guard.active = None;
    }
}
