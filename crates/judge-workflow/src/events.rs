use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// 通知级别，对应 UI 层的成功/失败提示样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// 工作流对外广播的事件类型。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// 远端已受理提交，返回轮询令牌。
    SubmissionCreated {
        /// 提交令牌。
        token: String,
    },
    /// 完成一次状态查询。
    StatusPolled {
        /// 提交令牌。
        token: String,
        /// 第几次查询，从 1 开始。
        attempt: u32,
        /// 本次查询得到的状态描述。
        status: String,
        /// 该状态是否为终态。
        terminal: bool,
    },
    /// 提交达到终态，产出执行结果。
    SubmissionCompleted {
        /// 终态状态描述。
        status: String,
        /// 输出面板应展示的文本。
        output: String,
    },
    /// 面向用户的通知（由 UI 层渲染）。
    Notice {
        /// 通知级别。
        kind: NoticeKind,
        /// 通知文本。
        message: String,
        /// 展示时长（毫秒）。
        duration_ms: u64,
    },
}

impl WorkflowEvent {
    /// 构造一条成功通知。
    pub fn success_notice(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            duration_ms,
        }
    }

    /// 构造一条错误通知。
    pub fn error_notice(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::Notice {
            kind: NoticeKind::Error,
            message: message.into(),
            duration_ms,
        }
    }
}

/// 基于 `tokio::broadcast` 的事件广播器。
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<WorkflowEvent>,
}

impl EventBroadcaster {
    /// 创建事件广播器。
    ///
    /// `capacity` 表示内部广播队列容量。
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// 广播一个事件。
    pub fn emit(&self, event: WorkflowEvent) {
        let _ = self.sender.send(event);
    }

    /// 订阅事件流。
    pub fn subscribe(&self) -> EventStream {
        EventStream {
            receiver: self.sender.subscribe(),
        }
    }
}

/// 事件接收流包装器。
#[derive(Debug)]
pub struct EventStream {
    receiver: broadcast::Receiver<WorkflowEvent>,
}

impl EventStream {
    /// 异步接收下一条事件。
    pub async fn recv(&mut self) -> Result<WorkflowEvent> {
        Ok(self.receiver.recv().await?)
    }

    /// 非阻塞尝试接收一条事件。
    pub fn try_recv(&mut self) -> Result<WorkflowEvent> {
        Ok(self.receiver.try_recv()?)
    }
}
