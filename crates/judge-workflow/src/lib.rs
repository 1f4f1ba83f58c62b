pub mod client;
pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod events;
pub mod poller;

pub use client::Judge0Client;
pub use config::{JudgeServiceConfig, WorkflowConfig};
pub use controller::{ActiveSubmission, WorkflowController, WorkflowState};
pub use editor::EditorSession;
pub use error::{Result, WorkflowError};
pub use events::{EventBroadcaster, EventStream, NoticeKind, WorkflowEvent};
pub use poller::StatusPoller;
