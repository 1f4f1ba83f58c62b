//! 编辑器会话状态。
//!
//! 对应前端编辑器组件持有的状态：代码文本、选中的执行目标、
//! 主题标识与自定义输入。主题只是不透明字符串，由 UI 层解释。

use bianyi_code_core::domain::{ExecutionTarget, default_target, find_target};

const DEFAULT_SNIPPET: &str = r#"console.log("Hello world!");"#;
const DEFAULT_THEME: &str = "oceanic-next";

/// 一个编辑器会话的全部 UI 侧状态。
#[derive(Debug, Clone)]
pub struct EditorSession {
    code: String,
    target: &'static ExecutionTarget,
    theme: String,
    stdin: String,
}

impl EditorSession {
    /// 创建带默认内容的会话：JavaScript 目标与示例代码。
    pub fn new() -> Self {
        Self {
            code: DEFAULT_SNIPPET.to_string(),
            target: default_target(),
            theme: DEFAULT_THEME.to_string(),
            stdin: String::new(),
        }
    }

    /// 编辑器文本变更回调。
    pub fn on_text_change(&mut self, new_text: impl Into<String>) {
        self.code = new_text.into();
    }

    /// 切换执行目标；未知 id 保持当前选择并返回 `false`。
    pub fn select_target(&mut self, target_id: u32) -> bool {
        match find_target(target_id) {
            Some(target) => {
                self.target = target;
                true
            }
            None => false,
        }
    }

    /// 切换主题。
    pub fn select_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    /// 设置自定义输入。
    pub fn set_stdin(&mut self, stdin: impl Into<String>) {
        self.stdin = stdin.into();
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn target(&self) -> &'static ExecutionTarget {
        self.target
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn stdin(&self) -> &str {
        &self.stdin
    }

    /// 代码非空时才允许提交。
    pub fn can_submit(&self) -> bool {
        !self.code.is_empty()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::EditorSession;

    #[test]
    fn new_session_has_javascript_defaults() {
        let session = EditorSession::new();

        assert_eq!(session.target().id, 63);
        assert_eq!(session.theme(), "oceanic-next");
        assert_eq!(session.code(), r#"console.log("Hello world!");"#);
        assert!(session.stdin().is_empty());
        assert!(session.can_submit());
    }

    #[test]
    fn text_change_replaces_code() {
        let mut session = EditorSession::new();
        session.on_text_change("print(1)");

        assert_eq!(session.code(), "print(1)");
    }

    #[test]
    fn empty_code_blocks_submission() {
        let mut session = EditorSession::new();
        session.on_text_change("");

        assert!(!session.can_submit());
    }

    #[test]
    fn unknown_target_is_rejected_and_keeps_selection() {
        let mut session = EditorSession::new();

        assert!(session.select_target(71));
        assert_eq!(session.target().id, 71);

        assert!(!session.select_target(9999));
        assert_eq!(session.target().id, 71);
    }

    #[test]
    fn theme_is_an_opaque_string() {
        let mut session = EditorSession::new();
        session.select_theme("cobalt");

        assert_eq!(session.theme(), "cobalt");
    }
}
