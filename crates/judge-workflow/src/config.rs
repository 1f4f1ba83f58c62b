use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

#[derive(Debug, Deserialize)]
pub struct WorkflowConfig {
    pub judge: JudgeServiceConfig,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// 轮询次数上限；缺省为不设上限，与观察到的原始行为一致。
    #[serde(default)]
    pub max_poll_attempts: Option<u32>,
    #[serde(default = "default_event_buffer_size")]
    pub event_buffer_size: usize,
}

impl WorkflowConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize workflow config")
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// 远端执行服务的接入配置。凭据由配置注入，不写进代码。
#[derive(Debug, Deserialize, Clone)]
pub struct JudgeServiceConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_host: Option<String>,
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_event_buffer_size() -> usize {
    1_000
}

#[cfg(test)]
mod tests {
    use super::WorkflowConfig;

    #[test]
    fn test_parse_config() {
        let raw = r#"
poll_interval_ms = 500
max_poll_attempts = 30
event_buffer_size = 256

[judge]
base_url = "https://judge0-ce.p.rapidapi.com"
api_key = "test-key"
api_host = "judge0-ce.p.rapidapi.com"
"#;

        let config = WorkflowConfig::from_str(raw).expect("config should parse");
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.max_poll_attempts, Some(30));
        assert_eq!(config.event_buffer_size, 256);
        assert_eq!(config.judge.base_url, "https://judge0-ce.p.rapidapi.com");
        assert_eq!(config.judge.api_key.as_deref(), Some("test-key"));
        assert_eq!(
            config.judge.api_host.as_deref(),
            Some("judge0-ce.p.rapidapi.com")
        );
    }

    #[test]
    fn test_defaults() {
        let raw = r#"
[judge]
base_url = "http://127.0.0.1:2358"
"#;

        let config = WorkflowConfig::from_str(raw).expect("config should parse");
        assert_eq!(config.poll_interval_ms, 2_000);
        assert_eq!(config.max_poll_attempts, None);
        assert_eq!(config.event_buffer_size, 1_000);
        assert!(config.judge.api_key.is_none());
        assert!(config.judge.api_host.is_none());
    }

    #[test]
    fn test_missing_judge_section_is_rejected() {
        let err = WorkflowConfig::from_str("poll_interval_ms = 100").expect_err("should fail");
        assert!(err.to_string().contains("failed to deserialize"));
    }
}
