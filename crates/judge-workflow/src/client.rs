//! judge0 提交客户端实现。
//!
//! 该模块通过 HTTP API 与 judge0 兼容服务通信：
//! 创建提交得到令牌，随后按令牌查询提交状态。

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::info;

use bianyi_code_api_types::{CreateSubmissionBody, CreateSubmissionResponse, SubmissionDetails};
use bianyi_code_core::domain::{
    JudgeBackend, PollError, SubmissionRequest, SubmissionSnapshot, SubmissionStatus,
    SubmissionToken, SubmitError,
};

use crate::config::JudgeServiceConfig;

/// judge0 客户端。
///
/// 每次调用只发出一个网络请求，不做重试；限流（HTTP 429）
/// 与其他传输失败由调用方决定如何处理。
pub struct Judge0Client {
    client: Client,
    config: JudgeServiceConfig,
}

impl Judge0Client {
    /// 创建新的 judge0 客户端。
    pub fn new(config: JudgeServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn submissions_url(&self) -> String {
        format!("{}/submissions", self.config.base_url.trim_end_matches('/'))
    }

    fn apply_auth(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(key) = &self.config.api_key {
            request = request.header("X-RapidAPI-Key", key);
        }
        if let Some(host) = &self.config.api_host {
            request = request.header("X-RapidAPI-Host", host);
        }
        request
    }
}

#[async_trait]
impl JudgeBackend for Judge0Client {
    #[tracing::instrument(skip(self, request))]
    async fn create_submission(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionToken, SubmitError> {
        let body = CreateSubmissionBody {
            language_id: request.target_id,
            source_code: request.source_code.clone(),
            stdin: request.stdin.clone(),
        };

        let response = self
            .apply_auth(self.client.post(self.submissions_url()))
            .query(&[("base64_encoded", "true"), ("wait", "false"), ("fields", "*")])
            .json(&body)
            .send()
            .await
            .map_err(|err| SubmitError::Transient(err.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(SubmitError::QuotaExceeded);
        }

        let created: CreateSubmissionResponse = response
            .error_for_status()
            .map_err(|err| SubmitError::Transient(err.to_string()))?
            .json()
            .await
            .map_err(|err| SubmitError::Transient(err.to_string()))?;

        let token = SubmissionToken::new(created.token);
        info!(token = %token, language_id = request.target_id, "submission created");
        Ok(token)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_submission(
        &self,
        token: &SubmissionToken,
    ) -> Result<SubmissionSnapshot, PollError> {
        let url = format!("{}/{}", self.submissions_url(), token.as_str());

        let details: SubmissionDetails = self
            .apply_auth(self.client.get(url))
            .query(&[("base64_encoded", "true"), ("fields", "*")])
            .send()
            .await
            .map_err(|err| PollError::Network(err.to_string()))?
            .error_for_status()
            .map_err(|err| PollError::Network(err.to_string()))?
            .json()
            .await
            .map_err(|err| PollError::Network(err.to_string()))?;

        let status_info = details
            .status
            .ok_or_else(|| PollError::Network("response is missing the status object".to_string()))?;

        Ok(SubmissionSnapshot {
            status: SubmissionStatus::from_status_id(status_info.id),
            stdout: details.stdout,
            stderr: details.stderr,
            compile_output: details.compile_output,
            memory_kb: details.memory,
            time_sec: details.time.as_deref().and_then(|t| t.parse().ok()),
        })
    }
}
