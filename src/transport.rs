//! HTTP 传输层
//!
//! 客户端核心不直接访问网络，统一通过 [`HttpTransport`] trait 委托：
//! 生产默认使用 [`UreqTransport`]，测试注入 mock 实现。
//! 任何满足该契约的 HTTP 栈都可以接入。

use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use tracing::trace;
use ureq::Agent;

/// 传输层请求参数
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: String,
    pub url: String,
    /// Basic 认证凭据 (account_id, license_key)
    pub basic_auth: Option<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// 传输层响应：原始 body 字符串，期望是 JSON 文本
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub body: String,
}

/// 传输层错误（连接 / 超时 / TLS 等，携带底层原因）
#[derive(Debug, Clone)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// HTTP 传输 trait
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 执行一次 HTTP 请求，返回原始响应 body
    async fn perform_request(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError>;

    /// 获取 transport 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 全局 HTTP Agent（ureq 的 Agent 是 Send + Sync）
///
/// 超时按请求设置，所以 Agent 本身无状态、进程内共享一个即可。
/// 远端把业务错误放在 4xx 的 JSON body 里，关闭 http_status_as_error
/// 让非 2xx 的 body 继续流向 normalizer。
static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent() -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into()
    })
}

/// 默认传输实现
///
/// 同步的 ureq 调用放在 spawn_blocking 线程池中执行，不阻塞异步 runtime。
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }

    /// 同步执行请求（在 spawn_blocking 中调用）
    fn perform_sync(request: TransportRequest) -> Result<TransportResponse, TransportError> {
        if !request.method.eq_ignore_ascii_case("GET") {
            return Err(TransportError::new(format!(
                "unsupported method: {}",
                request.method
            )));
        }

        let agent = get_agent();

        let mut builder = agent
            .get(&request.url)
            .config()
            .timeout_global(Some(request.timeout))
            .build();

        if let Some((account_id, license_key)) = &request.basic_auth {
            let token = base64::engine::general_purpose::STANDARD
                .encode(format!("{}:{}", account_id, license_key));
            builder = builder.header("Authorization", format!("Basic {}", token).as_str());
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .call()
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| TransportError::new(e.to_string()))?;

        trace!("HTTP {} from {} ({} bytes)", status, request.url, body.len());

        Ok(TransportResponse { body })
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn perform_request(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        tokio::task::spawn_blocking(move || Self::perform_sync(request))
            .await
            .unwrap_or_else(|e| Err(TransportError::new(format!("worker task failed: {}", e))))
    }

    fn name(&self) -> &'static str {
        "ureq"
    }
}
