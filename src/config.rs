use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::structs::Service;

/// MaxMind GeoIP2 web services v2.1 基础地址
pub const DEFAULT_ENDPOINT: &str = "https://geoip.maxmind.com/geoip/v2.1/";
/// 默认请求超时（毫秒）
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Per-client configuration.
///
/// Built once, immutable afterwards; every lookup issued through the owning
/// client reads from the same value. Credentials are not validated here;
/// bad credentials surface as an API error from the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub service: Service,
    /// Base URL the service path is appended to; include the trailing slash.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            account_id: None,
            license_key: None,
            service: Service::default(),
            endpoint: default_endpoint(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl GeoConfig {
    pub fn new<A: Into<String>, L: Into<String>>(account_id: A, license_key: L) -> Self {
        Self {
            account_id: Some(account_id.into()),
            license_key: Some(license_key.into()),
            ..Default::default()
        }
    }

    /// 默认服务等级（未指定时为 city）
    pub fn with_service(mut self, service: Service) -> Self {
        self.service = service;
        self
    }

    pub fn with_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Basic 认证凭据对；缺失的一侧以空串参与
    pub(crate) fn basic_auth(&self) -> (String, String) {
        (
            self.account_id.clone().unwrap_or_default(),
            self.license_key.clone().unwrap_or_default(),
        )
    }
}
