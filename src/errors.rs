use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeolookupError {
    InvalidService(String),
    InvalidTarget(String),
    RequestFailed(String),
    InvalidData(String),
    Api {
        code: Option<String>,
        message: String,
    },
}

impl GeolookupError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GeolookupError::InvalidService(_) => "E001",
            GeolookupError::InvalidTarget(_) => "E002",
            GeolookupError::RequestFailed(_) => "E003",
            GeolookupError::InvalidData(_) => "E004",
            GeolookupError::Api { .. } => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GeolookupError::InvalidService(_) => "Invalid Service",
            GeolookupError::InvalidTarget(_) => "Invalid Target",
            GeolookupError::RequestFailed(_) => "Request Failed",
            GeolookupError::InvalidData(_) => "Invalid Data",
            GeolookupError::Api { .. } => "API Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GeolookupError::InvalidService(msg) => msg,
            GeolookupError::InvalidTarget(msg) => msg,
            GeolookupError::RequestFailed(msg) => msg,
            GeolookupError::InvalidData(msg) => msg,
            GeolookupError::Api { message, .. } => message,
        }
    }

    /// 远端 API 错误代码（仅 `Api` 变体存在）
    pub fn api_code(&self) -> Option<&str> {
        match self {
            GeolookupError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        match self.api_code() {
            Some(code) => format!("{} ({}): {}", self.error_type(), code, self.message()),
            None => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for GeolookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GeolookupError {}

// 便捷的构造函数
impl GeolookupError {
    pub fn invalid_service<T: Into<String>>(msg: T) -> Self {
        GeolookupError::InvalidService(msg.into())
    }

    pub fn invalid_target<T: Into<String>>(msg: T) -> Self {
        GeolookupError::InvalidTarget(msg.into())
    }

    pub fn request_failed<T: Into<String>>(msg: T) -> Self {
        GeolookupError::RequestFailed(msg.into())
    }

    pub fn invalid_data<T: Into<String>>(msg: T) -> Self {
        GeolookupError::InvalidData(msg.into())
    }

    pub fn api<T: Into<String>>(code: Option<String>, message: T) -> Self {
        GeolookupError::Api {
            code,
            message: message.into(),
        }
    }
}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for GeolookupError {
    fn from(err: serde_json::Error) -> Self {
        GeolookupError::InvalidData(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeolookupError>;
