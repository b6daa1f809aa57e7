use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GeolookupError;

/// Service tier of the GeoIP2 web services.
///
/// Selects both the endpoint path segment and the richness of the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Country,
    #[default]
    City,
    Insights,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Country => "country",
            Service::City => "city",
            Service::Insights => "insights",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = GeolookupError;

    /// 服务名必须精确匹配 country / city / insights（区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(Service::Country),
            "city" => Ok(Service::City),
            "insights" => Ok(Service::Insights),
            other => Err(GeolookupError::invalid_service(format!(
                "unknown service \"{}\", expected country, city or insights",
                other
            ))),
        }
    }
}

/// Lookup target: an IP literal, or the sentinel `me` meaning the caller's
/// own observed address.
///
/// Hostnames are rejected. Anything that is neither a valid IPv4/IPv6
/// literal nor exactly `"me"` fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Ip(IpAddr),
    Me,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Ip(ip) => write!(f, "{}", ip),
            Target::Me => f.write_str("me"),
        }
    }
}

impl FromStr for Target {
    type Err = GeolookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "me" {
            return Ok(Target::Me);
        }
        match s.parse::<IpAddr>() {
            Ok(ip) => Ok(Target::Ip(ip)),
            Err(_) => Err(GeolookupError::invalid_target(format!(
                "\"{}\" is not an IP literal or \"me\"",
                s
            ))),
        }
    }
}

/// Structured lookup input, the explicit form of the object-shaped call.
///
/// `service` is an optional per-call override of the configured default and
/// is validated with the same exact-match rule as the string overload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(alias = "ip")]
    pub target: String,
}

impl LookupRequest {
    pub fn new<T: Into<String>>(target: T) -> Self {
        Self {
            service: None,
            target: target.into(),
        }
    }

    pub fn with_service<T: Into<String>>(mut self, service: T) -> Self {
        self.service = Some(service.into());
        self
    }
}
