//! Lookup client (validation + request building)
//!
//! `GeoClient` owns an immutable [`GeoConfig`] and a transport handle.
//! Every lookup validates its input first (an invalid service name or
//! target returns without touching the network), then builds the transport
//! parameters and forwards the raw outcome to the response normalizer.
//!
//! Three calling shapes, as explicit overloads:
//!
//! ```text
//! lookup(target)                       : configured default service
//! lookup_with_service(service, target) : per-call override by name
//! lookup_request(LookupRequest)        : structured form
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::config::GeoConfig;
use crate::errors::Result;
use crate::response::{LookupResult, normalize_response};
use crate::structs::{LookupRequest, Service, Target};
use crate::transport::{HttpTransport, TransportRequest, UreqTransport};

/// 固定 User-Agent，标识客户端
const USER_AGENT: &str = concat!("geolookup/", env!("CARGO_PKG_VERSION"));
/// 远端 API 版本，编码在 Accept header 中
const API_VERSION: &str = "2.1";

/// GeoIP2 web services client.
///
/// Cloning is cheap; clones share the transport and see the same
/// configuration. Concurrent lookups need no locking since the
/// configuration is read-only after construction.
#[derive(Clone)]
pub struct GeoClient {
    config: GeoConfig,
    transport: Arc<dyn HttpTransport>,
}

impl GeoClient {
    /// Create a client with the crate-default transport.
    pub fn new(config: GeoConfig) -> Self {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    /// Create a client with a caller-supplied transport implementation.
    pub fn with_transport(config: GeoConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    /// Look up `target` using the configured default service.
    ///
    /// `target` is an IPv4/IPv6 literal or the sentinel `"me"`.
    pub async fn lookup(&self, target: &str) -> Result<LookupResult> {
        self.run_lookup(self.config.service, target).await
    }

    /// Look up `target` with a per-call service override.
    ///
    /// The override must match `country`, `city` or `insights` exactly.
    pub async fn lookup_with_service(&self, service: &str, target: &str) -> Result<LookupResult> {
        let service: Service = service.parse()?;
        self.run_lookup(service, target).await
    }

    /// Structured-input form; a missing `service` falls back to the
    /// configured default.
    pub async fn lookup_request(&self, request: LookupRequest) -> Result<LookupResult> {
        let service = match &request.service {
            Some(name) => name.parse()?,
            None => self.config.service,
        };
        self.run_lookup(service, &request.target).await
    }

    async fn run_lookup(&self, service: Service, target: &str) -> Result<LookupResult> {
        let target: Target = target.parse()?;
        let request = self.build_request(service, &target);

        debug!(
            "GeoIP lookup via {}: {} {}",
            self.transport.name(),
            request.method,
            request.url
        );

        let outcome = self.transport.perform_request(request).await;
        normalize_response(outcome)
    }

    /// Build transport parameters. Validation is done by this point; the
    /// outcome is forwarded to the normalizer unmodified.
    fn build_request(&self, service: Service, target: &Target) -> TransportRequest {
        TransportRequest {
            method: "GET".to_string(),
            url: format!("{}{}/{}", self.config.endpoint, service, target),
            basic_auth: Some(self.config.basic_auth()),
            headers: vec![
                (
                    "Accept".to_string(),
                    format!(
                        "application/vnd.maxmind.com-{}+json; charset=UTF-8; version={}",
                        service, API_VERSION
                    ),
                ),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
            timeout: self.config.request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GeoClient {
        GeoClient::new(GeoConfig::new("42", "license"))
    }

    #[test]
    fn test_build_request_shape() {
        let client = test_client();
        let target: Target = "8.8.8.8".parse().unwrap();
        let request = client.build_request(Service::City, &target);

        assert_eq!(request.method, "GET");
        assert_eq!(
            request.url,
            "https://geoip.maxmind.com/geoip/v2.1/city/8.8.8.8"
        );
        assert_eq!(
            request.basic_auth,
            Some(("42".to_string(), "license".to_string()))
        );
        assert_eq!(request.timeout, std::time::Duration::from_millis(5_000));
    }

    #[test]
    fn test_accept_header_encodes_service_and_version() {
        let client = test_client();
        let target: Target = "me".parse().unwrap();
        let request = client.build_request(Service::Insights, &target);

        let accept = request
            .headers
            .iter()
            .find(|(name, _)| name == "Accept")
            .map(|(_, value)| value.as_str())
            .unwrap();
        assert_eq!(
            accept,
            "application/vnd.maxmind.com-insights+json; charset=UTF-8; version=2.1"
        );
    }

    #[test]
    fn test_user_agent_identifies_client() {
        let client = test_client();
        let target: Target = "me".parse().unwrap();
        let request = client.build_request(Service::City, &target);

        let user_agent = request
            .headers
            .iter()
            .find(|(name, _)| name == "User-Agent")
            .map(|(_, value)| value.as_str())
            .unwrap();
        assert!(user_agent.starts_with("geolookup/"));
    }
}
