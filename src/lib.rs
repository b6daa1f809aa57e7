//! Geolookup - MaxMind GeoIP2 web services client
//!
//! This library wraps the GeoIP2 Precision web services (v2.1): it validates
//! a lookup locally, issues an authenticated GET against the remote
//! endpoint, and normalizes the JSON answer into a consistent shape.
//!
//! # Architecture
//! - `client`: lookup orchestration (validation + request building)
//! - `config`: per-client immutable configuration
//! - `response`: outcome classification and subdivision normalization
//! - `transport`: HTTP transport seam and the default ureq implementation
//! - `structs`: shared input types (service tier, target, request form)
//! - `errors`: crate-wide error type
//!
//! # Example
//! ```no_run
//! use geolookup::{GeoClient, GeoConfig, Service};
//!
//! # #[tokio::main]
//! # async fn main() -> geolookup::Result<()> {
//! let config = GeoConfig::new("42", "license_key").with_service(Service::Insights);
//! let client = GeoClient::new(config);
//!
//! let result = client.lookup("8.8.8.8").await?;
//! println!("{:?} {:?}", result.country_iso_code(), result.city_name());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod response;
pub mod structs;
pub mod transport;

pub use client::GeoClient;
pub use config::GeoConfig;
pub use errors::{GeolookupError, Result};
pub use response::LookupResult;
pub use structs::{LookupRequest, Service, Target};
pub use transport::{
    HttpTransport, TransportError, TransportRequest, TransportResponse, UreqTransport,
};
