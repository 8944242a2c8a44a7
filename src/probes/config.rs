//! # Polling probe configuration.
//!
//! [`PollingConfig`] controls how [`PollingProbe`](super::PollingProbe)
//! checks connectivity: which endpoints to try, how often, and how long a
//! single connection attempt may take.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use reachvisor::PollingConfig;
//!
//! let mut cfg = PollingConfig::default();
//! cfg.interval = Duration::from_secs(5);
//! cfg.connect_timeout = Duration::from_secs(1);
//!
//! assert!(!cfg.endpoints.is_empty());
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ProbeError;

/// Configuration for the TCP connect-based polling probe.
///
/// The network counts as reachable if any endpoint accepts a connection
/// within `connect_timeout`; endpoints are tried in order.
#[derive(Clone, Debug)]
pub struct PollingConfig {
    /// Delay between connectivity checks.
    pub interval: Duration,
    /// Per-endpoint connection timeout.
    pub connect_timeout: Duration,
    /// Endpoints to attempt, in order.
    pub endpoints: Vec<SocketAddr>,
}

impl Default for PollingConfig {
    /// Provides a default configuration:
    /// - `interval = 10s`
    /// - `connect_timeout = 3s`
    /// - `endpoints = [1.1.1.1:53, 8.8.8.8:53]` (public DNS resolvers,
    ///   reachable without name resolution)
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
            endpoints: vec![
                SocketAddr::from(([1, 1, 1, 1], 53)),
                SocketAddr::from(([8, 8, 8, 8], 53)),
            ],
        }
    }
}

impl PollingConfig {
    /// Builds a configuration from endpoint strings, keeping the default
    /// timing.
    ///
    /// # Errors
    /// - [`ProbeError::NoEndpoints`] if `endpoints` is empty.
    /// - [`ProbeError::InvalidEndpoint`] if a string does not parse as a
    ///   socket address (`host:port`, numeric host).
    ///
    /// # Example
    /// ```
    /// use reachvisor::PollingConfig;
    ///
    /// let cfg = PollingConfig::with_endpoints(["127.0.0.1:4984"]).unwrap();
    /// assert_eq!(cfg.endpoints.len(), 1);
    ///
    /// assert!(PollingConfig::with_endpoints(["not an address"]).is_err());
    /// ```
    pub fn with_endpoints<I, S>(endpoints: I) -> Result<Self, ProbeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for endpoint in endpoints {
            let endpoint = endpoint.as_ref();
            let addr: SocketAddr =
                endpoint
                    .parse()
                    .map_err(|e| ProbeError::InvalidEndpoint {
                        endpoint: endpoint.to_string(),
                        reason: format!("{e}"),
                    })?;
            parsed.push(addr);
        }
        if parsed.is_empty() {
            return Err(ProbeError::NoEndpoints);
        }
        Ok(Self {
            endpoints: parsed,
            ..Self::default()
        })
    }
}
