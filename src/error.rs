//! Error types used by the embedded probes.
//!
//! The hub itself is infallible: registration, de-registration and
//! notification have no error conditions, and probe start/stop failures are
//! the probe's own to signal. [`ProbeError`] covers the one fallible surface
//! this crate ships — constructing an embedded probe from configuration.

use thiserror::Error;

/// # Errors produced while constructing an embedded probe.
///
/// Returned by embedded probe constructors (`PollingProbe::new`,
/// `PollingConfig::with_endpoints`); never by the hub.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe configuration lists no endpoints to check against.
    #[error("no probe endpoints configured")]
    NoEndpoints,

    /// An endpoint string could not be parsed as a socket address.
    #[error("invalid probe endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// The offending endpoint string.
        endpoint: String,
        /// Parse failure detail.
        reason: String,
    },
}

impl ProbeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use reachvisor::ProbeError;
    ///
    /// assert_eq!(ProbeError::NoEndpoints.as_label(), "probe_no_endpoints");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ProbeError::NoEndpoints => "probe_no_endpoints",
            ProbeError::InvalidEndpoint { .. } => "probe_invalid_endpoint",
        }
    }
}
