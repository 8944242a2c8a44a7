//! # Polling reachability probe.
//!
//! [`PollingProbe`] detects connectivity the portable way: a background
//! thread periodically attempts TCP connections against configured
//! endpoints and reports the result as reachable/unreachable transitions.
//! Platforms with a native network-state API should implement
//! [`ReachabilityProbe`] directly instead; this probe is the fallback for
//! environments without one.
//!
//! ## Worker loop
//! ```text
//! start(sink) ──► spawn "reachability-poll" thread
//!                   loop {
//!                     status = any endpoint accepts within connect_timeout?
//!                     if status != last  ──► sink.notify(status)
//!                     wait(interval)  — interrupted by stop() or hub drop
//!                   }
//! ```
//!
//! ## Rules
//! - Only **transitions** are reported; the first check always reports
//!   (the prior state is unknown).
//! - `stop()` signals the worker and returns without joining it; a
//!   notification already in flight lands on an empty registry and is a
//!   no-op.
//! - Repeated `start` without an intervening `stop` is a logged no-op.
//! - [`is_online`](ReachabilityProbe::is_online) performs a live check on
//!   the calling thread, independent of the worker.

use std::net::TcpStream;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::hub::StatusSink;
use crate::status::NetworkStatus;

use super::config::PollingConfig;
use super::probe::ReachabilityProbe;

/// TCP connect-based reachability probe (`polling` feature).
///
/// ## Example
/// ```no_run
/// use std::sync::Arc;
/// use reachvisor::{PollingConfig, PollingProbe, ReachabilityHub};
///
/// # fn main() -> Result<(), reachvisor::ProbeError> {
/// let probe = PollingProbe::new(PollingConfig::default())?;
/// let hub = ReachabilityHub::new(Arc::new(probe));
/// // The worker thread starts with the first registered observer.
/// # Ok(())
/// # }
/// ```
pub struct PollingProbe {
    config: PollingConfig,
    // Shutdown channel of the running worker; None while stopped.
    worker: Mutex<Option<mpsc::Sender<()>>>,
}

impl PollingProbe {
    /// Creates a probe from the given configuration.
    ///
    /// # Errors
    /// [`ProbeError::NoEndpoints`](crate::ProbeError::NoEndpoints) if the
    /// configuration lists no endpoints.
    pub fn new(config: PollingConfig) -> Result<Self, crate::ProbeError> {
        if config.endpoints.is_empty() {
            return Err(crate::ProbeError::NoEndpoints);
        }
        Ok(Self {
            config,
            worker: Mutex::new(None),
        })
    }

    /// One synchronous connectivity check: true if any endpoint accepts.
    fn check(config: &PollingConfig) -> bool {
        config
            .endpoints
            .iter()
            .any(|addr| TcpStream::connect_timeout(addr, config.connect_timeout).is_ok())
    }

    fn run_worker(config: PollingConfig, sink: StatusSink, shutdown: mpsc::Receiver<()>) {
        let mut last: Option<NetworkStatus> = None;
        loop {
            let status = NetworkStatus::from_online(Self::check(&config));
            if last != Some(status) {
                last = Some(status);
                debug!(status = status.as_label(), "connectivity transition");
                sink.notify(status);
            }
            if !sink.is_attached() {
                debug!("hub dropped, polling worker exiting");
                return;
            }
            match shutdown.recv_timeout(config.interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                // Explicit stop() signal or the probe itself was dropped.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }
}

impl ReachabilityProbe for PollingProbe {
    fn start(&self, sink: StatusSink) {
        let mut worker = self.worker.lock();
        if worker.is_some() {
            debug!("polling probe already started");
            return;
        }

        let (tx, rx) = mpsc::channel();
        let config = self.config.clone();
        let spawned = thread::Builder::new()
            .name("reachability-poll".into())
            .spawn(move || Self::run_worker(config, sink, rx));
        match spawned {
            Ok(_handle) => {
                debug!(
                    interval = ?self.config.interval,
                    endpoints = self.config.endpoints.len(),
                    "polling probe started"
                );
                *worker = Some(tx);
            }
            Err(e) => error!(error = %e, "failed to spawn polling worker"),
        }
    }

    fn stop(&self) {
        if let Some(shutdown) = self.worker.lock().take() {
            // Signal only; the worker may be mid-delivery and joining here
            // (possibly under the hub lock) could deadlock against it.
            let _ = shutdown.send(());
            debug!("polling probe stopped");
        }
    }

    fn is_online(&self) -> bool {
        Self::check(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::sync::mpsc;
    use std::time::Duration;

    use crate::ProbeError;
    use crate::hub::ReachabilityHub;
    use crate::observers::ReachabilityObserver;

    use super::*;

    fn local_config(addr: std::net::SocketAddr) -> PollingConfig {
        PollingConfig {
            interval: Duration::from_millis(50),
            connect_timeout: Duration::from_millis(500),
            endpoints: vec![addr],
        }
    }

    #[test]
    fn test_rejects_empty_endpoints() {
        let config = PollingConfig {
            endpoints: Vec::new(),
            ..PollingConfig::default()
        };
        let err = PollingProbe::new(config).err().unwrap();
        assert!(matches!(err, ProbeError::NoEndpoints));
    }

    #[test]
    fn test_is_online_against_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = PollingProbe::new(local_config(addr)).unwrap();
        assert!(probe.is_online());

        drop(listener);
        assert!(!probe.is_online());
    }

    struct Relay {
        tx: mpsc::Sender<NetworkStatus>,
    }

    impl ReachabilityObserver for Relay {
        fn network_reachable(&self) {
            let _ = self.tx.send(NetworkStatus::Reachable);
        }

        fn network_unreachable(&self) {
            let _ = self.tx.send(NetworkStatus::Unreachable);
        }

        fn name(&self) -> &'static str {
            "relay"
        }
    }

    #[test]
    fn test_worker_reports_transitions() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = Arc::new(PollingProbe::new(local_config(addr)).unwrap());
        let hub = ReachabilityHub::new(probe.clone());

        let (tx, rx) = mpsc::channel();
        hub.register(Arc::new(Relay { tx }));

        // First poll reports the initial status.
        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, NetworkStatus::Reachable);

        // Closing the listener flips the status on a later poll.
        drop(listener);
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(second, NetworkStatus::Unreachable);
    }

    #[test]
    fn test_repeated_start_is_noop() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = Arc::new(PollingProbe::new(local_config(addr)).unwrap());
        let hub = ReachabilityHub::new(probe.clone());

        let (tx, rx) = mpsc::channel();
        hub.register(Arc::new(Relay { tx }));
        let _ = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        // Second start on an already-running probe spawns nothing: the
        // single worker keeps reporting transitions, one per flip.
        let sink_count_before = rx.try_iter().count();
        probe.start(crate::hub::StatusSink::detached());
        drop(listener);
        let next = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(next, NetworkStatus::Unreachable);
        assert_eq!(rx.try_iter().count(), sink_count_before);
    }
}
