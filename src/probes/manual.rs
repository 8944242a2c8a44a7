//! # Hand-driven probe.
//!
//! [`ManualProbe`] is a [`ReachabilityProbe`] whose transitions are supplied
//! by the caller instead of detected from the platform. It stands in for a
//! real detector in demos and tests, and documents the wiring pattern for
//! platform integrations: hold the sink you were started with, push
//! transitions into it, drop it on stop.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use reachvisor::{ManualProbe, ReachabilityHub};
//!
//! let probe = Arc::new(ManualProbe::new(true));
//! let hub = ReachabilityHub::new(probe.clone());
//!
//! assert!(hub.is_online());
//! // probe.set_online(false) notifies the hub's observers once registered.
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::hub::StatusSink;
use crate::status::NetworkStatus;

use super::ReachabilityProbe;

/// Probe driven by explicit [`set_online`](ManualProbe::set_online) calls.
///
/// The thread calling `set_online` plays the role of the platform's callback
/// thread: observers are notified synchronously on it.
pub struct ManualProbe {
    online: AtomicBool,
    sink: Mutex<Option<StatusSink>>,
}

impl ManualProbe {
    /// Creates a probe with the given initial connectivity.
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
            sink: Mutex::new(None),
        }
    }

    /// Sets the current connectivity, notifying the hub on change.
    ///
    /// A call that does not change the state notifies nobody, as does a call
    /// while the probe is stopped (no sink to deliver into).
    pub fn set_online(&self, online: bool) {
        let was_online = self.online.swap(online, Ordering::SeqCst);
        if was_online == online {
            return;
        }
        // Clone the sink out so the notification runs without the sink lock
        // held: a concurrent hub.register() holds the hub lock and takes the
        // sink lock via start(), the opposite order.
        let sink = self.sink.lock().clone();
        if let Some(sink) = sink {
            sink.notify(NetworkStatus::from_online(online));
        }
    }
}

impl ReachabilityProbe for ManualProbe {
    fn start(&self, sink: StatusSink) {
        *self.sink.lock() = Some(sink);
    }

    fn stop(&self) {
        *self.sink.lock() = None;
    }

    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::hub::ReachabilityHub;
    use crate::observers::ReachabilityObserver;

    use super::*;

    struct Counter {
        up: AtomicUsize,
        down: AtomicUsize,
    }

    impl Counter {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                up: AtomicUsize::new(0),
                down: AtomicUsize::new(0),
            })
        }
    }

    impl ReachabilityObserver for Counter {
        fn network_reachable(&self) {
            self.up.fetch_add(1, Ordering::SeqCst);
        }

        fn network_unreachable(&self) {
            self.down.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_set_online_before_start_notifies_nobody() {
        let probe = Arc::new(ManualProbe::new(true));
        probe.set_online(false);
        assert!(!probe.is_online());
    }

    #[test]
    fn test_transitions_reach_registered_observer() {
        let probe = Arc::new(ManualProbe::new(true));
        let hub = ReachabilityHub::new(probe.clone());

        let counter = Counter::new();
        hub.register(counter.clone());

        probe.set_online(false);
        probe.set_online(true);

        assert_eq!(counter.down.load(Ordering::SeqCst), 1);
        assert_eq!(counter.up.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unchanged_state_is_not_rebroadcast() {
        let probe = Arc::new(ManualProbe::new(true));
        let hub = ReachabilityHub::new(probe.clone());

        let counter = Counter::new();
        hub.register(counter.clone());

        probe.set_online(true);
        probe.set_online(true);

        assert_eq!(counter.up.load(Ordering::SeqCst), 0);
        assert_eq!(counter.down.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stopped_probe_drops_transitions() {
        let probe = Arc::new(ManualProbe::new(true));
        let hub = ReachabilityHub::new(probe.clone());

        let counter = Counter::new();
        let observer: Arc<dyn ReachabilityObserver> = counter.clone();
        hub.register(observer.clone());
        hub.unregister(&observer);

        probe.set_online(false);
        assert_eq!(counter.down.load(Ordering::SeqCst), 0);
    }
}
