//! # ReachabilityHub: registry, activation, broadcast.
//!
//! The hub keeps an ordered list of observers, starts its probe when the
//! first observer registers, stops it when the last one unregisters, and
//! fans every transition out to all current observers.
//!
//! ## State machine
//! ```text
//!             register (0 → 1) ── probe.start(sink)
//!        ┌──────────────────────────────────────────┐
//!        │                                          ▼
//!     IDLE  (no observers, probe inactive)      ACTIVE  (≥1 observer, probe active)
//!        ▲                                          │
//!        └──────────────────────────────────────────┘
//!             unregister (1 → 0) ── probe.stop()
//!
//! ACTIVE → ACTIVE: register/unregister that leave the set non-empty
//!                  touch neither start nor stop.
//! ```
//!
//! ## Locking
//! One mutex guards the registry and every operation on it: register,
//! unregister, and both notifications. The empty↔non-empty check and the
//! resulting `start`/`stop` run while the lock is held, so two concurrent
//! first-registrations cannot both start the probe, and a notification
//! either sees an observer fully registered or not at all.
//!
//! The lock is **not re-entrant**: observer callbacks and probe `start`
//! implementations must not call back into the hub on the same thread.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::observers::ReachabilityObserver;
use crate::probes::ReachabilityProbe;
use crate::status::NetworkStatus;

use super::sink::StatusSink;

/// Network-reachability notification hub.
///
/// Construct one per consumer scope and pass it by reference (or `Arc`) to
/// whoever needs to register; there is no process-wide instance.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use reachvisor::{ManualProbe, ReachabilityHub, ReachabilityObserver};
///
/// struct Printer;
///
/// impl ReachabilityObserver for Printer {
///     fn network_reachable(&self) { println!("online"); }
///     fn network_unreachable(&self) { println!("offline"); }
/// }
///
/// let probe = Arc::new(ManualProbe::new(true));
/// let hub = ReachabilityHub::new(probe.clone());
///
/// let printer: Arc<dyn ReachabilityObserver> = Arc::new(Printer);
/// hub.register(printer.clone());   // first observer: probe started
/// assert_eq!(hub.observer_count(), 1);
///
/// probe.set_online(false);         // Printer sees "offline"
///
/// hub.unregister(&printer);        // last observer: probe stopped
/// assert_eq!(hub.observer_count(), 0);
/// ```
pub struct ReachabilityHub {
    /// Registration order preserved; duplicates allowed (each entry is
    /// notified independently). Identity is `Arc` pointer identity.
    observers: Mutex<Vec<Arc<dyn ReachabilityObserver>>>,
    probe: Arc<dyn ReachabilityProbe>,
    /// Self-reference handed to the probe inside a [`StatusSink`].
    this: Weak<ReachabilityHub>,
}

impl ReachabilityHub {
    /// Creates a hub around the given probe, with no observers.
    ///
    /// The probe stays inactive until the first observer registers.
    pub fn new(probe: Arc<dyn ReachabilityProbe>) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            observers: Mutex::new(Vec::new()),
            probe,
            this: this.clone(),
        })
    }

    /// Registers an observer for all subsequent broadcasts.
    ///
    /// Appends to the registry; if the set was empty, starts the probe
    /// before returning. Registering the same observer twice is permitted
    /// and yields two independent entries (and duplicate deliveries).
    ///
    /// Blocks while a broadcast is in flight; if the probe's `start` blocks
    /// on I/O, that latency is visible to this caller.
    pub fn register(&self, observer: Arc<dyn ReachabilityObserver>) {
        let mut observers = self.observers.lock();
        let was_empty = observers.is_empty();
        observers.push(observer);
        if was_empty {
            debug!("first observer registered, starting probe");
            self.probe.start(StatusSink::new(self.this.clone()));
        }
    }

    /// Removes the first registry entry matching the given observer.
    ///
    /// Matching is `Arc` identity ([`Arc::ptr_eq`]). If the removal empties
    /// the set, stops the probe before returning. Unregistering an observer
    /// that is not present is a silent no-op.
    pub fn unregister(&self, observer: &Arc<dyn ReachabilityObserver>) {
        let mut observers = self.observers.lock();
        let Some(pos) = observers.iter().position(|o| Arc::ptr_eq(o, observer)) else {
            return;
        };
        observers.remove(pos);
        if observers.is_empty() {
            debug!("last observer removed, stopping probe");
            self.probe.stop();
        }
    }

    /// Broadcasts "network became reachable" to every registered observer.
    ///
    /// Invoked by the probe (through its [`StatusSink`]), not by application
    /// code. Delivery is synchronous on the calling thread, in registration
    /// order, under the hub lock; a slow observer stalls the rest.
    pub fn notify_reachable(&self) {
        self.broadcast(NetworkStatus::Reachable);
    }

    /// Broadcasts "network became unreachable" to every registered observer.
    ///
    /// Same delivery contract as [`notify_reachable`](Self::notify_reachable).
    pub fn notify_unreachable(&self) {
        self.broadcast(NetworkStatus::Unreachable);
    }

    /// Synchronous point-in-time connectivity query.
    ///
    /// Delegates to the probe; answerable even with zero observers.
    pub fn is_online(&self) -> bool {
        self.probe.is_online()
    }

    /// Number of registry entries (duplicates counted).
    ///
    /// The probe is active iff this is non-zero.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }

    fn broadcast(&self, status: NetworkStatus) {
        let observers = self.observers.lock();
        trace!(
            status = status.as_label(),
            observers = observers.len(),
            "broadcasting transition"
        );
        for observer in observers.iter() {
            let deliver = || match status {
                NetworkStatus::Reachable => observer.network_reachable(),
                NetworkStatus::Unreachable => observer.network_unreachable(),
            };
            // Isolate-and-continue: one observer's panic must not cost the
            // rest their notification.
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(deliver)) {
                warn!(
                    observer = observer.name(),
                    panic = %panic_message(payload.as_ref()),
                    "observer panicked during delivery, continuing"
                );
            }
        }
    }
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
