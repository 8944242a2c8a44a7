//! # Observer capability: the consumer-facing extension point.
//!
//! [`ReachabilityObserver`] is what consumers implement to react to
//! connectivity transitions. A registered observer receives every broadcast
//! until it is unregistered.
//!
//! Implementing your own observer allows you to plug in:
//! - a replicator/sync engine that pauses while the network is down;
//! - metrics or alerting on connectivity flaps;
//! - structured logging of transitions.
//!
//! # Example: pause a sync engine while offline
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use reachvisor::ReachabilityObserver;
//!
//! struct SyncGate {
//!     paused: AtomicBool,
//! }
//!
//! impl ReachabilityObserver for SyncGate {
//!     fn network_reachable(&self) {
//!         self.paused.store(false, Ordering::SeqCst);
//!     }
//!
//!     fn network_unreachable(&self) {
//!         self.paused.store(true, Ordering::SeqCst);
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "sync-gate"
//!     }
//! }
//! ```

/// Consumer of reachability transitions.
///
/// Both callbacks run **synchronously on the notifying thread** (normally the
/// probe's callback thread) while the hub lock is held.
///
/// ### Implementation requirements
/// - Return quickly; a slow callback stalls delivery to every observer
///   registered after this one and stalls the probe's callback thread.
/// - Do not call back into the hub (`register`, `unregister`, `notify_*`)
///   from inside a callback — the hub lock is not re-entrant and the call
///   deadlocks.
/// - Panics are caught and logged; delivery continues with the remaining
///   observers.
pub trait ReachabilityObserver: Send + Sync + 'static {
    /// Called when the network has become reachable.
    fn network_reachable(&self);

    /// Called when the network has become unreachable.
    fn network_unreachable(&self);

    /// Returns the observer name used in panic/diagnostic logs.
    ///
    /// Prefer short, descriptive names (e.g., "replicator", "metrics").
    /// The default uses `type_name::<Self>()`, which can be verbose —
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
