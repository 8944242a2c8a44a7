//! # Probe contract.
//!
//! [`ReachabilityProbe`] is the seam between the hub and the platform: the
//! hub activates the probe while at least one observer is registered, and
//! the probe reports transitions back through the
//! [`StatusSink`](crate::StatusSink) it was started with.

use crate::hub::StatusSink;

/// Platform-supplied connectivity detector.
///
/// The hub calls [`start`](Self::start) when its observer set transitions
/// from empty to non-empty and [`stop`](Self::stop) when it transitions back
/// to empty — at most once per edge, never redundantly from a stable state.
///
/// ### Implementation requirements
/// - `start` must arrange for subsequent transitions to be pushed into the
///   sink **from the probe's own context** (its callback thread, a worker
///   thread, an OS notification). It must not call `sink.notify` synchronously
///   before returning: the hub lock is held across `start`, and the
///   notification would deadlock.
/// - Idempotency across repeated `start` calls without an intervening `stop`
///   is the probe's own responsibility; the hub never issues such a pair,
///   but other callers might.
/// - After `stop` returns, no further notifications are expected. The hub
///   tolerates (and ignores) a notification that was already in flight when
///   `stop` was called.
/// - Failures inside `start`/`stop` are the probe's own to signal (log,
///   reflect through `is_online`); the hub surfaces none.
pub trait ReachabilityProbe: Send + Sync + 'static {
    /// Begins monitoring; transitions go into `sink`.
    fn start(&self, sink: StatusSink);

    /// Ceases monitoring.
    fn stop(&self);

    /// Synchronous point-in-time connectivity query.
    ///
    /// Independent of the observer set; answerable even while the probe is
    /// stopped.
    fn is_online(&self) -> bool;
}
