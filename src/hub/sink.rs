//! # Status sink: the probe's way back into the hub.
//!
//! [`StatusSink`] decouples probes from the hub type: a probe receives a
//! sink in [`start`](crate::ReachabilityProbe::start) and pushes
//! [`NetworkStatus`] values into it without knowing who listens. The sink
//! holds the hub weakly, so a probe worker outliving the hub does not keep
//! it alive — notifications after the hub is gone are discarded.

use std::sync::Weak;

use tracing::trace;

use crate::status::NetworkStatus;

use super::core::ReachabilityHub;

/// Cheap cloneable handle for reporting transitions to a hub.
///
/// Created by the hub when it starts its probe; probes keep it (and may
/// clone it into worker threads) for as long as they are monitoring.
#[derive(Clone)]
pub struct StatusSink {
    hub: Weak<ReachabilityHub>,
}

impl StatusSink {
    pub(crate) fn new(hub: Weak<ReachabilityHub>) -> Self {
        Self { hub }
    }

    /// Sink connected to nothing; every notification is discarded.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self { hub: Weak::new() }
    }

    /// Delivers a transition to the hub's observers.
    ///
    /// Runs the full broadcast synchronously on the calling thread (see
    /// [`ReachabilityHub::notify_reachable`]). If the hub has been dropped,
    /// the notification is silently discarded.
    pub fn notify(&self, status: NetworkStatus) {
        match self.hub.upgrade() {
            Some(hub) => match status {
                NetworkStatus::Reachable => hub.notify_reachable(),
                NetworkStatus::Unreachable => hub.notify_unreachable(),
            },
            None => trace!(status = status.as_label(), "hub gone, dropping notification"),
        }
    }

    /// Whether the hub is still alive.
    ///
    /// Probe workers can use this to exit once the hub has been dropped.
    pub fn is_attached(&self) -> bool {
        self.hub.strong_count() > 0
    }
}
