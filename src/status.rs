//! # Reachability status values.
//!
//! [`NetworkStatus`] names the two signals the hub carries: the network
//! became reachable, or it became unreachable. Probes hand a status to the
//! [`StatusSink`](crate::StatusSink); the hub turns it into the matching
//! observer callback.
//!
//! This is deliberately not a general event type: the hub is not a pub/sub
//! bus, and there is no payload beyond the transition itself.
//!
//! ## Example
//! ```rust
//! use reachvisor::NetworkStatus;
//!
//! let up = NetworkStatus::from_online(true);
//! assert_eq!(up, NetworkStatus::Reachable);
//! assert!(up.is_reachable());
//! assert_eq!(up.as_label(), "reachable");
//! ```

/// Connectivity state reported by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    /// Network connectivity currently exists.
    Reachable,
    /// Network connectivity is currently absent.
    Unreachable,
}

impl NetworkStatus {
    /// Maps a boolean "online" answer to a status.
    pub fn from_online(online: bool) -> Self {
        if online {
            NetworkStatus::Reachable
        } else {
            NetworkStatus::Unreachable
        }
    }

    /// Returns `true` for [`NetworkStatus::Reachable`].
    pub fn is_reachable(&self) -> bool {
        matches!(self, NetworkStatus::Reachable)
    }

    /// Returns a short stable label for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            NetworkStatus::Reachable => "reachable",
            NetworkStatus::Unreachable => "unreachable",
        }
    }
}
