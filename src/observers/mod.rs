//! # Reachability observers.
//!
//! This module provides the [`ReachabilityObserver`] trait — the capability
//! consumers implement to be told about connectivity transitions — and a
//! built-in stdout implementation for demos.
//!
//! ## Architecture
//! ```text
//! Notification flow:
//!   Probe ── StatusSink.notify(status) ──► ReachabilityHub
//!                                              │  (under the hub lock,
//!                                              │   registration order)
//!                ┌─────────────────────────────┼─────────────────────┐
//!                ▼                             ▼                     ▼
//!     observer.network_reachable()   LogObserver (stdout)   CustomObserver
//!     / network_unreachable()
//! ```
//!
//! ## Observer kinds
//! - **Consumer observers** — react to transitions (a replicator pausing
//!   itself while offline, a queue flushing on reconnect).
//! - **Diagnostic observers** — [`LogObserver`] (enabled via the `logging`
//!   feature) prints transitions to stdout.

mod observer;

#[cfg(feature = "logging")]
mod log;

pub use observer::ReachabilityObserver;

#[cfg(feature = "logging")]
pub use log::LogObserver;
