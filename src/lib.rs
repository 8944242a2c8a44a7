//! # reachvisor
//!
//! **Reachvisor** is a small network-reachability notification hub for Rust.
//!
//! It sits between a platform-specific connectivity detector (a *probe*)
//! and consumers that want to react to the network coming and going (for
//! example a replication/sync engine that pauses itself while offline).
//! The hub tracks registered observers, keeps the probe running exactly
//! while someone is listening, and fans reachable/unreachable transitions
//! out to every observer.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!       ┌────────────────┐    ┌────────────────┐    ┌────────────────┐
//!       │   Observer A   │    │   Observer B   │    │   Observer C   │
//!       │  (replicator)  │    │   (metrics)    │    │  (LogObserver) │
//!       └───────▲────────┘    └───────▲────────┘    └───────▲────────┘
//!               │ network_reachable() / network_unreachable()
//!               │ (registration order, synchronous, under the hub lock)
//! ┌─────────────┴─────────────────────┴─────────────────────┴───────────┐
//! │  ReachabilityHub                                                    │
//! │  - observers: Vec<Arc<dyn ReachabilityObserver>> (duplicates OK)    │
//! │  - one mutex over registry + broadcast                              │
//! │  - first register  ──► probe.start(sink)                            │
//! │  - last unregister ──► probe.stop()                                 │
//! └───────────────▲─────────────────────────────┬───────────────────────┘
//!                 │ StatusSink.notify(status)   │ start / stop / is_online
//!                 │ (probe's callback thread)   ▼
//!       ┌─────────┴──────────────────────────────────────┐
//!       │  ReachabilityProbe (platform-supplied)         │
//!       │  ManualProbe · PollingProbe · your OS binding  │
//!       └────────────────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! IDLE (no observers, probe inactive)
//!   ── register(first) ──► ACTIVE (≥1 observer, probe active)
//!   ◄── unregister(last) ──
//! ACTIVE → ACTIVE: further register/unregister, no probe edges.
//! No terminal state; the hub oscillates for its entire lifetime.
//! ```
//!
//! ## Features
//! | Area           | Description                                             | Key types / traits        |
//! |----------------|---------------------------------------------------------|---------------------------|
//! | **Hub**        | Observer registry, activation policy, broadcast.        | [`ReachabilityHub`]       |
//! | **Observers**  | Two-callback capability consumers implement.            | [`ReachabilityObserver`]  |
//! | **Probes**     | Platform detector seam; hand-driven and polling impls.  | [`ReachabilityProbe`], [`ManualProbe`] |
//! | **Status**     | The two signal kinds as a value.                        | [`NetworkStatus`]         |
//! | **Errors**     | Embedded-probe construction errors.                     | [`ProbeError`]            |
//!
//! ## Optional features
//! - `logging`: exports a simple stdout [`LogObserver`] _(demo/reference only)_.
//! - `polling`: exports [`PollingProbe`]/[`PollingConfig`], a TCP
//!   connect-based detector for platforms without a native network-state API.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use reachvisor::{ManualProbe, ReachabilityHub, ReachabilityObserver};
//!
//! // An observer that gates some piece of work on connectivity.
//! struct SyncGate {
//!     paused: AtomicBool,
//! }
//!
//! impl ReachabilityObserver for SyncGate {
//!     fn network_reachable(&self) { self.paused.store(false, Ordering::SeqCst); }
//!     fn network_unreachable(&self) { self.paused.store(true, Ordering::SeqCst); }
//!     fn name(&self) -> &'static str { "sync-gate" }
//! }
//!
//! // In production the probe is a platform binding; here it is hand-driven.
//! let probe = Arc::new(ManualProbe::new(true));
//! let hub = ReachabilityHub::new(probe.clone());
//!
//! let gate = Arc::new(SyncGate { paused: AtomicBool::new(false) });
//! let observer: Arc<dyn ReachabilityObserver> = gate.clone();
//!
//! hub.register(observer.clone());      // probe starts here
//! probe.set_online(false);             // gate pauses
//! assert!(gate.paused.load(Ordering::SeqCst));
//!
//! probe.set_online(true);              // gate resumes
//! assert!(!gate.paused.load(Ordering::SeqCst));
//!
//! hub.unregister(&observer);           // probe stops here
//! assert_eq!(hub.observer_count(), 0);
//! ```

mod error;
mod hub;
mod observers;
mod probes;
mod status;

// ---- Public re-exports ----

pub use error::ProbeError;
pub use hub::{ReachabilityHub, StatusSink};
pub use observers::ReachabilityObserver;
pub use probes::{ManualProbe, ReachabilityProbe};
pub use status::NetworkStatus;

// Optional: expose a simple built-in stdout observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;

// Optional: expose the TCP connect-based polling probe.
// Enable with: `--features polling`
#[cfg(feature = "polling")]
pub use probes::{PollingConfig, PollingProbe};
