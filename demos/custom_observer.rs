//! # Demo: custom_observer
//!
//! Demonstrates how to build and register a custom reachability observer.
//!
//! Shows how to:
//! - Implement the [`ReachabilityObserver`] trait.
//! - Wire a hub to a probe (here a hand-driven [`ManualProbe`]).
//! - Watch the probe lifecycle follow the observer count.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► ReachabilityHub::new(ManualProbe)
//!   ├─► hub.register(replicator)        ──► probe started
//!   ├─► probe.set_online(false)         ──► replicator pauses
//!   ├─► probe.set_online(true)          ──► replicator resumes
//!   └─► hub.unregister(replicator)      ──► probe stopped
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example custom_observer
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use reachvisor::{ManualProbe, ReachabilityHub, ReachabilityObserver};

/// A toy replication engine that pauses itself while the network is down.
/// In real life this would be a sync client suspending its change feed.
struct Replicator {
    paused: AtomicBool,
}

impl Replicator {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            paused: AtomicBool::new(false),
        })
    }

    fn describe(&self) -> &'static str {
        if self.paused.load(Ordering::SeqCst) {
            "paused"
        } else {
            "running"
        }
    }
}

impl ReachabilityObserver for Replicator {
    fn network_reachable(&self) {
        self.paused.store(false, Ordering::SeqCst);
        println!("[replicator] network back, resuming");
    }

    fn network_unreachable(&self) {
        self.paused.store(true, Ordering::SeqCst);
        println!("[replicator] network gone, pausing");
    }

    fn name(&self) -> &'static str {
        "replicator"
    }
}

fn main() {
    // The probe is hand-driven here; a platform binding would watch the OS.
    let probe = Arc::new(ManualProbe::new(true));
    let hub = ReachabilityHub::new(probe.clone());

    let replicator = Replicator::new();
    let observer: Arc<dyn ReachabilityObserver> = replicator.clone();

    println!("online before anyone listens: {}", hub.is_online());

    hub.register(observer.clone());
    println!("registered, replicator is {}", replicator.describe());

    probe.set_online(false);
    println!("after outage, replicator is {}", replicator.describe());

    probe.set_online(true);
    println!("after recovery, replicator is {}", replicator.describe());

    hub.unregister(&observer);
    println!("unregistered, {} observers left", hub.observer_count());
}
