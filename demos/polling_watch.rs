//! # Demo: polling_watch
//!
//! Watches real connectivity with the TCP connect-based [`PollingProbe`]
//! and prints transitions through the built-in [`LogObserver`].
//!
//! Shows how to:
//! - Configure and construct a [`PollingProbe`].
//! - Let registration drive the probe's worker thread.
//! - Combine a diagnostic observer with `tracing` output.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► tracing_subscriber::fmt() (RUST_LOG controls probe diagnostics)
//!   ├─► ReachabilityHub::new(PollingProbe)
//!   ├─► hub.register(LogObserver)   ──► worker thread starts polling
//!   ├─► sleep; unplug/replug to see transitions
//!   └─► hub.unregister(LogObserver) ──► worker signalled to exit
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example polling_watch --features polling,logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use reachvisor::{
    LogObserver, PollingConfig, PollingProbe, ReachabilityHub, ReachabilityObserver,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = PollingConfig::default();
    config.interval = Duration::from_secs(2);
    config.connect_timeout = Duration::from_secs(1);

    let probe = Arc::new(PollingProbe::new(config)?);
    let hub = ReachabilityHub::new(probe);

    println!("point-in-time check: online={}", hub.is_online());

    let observer: Arc<dyn ReachabilityObserver> = Arc::new(LogObserver);
    hub.register(observer.clone());
    println!("watching for 30s; toggle your network to see transitions");

    std::thread::sleep(Duration::from_secs(30));

    hub.unregister(&observer);
    println!("done");
    Ok(())
}
