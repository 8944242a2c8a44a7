//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints transitions to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [reachable] network is up
//! [unreachable] network is down
//! ```

use super::ReachabilityObserver;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints human-readable transition lines
/// to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom
/// [`ReachabilityObserver`] for structured logging or metrics collection.
pub struct LogObserver;

impl ReachabilityObserver for LogObserver {
    fn network_reachable(&self) {
        println!("[reachable] network is up");
    }

    fn network_unreachable(&self) {
        println!("[unreachable] network is down");
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
