//! Connectivity state for the relational store.
//!
//! The flag is decided once at process start by the connection probe and is
//! handed to the request-handling layer by construction, so tests can build
//! either mode deterministically. There is no automatic reconnection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
pub struct ConnectivityMonitor {
    available: Arc<AtomicBool>,
}

impl ConnectivityMonitor {
    #[must_use]
    pub fn new(available: bool) -> Self {
        Self {
            available: Arc::new(AtomicBool::new(available)),
        }
    }

    /// The store was reachable at startup.
    #[must_use]
    pub fn up() -> Self {
        Self::new(true)
    }

    /// The store was unreachable at startup; the process serves fallback data.
    #[must_use]
    pub fn down() -> Self {
        Self::new(false)
    }

    /// Never fails and never blocks.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_startup_decision() {
        assert!(ConnectivityMonitor::up().is_available());
        assert!(!ConnectivityMonitor::down().is_available());

        let monitor = ConnectivityMonitor::up();
        let clone = monitor.clone();
        assert_eq!(monitor.is_available(), clone.is_available());
    }
}
