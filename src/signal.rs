//! Remote signal line shared between the edge interrupt and the control loop
//!
//! The interrupt handler only ever calls [`SignalLine::on_edge`]. The
//! logical level lives in an atomic flag, and every edge also raises an
//! [`embassy_sync::signal::Signal`] so the control loop can sleep until
//! the level changes instead of polling it.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Edge notification carrying the level sampled in the interrupt
pub type EdgeSignal = Signal<CriticalSectionRawMutex, bool>;

/// Logical state of the remote input
pub struct SignalLine {
    level: AtomicBool,
    releases: AtomicU32,
    edges: EdgeSignal,
}

impl SignalLine {
    /// Create a line that starts de-asserted.
    pub const fn new() -> Self {
        Self {
            level: AtomicBool::new(false),
            releases: AtomicU32::new(0),
            edges: Signal::new(),
        }
    }

    /// Record a newly sampled raw level.
    ///
    /// Interrupt safe. Call it from the GPIO edge handler on both rising
    /// and falling edges.
    pub fn on_edge(&self, level: bool) {
        if !level {
            self.releases.fetch_add(1, Ordering::Release);
        }
        self.level.store(level, Ordering::Release);
        self.edges.signal(level);
    }

    /// Current logical level
    pub fn level(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }

    /// Number of falling edges seen so far, wrapping
    pub fn releases(&self) -> u32 {
        self.releases.load(Ordering::Acquire)
    }

    /// Wait until the line reads `level`.
    ///
    /// Returns immediately if it already does. Only one task may wait on
    /// a line at a time.
    pub async fn wait_for(&self, level: bool) {
        while self.level() != level {
            if self.edges.wait().await == level {
                return;
            }
        }
    }

    /// Wait until the line is released after the call.
    ///
    /// Returns immediately if the line is already off. An off/on pair
    /// that completes before this task is polled still counts as a
    /// release.
    pub async fn wait_for_release(&self) {
        let seen = self.releases();
        while self.level() && self.releases() == seen {
            self.edges.wait().await;
        }
    }
}

impl Default for SignalLine {
    fn default() -> Self {
        Self::new()
    }
}
