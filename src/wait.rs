//! Waits that end early when the remote signal drops
//!
//! Used between effect frames in place of a plain timer so a running
//! effect notices signal loss as soon as the edge arrives. Neither wait
//! updates the [`SignalMonitor`](crate::SignalMonitor) timestamps; they
//! only read the line.

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};

use crate::signal::SignalLine;

/// How an interruptible wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full duration passed with the signal on
    Elapsed,
    /// The signal turned off first
    Interrupted,
}

/// Wait up to `duration`, returning as soon as the signal is off.
///
/// A release during the wait interrupts it even if the signal is back on
/// by the time the waiting task runs.
pub async fn interruptible_wait(line: &SignalLine, duration: Duration) -> WaitOutcome {
    match select(Timer::after(duration), line.wait_for_release()).await {
        Either::First(()) => WaitOutcome::Elapsed,
        Either::Second(()) => WaitOutcome::Interrupted,
    }
}

/// Wait until `deadline` or until the signal turns on, whichever is first.
///
/// Returns `true` if the signal came back.
pub async fn wait_for_signal_until(line: &SignalLine, deadline: Instant) -> bool {
    match select(Timer::at(deadline), line.wait_for(true)).await {
        Either::First(()) => false,
        Either::Second(()) => true,
    }
}

/// Park until the signal turns on.
pub async fn wait_for_signal(line: &SignalLine) {
    line.wait_for(true).await;
}
