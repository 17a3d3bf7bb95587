//! Redraw trigger
//!
//! Every state-affecting mutation on a widget ends with a call to
//! [`RedrawRequest::request_redraw`]. The request is fire-and-forget: it never
//! blocks and never fails, and several requests before the host gets around
//! to drawing collapse into one.
//!
//! [`REDRAW`] is the process-wide signal the host redraw loop consumes.
//! Async hosts `wait()` on it; polling hosts call
//! [`RedrawSignal::take_pending`] once per frame.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Sink for redraw notifications raised by widgets.
pub trait RedrawRequest {
    fn request_redraw(&self);
}

impl<T: RedrawRequest + ?Sized> RedrawRequest for &T {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}

/// Latching "dirty" flag shared between widgets and the redraw loop.
pub struct RedrawSignal {
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl Default for RedrawSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawSignal {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Whether a redraw has been requested and not yet consumed.
    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }

    /// Consume a pending request. Returns `true` if one was pending.
    pub fn take_pending(&self) -> bool {
        self.signal.try_take().is_some()
    }

    /// Wait until a redraw is requested, consuming the request.
    pub async fn wait(&self) {
        self.signal.wait().await
    }
}

impl RedrawRequest for RedrawSignal {
    fn request_redraw(&self) {
        self.signal.signal(());
    }
}

/// Process-wide redraw signal.
pub static REDRAW: RedrawSignal = RedrawSignal::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_collapse_until_taken() {
        let signal = RedrawSignal::new();
        assert!(!signal.is_pending());

        signal.request_redraw();
        signal.request_redraw();
        assert!(signal.is_pending());

        assert!(signal.take_pending());
        assert!(!signal.take_pending());
        assert!(!signal.is_pending());
    }

    #[test]
    fn test_reference_forwards_requests() {
        let signal = RedrawSignal::new();
        let by_ref = &signal;
        by_ref.request_redraw();
        assert!(signal.take_pending());
    }
}
