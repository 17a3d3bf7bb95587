//! Shared fakes for unit tests

use core::cell::Cell;

use crate::redraw::RedrawRequest;

/// Redraw sink that counts requests.
#[derive(Debug, Default)]
pub(crate) struct CountingRedraw {
    count: Cell<u32>,
}

impl CountingRedraw {
    pub(crate) fn count(&self) -> u32 {
        self.count.get()
    }

    /// Return the count and reset it.
    pub(crate) fn take(&self) -> u32 {
        self.count.replace(0)
    }
}

impl RedrawRequest for CountingRedraw {
    fn request_redraw(&self) {
        self.count.set(self.count.get() + 1);
    }
}
