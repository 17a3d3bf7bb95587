//! A widget is a self-contained visual control with its own state, its own
//! tick source and a redraw trigger. The host places it (`set_bounds`), feeds
//! it time (`update`) and draws it when a redraw was requested.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Instant;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::Canvas;

/// Contract shared by every widget in this crate.
pub trait Widget {
    /// Area of the render surface the widget draws into.
    fn bounds(&self) -> Rectangle;

    /// Move or resize the widget. Requests a redraw when the bounds change.
    fn set_bounds(&mut self, bounds: Rectangle);

    /// Run the tick handler once for every tick that fell due by `now`.
    fn update(&mut self, now: Instant);

    /// Stateless draw pass over the current state.
    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error>;
}

/// A widget guarded by one mutual-exclusion region.
///
/// Only needed when the host lets several execution contexts mutate the same
/// widget (e.g. a timer interrupt and the UI task). All mutation, tick-driven
/// or not, then goes through [`Mutex::lock`].
pub type SharedWidget<W> = Mutex<CriticalSectionRawMutex, RefCell<W>>;

/// Wrap a widget for use from several execution contexts.
pub fn shared<W>(widget: W) -> SharedWidget<W> {
    Mutex::new(RefCell::new(widget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressConfig;
    use crate::progress::ProgressBar;
    use crate::testing::CountingRedraw;
    use crate::tick::{MARQUEE_TICK_INTERVAL, ManualTicker};
    use embedded_graphics::prelude::*;

    #[test]
    fn test_shared_widget_mutates_inside_lock() {
        let redraw = CountingRedraw::default();
        let bar = ProgressBar::new(
            Rectangle::new(Point::zero(), Size::new(100, 23)),
            ProgressConfig::default(),
            ManualTicker::new(MARQUEE_TICK_INTERVAL),
            &redraw,
        )
        .unwrap();

        let bar = shared(bar);
        bar.lock(|bar| bar.borrow_mut().set_value(30)).unwrap();

        assert_eq!(bar.lock(|bar| bar.borrow().value()), 30);
        assert_eq!(redraw.count(), 1);
    }
}
