//! Clock widget
//!
//! Turns a time of day into needle geometry and draws it as an analog face
//! (frame, three needles, center dot) or as a digital `HH:MM:SS` readout.
//!
//! # Live and frozen time
//!
//! A clock starts **live**: its tick source runs and every tick re-reads the
//! wall clock. Setting a time explicitly with [`Clock::set_time`] **freezes**
//! it: the tick source is stopped and the displayed time only changes through
//! further explicit sets. [`Clock::resume_live`] is the only way back.
//!
//! # Examples
//!
//! ```ignore
//! let mut clock = Clock::new(
//!     Rectangle::new(Point::zero(), Size::new(100, 100)),
//!     ClockConfig::default(),
//!     || rtc.unix_time(),
//!     IntervalTicker::new(CLOCK_TICK_INTERVAL),
//!     &REDRAW,
//! );
//! clock.update(now);
//! clock.draw(&mut DisplayCanvas::new(&mut framebuffer))?;
//! ```

mod angles;
mod time;

pub use angles::{HOUR_STEP, MINUTE_STEP, NeedleAngles, hour_angle, minute_angle, second_angle};
pub use time::{TimeError, TimeOfDay, TimeResult, WallClock};

use core::fmt::Write;

use embassy_time::Instant;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::canvas::{Canvas, Stroke};
use crate::config::ClockConfig;
use crate::geometry::{angle_to_point, center_of, centered_rect, inset_rect};
use crate::redraw::RedrawRequest;
use crate::styling::{COLOR_INK, COLOR_SECOND_NEEDLE};
use crate::tick::TickSource;
use crate::widget::Widget;

/// Frame inset on each side, as a fraction of the widget size.
const FRAME_INSET: f32 = 1.0 / 20.0;

/// Second and minute needle length, as a fraction of the widget size.
const LONG_NEEDLE: f32 = 0.4;

/// Hour needle length, as a fraction of the widget size.
const SHORT_NEEDLE: f32 = 0.3;

/// Center dot diameter divisor.
const CENTER_DOT_DIVISOR: u32 = 15;

const DIGITAL_FONT: &MonoFont<'static> = &FONT_10X20;

/// How the displayed time follows the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Tracks the wall clock on every tick.
    Live,
    /// Shows an explicitly set time.
    Frozen,
}

/// Presentation of the displayed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockFace {
    #[default]
    Analog,
    Digital,
}

/// Pens and brushes of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStyle {
    pub frame: Stroke,
    pub second_needle: Stroke,
    pub minute_needle: Stroke,
    pub hour_needle: Stroke,
    pub center_dot: Rgb565,
    /// Digital face text color.
    pub text: Rgb565,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            frame: Stroke::new(COLOR_INK, 4),
            second_needle: Stroke::new(COLOR_SECOND_NEEDLE, 2),
            minute_needle: Stroke::new(COLOR_INK, 3),
            hour_needle: Stroke::new(COLOR_INK, 3),
            center_dot: COLOR_INK,
            text: COLOR_INK,
        }
    }
}

/// Which parts of the analog face are drawn. Everything is shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockElements {
    pub frame: bool,
    pub second_needle: bool,
    pub minute_needle: bool,
    pub hour_needle: bool,
    pub center_dot: bool,
}

impl Default for ClockElements {
    fn default() -> Self {
        Self {
            frame: true,
            second_needle: true,
            minute_needle: true,
            hour_needle: true,
            center_dot: true,
        }
    }
}

/// Self-drawing clock driven by its own tick source.
pub struct Clock<W, T, R> {
    bounds: Rectangle,
    config: ClockConfig,
    wall_clock: W,
    ticker: T,
    redraw: R,
    mode: ClockMode,
    time: TimeOfDay,
    face: ClockFace,
    style: ClockStyle,
    elements: ClockElements,
}

impl<W, T, R> Clock<W, T, R>
where
    W: WallClock,
    T: TickSource,
    R: RedrawRequest,
{
    /// Create a live clock and start its tick source.
    pub fn new(
        bounds: Rectangle,
        config: ClockConfig,
        wall_clock: W,
        mut ticker: T,
        redraw: R,
    ) -> Self {
        ticker.start();
        let time =
            TimeOfDay::from_unix_timestamp(wall_clock.unix_time(), config.utc_offset_minutes);

        Self {
            bounds,
            config,
            wall_clock,
            ticker,
            redraw,
            mode: ClockMode::Live,
            time,
            face: ClockFace::default(),
            style: ClockStyle::default(),
            elements: ClockElements::default(),
        }
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn is_live(&self) -> bool {
        self.mode == ClockMode::Live
    }

    /// The time the next draw pass will show.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn needle_angles(&self) -> NeedleAngles {
        NeedleAngles::from_time(self.time)
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Show a fixed time. A live clock becomes frozen and stops ticking.
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.time = time;
        if self.mode == ClockMode::Live {
            debug!(" Clock frozen at {}", time);
            self.mode = ClockMode::Frozen;
            self.ticker.stop();
        }
        self.redraw.request_redraw();
    }

    /// Go back to tracking the wall clock.
    pub fn resume_live(&mut self) {
        if self.mode == ClockMode::Frozen {
            debug!(" Clock resumed live tracking");
            self.mode = ClockMode::Live;
            self.ticker.restart();
        }
        self.refresh_from_wall_clock();
        self.redraw.request_redraw();
    }

    pub fn face(&self) -> ClockFace {
        self.face
    }

    pub fn set_face(&mut self, face: ClockFace) {
        self.face = face;
        self.redraw.request_redraw();
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ClockStyle) {
        self.style = style;
        self.redraw.request_redraw();
    }

    pub fn elements(&self) -> ClockElements {
        self.elements
    }

    pub fn set_elements(&mut self, elements: ClockElements) {
        self.elements = elements;
        self.redraw.request_redraw();
    }

    pub fn set_show_frame(&mut self, show: bool) {
        self.elements.frame = show;
        self.redraw.request_redraw();
    }

    pub fn set_show_second_needle(&mut self, show: bool) {
        self.elements.second_needle = show;
        self.redraw.request_redraw();
    }

    pub fn set_show_minute_needle(&mut self, show: bool) {
        self.elements.minute_needle = show;
        self.redraw.request_redraw();
    }

    pub fn set_show_hour_needle(&mut self, show: bool) {
        self.elements.hour_needle = show;
        self.redraw.request_redraw();
    }

    pub fn set_show_center_dot(&mut self, show: bool) {
        self.elements.center_dot = show;
        self.redraw.request_redraw();
    }

    fn refresh_from_wall_clock(&mut self) {
        self.time = TimeOfDay::from_unix_timestamp(
            self.wall_clock.unix_time(),
            self.config.utc_offset_minutes,
        );
    }

    /// Tick handler: re-read the wall clock while live.
    fn on_tick(&mut self) {
        if self.mode == ClockMode::Live {
            self.refresh_from_wall_clock();
            self.redraw.request_redraw();
        }
    }

    fn draw_analog<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let width = self.bounds.size.width as f32;
        let height = self.bounds.size.height as f32;
        let center = center_of(&self.bounds);
        let angles = self.needle_angles();

        if self.elements.frame {
            let frame = inset_rect(self.bounds, FRAME_INSET, FRAME_INSET);
            canvas.draw_ellipse(frame, self.style.frame)?;
        }

        let needle = |radius: f32, angle: f32| -> (Point, Point) {
            let tip = angle_to_point(center, radius * width, radius * height, angle);
            (center.to_point(), tip.to_point())
        };

        if self.elements.second_needle {
            let (from, to) = needle(LONG_NEEDLE, angles.second);
            canvas.draw_line(from, to, self.style.second_needle)?;
        }

        if self.elements.minute_needle {
            let (from, to) = needle(LONG_NEEDLE, angles.minute);
            canvas.draw_line(from, to, self.style.minute_needle)?;
        }

        if self.elements.hour_needle {
            let (from, to) = needle(SHORT_NEEDLE, angles.hour);
            canvas.draw_line(from, to, self.style.hour_needle)?;
        }

        if self.elements.center_dot {
            let dot = Size::new(
                self.bounds.size.width / CENTER_DOT_DIVISOR,
                self.bounds.size.height / CENTER_DOT_DIVISOR,
            );
            canvas.fill_ellipse(centered_rect(center, dot), self.style.center_dot)?;
        }

        Ok(())
    }

    fn draw_digital<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let mut text = heapless::String::<8>::new();
        let written = write!(text, "{}", self.time);
        debug_assert!(written.is_ok(), "HH:MM:SS is exactly eight bytes");

        let size = canvas.measure_text(&text, DIGITAL_FONT);
        let top_left = centered_rect(center_of(&self.bounds), size).top_left;
        canvas.draw_text(&text, DIGITAL_FONT, self.style.text, top_left)
    }
}

impl<W, T, R> Widget for Clock<W, T, R>
where
    W: WallClock,
    T: TickSource,
    R: RedrawRequest,
{
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.redraw.request_redraw();
        }
    }

    fn update(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            self.on_tick();
        }
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        match self.face {
            ClockFace::Analog => self.draw_analog(canvas),
            ClockFace::Digital => self.draw_digital(canvas),
        }
    }
}
