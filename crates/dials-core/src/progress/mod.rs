//! Progress indicator widget
//!
//! A bar with a validated `minimum <= value <= maximum` model drawn in one of
//! three display modes:
//!
//! - **Continuous**: one rectangle proportional to `value / maximum`
//! - **Blocks**: the same extent split into fixed-length blocks
//! - **Marquee**: an indeterminate animation where a segment moves along the
//!   bar on every tick, independent of the value
//!
//! The fill grows along the main axis from the left (horizontal) or the bottom
//! (vertical) edge; inverting the bar grows it from the opposite edge.
//!
//! Every mutation goes through the pure [`ProgressModel`] first and only
//! requests a redraw once it was accepted. Rejected mutations return a
//! [`RangeViolation`] and leave the bar unchanged.

mod marquee;
mod mode;
mod model;
mod text;

pub use marquee::{MarqueeAnimator, MarqueeState, MarqueeTrack};
pub use mode::{DisplayMode, ModeTransition, Orientation};
pub use model::{DEFAULT_STEP, ProgressModel, ProgressResult, RangeViolation};
pub use text::{LABEL_CAPACITY, Label, LabelText, TextMode};

use embassy_time::Instant;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use crate::canvas::{Canvas, Stroke};
use crate::config::{MarqueeAnimation, ProgressConfig};
use crate::geometry::{center_of, centered_rect};
use crate::redraw::RedrawRequest;
use crate::styling::{COLOR_BORDER, COLOR_FILL, COLOR_TEXT, COLOR_TRACK, Padding};
use crate::tick::TickSource;
use crate::widget::Widget;

/// Block length along the main axis in [`DisplayMode::Blocks`] (pixels).
pub const BLOCK_LENGTH: u32 = 8;

/// Gap between two blocks (pixels).
pub const BLOCK_GAP: u32 = 2;

/// Colors and font of the bar.
#[derive(Clone, Copy)]
pub struct ProgressStyle {
    pub fill: Rgb565,
    pub background: Rgb565,
    /// Border edges, skipped when the width is zero.
    pub border: Stroke,
    pub text: Rgb565,
    pub font: &'static MonoFont<'static>,
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self {
            fill: COLOR_FILL,
            background: COLOR_TRACK,
            border: Stroke::new(COLOR_BORDER, 1),
            text: COLOR_TEXT,
            font: &FONT_6X10,
        }
    }
}

/// Self-drawing progress bar.
pub struct ProgressBar<T, R> {
    bounds: Rectangle,
    config: ProgressConfig,
    model: ProgressModel,
    display_mode: DisplayMode,
    orientation: Orientation,
    inverted: bool,
    label: Label,
    marquee: Option<MarqueeAnimator>,
    style: ProgressStyle,
    ticker: T,
    redraw: R,
}

impl<T, R> ProgressBar<T, R>
where
    T: TickSource,
    R: RedrawRequest,
{
    /// Create a continuous, horizontal bar at the configured minimum.
    ///
    /// The tick source stays stopped until the bar enters the marquee.
    pub fn new(
        bounds: Rectangle,
        config: ProgressConfig,
        mut ticker: T,
        redraw: R,
    ) -> ProgressResult<Self> {
        let mut model = ProgressModel::with_range(config.minimum, config.maximum)?;
        model.set_step_size(config.step);
        ticker.stop();

        Ok(Self {
            bounds,
            config,
            model,
            display_mode: DisplayMode::default(),
            orientation: Orientation::default(),
            inverted: false,
            label: Label::default(),
            marquee: None,
            style: ProgressStyle {
                border: Stroke::new(COLOR_BORDER, config.border_width),
                ..ProgressStyle::default()
            },
            ticker,
            redraw,
        })
    }

    // ------------------------------------------------------------------------
    // Value
    // ------------------------------------------------------------------------

    pub fn minimum(&self) -> i32 {
        self.model.minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.model.maximum()
    }

    pub fn value(&self) -> i32 {
        self.model.value()
    }

    pub fn step_size(&self) -> i32 {
        self.model.step_size()
    }

    pub fn model(&self) -> &ProgressModel {
        &self.model
    }

    /// Share of the bar a continuous fill covers, within `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        self.model.fraction()
    }

    pub fn set_minimum(&mut self, minimum: i32) -> ProgressResult<()> {
        let result = self.model.set_minimum(minimum);
        self.commit(result)
    }

    pub fn set_maximum(&mut self, maximum: i32) -> ProgressResult<()> {
        let result = self.model.set_maximum(maximum);
        self.commit(result)
    }

    pub fn set_value(&mut self, value: i32) -> ProgressResult<()> {
        let result = self.model.set_value(value);
        self.commit(result)
    }

    /// Change the amount [`step`](Self::step) adds. Nothing visible changes.
    pub fn set_step_size(&mut self, step: i32) {
        self.model.set_step_size(step);
    }

    /// Advance the value by the step size, stopping at the maximum.
    ///
    /// In the marquee the value keeps tracking but the fill is hidden, so
    /// only a label showing the value asks for a redraw. Returns the new value.
    pub fn step(&mut self) -> i32 {
        let value = self.model.step();
        if self.display_mode != DisplayMode::Marquee || self.label.tracks_value() {
            self.redraw.request_redraw();
        }
        value
    }

    /// Notify after an accepted mutation, report a rejected one.
    fn commit(&self, result: ProgressResult<()>) -> ProgressResult<()> {
        match result {
            Ok(()) => {
                self.redraw.request_redraw();
                Ok(())
            }
            Err(e) => {
                warn!(" Progress change rejected: {}", e);
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Label
    // ------------------------------------------------------------------------

    pub fn text_mode(&self) -> TextMode {
        self.label.mode()
    }

    pub fn set_text_mode(&mut self, mode: TextMode) {
        self.label.set_mode(mode);
        self.redraw.request_redraw();
    }

    /// Show host text. Blank text hides the label.
    pub fn set_text(&mut self, text: &str) {
        self.label.set_text(text);
        self.redraw.request_redraw();
    }

    /// Label the next draw pass will show.
    pub fn label(&self) -> Option<LabelText> {
        self.label.render(&self.model)
    }

    // ------------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------------

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        let transition = ModeTransition::between(self.display_mode, mode);
        debug!(
            " Progress mode {:?} -> {:?}: {:?}",
            self.display_mode, mode, transition
        );
        self.display_mode = mode;

        match transition {
            ModeTransition::Keep => {}
            ModeTransition::EnterMarquee => self.enter_marquee(),
            ModeTransition::ExitMarquee => {
                self.ticker.stop();
                self.marquee = None;
            }
        }
        self.redraw.request_redraw();
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Changing the axis while animating restarts the marquee on the new axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            if self.marquee.is_some() {
                self.enter_marquee();
            }
        }
        self.redraw.request_redraw();
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
        self.redraw.request_redraw();
    }

    pub fn marquee_animation(&self) -> MarqueeAnimation {
        self.config.marquee.animation
    }

    /// Switching the animation while animating restarts the marquee.
    pub fn set_marquee_animation(&mut self, animation: MarqueeAnimation) {
        self.config.marquee.animation = animation;
        if self.marquee.is_some() {
            self.enter_marquee();
        }
        self.redraw.request_redraw();
    }

    /// Animator state, present only in the marquee.
    pub fn marquee(&self) -> Option<&MarqueeAnimator> {
        self.marquee.as_ref()
    }

    pub fn style(&self) -> &ProgressStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ProgressStyle) {
        self.style = style;
        self.redraw.request_redraw();
    }

    pub fn padding(&self) -> Padding {
        self.config.padding()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    fn enter_marquee(&mut self) {
        self.marquee = Some(MarqueeAnimator::enter(&self.config.marquee, self.track()));
        self.ticker.restart();
    }

    fn track(&self) -> MarqueeTrack {
        let padding = self.padding();
        match self.orientation {
            Orientation::Horizontal => MarqueeTrack {
                extent: self.bounds.size.width as i32,
                leading_padding: padding.left as i32,
            },
            Orientation::Vertical => MarqueeTrack {
                extent: self.bounds.size.height as i32,
                leading_padding: padding.top as i32,
            },
        }
    }

    /// Tick handler: advance the marquee, if any.
    fn on_tick(&mut self) {
        let track = self.track();
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.tick(track);
            self.redraw.request_redraw();
        }
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    /// Whether the fill starts at the right or bottom edge.
    fn grows_from_end(&self) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.inverted,
            Orientation::Vertical => !self.inverted,
        }
    }

    /// Fill length along the main axis, within the padded content area.
    fn fill_length(&self, content: Rectangle) -> u32 {
        let padding = self.padding();
        let (extent, main_padding, available) = match self.orientation {
            Orientation::Horizontal => (
                self.bounds.size.width,
                padding.horizontal(),
                content.size.width,
            ),
            Orientation::Vertical => (
                self.bounds.size.height,
                padding.vertical(),
                content.size.height,
            ),
        };

        self.model
            .fill_length(extent)
            .saturating_sub(main_padding)
            .min(available)
    }

    /// Part of `content` from `offset` to `offset + length` along the main
    /// axis, counted from the edge the fill grows from.
    fn span(&self, content: Rectangle, offset: u32, length: u32) -> Rectangle {
        let from_end = self.grows_from_end();
        let origin = content.top_left;
        match self.orientation {
            Orientation::Horizontal => {
                let x = if from_end {
                    content.size.width as i32 - (offset + length) as i32
                } else {
                    offset as i32
                };
                Rectangle::new(
                    origin + Point::new(x, 0),
                    Size::new(length, content.size.height),
                )
            }
            Orientation::Vertical => {
                let y = if from_end {
                    content.size.height as i32 - (offset + length) as i32
                } else {
                    offset as i32
                };
                Rectangle::new(
                    origin + Point::new(0, y),
                    Size::new(content.size.width, length),
                )
            }
        }
    }

    /// Marquee segment clipped to the bar.
    fn segment(&self, marquee: &MarqueeAnimator) -> Rectangle {
        let padding = self.padding();
        let position = marquee.position();
        let segment_width = marquee.segment_width() as u32;
        let size = self.bounds.size;

        let segment = match self.orientation {
            Orientation::Horizontal => Rectangle::new(
                self.bounds.top_left + Point::new(position, padding.top as i32),
                Size::new(segment_width, size.height.saturating_sub(padding.vertical())),
            ),
            Orientation::Vertical => Rectangle::new(
                self.bounds.top_left + Point::new(padding.left as i32, position),
                Size::new(size.width.saturating_sub(padding.horizontal()), segment_width),
            ),
        };
        segment.intersection(&self.bounds)
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    fn draw_background<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        if is_empty(&self.bounds) {
            return Ok(());
        }
        canvas.fill_rectangle(self.bounds, self.style.background)?;

        let border = self.style.border;
        if border.width == 0 {
            return Ok(());
        }

        let left = self.bounds.top_left.x;
        let top = self.bounds.top_left.y;
        let right = left + self.bounds.size.width as i32 - 1;
        let bottom = top + self.bounds.size.height as i32 - 1;

        canvas.draw_line(Point::new(left, top), Point::new(right, top), border)?;
        canvas.draw_line(Point::new(right, top), Point::new(right, bottom), border)?;
        canvas.draw_line(Point::new(left, bottom), Point::new(right, bottom), border)?;
        canvas.draw_line(Point::new(left, top), Point::new(left, bottom), border)
    }

    fn draw_continuous<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let content = self.padding().shrink(self.bounds);
        let length = self.fill_length(content);
        if length == 0 || is_empty(&content) {
            return Ok(());
        }
        canvas.fill_rectangle(self.span(content, 0, length), self.style.fill)
    }

    fn draw_blocks<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let content = self.padding().shrink(self.bounds);
        if is_empty(&content) {
            return Ok(());
        }

        let length = self.fill_length(content);
        let mut offset = 0;
        while offset < length {
            let block = BLOCK_LENGTH.min(length - offset);
            canvas.fill_rectangle(self.span(content, offset, block), self.style.fill)?;
            offset += BLOCK_LENGTH + BLOCK_GAP;
        }
        Ok(())
    }

    fn draw_marquee<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let Some(marquee) = self.marquee.as_ref() else {
            return Ok(());
        };

        let segment = self.segment(marquee);
        if is_empty(&segment) {
            return Ok(());
        }
        canvas.fill_rectangle(segment, self.style.fill)
    }

    fn draw_label<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let Some(text) = self.label() else {
            return Ok(());
        };

        let size = canvas.measure_text(&text, self.style.font);
        let top_left = centered_rect(center_of(&self.bounds), size).top_left;
        canvas.draw_text(&text, self.style.font, self.style.text, top_left)
    }
}

fn is_empty(rect: &Rectangle) -> bool {
    rect.size.width == 0 || rect.size.height == 0
}

impl<T, R> Widget for ProgressBar<T, R>
where
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
        self.draw_background(canvas)?;
        match self.display_mode {
            DisplayMode::Continuous => self.draw_continuous(canvas)?,
            DisplayMode::Blocks => self.draw_blocks(canvas)?,
            DisplayMode::Marquee => self.draw_marquee(canvas)?,
        }
        self.draw_label(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandRecorder, DrawCommand};
    use crate::config::MarqueeConfig;
    use crate::testing::CountingRedraw;
    use crate::tick::{MARQUEE_TICK_INTERVAL, ManualTicker};
    use alloc::vec::Vec;

    type TestBar<'a> = ProgressBar<ManualTicker, &'a CountingRedraw>;

    fn horizontal() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(100, 23))
    }

    fn vertical() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(23, 100))
    }

    fn bar(redraw: &CountingRedraw) -> TestBar<'_> {
        ProgressBar::new(
            horizontal(),
            ProgressConfig::default(),
            ManualTicker::new(MARQUEE_TICK_INTERVAL),
            redraw,
        )
        .unwrap()
    }

    fn now() -> Instant {
        Instant::from_millis(0)
    }

    /// Rectangles filled after the background.
    fn fills(bar: &TestBar<'_>) -> Vec<Rectangle> {
        let mut recorder = CommandRecorder::new();
        bar.draw(&mut recorder).unwrap();
        recorder.filled_rectangles().skip(1).collect()
    }

    fn rect(x: i32, y: i32, width: u32, height: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn test_new_bar_defaults() {
        let redraw = CountingRedraw::default();
        let bar = bar(&redraw);

        assert_eq!((bar.minimum(), bar.maximum(), bar.value()), (0, 100, 0));
        assert_eq!(bar.step_size(), 10);
        assert_eq!(bar.display_mode(), DisplayMode::Continuous);
        assert_eq!(bar.orientation(), Orientation::Horizontal);
        assert!(!bar.is_inverted());
        assert_eq!(bar.text_mode(), TextMode::None);
        assert!(bar.marquee().is_none());
        assert!(!bar.ticker().is_running());
        assert_eq!(redraw.count(), 0);
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let redraw = CountingRedraw::default();
        let result = ProgressBar::new(
            horizontal(),
            ProgressConfig {
                minimum: 10,
                maximum: 0,
                ..ProgressConfig::default()
            },
            ManualTicker::new(MARQUEE_TICK_INTERVAL),
            &redraw,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_accepted_mutations_request_redraw() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);

        bar.set_value(40).unwrap();
        bar.set_maximum(80).unwrap();
        bar.set_minimum(10).unwrap();
        assert_eq!(redraw.take(), 3);

        bar.step();
        assert_eq!(bar.value(), 50);
        assert_eq!(redraw.take(), 1);
    }

    #[test]
    fn test_rejected_mutation_keeps_state_and_skips_redraw() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_maximum(50).unwrap();
        bar.set_value(40).unwrap();
        redraw.take();

        assert_eq!(
            bar.set_maximum(30),
            Err(RangeViolation::MaximumBelowValue {
                requested: 30,
                value: 40
            })
        );
        assert_eq!((bar.maximum(), bar.value()), (50, 40));
        assert!(bar.set_value(-1).is_err());
        assert_eq!(redraw.count(), 0);
    }

    #[test]
    fn test_step_in_marquee_tracks_value_without_redraw() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Marquee);
        redraw.take();

        assert_eq!(bar.step(), 10);
        assert_eq!(bar.value(), 10);
        assert_eq!(redraw.count(), 0);
    }

    #[test]
    fn test_step_in_marquee_redraws_value_label() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Marquee);
        bar.set_text_mode(TextMode::Percentage);
        redraw.take();

        bar.step();
        assert_eq!(redraw.take(), 1);
        assert_eq!(bar.label().unwrap().as_str(), "10%");

        bar.set_text("Working");
        redraw.take();
        bar.step();
        assert_eq!(redraw.count(), 0);
    }

    #[test]
    fn test_entering_marquee_starts_ticker_and_resets() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);

        bar.set_display_mode(DisplayMode::Marquee);
        assert!(bar.ticker().is_running());
        let marquee = bar.marquee().unwrap();
        assert_eq!(marquee.state(), MarqueeState::Slide);
        assert_eq!(marquee.position(), -50);
    }

    #[test]
    fn test_marquee_ticks_advance_and_redraw() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Marquee);
        redraw.take();

        bar.ticker_mut().fire_many(3);
        bar.update(now());
        assert_eq!(bar.marquee().unwrap().position(), -35);
        assert_eq!(redraw.count(), 3);
    }

    #[test]
    fn test_reselecting_marquee_keeps_position() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Marquee);
        bar.ticker_mut().fire_many(4);
        bar.update(now());

        bar.set_display_mode(DisplayMode::Marquee);
        assert_eq!(bar.marquee().unwrap().position(), -30);
    }

    #[test]
    fn test_leaving_marquee_stops_and_discards() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Marquee);
        bar.ticker_mut().fire_many(4);
        bar.update(now());

        bar.set_display_mode(DisplayMode::Blocks);
        assert!(!bar.ticker().is_running());
        assert!(bar.marquee().is_none());

        // Stopped ticker ignores fires, nothing advances or redraws
        redraw.take();
        bar.ticker_mut().fire();
        bar.update(now());
        assert_eq!(redraw.count(), 0);

        // Coming back starts over instead of resuming
        bar.set_display_mode(DisplayMode::Marquee);
        assert_eq!(bar.marquee().unwrap().position(), -50);
    }

    #[test]
    fn test_animation_switch_restarts_marquee() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);

        bar.set_marquee_animation(MarqueeAnimation::Bounce);
        assert!(bar.marquee().is_none(), "not animating outside the marquee");

        bar.set_display_mode(DisplayMode::Marquee);
        bar.ticker_mut().fire_many(2);
        bar.update(now());
        assert_eq!(bar.marquee().unwrap().position(), 12);

        bar.set_marquee_animation(MarqueeAnimation::Slide);
        let marquee = bar.marquee().unwrap();
        assert_eq!(marquee.state(), MarqueeState::Slide);
        assert_eq!(marquee.position(), -50);
    }

    #[test]
    fn test_vertical_marquee_uses_height_and_top_padding() {
        let redraw = CountingRedraw::default();
        let mut bar = ProgressBar::new(
            vertical(),
            ProgressConfig {
                marquee: MarqueeConfig {
                    animation: MarqueeAnimation::Bounce,
                    ..MarqueeConfig::default()
                },
                ..ProgressConfig::default()
            },
            ManualTicker::new(MARQUEE_TICK_INTERVAL),
            &redraw,
        )
        .unwrap();
        bar.set_orientation(Orientation::Vertical);
        bar.set_display_mode(DisplayMode::Marquee);

        // 2 + 9 * 5 = 47 is the last forward position on a 100 pixel track
        bar.ticker_mut().fire_many(10);
        bar.update(now());
        let marquee = bar.marquee().unwrap();
        assert_eq!(marquee.state(), MarqueeState::BounceBackward);
        assert_eq!(marquee.position(), 42);

        assert_eq!(fills(&bar), [rect(2, 42, 19, 50)]);
    }

    #[test]
    fn test_draw_background_and_border() {
        let redraw = CountingRedraw::default();
        let bar = bar(&redraw);
        let mut recorder = CommandRecorder::new();
        bar.draw(&mut recorder).unwrap();

        let border = Stroke::new(COLOR_BORDER, 1);
        assert_eq!(
            recorder.commands(),
            [
                DrawCommand::FillRectangle {
                    bounds: horizontal(),
                    color: COLOR_TRACK,
                },
                DrawCommand::Line {
                    from: Point::new(0, 0),
                    to: Point::new(99, 0),
                    stroke: border,
                },
                DrawCommand::Line {
                    from: Point::new(99, 0),
                    to: Point::new(99, 22),
                    stroke: border,
                },
                DrawCommand::Line {
                    from: Point::new(0, 22),
                    to: Point::new(99, 22),
                    stroke: border,
                },
                DrawCommand::Line {
                    from: Point::new(0, 0),
                    to: Point::new(0, 22),
                    stroke: border,
                },
            ]
        );
    }

    #[test]
    fn test_zero_border_width_skips_edges() {
        let redraw = CountingRedraw::default();
        let bar = ProgressBar::new(
            horizontal(),
            ProgressConfig {
                border_width: 0,
                ..ProgressConfig::default()
            },
            ManualTicker::new(MARQUEE_TICK_INTERVAL),
            &redraw,
        )
        .unwrap();

        let mut recorder = CommandRecorder::new();
        bar.draw(&mut recorder).unwrap();
        assert_eq!(recorder.lines().count(), 0);
    }

    #[test]
    fn test_continuous_fill_origins() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_value(50).unwrap();

        // 50% of 100 minus 4 pixels of padding
        assert_eq!(fills(&bar), [rect(2, 2, 46, 19)]);

        bar.set_inverted(true);
        assert_eq!(fills(&bar), [rect(52, 2, 46, 19)]);

        bar.set_bounds(vertical());
        bar.set_orientation(Orientation::Vertical);
        assert_eq!(fills(&bar), [rect(2, 2, 19, 46)]);

        bar.set_inverted(false);
        assert_eq!(fills(&bar), [rect(2, 52, 19, 46)]);
    }

    #[test]
    fn test_continuous_fill_is_bounded() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);

        assert!(fills(&bar).is_empty(), "nothing to fill at zero");

        bar.set_value(100).unwrap();
        assert_eq!(fills(&bar), [rect(2, 2, 96, 19)]);
    }

    #[test]
    fn test_zero_maximum_draws_no_fill() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_maximum(0).unwrap();

        assert_eq!(bar.fraction(), 0.0);
        assert!(fills(&bar).is_empty());
    }

    #[test]
    fn test_blocks_split_the_fill() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Blocks);
        bar.set_value(100).unwrap();

        let blocks = fills(&bar);
        assert_eq!(blocks.len(), 10);
        assert_eq!(blocks[0], rect(2, 2, 8, 19));
        assert_eq!(blocks[1], rect(12, 2, 8, 19));
        assert_eq!(blocks[9], rect(92, 2, 6, 19));
    }

    #[test]
    fn test_inverted_blocks_start_at_right_edge() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_display_mode(DisplayMode::Blocks);
        bar.set_inverted(true);
        bar.set_value(20).unwrap();

        // 20 - 4 = 16 pixels: one full block, then a 6 pixel one after the gap
        assert_eq!(fills(&bar), [rect(90, 2, 8, 19), rect(82, 2, 6, 19)]);
    }

    #[test]
    fn test_marquee_segment_is_clipped_to_bounds() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_value(70).unwrap();
        bar.set_display_mode(DisplayMode::Marquee);

        // Fully off the bar: no fill at all, the value is not shown
        assert!(fills(&bar).is_empty());

        bar.ticker_mut().fire_many(8);
        bar.update(now());
        assert_eq!(fills(&bar), [rect(0, 2, 40, 19)]);

        bar.ticker_mut().fire_many(3);
        bar.update(now());
        assert_eq!(fills(&bar), [rect(5, 2, 50, 19)]);
    }

    #[test]
    fn test_label_is_centered() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_value(50).unwrap();
        bar.set_text_mode(TextMode::Percentage);

        let mut recorder = CommandRecorder::new();
        bar.draw(&mut recorder).unwrap();

        match recorder.commands().last() {
            Some(DrawCommand::Text {
                text,
                color,
                top_left,
            }) => {
                assert_eq!(text.as_str(), "50%");
                assert_eq!(*color, COLOR_TEXT);
                // 18x10 pixels centered on (50, 11.5)
                assert_eq!(*top_left, Point::new(41, 7));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_set_text_and_blank_text() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);

        bar.set_text_mode(TextMode::ValueOverMaximum);
        assert_eq!(bar.label().unwrap().as_str(), "0 / 100");

        bar.set_text("Copying");
        assert_eq!(bar.text_mode(), TextMode::UserDefined);
        assert_eq!(bar.label().unwrap().as_str(), "Copying");

        bar.set_text("");
        assert_eq!(bar.text_mode(), TextMode::None);
        assert_eq!(bar.label(), None);
        assert_eq!(redraw.count(), 3);
    }

    #[test]
    fn test_set_step_size() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_step_size(30);

        assert_eq!(bar.step(), 30);
        assert_eq!(bar.step(), 60);
        assert_eq!(bar.step(), 90);
        assert_eq!(bar.step(), 100);
    }

    #[test]
    fn test_zero_bounds_draw_nothing() {
        let redraw = CountingRedraw::default();
        let mut bar = bar(&redraw);
        bar.set_bounds(Rectangle::zero());
        bar.set_value(50).unwrap();

        let mut recorder = CommandRecorder::new();
        bar.draw(&mut recorder).unwrap();
        assert!(recorder.commands().is_empty());
    }
}
