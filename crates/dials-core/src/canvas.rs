//! Render surface abstraction
//!
//! Widgets describe a frame as a short list of drawing commands issued
//! against a [`Canvas`]. Two canvases are provided:
//!
//! - [`DisplayCanvas`] rasterizes the commands onto any embedded-graphics
//!   `DrawTarget<Color = Rgb565>` (a framebuffer, a display driver, the
//!   desktop simulator window).
//! - [`CommandRecorder`] keeps the commands as [`DrawCommand`] values so the
//!   output of a draw pass can be inspected without a display.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::Drawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Ellipse, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

/// Stroke used for outlines and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb565,
    pub width: u32,
}

impl Stroke {
    pub const fn new(color: Rgb565, width: u32) -> Self {
        Self { color, width }
    }

    fn to_primitive_style(self) -> PrimitiveStyle<Rgb565> {
        PrimitiveStyle::with_stroke(self.color, self.width)
    }
}

/// Drawing primitives a widget needs from its host.
pub trait Canvas {
    type Error;

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error>;

    fn draw_ellipse(&mut self, bounds: Rectangle, stroke: Stroke) -> Result<(), Self::Error>;

    fn fill_ellipse(&mut self, bounds: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    fn fill_rectangle(&mut self, bounds: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    /// Size the text would occupy when drawn with `font`.
    fn measure_text(&self, text: &str, font: &MonoFont<'static>) -> Size {
        measure_mono_text(text, font)
    }

    /// Draw `text` with its top-left corner at `top_left`.
    fn draw_text(
        &mut self,
        text: &str,
        font: &'static MonoFont<'static>,
        color: Rgb565,
        top_left: Point,
    ) -> Result<(), Self::Error>;
}

/// Monospace text extent: every glyph advances by the character width plus spacing.
pub fn measure_mono_text(text: &str, font: &MonoFont<'_>) -> Size {
    let glyphs = text.chars().count() as u32;
    if glyphs == 0 {
        return Size::new(0, font.character_size.height);
    }

    let advance = font.character_size.width + font.character_spacing;
    Size::new(
        glyphs * advance - font.character_spacing,
        font.character_size.height,
    )
}

// ---------------------------------------------------------------------------
// DisplayCanvas
// ---------------------------------------------------------------------------

/// Canvas backed by an embedded-graphics draw target.
pub struct DisplayCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> DisplayCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Canvas for DisplayCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error> {
        Line::new(from, to)
            .into_styled(stroke.to_primitive_style())
            .draw(&mut *self.target)
    }

    fn draw_ellipse(&mut self, bounds: Rectangle, stroke: Stroke) -> Result<(), Self::Error> {
        Ellipse::new(bounds.top_left, bounds.size)
            .into_styled(stroke.to_primitive_style())
            .draw(&mut *self.target)
    }

    fn fill_ellipse(&mut self, bounds: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        Ellipse::new(bounds.top_left, bounds.size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.target)
    }

    fn fill_rectangle(&mut self, bounds: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.target.fill_solid(&bounds, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: &'static MonoFont<'static>,
        color: Rgb565,
        top_left: Point,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(font, color);
        Text::with_baseline(text, top_left, style, Baseline::Top).draw(&mut *self.target)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CommandRecorder
// ---------------------------------------------------------------------------

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, stroke: Stroke },
    Ellipse { bounds: Rectangle, stroke: Stroke },
    FillEllipse { bounds: Rectangle, color: Rgb565 },
    FillRectangle { bounds: Rectangle, color: Rgb565 },
    Text {
        text: heapless::String<32>,
        color: Rgb565,
        top_left: Point,
    },
}

/// Canvas that records every command instead of drawing it.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded lines as `(from, to)` pairs, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// All filled rectangles, in draw order.
    pub fn filled_rectangles(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRectangle { bounds, .. } => Some(*bounds),
            _ => None,
        })
    }

    /// Text of every recorded text command, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for CommandRecorder {
    type Error = Infallible;

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Line { from, to, stroke });
        Ok(())
    }

    fn draw_ellipse(&mut self, bounds: Rectangle, stroke: Stroke) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Ellipse { bounds, stroke });
        Ok(())
    }

    fn fill_ellipse(&mut self, bounds: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillEllipse { bounds, color });
        Ok(())
    }

    fn fill_rectangle(&mut self, bounds: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillRectangle { bounds, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _font: &'static MonoFont<'static>,
        color: Rgb565,
        top_left: Point,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text {
            text: crate::styling::truncated(text),
            color,
            top_left,
        });
        Ok(())
    }
}
