//! Hardware-independent core library for dials
//!
//! This crate contains the platform-agnostic logic for a small set of
//! self-drawing widgets: an analog clock face and a progress indicator with a
//! marquee animation. Each widget owns its state, validates its own numeric
//! invariants and raises a redraw request after every state change.
//!
//! Widgets never touch pixels. They issue drawing commands through the
//! [`canvas::Canvas`] trait, advance on ticks delivered by an injected
//! [`tick::TickSource`] and notify the host through
//! [`redraw::RedrawRequest`].
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod canvas;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod progress;
pub mod redraw;
pub mod styling;
pub mod tick;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;
