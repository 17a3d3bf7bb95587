//! Widget configuration
//!
//! Plain serde-derived settings. The defaults are a `0..=100` range stepping
//! by 10, a marquee ticking every 100 ms and a clock ticking once per second.
//! Hosts may deserialize them from whatever format they use; the widgets take
//! them by value at construction.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::styling::Padding;

/// Marquee animation flavor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeAnimation {
    /// Segment slides across the bar and wraps around.
    #[default]
    Slide,
    /// Segment bounces between the two ends of the bar.
    Bounce,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_interval_ms: u64,
    /// Offset from UTC applied to live wall-clock time.
    pub utc_offset_minutes: i32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            utc_offset_minutes: 0,
        }
    }
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Length of the moving segment along the main axis (pixels).
    pub segment_width: i32,
    /// Advance per tick (pixels).
    pub speed: i32,
    pub animation: MarqueeAnimation,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            segment_width: 50,
            speed: 5,
            animation: MarqueeAnimation::Slide,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    pub minimum: i32,
    pub maximum: i32,
    pub step: i32,
    /// Uniform padding between the bar bounds and the fill (pixels).
    pub padding: u32,
    pub border_width: u32,
    pub tick_interval_ms: u64,
    pub marquee: MarqueeConfig,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            step: 10,
            padding: 2,
            border_width: 1,
            tick_interval_ms: 100,
            marquee: MarqueeConfig::default(),
        }
    }
}

impl ProgressConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn padding(&self) -> Padding {
        Padding::all(self.padding)
    }
}
