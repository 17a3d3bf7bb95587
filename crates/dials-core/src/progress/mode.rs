//! Display modes and the transitions between them
//!
//! Switching into or out of the marquee couples to the tick source and the
//! animator state. [`ModeTransition::between`] spells those couplings out for
//! every pair of modes so the widget only has to apply the result.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Fill drawn as discrete blocks.
    Blocks,
    /// Fill drawn as one proportional rectangle.
    #[default]
    Continuous,
    /// Indeterminate progress: a moving segment instead of a fill.
    Marquee,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// What a display mode change does to the marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Nothing to reset or stop.
    Keep,
    /// Reset the animator and start the tick source.
    EnterMarquee,
    /// Stop the tick source and discard the animator.
    ExitMarquee,
}

impl ModeTransition {
    pub const fn between(from: DisplayMode, to: DisplayMode) -> Self {
        use DisplayMode::*;

        match (from, to) {
            (Blocks, Blocks) => Self::Keep,
            (Blocks, Continuous) => Self::Keep,
            (Blocks, Marquee) => Self::EnterMarquee,
            (Continuous, Blocks) => Self::Keep,
            (Continuous, Continuous) => Self::Keep,
            (Continuous, Marquee) => Self::EnterMarquee,
            // Already animating, keep the current position
            (Marquee, Marquee) => Self::Keep,
            (Marquee, Blocks) => Self::ExitMarquee,
            (Marquee, Continuous) => Self::ExitMarquee,
        }
    }
}
