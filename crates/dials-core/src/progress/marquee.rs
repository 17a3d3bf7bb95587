//! Marquee animation state machine
//!
//! Positions are offsets along the bar's main axis, relative to the bar's
//! leading edge. The animator knows nothing about drawing; the widget feeds it
//! a [`MarqueeTrack`] on every tick and turns the position into a rectangle.

use log::debug;

use crate::config::{MarqueeAnimation, MarqueeConfig};

/// Animation state. Transitions only happen on tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeState {
    Slide,
    BounceForward,
    BounceBackward,
}

/// Space the segment moves in, measured along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeTrack {
    /// Full bar length (pixels).
    pub extent: i32,
    /// Padding before the first drawable pixel (pixels).
    pub leading_padding: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeAnimator {
    state: MarqueeState,
    position: i32,
    segment_width: i32,
    speed: i32,
}

impl MarqueeAnimator {
    /// Enter the marquee: Slide starts fully off the bar, Bounce starts
    /// moving forward from the leading padding.
    pub fn enter(config: &MarqueeConfig, track: MarqueeTrack) -> Self {
        // Negative sizes would let the segment run backwards forever
        let segment_width = config.segment_width.max(0);
        let speed = config.speed.max(0);

        let (state, position) = match config.animation {
            MarqueeAnimation::Slide => (MarqueeState::Slide, -segment_width),
            MarqueeAnimation::Bounce => (MarqueeState::BounceForward, track.leading_padding),
        };
        debug!(" Marquee entered: {:?} at {}", state, position);

        Self {
            state,
            position,
            segment_width,
            speed,
        }
    }

    pub fn state(&self) -> MarqueeState {
        self.state
    }

    pub fn animation(&self) -> MarqueeAnimation {
        match self.state {
            MarqueeState::Slide => MarqueeAnimation::Slide,
            MarqueeState::BounceForward | MarqueeState::BounceBackward => {
                MarqueeAnimation::Bounce
            }
        }
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn segment_width(&self) -> i32 {
        self.segment_width
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Advance one tick.
    pub fn tick(&mut self, track: MarqueeTrack) {
        match self.state {
            MarqueeState::Slide => {
                if self.position > track.extent {
                    self.position = -self.segment_width;
                } else {
                    self.position += self.speed;
                }
            }
            MarqueeState::BounceForward => {
                if self.position + self.speed + self.segment_width > track.extent {
                    self.state = MarqueeState::BounceBackward;
                    self.position -= self.speed;
                } else {
                    self.position += self.speed;
                }
                self.keep_on_track(track);
            }
            MarqueeState::BounceBackward => {
                if self.position - self.speed < track.leading_padding {
                    self.state = MarqueeState::BounceForward;
                    self.position += self.speed;
                } else {
                    self.position -= self.speed;
                }
                self.keep_on_track(track);
            }
        }
    }

    /// Reflecting can still overshoot when the track is shorter than
    /// `segment + speed` or shrank since the last tick.
    fn keep_on_track(&mut self, track: MarqueeTrack) {
        let last = (track.extent - self.segment_width).max(track.leading_padding);
        self.position = self.position.clamp(track.leading_padding, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: MarqueeTrack = MarqueeTrack {
        extent: 100,
        leading_padding: 2,
    };

    fn config(animation: MarqueeAnimation) -> MarqueeConfig {
        MarqueeConfig {
            animation,
            ..MarqueeConfig::default()
        }
    }

    #[test]
    fn test_slide_enters_off_bar() {
        let marquee = MarqueeAnimator::enter(&config(MarqueeAnimation::Slide), TRACK);
        assert_eq!(marquee.state(), MarqueeState::Slide);
        assert_eq!(marquee.position(), -50);
    }

    #[test]
    fn test_slide_advances_then_wraps_exactly() {
        let mut marquee = MarqueeAnimator::enter(&config(MarqueeAnimation::Slide), TRACK);

        // -50 + 31 * 5 = 105 is the first position past the extent
        for n in 1..=31 {
            marquee.tick(TRACK);
            assert_eq!(marquee.position(), -50 + n * 5);
        }

        marquee.tick(TRACK);
        assert_eq!(marquee.position(), -50);

        marquee.tick(TRACK);
        assert_eq!(marquee.position(), -45);
    }

    #[test]
    fn test_slide_at_extent_still_steps() {
        let mut marquee = MarqueeAnimator::enter(&config(MarqueeAnimation::Slide), TRACK);
        while marquee.position() != 100 {
            marquee.tick(TRACK);
        }
        marquee.tick(TRACK);
        assert_eq!(marquee.position(), 105);
    }

    #[test]
    fn test_bounce_enters_at_leading_padding() {
        let marquee = MarqueeAnimator::enter(&config(MarqueeAnimation::Bounce), TRACK);
        assert_eq!(marquee.state(), MarqueeState::BounceForward);
        assert_eq!(marquee.position(), 2);
        assert_eq!(marquee.animation(), MarqueeAnimation::Bounce);
    }

    #[test]
    fn test_bounce_reflects_and_steps_in_same_tick() {
        let mut marquee = MarqueeAnimator::enter(&config(MarqueeAnimation::Bounce), TRACK);

        // 2 + 9 * 5 = 47, one more step would put the segment end at 102
        for _ in 0..9 {
            marquee.tick(TRACK);
        }
        assert_eq!(marquee.position(), 47);
        assert_eq!(marquee.state(), MarqueeState::BounceForward);

        marquee.tick(TRACK);
        assert_eq!(marquee.state(), MarqueeState::BounceBackward);
        assert_eq!(marquee.position(), 42);
    }

    #[test]
    fn test_bounce_reflects_at_leading_padding() {
        let mut marquee = MarqueeAnimator {
            state: MarqueeState::BounceBackward,
            position: 5,
            segment_width: 50,
            speed: 5,
        };

        marquee.tick(TRACK);
        assert_eq!(marquee.state(), MarqueeState::BounceForward);
        assert_eq!(marquee.position(), 10);
    }

    #[test]
    fn test_bounce_never_leaves_track() {
        for (extent, segment_width, speed) in [(100, 50, 5), (100, 50, 7), (23, 50, 5), (60, 10, 45)] {
            let track = MarqueeTrack {
                extent,
                leading_padding: 2,
            };
            let mut marquee = MarqueeAnimator::enter(
                &MarqueeConfig {
                    segment_width,
                    speed,
                    animation: MarqueeAnimation::Bounce,
                },
                track,
            );

            for _ in 0..500 {
                marquee.tick(track);
                let position = marquee.position();
                assert!(position >= track.leading_padding, "{:?}", marquee);
                if segment_width + track.leading_padding <= extent {
                    assert!(position + segment_width <= extent, "{:?}", marquee);
                }
            }
        }
    }

    #[test]
    fn test_negative_config_is_clamped() {
        let marquee = MarqueeAnimator::enter(
            &MarqueeConfig {
                segment_width: -10,
                speed: -3,
                animation: MarqueeAnimation::Slide,
            },
            TRACK,
        );
        assert_eq!((marquee.segment_width(), marquee.speed()), (0, 0));
    }
}
