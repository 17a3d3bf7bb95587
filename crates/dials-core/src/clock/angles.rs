//! Needle angles for a 12-hour analog face.
//!
//! Angles are in radians, measured clockwise from 3 o'clock (screen y grows
//! downwards). Each needle is shifted by a quarter turn so that zero points
//! to 12. The hour needle only follows the hour component and jumps once per
//! hour; there is no sweep with the minutes.

use core::f32::consts::TAU;

use super::time::TimeOfDay;

/// One second or minute tick: a sixtieth of a turn.
pub const MINUTE_STEP: f32 = TAU / 60.0;

/// One hour tick: a twelfth of a turn.
pub const HOUR_STEP: f32 = TAU / 12.0;

pub fn second_angle(second: u32) -> f32 {
    (second as f32 - 15.0) * MINUTE_STEP
}

pub fn minute_angle(minute: u32) -> f32 {
    (minute as f32 - 15.0) * MINUTE_STEP
}

pub fn hour_angle(hour: u32) -> f32 {
    (hour as f32 - 3.0) * HOUR_STEP
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

impl NeedleAngles {
    pub fn from_time(time: TimeOfDay) -> Self {
        Self {
            second: second_angle(u32::from(time.second())),
            minute: minute_angle(u32::from(time.minute())),
            hour: hour_angle(u32::from(time.hour())),
        }
    }
}
