//! Hand angle computation.

use chrono::Timelike;

/// Degrees a hand sweeps per minute (minute hand) or per second (second hand).
const DEGREES_PER_TICK: f64 = 6.0;

/// A sampled wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute of hour (0-59).
    pub minute: u32,
    /// Second of minute (0-59).
    pub second: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Sample the time fields from any chrono time value.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }

    /// Hand angles for this time.
    pub fn hand_angles(self) -> HandAngles {
        compute_angles(self.minute, self.second)
    }
}

/// Rotation of the minute and second hands, in degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub minute: f64,
    pub second: f64,
}

/// Compute hand angles from the minute and second of the current hour.
///
/// The minute hand advances continuously through its 6° slot as the
/// seconds of the current minute pass.
pub fn compute_angles(minute: u32, second: u32) -> HandAngles {
    let second_angle = f64::from(second) * DEGREES_PER_TICK;
    let minute_angle =
        f64::from(minute) * DEGREES_PER_TICK + (f64::from(second) / 60.0) * DEGREES_PER_TICK;

    HandAngles {
        minute: minute_angle,
        second: second_angle,
    }
}
