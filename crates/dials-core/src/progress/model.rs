//! Validated progress value model.
//!
//! Pure validate-and-mutate logic with no rendering side effects. Every
//! operation either keeps `minimum <= value <= maximum` or returns a
//! [`RangeViolation`] and leaves the model untouched.

use thiserror_no_std::Error;

/// Default amount added by [`ProgressModel::step`].
pub const DEFAULT_STEP: i32 = 10;

/// A mutation that would break `minimum <= value <= maximum`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeViolation {
    #[error("Minimum {requested} is higher than value {value}")]
    MinimumAboveValue {
        /// Rejected minimum
        requested: i32,
        /// Current value
        value: i32,
    },

    #[error("Maximum {requested} is lower than value {value}")]
    MaximumBelowValue {
        /// Rejected maximum
        requested: i32,
        /// Current value
        value: i32,
    },

    #[error("Value {requested} is higher than maximum {maximum}")]
    ValueAboveMaximum {
        /// Rejected value
        requested: i32,
        /// Current maximum
        maximum: i32,
    },

    #[error("Value {requested} is lower than minimum {minimum}")]
    ValueBelowMinimum {
        /// Rejected value
        requested: i32,
        /// Current minimum
        minimum: i32,
    },
}

/// Result type for progress mutations
pub type ProgressResult<T> = Result<T, RangeViolation>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressModel {
    minimum: i32,
    maximum: i32,
    value: i32,
    step: i32,
}

impl Default for ProgressModel {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            value: 0,
            step: DEFAULT_STEP,
        }
    }
}

impl ProgressModel {
    /// Model spanning `minimum..=maximum` with the value at `minimum`.
    pub fn with_range(minimum: i32, maximum: i32) -> ProgressResult<Self> {
        if maximum < minimum {
            return Err(RangeViolation::MaximumBelowValue {
                requested: maximum,
                value: minimum,
            });
        }

        Ok(Self {
            minimum,
            maximum,
            value: minimum,
            step: DEFAULT_STEP,
        })
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn step_size(&self) -> i32 {
        self.step
    }

    pub fn set_step_size(&mut self, step: i32) {
        self.step = step;
    }

    pub fn set_minimum(&mut self, minimum: i32) -> ProgressResult<()> {
        if minimum > self.value {
            return Err(RangeViolation::MinimumAboveValue {
                requested: minimum,
                value: self.value,
            });
        }

        self.minimum = minimum;
        Ok(())
    }

    pub fn set_maximum(&mut self, maximum: i32) -> ProgressResult<()> {
        if maximum < self.value {
            return Err(RangeViolation::MaximumBelowValue {
                requested: maximum,
                value: self.value,
            });
        }

        self.maximum = maximum;
        Ok(())
    }

    /// Set the value. Values outside `minimum..=maximum` are rejected, never clamped.
    pub fn set_value(&mut self, value: i32) -> ProgressResult<()> {
        if value > self.maximum {
            return Err(RangeViolation::ValueAboveMaximum {
                requested: value,
                maximum: self.maximum,
            });
        }
        if value < self.minimum {
            return Err(RangeViolation::ValueBelowMinimum {
                requested: value,
                minimum: self.minimum,
            });
        }

        self.value = value;
        Ok(())
    }

    /// Advance the value by the step size without passing either bound.
    ///
    /// A step that would overshoot adds exactly what is left up to the bound,
    /// so stepping at the bound is a no-op. Returns the new value.
    pub fn step(&mut self) -> i32 {
        self.value = self
            .value
            .saturating_add(self.step)
            .clamp(self.minimum, self.maximum);
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value == self.maximum
    }

    /// `value / maximum`, or zero when the maximum is zero.
    pub fn ratio(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.value as f32 / self.maximum as f32
    }

    /// `value * 100 / maximum`, or zero when the maximum is zero.
    ///
    /// Multiplies before dividing so whole percentages stay exact.
    pub fn percentage(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.value as f32 * 100.0 / self.maximum as f32
    }

    /// Share of the bar to fill, within `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        self.ratio().clamp(0.0, 1.0)
    }

    /// Part of `extent` pixels covered by the fill, within `0..=extent`.
    pub fn fill_length(&self, extent: u32) -> u32 {
        if self.maximum == 0 {
            return 0;
        }

        let length = i64::from(self.value) * i64::from(extent) / i64::from(self.maximum);
        length.clamp(0, i64::from(extent)) as u32
    }
}
