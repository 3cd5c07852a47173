use std::fmt;

use serde::{Deserialize, Serialize};

/// A read only snapshot of what the detector decided on the last update. Handy for logging and debug panels.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Telemetry {
    /// Step rate derived from the swing periods
    pub steps_per_second: f32,
    /// Speed the detector is easing towards, in m/s
    pub target_speed: f32,
    /// Smoothed speed, in m/s
    pub current_speed: f32,
    /// Mean of `swing_periods`, in milliseconds
    pub average_swing_period_ms: f32,
    /// Swing periods from both hands that went into the average, padding included
    pub swing_periods: Vec<f32>,
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps/sec: {:.1}, target: {:.1} m/s, current: {:.1} m/s, avg swing: {:.1} ms, swings: [",
            self.steps_per_second,
            self.target_speed,
            self.current_speed,
            self.average_swing_period_ms
        )?;
        for (i, period) in self.swing_periods.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", period.round())?;
        }
        write!(f, "]")
    }
}
