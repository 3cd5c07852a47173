use serde::{Deserialize, Serialize};

/// Slope of the steps/sec to m/s regression, measured against average adult walkers.
pub const WALKING_SPEED_SLOPE: f32 = 3.45;
/// Intercept of the steps/sec to m/s regression.
pub const WALKING_SPEED_INTERCEPT: f32 = -3.95;
/// Swing period (ms) used to fill the cadence window when there isn't enough data. Slow enough to read as standing still.
pub const PADDING_SWING_PERIOD_MS: f32 = 800.0;
/// Number of swing periods the cadence is averaged over, at minimum.
pub const MIN_CADENCE_SAMPLES: usize = 10;
/// Number of swing periods remembered per hand.
pub const SWING_HISTORY_PER_HAND: usize = 6;

/// How swing timing turns into walking speed.
///
/// The defaults come from field calibration and don't account for the player's height. Override them if
/// your players are, say, very tall or very small.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CadenceModel {
    /// m/s gained per step per second
    pub slope: f32,
    /// m/s at zero steps per second
    pub intercept: f32,
    /// Swing period (ms) used to pad sparse data
    pub padding_period_ms: f32,
    /// Minimum number of periods averaged
    pub min_samples: usize,
    /// Number of swing periods remembered per hand
    pub history_per_hand: usize,
}

impl Default for CadenceModel {
    fn default() -> Self {
        Self {
            slope: WALKING_SPEED_SLOPE,
            intercept: WALKING_SPEED_INTERCEPT,
            padding_period_ms: PADDING_SWING_PERIOD_MS,
            min_samples: MIN_CADENCE_SAMPLES,
            history_per_hand: SWING_HISTORY_PER_HAND,
        }
    }
}

/// Step rate derived from recent swing periods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cadence {
    /// Every period that went into the average, padding included
    pub swing_periods: Vec<f32>,
    /// Mean of `swing_periods`, in milliseconds
    pub average_swing_period_ms: f32,
    /// One step per swing
    pub steps_per_second: f32,
}

impl CadenceModel {
    /// Average the given swing periods into a step rate.
    ///
    /// Non-positive periods are dropped. If fewer than `min_samples` remain, the window is padded with
    /// `padding_period_ms`, which drags the estimate towards "not moving" until enough swings come in.
    pub fn cadence(&self, periods: impl IntoIterator<Item = f32>) -> Cadence {
        let mut swing_periods = periods
            .into_iter()
            .filter(|period| *period > 0.0)
            .collect::<Vec<_>>();
        if swing_periods.len() < self.min_samples {
            swing_periods.resize(self.min_samples, self.padding_period_ms);
        }

        let average_swing_period_ms =
            swing_periods.iter().sum::<f32>() / swing_periods.len() as f32;

        Cadence {
            steps_per_second: 1000.0 / average_swing_period_ms,
            average_swing_period_ms,
            swing_periods,
        }
    }

    /// Walking speed in m/s for the given step rate, before any scaling or clamping
    pub fn walking_speed(&self, steps_per_second: f32) -> f32 {
        self.slope * steps_per_second + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_cadence_pads_sparse_data() {
        let model = CadenceModel::default();

        let cadence = model.cadence(std::iter::empty());
        assert_eq!(cadence.swing_periods, vec![800.0; 10]);
        assert_relative_eq!(cadence.average_swing_period_ms, 800.0);
        assert_relative_eq!(cadence.steps_per_second, 1.25);

        // Nine real periods and one padded period
        let cadence = model.cadence(vec![300.0; 9]);
        assert_eq!(cadence.swing_periods.len(), 10);
        assert_relative_eq!(cadence.average_swing_period_ms, 350.0);
    }

    #[test]
    pub fn test_cadence_padding_boundary() {
        let model = CadenceModel::default();

        // Exactly ten periods: no padding at all
        let cadence = model.cadence(vec![300.0; 10]);
        assert_eq!(cadence.swing_periods, vec![300.0; 10]);
        assert_relative_eq!(cadence.average_swing_period_ms, 300.0);

        // More than ten periods are averaged as-is
        let cadence = model.cadence([vec![300.0; 6], vec![400.0; 6]].concat());
        assert_eq!(cadence.swing_periods.len(), 12);
        assert_relative_eq!(cadence.average_swing_period_ms, 350.0);
    }

    #[test]
    pub fn test_cadence_drops_non_positive_periods() {
        let model = CadenceModel::default();
        let cadence = model.cadence(vec![0.0, -5.0, 300.0]);
        assert_eq!(cadence.swing_periods.len(), 10);
        assert_eq!(cadence.swing_periods[0], 300.0);
        assert_relative_eq!(cadence.average_swing_period_ms, (300.0 + 9.0 * 800.0) / 10.0);
    }

    #[test]
    pub fn test_walking_speed() {
        let model = CadenceModel::default();
        assert_relative_eq!(model.walking_speed(1.25), 0.3625, epsilon = 1e-5);
        assert_relative_eq!(model.walking_speed(1000.0 / 300.0), 7.55, epsilon = 1e-4);
    }
}
