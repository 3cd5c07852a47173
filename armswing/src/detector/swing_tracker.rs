use std::collections::VecDeque;

/// Which way a hand was last seen moving along the walking axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingDirection {
    /// Moving towards +axis
    Positive,
    /// Moving towards -axis
    Negative,
}

/// Thresholds used to decide what counts as a swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingThresholds {
    /// Minimum movement along the axis in a single frame before the hand counts as moving
    pub detect_threshold: f32,
    /// Reversals closer together than this (ms) are treated as controller shake
    pub debounce_ms: f32,
    /// How long (ms) a hand can go without swinging before it is considered stopped
    pub timeout_ms: f32,
}

/// Per hand swing state.
///
/// Each frame the hand's position along the walking axis is fed in. A reversal of direction is a swing, and
/// the time between two swings is remembered as a swing period.
#[derive(Debug, Clone)]
pub struct SwingTracker {
    last_axial_position: Option<f32>,
    last_direction: Option<SwingDirection>,
    last_swing_time_ms: Option<f64>,
    recent_swing_periods: VecDeque<f32>,
    capacity: usize,
}

impl SwingTracker {
    /// Create a tracker that remembers at most `capacity` swing periods
    pub fn new(capacity: usize) -> Self {
        Self {
            last_axial_position: None,
            last_direction: None,
            last_swing_time_ms: None,
            recent_swing_periods: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Feed in the hand's position along the walking axis at `time_ms`.
    ///
    /// Returns the swing period if this frame completed one.
    pub fn track(
        &mut self,
        axial_position: f32,
        time_ms: f64,
        thresholds: &SwingThresholds,
    ) -> Option<f32> {
        // The first sample only gives us something to compare against.
        let last_axial_position = self.last_axial_position.replace(axial_position)?;

        let diff = axial_position - last_axial_position;
        let direction = if diff > thresholds.detect_threshold {
            Some(SwingDirection::Positive)
        } else if diff < -thresholds.detect_threshold {
            Some(SwingDirection::Negative)
        } else {
            self.last_direction
        };

        let mut recorded = None;
        if let (Some(last_direction), Some(direction)) = (self.last_direction, direction) {
            if last_direction != direction {
                if let Some(last_swing_time_ms) = self.last_swing_time_ms {
                    let period = (time_ms - last_swing_time_ms) as f32;
                    if period > thresholds.debounce_ms {
                        self.push_period(period);
                        recorded = Some(period);
                    }
                }
                self.last_swing_time_ms = Some(time_ms);
            }
        }

        self.last_direction = direction;
        recorded
    }

    /// Forget the swing history if the hand hasn't swung for longer than the timeout.
    ///
    /// Returns `true` if the history was cleared.
    pub fn expire(&mut self, time_ms: f64, thresholds: &SwingThresholds) -> bool {
        match self.last_swing_time_ms {
            Some(last_swing_time_ms)
                if (time_ms - last_swing_time_ms) as f32 > thresholds.timeout_ms =>
            {
                self.recent_swing_periods.clear();
                self.last_swing_time_ms = None;
                self.last_direction = None;
                true
            }
            _ => false,
        }
    }

    /// Recent swing periods in milliseconds, oldest first
    pub fn recent_swing_periods(&self) -> impl Iterator<Item = f32> + '_ {
        self.recent_swing_periods.iter().copied()
    }

    /// Number of swing periods currently remembered
    pub fn swing_count(&self) -> usize {
        self.recent_swing_periods.len()
    }

    /// Last seen direction of movement
    pub fn last_direction(&self) -> Option<SwingDirection> {
        self.last_direction
    }

    /// Time of the last swing
    pub fn last_swing_time_ms(&self) -> Option<f64> {
        self.last_swing_time_ms
    }

    /// Last seen position along the walking axis
    pub fn last_axial_position(&self) -> Option<f32> {
        self.last_axial_position
    }

    fn push_period(&mut self, period: f32) {
        if self.capacity == 0 {
            return;
        }
        while self.recent_swing_periods.len() >= self.capacity {
            self.recent_swing_periods.pop_front();
        }
        self.recent_swing_periods.push_back(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: SwingThresholds = SwingThresholds {
        detect_threshold: 0.01,
        debounce_ms: 150.0,
        timeout_ms: 700.0,
    };

    /// Move back and forth, reversing at each of `reversal_times`
    fn swing_at(tracker: &mut SwingTracker, reversal_times: &[f64]) -> Vec<Option<f32>> {
        let mut position = 0.0;
        let mut step = 0.05;
        tracker.track(position, 0.0, &THRESHOLDS);
        position += step;
        tracker.track(position, 1.0, &THRESHOLDS);

        reversal_times
            .iter()
            .map(|time| {
                step = -step;
                position += step;
                tracker.track(position, *time, &THRESHOLDS)
            })
            .collect()
    }

    #[test]
    pub fn test_first_sample_only_seeds() {
        let mut tracker = SwingTracker::new(6);
        assert_eq!(tracker.track(0.5, 0.0, &THRESHOLDS), None);
        assert_eq!(tracker.last_axial_position(), Some(0.5));
        assert_eq!(tracker.last_direction(), None);
        assert_eq!(tracker.last_swing_time_ms(), None);
    }

    #[test]
    pub fn test_swing_periods_are_recorded() {
        let mut tracker = SwingTracker::new(6);
        let recorded = swing_at(&mut tracker, &[100.0, 400.0, 750.0]);

        // The first reversal has nothing to measure against
        assert_eq!(recorded, vec![None, Some(300.0), Some(350.0)]);
        assert_eq!(tracker.recent_swing_periods().collect::<Vec<_>>(), vec![300.0, 350.0]);
        assert_eq!(tracker.last_swing_time_ms(), Some(750.0));
    }

    #[test]
    pub fn test_small_movements_keep_direction() {
        let mut tracker = SwingTracker::new(6);
        tracker.track(0.0, 0.0, &THRESHOLDS);
        tracker.track(0.05, 10.0, &THRESHOLDS);
        assert_eq!(tracker.last_direction(), Some(SwingDirection::Positive));

        // Drifting backwards, but below the noise floor
        tracker.track(0.045, 20.0, &THRESHOLDS);
        assert_eq!(tracker.last_direction(), Some(SwingDirection::Positive));
        assert_eq!(tracker.last_swing_time_ms(), None);

        tracker.track(0.02, 30.0, &THRESHOLDS);
        assert_eq!(tracker.last_direction(), Some(SwingDirection::Negative));
        assert_eq!(tracker.last_swing_time_ms(), Some(30.0));
    }

    #[test]
    pub fn test_shaking_is_ignored() {
        let mut tracker = SwingTracker::new(6);
        let recorded = swing_at(&mut tracker, &[100.0, 400.0, 500.0, 600.0]);

        // Reversals 100ms apart are too quick to be arm swings
        assert_eq!(recorded, vec![None, Some(300.0), None, None]);
        assert_eq!(tracker.swing_count(), 1);
        assert_eq!(tracker.last_swing_time_ms(), Some(600.0));
    }

    #[test]
    pub fn test_history_is_bounded() {
        let mut tracker = SwingTracker::new(6);
        let mut time = 0.0;
        let reversal_times = (1..=10)
            .map(|i| {
                time += 200.0 + i as f64;
                time
            })
            .collect::<Vec<_>>();
        swing_at(&mut tracker, &reversal_times);

        // Nine periods were measured, only the newest six are kept, oldest first
        assert_eq!(
            tracker.recent_swing_periods().collect::<Vec<_>>(),
            vec![205.0, 206.0, 207.0, 208.0, 209.0, 210.0]
        );
    }

    #[test]
    pub fn test_expire() {
        let mut tracker = SwingTracker::new(6);
        swing_at(&mut tracker, &[100.0, 400.0]);
        assert_eq!(tracker.swing_count(), 1);

        assert!(!tracker.expire(1100.0, &THRESHOLDS));
        assert_eq!(tracker.swing_count(), 1);

        assert!(tracker.expire(1101.0, &THRESHOLDS));
        assert_eq!(tracker.swing_count(), 0);
        assert_eq!(tracker.last_swing_time_ms(), None);
        assert_eq!(tracker.last_direction(), None);

        // Nothing left to expire
        assert!(!tracker.expire(5000.0, &THRESHOLDS));
    }
}
