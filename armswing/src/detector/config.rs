use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{cadence::CadenceModel, footsteps::FootstepConfig, swing_tracker::SwingThresholds};
use crate::{contexts::ReverseBinding, ArmSwingError, ArmSwingResult};

/// Settings for [`super::ArmSwingDetector`].
///
/// Every field has a default, so a config file only needs to mention what it changes:
///
/// ```
/// # use armswing::ArmSwingConfig;
/// let config = ArmSwingConfig::from_json(r#"{ "speed_factor": 1.5, "debug": true }"#).unwrap();
/// assert_eq!(config.smoothing_time_ms, 500.0);
/// assert_eq!(config.max_speed(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArmSwingConfig {
    /// When disabled the detector doesn't move the player or track anything
    pub enabled: bool,
    /// Multiplier for movement speed
    pub speed_factor: f32,
    /// Time constant (ms) used to smooth speed changes
    pub smoothing_time_ms: f32,
    /// Speed (m/s) below which the player is considered standing still. Defaults to `0.6 * speed_factor`.
    pub min_speed: Option<f32>,
    /// Maximum speed (m/s). Defaults to `10 * speed_factor`.
    pub max_speed: Option<f32>,
    /// Time (ms) a hand can go without swinging before its swing history is dropped
    pub swing_timeout_ms: f32,
    /// Time (ms) between heading samples
    pub direction_sample_interval_ms: f32,
    /// Number of heading samples averaged
    pub direction_buffer_size: usize,
    /// Minimum movement (m) along the walking axis in a single frame for a hand to count as moving
    pub swing_detect_threshold: f32,
    /// Minimum time (ms) between two reversals for the second to count as a swing
    pub swing_debounce_ms: f32,
    /// Calibration used to turn swing timing into speed
    pub cadence: CadenceModel,
    /// Button to hold to walk backwards
    pub reverse_button: Option<ReverseBinding>,
    /// Footstep sound settings. No footstep cues are produced when unset.
    pub footsteps: Option<FootstepConfig>,
    /// Log a line of telemetry every frame
    pub debug: bool,
}

impl Default for ArmSwingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed_factor: 1.0,
            smoothing_time_ms: 500.0,
            min_speed: None,
            max_speed: None,
            swing_timeout_ms: 700.0,
            direction_sample_interval_ms: 100.0,
            direction_buffer_size: 20,
            swing_detect_threshold: 0.01,
            swing_debounce_ms: 150.0,
            cadence: CadenceModel::default(),
            reverse_button: None,
            footsteps: None,
            debug: false,
        }
    }
}

impl ArmSwingConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ArmSwingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> ArmSwingResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Speed below which the player is considered standing still
    pub fn min_speed(&self) -> f32 {
        self.min_speed.unwrap_or(0.6 * self.speed_factor)
    }

    /// Maximum speed
    pub fn max_speed(&self) -> f32 {
        self.max_speed.unwrap_or(10.0 * self.speed_factor)
    }

    pub(crate) fn swing_thresholds(&self) -> SwingThresholds {
        SwingThresholds {
            detect_threshold: self.swing_detect_threshold,
            debounce_ms: self.swing_debounce_ms,
            timeout_ms: self.swing_timeout_ms,
        }
    }

    /// Check that the config can be used.
    pub fn validate(&self) -> ArmSwingResult<()> {
        non_negative("speed_factor", self.speed_factor)?;
        positive("smoothing_time_ms", self.smoothing_time_ms)?;
        if let Some(min_speed) = self.min_speed {
            non_negative("min_speed", min_speed)?;
        }
        if let Some(max_speed) = self.max_speed {
            non_negative("max_speed", max_speed)?;
        }
        positive("swing_timeout_ms", self.swing_timeout_ms)?;
        positive(
            "direction_sample_interval_ms",
            self.direction_sample_interval_ms,
        )?;
        if self.direction_buffer_size == 0 {
            return Err(ArmSwingError::invalid_config(
                "direction_buffer_size",
                "must hold at least one sample",
            ));
        }
        non_negative("swing_detect_threshold", self.swing_detect_threshold)?;
        non_negative("swing_debounce_ms", self.swing_debounce_ms)?;

        let cadence = &self.cadence;
        finite("cadence.slope", cadence.slope)?;
        finite("cadence.intercept", cadence.intercept)?;
        positive("cadence.padding_period_ms", cadence.padding_period_ms)?;
        if cadence.min_samples == 0 {
            return Err(ArmSwingError::invalid_config(
                "cadence.min_samples",
                "must average at least one sample",
            ));
        }
        if cadence.history_per_hand == 0 {
            return Err(ArmSwingError::invalid_config(
                "cadence.history_per_hand",
                "must remember at least one swing",
            ));
        }

        if self.min_speed() > self.max_speed() {
            warn!(
                "[ARMSWING_CONFIG] min_speed {} is above max_speed {}, the player will never move",
                self.min_speed(),
                self.max_speed()
            );
        }

        // With no swings at all the cadence is made up entirely of padding. If that is fast enough to walk,
        // the player will drift around while standing still.
        let idle_speed = cadence.walking_speed(1000.0 / cadence.padding_period_ms)
            * self.speed_factor;
        if idle_speed >= self.min_speed() && idle_speed > 0.0 {
            warn!(
                "[ARMSWING_CONFIG] min_speed {} is below the idle speed {idle_speed:.2}, the player will walk without swinging",
                self.min_speed()
            );
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> ArmSwingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ArmSwingError::invalid_config(
            field,
            format!("must be a finite number, got {value}"),
        ))
    }
}

fn non_negative(field: &'static str, value: f32) -> ArmSwingResult<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ArmSwingError::invalid_config(
            field,
            format!("must not be negative, got {value}"),
        ))
    }
}

fn positive(field: &'static str, value: f32) -> ArmSwingResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ArmSwingError::invalid_config(
            field,
            format!("must be greater than zero, got {value}"),
        ))
    }
}
