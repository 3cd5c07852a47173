use serde::{Deserialize, Serialize};

/// Footstep sound settings. The sound itself is played by the host; the detector only says how.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FootstepConfig {
    /// Volume of the footstep sound, 0 to 1
    pub volume: f32,
    /// Playback rate when walking at one step per second. Scales linearly with the step rate.
    pub one_step_playback_rate: f32,
}

impl Default for FootstepConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            one_step_playback_rate: 1.0,
        }
    }
}

/// How the host should be playing its footstep sound this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootstepCue {
    /// Should the sound be playing? Pause it otherwise.
    pub playing: bool,
    /// Playback rate, matched to the step rate
    pub playback_rate: f32,
    /// Volume, 0 to 1
    pub volume: f32,
}

impl FootstepConfig {
    /// Work out the cue for the current step rate
    pub fn cue(&self, steps_per_second: f32, moving: bool) -> FootstepCue {
        FootstepCue {
            playing: moving,
            playback_rate: self.one_step_playback_rate * steps_per_second,
            volume: self.volume.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_cue() {
        let config = FootstepConfig {
            volume: 0.5,
            one_step_playback_rate: 0.8,
        };
        let cue = config.cue(2.5, true);
        assert!(cue.playing);
        assert_relative_eq!(cue.playback_rate, 2.0);
        assert_relative_eq!(cue.volume, 0.5);

        assert!(!config.cue(1.25, false).playing);
    }
}
