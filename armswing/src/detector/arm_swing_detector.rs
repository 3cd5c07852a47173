use glam::{Affine3A, Quat, Vec3};
use log::{debug, trace};

use super::{
    cadence::Cadence, direction_buffer::DirectionBuffer, footsteps::FootstepCue,
    swing_tracker::SwingTracker, telemetry::Telemetry, ArmSwingConfig,
};
use crate::{
    components::Handedness,
    util::{back_axis, flatten_direction, translation, yaw_degrees},
    ArmSwingResult,
};

/// Where a tracked hand is this frame, in global space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSample {
    /// Position of the controller
    pub position: Vec3,
    /// Orientation of the controller, if the runtime could report one. Used for the heading.
    pub orientation: Option<Quat>,
}

impl HandSample {
    /// A hand with both a position and an orientation
    pub fn from_pose(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: Some(orientation),
        }
    }

    /// A hand with a position only. It will be tracked for swings, but won't steer.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: None,
        }
    }

    /// Convenience function to build a sample from a runtime pose
    pub fn from_mint(position: mint::Vector3<f32>, orientation: mint::Quaternion<f32>) -> Self {
        Self::from_pose(position.into(), orientation.into())
    }
}

/// Everything the detector needs to know about a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Simulation time in milliseconds. Must never go backwards.
    pub time_ms: f64,
    /// Time elapsed since the last frame, in milliseconds
    pub delta_ms: f32,
    /// Transform of the player's rig (stage) in global space
    pub global_from_rig: Affine3A,
    /// The hands, indexed by [`Handedness::index`]. `None` if a hand isn't available this frame.
    pub hands: [Option<HandSample>; 2],
}

impl FrameInput {
    /// A frame with no hands
    pub fn new(time_ms: f64, delta_ms: f32, global_from_rig: Affine3A) -> Self {
        Self {
            time_ms,
            delta_ms,
            global_from_rig,
            hands: [None, None],
        }
    }

    /// Set one of the hands
    pub fn with_hand(mut self, handedness: Handedness, hand: HandSample) -> Self {
        self.hands[handedness.index()] = Some(hand);
        self
    }
}

/// What arm swinging wants to do to the player this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementOutput {
    /// How far to move the rig this frame, in global space
    pub displacement: Vec3,
    /// Smoothed speed in m/s
    pub speed: f32,
    /// Is the player walking?
    pub moving: bool,
    /// Averaged heading of the controllers. Points towards the player's back; they walk along its opposite.
    pub heading: Option<Vec3>,
    /// Yaw of `heading` in degrees, measured from +Z towards +X
    pub heading_yaw_degrees: Option<f32>,
    /// How the footstep sound should be playing, if footsteps are configured
    pub footsteps: Option<FootstepCue>,
}

/// Turns arm swings into walking.
///
/// Each frame, every hand's position is projected onto the walking axis. When a hand reverses direction it
/// has swung, and the time between swings gives a step rate. The step rate is turned into a target speed,
/// which the actual speed eases towards. The player walks along the averaged heading of their controllers.
///
/// The detector never fails once created: missing hands simply contribute nothing.
#[derive(Debug, Clone)]
pub struct ArmSwingDetector {
    config: ArmSwingConfig,
    hands: [SwingTracker; 2],
    direction_buffer: DirectionBuffer,
    time_since_last_sample_ms: f32,
    reverse_held: bool,
    current_speed: f32,
    moving: bool,
    heading: Option<Vec3>,
    telemetry: Telemetry,
}

impl ArmSwingDetector {
    /// Create a new detector. Fails if the config doesn't validate.
    pub fn new(config: ArmSwingConfig) -> ArmSwingResult<Self> {
        config.validate()?;

        let history = config.cadence.history_per_hand;
        Ok(Self {
            hands: [SwingTracker::new(history), SwingTracker::new(history)],
            direction_buffer: DirectionBuffer::new(config.direction_buffer_size),
            time_since_last_sample_ms: 0.0,
            reverse_held: false,
            current_speed: 0.0,
            moving: false,
            heading: None,
            telemetry: Telemetry::default(),
            config,
        })
    }

    /// The config this detector was created with
    pub fn config(&self) -> &ArmSwingConfig {
        &self.config
    }

    /// Walk backwards while set. Takes effect on the next heading sample.
    pub fn set_reverse_held(&mut self, reverse_held: bool) {
        self.reverse_held = reverse_held;
    }

    /// Is the player walking backwards?
    pub fn reverse_held(&self) -> bool {
        self.reverse_held
    }

    /// Smoothed speed in m/s
    pub fn speed(&self) -> f32 {
        self.current_speed
    }

    /// Is the player walking?
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Averaged heading of the controllers, once at least one sample has been taken
    pub fn heading(&self) -> Option<Vec3> {
        self.heading
    }

    /// What the detector decided on the last update
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Swing state of one hand
    pub fn swing_tracker(&self, handedness: Handedness) -> &SwingTracker {
        &self.hands[handedness.index()]
    }

    /// Heading samples currently being averaged
    pub fn direction_buffer(&self) -> &DirectionBuffer {
        &self.direction_buffer
    }

    /// Run the detector for one frame.
    pub fn update(&mut self, frame: &FrameInput) -> MovementOutput {
        if !self.config.enabled {
            return MovementOutput::default();
        }

        let delta_ms = frame.delta_ms.max(0.0);

        // Heading is only resampled every so often.
        self.time_since_last_sample_ms += delta_ms;
        if self.time_since_last_sample_ms >= self.config.direction_sample_interval_ms {
            self.time_since_last_sample_ms -= self.config.direction_sample_interval_ms;
            self.update_heading(frame);
        }

        self.track_hands(frame);

        let cadence = self
            .config
            .cadence
            .cadence(self.hands.iter().flat_map(|hand| hand.recent_swing_periods()));
        let target_speed = self.update_speed(&cadence, delta_ms);

        self.telemetry = Telemetry {
            steps_per_second: cadence.steps_per_second,
            target_speed,
            current_speed: self.current_speed,
            average_swing_period_ms: cadence.average_swing_period_ms,
            swing_periods: cadence.swing_periods,
        };
        if self.config.debug {
            debug!("[ARMSWING] {}", self.telemetry);
        }

        // The heading points towards the player's back, so walk the other way.
        let forward = match self.heading {
            Some(heading) => -heading,
            None => -frame
                .global_from_rig
                .transform_vector3(Vec3::Z)
                .normalize_or_zero(),
        };
        let distance = self.current_speed * (delta_ms / 1000.0);

        MovementOutput {
            displacement: forward * distance,
            speed: self.current_speed,
            moving: self.moving,
            heading: self.heading,
            heading_yaw_degrees: self.heading.map(yaw_degrees),
            footsteps: self
                .config
                .footsteps
                .map(|footsteps| footsteps.cue(cadence.steps_per_second, self.moving)),
        }
    }

    fn update_heading(&mut self, frame: &FrameInput) {
        let directions = frame
            .hands
            .iter()
            .flatten()
            .filter_map(|hand| hand.orientation)
            .filter_map(|orientation| flatten_direction(back_axis(orientation)))
            .collect::<Vec<_>>();
        if directions.is_empty() {
            return;
        }

        let average = directions.iter().copied().sum::<Vec3>() / directions.len() as f32;
        let Some(mut direction) = flatten_direction(average) else {
            trace!("[ARMSWING] Controllers are pointing in opposite directions, skipping heading sample");
            return;
        };
        if self.reverse_held {
            direction = -direction;
        }

        if let Some(heading) = self.direction_buffer.push(direction) {
            self.heading = Some(heading);
        }
    }

    fn track_hands(&mut self, frame: &FrameInput) {
        let thresholds = self.config.swing_thresholds();
        let rig_position = translation(&frame.global_from_rig);
        let rig_from_global = frame.global_from_rig.inverse();

        for (handedness, tracker) in Handedness::ALL.iter().zip(self.hands.iter_mut()) {
            let Some(hand) = frame.hands[handedness.index()] else {
                continue;
            };

            let axial_position = match self.heading {
                Some(heading) => (hand.position - rig_position).dot(heading),
                None => rig_from_global.transform_point3(hand.position).z,
            };

            if let Some(period) = tracker.track(axial_position, frame.time_ms, &thresholds) {
                trace!("[ARMSWING] {handedness:?} hand swung, period {period:.0}ms");
            }
        }

        for (handedness, tracker) in Handedness::ALL.iter().zip(self.hands.iter_mut()) {
            if tracker.expire(frame.time_ms, &thresholds) {
                trace!("[ARMSWING] {handedness:?} hand stopped swinging");
            }
        }
    }

    /// Ease the current speed towards the speed for this cadence. Returns the target speed.
    fn update_speed(&mut self, cadence: &Cadence, delta_ms: f32) -> f32 {
        let max_speed = self.config.max_speed();

        let mut target_speed = self.config.cadence.walking_speed(cadence.steps_per_second)
            * self.config.speed_factor;
        target_speed = target_speed.max(0.0).min(max_speed);

        if target_speed < self.config.min_speed() || target_speed <= 0.0 {
            target_speed = 0.0;
            self.moving = false;
        } else {
            self.moving = true;
        }

        // A frame longer than the smoothing time would overshoot the target, so cap the blend.
        let blend = (delta_ms / self.config.smoothing_time_ms).min(1.0);
        self.current_speed += (target_speed - self.current_speed) * blend;
        self.current_speed = self.current_speed.max(0.0).min(max_speed);

        target_speed
    }
}
