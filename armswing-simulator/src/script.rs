use armswing::{
    components::{Handedness, LocalTransform},
    glam::{Quat, Vec3},
};
use rand::Rng;

/// How fast the simulated hands move while swinging, in metres per millisecond
const HAND_SPEED: f64 = 0.002;
/// Furthest a hand travels in a single swing, in metres
const MAX_REACH: f64 = 0.8;
/// Controllers are never perfectly still
const TREMOR: f32 = 0.002;

/// A stretch of simulated play
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub name: &'static str,
    pub duration_ms: f64,
    /// Time between arm reversals, or `None` to stand still
    pub swing_period_ms: Option<f64>,
    /// Direction the player is facing, in degrees
    pub yaw_degrees: f32,
    /// Is the reverse button being held?
    pub reverse: bool,
}

pub const SCRIPT: &[Segment] = &[
    Segment {
        name: "standing around",
        duration_ms: 2000.0,
        swing_period_ms: None,
        yaw_degrees: 0.0,
        reverse: false,
    },
    Segment {
        name: "strolling",
        duration_ms: 4000.0,
        swing_period_ms: Some(500.0),
        yaw_degrees: 0.0,
        reverse: false,
    },
    Segment {
        name: "jogging",
        duration_ms: 5000.0,
        swing_period_ms: Some(300.0),
        yaw_degrees: 0.0,
        reverse: false,
    },
    Segment {
        name: "jogging around a corner",
        duration_ms: 4000.0,
        swing_period_ms: Some(300.0),
        yaw_degrees: 90.0,
        reverse: false,
    },
    Segment {
        name: "backing up",
        duration_ms: 3000.0,
        swing_period_ms: Some(450.0),
        yaw_degrees: 90.0,
        reverse: true,
    },
    Segment {
        name: "lazy swinging",
        duration_ms: 3000.0,
        swing_period_ms: Some(800.0),
        yaw_degrees: 90.0,
        reverse: false,
    },
    Segment {
        name: "stopped",
        duration_ms: 2000.0,
        swing_period_ms: None,
        yaw_degrees: 90.0,
        reverse: false,
    },
];

/// Find the segment playing at `time_ms`, along with how far into it we are
pub fn segment_at(time_ms: f64) -> Option<(&'static Segment, f64)> {
    let mut start_ms = 0.0;
    for segment in SCRIPT {
        if time_ms < start_ms + segment.duration_ms {
            return Some((segment, time_ms - start_ms));
        }
        start_ms += segment.duration_ms;
    }
    None
}

/// Pose of a hand in stage space
pub fn hand_pose(
    segment: &Segment,
    time_in_segment_ms: f64,
    handedness: Handedness,
    rng: &mut impl Rng,
) -> LocalTransform {
    let offset = match segment.swing_period_ms {
        Some(period_ms) => {
            let phase = time_in_segment_ms / period_ms;
            let progress = phase.fract();
            let leg = if phase.floor() as i64 % 2 == 0 {
                progress
            } else {
                1.0 - progress
            };
            (leg * (HAND_SPEED * period_ms).min(MAX_REACH)) as f32
        }
        None => 0.0,
    };

    // Arms swing in opposite phase
    let (x, z) = match handedness {
        Handedness::Left => (-0.2, offset - 0.3),
        Handedness::Right => (0.2, -offset),
    };
    let tremor = rng.gen_range(-TREMOR..TREMOR);

    let rotation = Quat::from_rotation_y(segment.yaw_degrees.to_radians());
    LocalTransform::from_rotation_translation(rotation, rotation * Vec3::new(x, 1.0, z + tremor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    pub fn test_segment_at() {
        let (segment, offset) = segment_at(0.0).unwrap();
        assert_eq!(segment.name, SCRIPT[0].name);
        assert_eq!(offset, 0.0);

        let (segment, offset) = segment_at(SCRIPT[0].duration_ms + 250.0).unwrap();
        assert_eq!(segment.name, SCRIPT[1].name);
        assert_eq!(offset, 250.0);

        let total: f64 = SCRIPT.iter().map(|segment| segment.duration_ms).sum();
        assert!(segment_at(total).is_none());
    }

    #[test]
    pub fn test_hands_swing_in_opposite_phase() {
        let mut rng = StdRng::seed_from_u64(42);
        let segment = &SCRIPT[2];
        let start_left = hand_pose(segment, 0.0, Handedness::Left, &mut rng).translation;
        let start_right = hand_pose(segment, 0.0, Handedness::Right, &mut rng).translation;
        let mid_left = hand_pose(segment, 150.0, Handedness::Left, &mut rng).translation;
        let mid_right = hand_pose(segment, 150.0, Handedness::Right, &mut rng).translation;

        assert!(mid_left.z > start_left.z);
        assert!(mid_right.z < start_right.z);
        assert_eq!(mid_left.y, 1.0);
    }

    #[test]
    pub fn test_standing_still_only_trembles() {
        let mut rng = StdRng::seed_from_u64(7);
        let segment = &SCRIPT[0];
        for time_ms in [0.0, 500.0, 1000.0] {
            let pose = hand_pose(segment, time_ms, Handedness::Right, &mut rng);
            assert!(pose.translation.z.abs() <= TREMOR);
        }
    }
}
