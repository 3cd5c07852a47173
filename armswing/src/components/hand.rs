use serde::{Deserialize, Serialize};

/// A component that represents the "side" or "handedness" that an entity is on
/// Used by components such as `Hand` to identify which controller they should map to
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}

impl Handedness {
    /// Both sides, left first. Per-hand arrays in this crate are indexed in this order.
    pub const ALL: [Handedness; 2] = [Handedness::Left, Handedness::Right];

    /// Index of this side into a per-hand array
    pub fn index(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }
}

/// A component that's added to an entity to represent a tracked controller.
/// The entity's [`super::LocalTransform`] is expected to hold the controller pose in stage space.
/// Requires `arm_swing_system`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    /// Which side is this hand on?
    pub handedness: Handedness,
    /// Is the controller currently being tracked? Untracked hands are ignored for the frame.
    pub tracked: bool,
}

impl Hand {
    /// Shortcut helper to create a Left hand
    pub fn left() -> Hand {
        Hand {
            handedness: Handedness::Left,
            tracked: true,
        }
    }

    /// Shortcut helper to create a right hand
    pub fn right() -> Hand {
        Hand {
            handedness: Handedness::Right,
            tracked: true,
        }
    }
}
