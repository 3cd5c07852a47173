use glam::{Vec2, Vec3};

/// Something that can keep the player on walkable ground.
///
/// Given where the stage is and where arm swinging wants to take it, return where it actually ends up. The
/// implementation is free to track whatever it needs between calls (current polygon, region, etc).
pub trait NavMesh {
    /// Clamp a straight line step from `start` to `end` onto walkable ground
    fn clamp_step(&mut self, start: Vec3, end: Vec3) -> Vec3;
}

/// A rectangular walkable floor on the XZ plane. Height is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkableArea {
    /// Minimum X and Z
    pub min: Vec2,
    /// Maximum X and Z
    pub max: Vec2,
}

impl WalkableArea {
    /// Create a square area of `half_extent` around `center` (X and Z)
    pub fn square(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }
}

impl NavMesh for WalkableArea {
    fn clamp_step(&mut self, _start: Vec3, end: Vec3) -> Vec3 {
        Vec3::new(
            end.x.clamp(self.min.x, self.max.x),
            end.y,
            end.z.clamp(self.min.y, self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_walkable_area() {
        let mut area = WalkableArea::square(Vec2::ZERO, 1.0);
        let start = Vec3::new(0.0, 0.0, 0.5);
        assert_eq!(area.clamp_step(start, Vec3::new(0.2, 0.0, 0.8)), Vec3::new(0.2, 0.0, 0.8));
        assert_eq!(area.clamp_step(start, Vec3::new(0.2, 1.5, 3.0)), Vec3::new(0.2, 1.5, 1.0));
        assert_eq!(area.clamp_step(start, Vec3::new(-4.0, 0.0, -4.0)), Vec3::new(-1.0, 0.0, -1.0));
    }
}
