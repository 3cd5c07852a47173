use glam::{Affine3A, Quat, Vec3};

/// Project a direction onto the horizontal (XZ) plane and normalize it.
/// Returns `None` for directions that are (nearly) vertical, as they have no meaningful heading.
pub fn flatten_direction(direction: Vec3) -> Option<Vec3> {
    Vec3::new(direction.x, 0.0, direction.z).try_normalize()
}

/// The direction a controller's back is pointing in, ie. its local +Z axis.
/// Controllers point down -Z, so this is the opposite of where the player is pointing them.
pub fn back_axis(orientation: Quat) -> Vec3 {
    orientation * Vec3::Z
}

/// Yaw of a horizontal direction in degrees, measured from +Z towards +X.
pub fn yaw_degrees(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z).to_degrees()
}

/// Convenience function to get the translation out of a [`glam::Affine3A`]
pub fn translation(transform: &Affine3A) -> Vec3 {
    transform.translation.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    pub fn test_flatten_direction() {
        let flattened = flatten_direction(Vec3::new(3.0, 5.0, 4.0)).unwrap();
        assert_relative_eq!(flattened, Vec3::new(0.6, 0.0, 0.8));
        assert!(flatten_direction(Vec3::Y).is_none());
        assert!(flatten_direction(Vec3::ZERO).is_none());
    }

    #[test]
    pub fn test_back_axis_and_yaw() {
        assert_relative_eq!(back_axis(Quat::IDENTITY), Vec3::Z);
        assert_relative_eq!(yaw_degrees(Vec3::Z), 0.0);

        let turned_left = Quat::from_rotation_y(FRAC_PI_2);
        assert_relative_eq!(back_axis(turned_left), Vec3::X, epsilon = 1e-6);
        assert_relative_eq!(yaw_degrees(back_axis(turned_left)), 90.0, epsilon = 1e-4);
    }
}
