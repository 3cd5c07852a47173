use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The component's position relative to its parent.
///
/// For the [`super::Stage`] entity this is its position in the virtual world (global space). For
/// [`super::Hand`] entities this is the controller pose in stage space, which is what the runtime reports.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Create a transform with no rotation and unit scale
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Create a transform with unit scale
    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Convenience function to convert the [`LocalTransform`] into a [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the translation, rotation and scale from a [`glam::Affine3A`]
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.translation = translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_affine_round_trip() {
        let local_transform = LocalTransform {
            translation: Vec3::new(5.0, 1.0, 2.0),
            rotation: Quat::from_rotation_y(0.3),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let mut updated = LocalTransform::default();
        updated.update_from_affine(&local_transform.to_affine());

        assert_relative_eq!(updated.translation, local_transform.translation);
        assert_relative_eq!(updated.scale, local_transform.scale, epsilon = 1e-5);
        assert_relative_eq!(updated.rotation, local_transform.rotation, epsilon = 1e-5);
    }
}
