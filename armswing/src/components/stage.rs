use glam::Affine3A;
use hecs::{Entity, World};

use super::LocalTransform;

/// Marker component for the player's frame of reference, ie. the rig that arm swinging moves around
#[derive(Debug, Clone, Copy, Default)]
pub struct Stage;

/// Setup a Stage entity to track player's frame of reference in global space
pub fn add_stage(world: &mut World, local_transform: LocalTransform) -> Entity {
    world.spawn((Stage, local_transform))
}

/// Get the stage entity and its transform in global space, if there is one.
pub fn get_global_from_stage(world: &mut World) -> Option<(Entity, Affine3A)> {
    world
        .query_mut::<(&LocalTransform, &Stage)>()
        .into_iter()
        .next()
        .map(|(entity, (local_transform, _))| (entity, local_transform.to_affine()))
}
