use glam::Vec3;
use hecs::World;

use crate::{
    components::{stage::get_global_from_stage, Hand, LocalTransform},
    contexts::{InputContext, NavMesh},
    ArmSwingDetector, FrameInput, HandSample, MovementOutput,
};

/// Arm swing system
/// Tracks the player's hands, works out how fast they are walking and moves the stage accordingly.
///
/// Hands are entities with a [`Hand`] and a [`LocalTransform`] in stage space. If a [`NavMesh`] is given,
/// every step is clamped to it. Returns `None` if there is no stage to move.
pub fn arm_swing_system(
    world: &mut World,
    input_context: &InputContext,
    detector: &mut ArmSwingDetector,
    nav_mesh: Option<&mut dyn NavMesh>,
    time_ms: f64,
    delta_ms: f32,
) -> Option<MovementOutput> {
    let (stage_entity, global_from_stage) = get_global_from_stage(world)?;

    let mut frame = FrameInput::new(time_ms, delta_ms, global_from_stage);
    for (_, (hand, local_transform)) in world.query_mut::<(&Hand, &LocalTransform)>() {
        if !hand.tracked {
            continue;
        }
        let global_from_hand = global_from_stage * local_transform.to_affine();
        let (_, rotation, translation) = global_from_hand.to_scale_rotation_translation();
        frame.hands[hand.handedness.index()] = Some(HandSample::from_pose(translation, rotation));
    }

    if let Some(reverse_button) = detector.config().reverse_button {
        detector.set_reverse_held(reverse_button.is_held(input_context));
    }

    let output = detector.update(&frame);
    if output.displacement == Vec3::ZERO {
        return Some(output);
    }

    let mut stage_transform = world.get::<&mut LocalTransform>(stage_entity).ok()?;
    let start = stage_transform.translation;
    let end = start + output.displacement;
    stage_transform.translation = match nav_mesh {
        Some(nav_mesh) => nav_mesh.clamp_step(start, end),
        None => end,
    };

    Some(output)
}
