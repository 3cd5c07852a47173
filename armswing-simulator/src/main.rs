mod script;

use anyhow::{Context, Result};
use armswing::{
    components::{stage::add_stage, Hand, Handedness, LocalTransform},
    contexts::{ControllerButton, ControllerState, InputContext, ReverseBinding, WalkableArea},
    glam::Vec2,
    hecs::{Entity, World},
    systems::arm_swing_system,
    vr_logger::VrLogger,
    ArmSwingConfig, ArmSwingDetector,
};
use log::{debug, info};

/// Frame rate of the simulated headset
const FRAME_RATE: f64 = 72.0;
/// Half the width of the simulated play area, in metres
const PLAY_AREA_HALF_EXTENT: f32 = 50.0;

pub fn main() -> Result<()> {
    let console = VrLogger::init(true, 5)?;

    let mut config = match std::env::args().nth(1) {
        Some(path) => {
            info!("[ARMSWING_SIMULATOR] Loading config from {path}");
            ArmSwingConfig::from_path(&path)
                .with_context(|| format!("Unable to load config from {path}"))?
        }
        None => ArmSwingConfig {
            footsteps: Some(Default::default()),
            ..Default::default()
        },
    };
    let reverse_button = *config.reverse_button.get_or_insert(ReverseBinding {
        button: ControllerButton::Trigger,
        hand: None,
    });
    debug!("[ARMSWING_SIMULATOR] Using config {config:?}");

    let mut detector = ArmSwingDetector::new(config)?;
    let mut world = World::new();
    let stage = add_stage(&mut world, LocalTransform::default());
    let hands = [
        world.spawn((Hand::left(), LocalTransform::default())),
        world.spawn((Hand::right(), LocalTransform::default())),
    ];
    let mut input_context = InputContext::default();
    let mut play_area = WalkableArea::square(Vec2::ZERO, PLAY_AREA_HALF_EXTENT);
    let mut rng = rand::thread_rng();

    let delta_ms = 1000.0 / FRAME_RATE;
    let mut time_ms = 0.0;
    let mut frame: u64 = 0;
    let mut current_segment = "";
    let mut footsteps_playing = false;

    while let Some((segment, time_in_segment_ms)) = script::segment_at(time_ms) {
        if segment.name != current_segment {
            info!("[ARMSWING_SIMULATOR] Now {}", segment.name);
            current_segment = segment.name;
        }

        for (entity, handedness) in hands.iter().zip(Handedness::ALL) {
            let pose = script::hand_pose(segment, time_in_segment_ms, handedness, &mut rng);
            set_local_transform(&mut world, *entity, pose)?;
        }
        input_context.update(
            &controller_state(segment.reverse, reverse_button),
            &controller_state(segment.reverse, reverse_button),
        );

        let output = arm_swing_system(
            &mut world,
            &input_context,
            &mut detector,
            Some(&mut play_area),
            time_ms,
            delta_ms as f32,
        )
        .context("The stage went missing")?;

        if let Some(footsteps) = output.footsteps {
            if footsteps.playing != footsteps_playing {
                footsteps_playing = footsteps.playing;
                info!(
                    "[ARMSWING_SIMULATOR] Footsteps {} at {:.2}x",
                    if footsteps_playing { "playing" } else { "paused" },
                    footsteps.playback_rate
                );
            }
        }

        if frame % FRAME_RATE as u64 == 0 {
            let position = world.get::<&LocalTransform>(stage)?.translation;
            info!(
                "[ARMSWING_SIMULATOR] t={:.1}s position=({:.2}, {:.2}) heading={:?} {}",
                time_ms / 1000.0,
                position.x,
                position.z,
                output.heading_yaw_degrees.map(|yaw| yaw.round()),
                detector.telemetry()
            );
        }

        time_ms += delta_ms;
        frame += 1;
    }

    let position = world.get::<&LocalTransform>(stage)?.translation;
    info!(
        "[ARMSWING_SIMULATOR] Finished at ({:.2}, {:.2}) after {frame} frames",
        position.x, position.z
    );
    println!("---- VR console ----\n{}", console.text());

    Ok(())
}

fn set_local_transform(world: &mut World, entity: Entity, pose: LocalTransform) -> Result<()> {
    let mut local_transform = world.get::<&mut LocalTransform>(entity)?;
    *local_transform = pose;
    Ok(())
}

/// Controller state with the reverse button held or not
fn controller_state(reverse: bool, reverse_button: ReverseBinding) -> ControllerState {
    let mut state = ControllerState::default();
    if !reverse {
        return state;
    }
    match reverse_button.button {
        ControllerButton::Primary => state.primary_button = true,
        ControllerButton::Secondary => state.secondary_button = true,
        ControllerButton::Menu => state.menu_button = true,
        ControllerButton::ThumbstickClick => state.thumbstick_click = true,
        ControllerButton::Grip => state.grip_analog = 1.0,
        ControllerButton::Trigger => state.trigger_analog = 1.0,
    }
    state
}
