#![deny(missing_docs)]

//! G'day, and welcome to armswing! 👋
//!
//! armswing turns the natural arm swinging of a player into walking. Each hand is tracked along the
//! direction the player is facing; every reversal of a hand's motion counts as a step, and the cadence of
//! those steps is mapped onto a walking speed using a calibration measured against real walkers.
//!
//! # Getting started
//! The easiest way in is [`systems::arm_swing_system`]: spawn a [`components::Stage`] and two
//! [`components::Hand`] entities into a [`hecs::World`], create an [`ArmSwingDetector`], and call the
//! system once per frame. If you already have your own scene graph, drive [`ArmSwingDetector::update`]
//! directly with a [`FrameInput`] and apply the returned [`MovementOutput`] yourself.

pub use glam;
pub use hecs;

pub use armswing_error::ArmSwingError;
pub use detector::{
    ArmSwingConfig, ArmSwingDetector, CadenceModel, FootstepConfig, FootstepCue, FrameInput,
    HandSample, MovementOutput, Telemetry,
};

mod armswing_error;
/// Components are data attached to entities in the host's world
pub mod components;
/// Contexts are wrappers around external state the detector reads or writes each frame
pub mod contexts;
/// The gesture locomotion detector
pub mod detector;
/// Systems are functions called each frame to drive the detector from a [`hecs::World`]
pub mod systems;
/// Kitchen sink utility functions
pub mod util;
/// A logger that mirrors recent log lines onto an in-headset console
pub mod vr_logger;

/// armswing result type
pub type ArmSwingResult<T> = std::result::Result<T, ArmSwingError>;
