mod arm_swing_detector;
/// Turning swing timing into walking speed
pub mod cadence;
mod config;
/// Smoothing the heading
pub mod direction_buffer;
mod footsteps;
/// Per hand swing detection
pub mod swing_tracker;
mod telemetry;


pub use arm_swing_detector::{ArmSwingDetector, FrameInput, HandSample, MovementOutput};
pub use cadence::CadenceModel;
pub use config::ArmSwingConfig;
pub use footsteps::{FootstepConfig, FootstepCue};
pub use telemetry::Telemetry;
