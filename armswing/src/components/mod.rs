/// Tracked controllers
pub mod hand;
/// Position, rotation and scale of an entity
pub mod local_transform;
/// The player's frame of reference
pub mod stage;

pub use hand::{Hand, Handedness};
pub use local_transform::LocalTransform;
pub use stage::Stage;
