/// Controller button state
pub mod input_context;
/// Constraining movement to walkable surfaces
pub mod nav_mesh;

pub use input_context::{
    ControllerButton, ControllerInputContext, ControllerState, InputContext, ReverseBinding,
};
pub use nav_mesh::{NavMesh, WalkableArea};
