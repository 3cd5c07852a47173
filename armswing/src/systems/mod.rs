#![allow(missing_docs)]
pub mod arm_swing;

pub use arm_swing::arm_swing_system;
