use serde::{Deserialize, Serialize};

use crate::components::Handedness;

const BUTTON_COUNT: usize = 6;

/// How far an analog grip or trigger needs to travel before it counts as pressed
const ANALOG_PRESS_THRESHOLD: f32 = 0.1;

/// A button on a Touch-style controller.
///
/// The face buttons are named by position, so `Primary` is A on the right controller and X on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerButton {
    /// A or X
    #[serde(alias = "a", alias = "x")]
    Primary,
    /// B or Y
    #[serde(alias = "b", alias = "y")]
    Secondary,
    /// Menu / system button
    Menu,
    /// Grip, pressed once the analog value passes a small threshold
    Grip,
    /// Trigger, pressed once the analog value passes a small threshold
    Trigger,
    /// Pushing the thumbstick down
    ThumbstickClick,
}

impl ControllerButton {
    fn index(self) -> usize {
        match self {
            ControllerButton::Primary => 0,
            ControllerButton::Secondary => 1,
            ControllerButton::Menu => 2,
            ControllerButton::Grip => 3,
            ControllerButton::Trigger => 4,
            ControllerButton::ThumbstickClick => 5,
        }
    }
}

/// Raw controller state reported by the runtime for a single frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ControllerState {
    /// A or X
    pub primary_button: bool,
    /// B or Y
    pub secondary_button: bool,
    /// Menu / system button
    pub menu_button: bool,
    /// Thumbstick pushed down
    pub thumbstick_click: bool,
    /// How far the grip is squeezed, 0 to 1
    pub grip_analog: f32,
    /// How far the trigger is pulled, 0 to 1
    pub trigger_analog: f32,
}

/// Input state of a single controller, including the previous frame so edges can be queried.
#[derive(Debug, Default, Clone)]
pub struct ControllerInputContext {
    buttons: [bool; BUTTON_COUNT],
    buttons_prev: [bool; BUTTON_COUNT],
    grip_analog: f32,
    trigger_analog: f32,
}

impl ControllerInputContext {
    /// Is the button held this frame?
    pub fn button(&self, button: ControllerButton) -> bool {
        self.buttons[button.index()]
    }
    /// Did the button go from released to held this frame?
    pub fn button_just_pressed(&self, button: ControllerButton) -> bool {
        self.buttons[button.index()] && !self.buttons_prev[button.index()]
    }
    /// Did the button go from held to released this frame?
    pub fn button_just_released(&self, button: ControllerButton) -> bool {
        !self.buttons[button.index()] && self.buttons_prev[button.index()]
    }
    /// How far the grip is squeezed, 0 to 1
    pub fn grip_analog(&self) -> f32 {
        self.grip_analog
    }
    /// How far the trigger is pulled, 0 to 1
    pub fn trigger_analog(&self) -> f32 {
        self.trigger_analog
    }

    fn update(&mut self, state: &ControllerState) {
        self.buttons_prev = self.buttons;

        self.grip_analog = state.grip_analog;
        self.trigger_analog = state.trigger_analog;

        self.buttons[ControllerButton::Primary.index()] = state.primary_button;
        self.buttons[ControllerButton::Secondary.index()] = state.secondary_button;
        self.buttons[ControllerButton::Menu.index()] = state.menu_button;
        self.buttons[ControllerButton::ThumbstickClick.index()] = state.thumbstick_click;
        self.buttons[ControllerButton::Grip.index()] = state.grip_analog > ANALOG_PRESS_THRESHOLD;
        self.buttons[ControllerButton::Trigger.index()] =
            state.trigger_analog > ANALOG_PRESS_THRESHOLD;
    }
}

#[derive(Debug, Default, Clone)]
/// Context that holds input state. Allows systems to query for button state without having to
/// worry about runtime internals.
pub struct InputContext {
    /// Left controller
    pub left: ControllerInputContext,
    /// Right controller
    pub right: ControllerInputContext,
}

impl InputContext {
    /// Synchronize the context state with the runtime. Call once per frame, before running any systems.
    pub fn update(&mut self, left: &ControllerState, right: &ControllerState) {
        self.left.update(left);
        self.right.update(right);
    }

    /// Get the input state for one side
    pub fn hand(&self, handedness: Handedness) -> &ControllerInputContext {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }
}

/// A button that, while held, makes arm swinging walk backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReverseBinding {
    /// Button to hold
    pub button: ControllerButton,
    /// Which controller the button has to be held on. `None` accepts either.
    #[serde(default)]
    pub hand: Option<Handedness>,
}

impl ReverseBinding {
    /// Is the reverse button being held this frame?
    pub fn is_held(&self, input_context: &InputContext) -> bool {
        match self.hand {
            Some(handedness) => input_context.hand(handedness).button(self.button),
            None => Handedness::ALL
                .iter()
                .any(|handedness| input_context.hand(*handedness).button(self.button)),
        }
    }
}
