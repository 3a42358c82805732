// Per-player input state management

use super::action::Action;
use super::snapshot::InputSnapshot;
use std::collections::HashSet;

/// Represents the input state for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Roll over to a new frame. Call once per frame after the controllers ran.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Freeze this frame's controls into a snapshot for the character
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_left: self.is_pressed(Action::MoveLeft),
            move_right: self.is_pressed(Action::MoveRight),
            look_up: self.is_pressed(Action::LookUp),
            look_down: self.is_pressed(Action::LookDown),
            jump: self.just_pressed(Action::Jump),
            attack: self.is_pressed(Action::Attack),
            dash: self.is_pressed(Action::Dash),
        }
    }
}
