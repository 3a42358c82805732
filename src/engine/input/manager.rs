// Input manager - routes window events into the local player's input state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use super::snapshot::InputSnapshot;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Coordinates bindings and per-frame state for the local player
#[derive(Debug)]
pub struct InputManager {
    /// Character bindings
    config: InputConfig,

    /// Bindings checked when the character bindings have no match
    global_config: InputConfig,

    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(InputConfig::player_defaults())
    }

    /// Create a manager with custom character bindings
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            global_config: InputConfig::global_defaults(),
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeat is not a new press
            if event.repeat {
                return;
            }
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_event(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state);
    }

    /// Apply a press/release of a raw source
    pub fn process_source(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.get_action(source) else {
            return;
        };

        match state {
            ElementState::Pressed => self.player.press(action),
            ElementState::Released => self.player.release(action),
        }
    }

    /// Resolve a source, checking character bindings first, then global bindings
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.config
            .get_action(source)
            .or_else(|| self.global_config.get_action(source))
    }

    /// Roll input state over to the next frame.
    /// Call once per frame after the frame's update has consumed input.
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Snapshot of the character controls for this frame
    pub fn snapshot(&self) -> InputSnapshot {
        self.player.snapshot()
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Drop every held action (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.player.reset();
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
