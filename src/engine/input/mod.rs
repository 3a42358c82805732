// Input handling system
//
// Turns winit keyboard/mouse events into per-frame action state for the local
// player, and freezes that state into an `InputSnapshot` for the character.
//
// ## Architecture
//
// - `action`: Game actions and default key bindings
// - `config`: Binding tables and remapping
// - `player`: Pressed / just-pressed / just-released tracking
// - `snapshot`: The immutable per-frame record handed to the character
// - `manager`: Routes window events through the bindings
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per frame
// let snapshot = input.snapshot();
// character.update(Some(&snapshot), &mut physics, dt);
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;
pub mod snapshot;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
pub use snapshot::InputSnapshot;
