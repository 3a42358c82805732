// Character system
//
// This module contains everything related to the playable character:
// - State enums and the transition tracker
// - Locomotion and combat/weapon state machines
// - Collaborator traits for bodies and animation
// - The physics-backed character entity

pub mod animation;
pub mod body;
pub mod character;
pub mod combat;
pub mod config;
pub mod locomotion;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer, Animator};
pub use body::{CharacterBody, WeaponBody, WeaponTransform};
pub use character::Character;
pub use combat::CombatController;
pub use config::ControllerConfig;
pub use locomotion::LocomotionController;
pub use state::{CharacterState, StateMachine, WeaponState};
