//! Samurai Arena: a 2D platformer prototype.
//!
//! The `game::characters` module holds the character controller: a
//! locomotion state machine and a combat/weapon state machine driven once per
//! frame. `engine` supplies the collaborators it runs against (input, physics,
//! frame clock).

pub mod core;
pub mod engine;
pub mod game;
