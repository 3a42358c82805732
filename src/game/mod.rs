// Game layer: the arena level and the playable character

pub mod arena;
pub mod characters;

/// Errors raised while setting up the game
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid setting {field}: {value}")]
    InvalidSetting { field: &'static str, value: f32 },

    #[error("Invalid platform #{index}: {reason}")]
    InvalidPlatform { index: usize, reason: &'static str },
}
