// Character controller tuning

use glam::Vec2;

use crate::game::GameError;

/// Movement and weapon placement settings for the character controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    // Movement
    /// Horizontal run speed (px/s)
    pub speed_x: f32,
    /// Upward launch speed of a jump (px/s)
    pub speed_y: f32,

    // Dimensions
    /// Body width in pixels
    pub width: f32,
    /// Body height in pixels
    pub height: f32,

    // Weapon
    /// Offset of the forward sword from the body center, for a right-facing character
    pub weapon_offset: Vec2,
    /// Blade length and thickness
    pub weapon_size: Vec2,
    /// Extra vertical gap when the sword points up or down.
    /// Tuned by eye; the sprite art may not need it.
    pub look_correction: f32,
}

/// Defaults used by the playable character
pub const BASE_CONFIG: ControllerConfig = ControllerConfig {
    speed_x: 300.0,
    speed_y: 800.0,

    width: 32.0,
    height: 48.0,

    weapon_offset: Vec2::new(24.0, 0.0),
    weapon_size: Vec2::new(36.0, 8.0),
    look_correction: 10.0,
};

impl Default for ControllerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl ControllerConfig {
    pub fn with_speeds(mut self, speed_x: f32, speed_y: f32) -> Self {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_weapon_offset(mut self, offset: Vec2) -> Self {
        self.weapon_offset = offset;
        self
    }

    pub fn with_look_correction(mut self, correction: f32) -> Self {
        self.look_correction = correction;
        self
    }

    /// Body dimensions as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Reject settings the controller cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("speed_x", self.speed_x),
            ("speed_y", self.speed_y),
            ("width", self.width),
            ("height", self.height),
            ("weapon_size.x", self.weapon_size.x),
            ("weapon_size.y", self.weapon_size.y),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidSetting { field, value });
            }
        }

        let finite = [
            ("weapon_offset.x", self.weapon_offset.x),
            ("weapon_offset.y", self.weapon_offset.y),
            ("look_correction", self.look_correction),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(GameError::InvalidSetting { field, value });
            }
        }

        Ok(())
    }
}
