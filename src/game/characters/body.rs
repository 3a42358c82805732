// Collaborator seams between the controllers and whatever simulates the sprites

use glam::Vec2;

/// The character's physics sprite.
///
/// The controllers only ever change velocity and facing; position moves
/// through the physics step.
pub trait CharacterBody {
    /// Center of the body in world units (y grows downward)
    fn position(&self) -> Vec2;

    /// Full width and height of the body
    fn size(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    fn set_velocity_x(&mut self, vx: f32);

    fn set_velocity_y(&mut self, vy: f32);

    /// True when the sprite is mirrored to face left
    fn flip_x(&self) -> bool;

    fn set_flip_x(&mut self, flip: bool);

    /// Whether the body is resting on something this frame
    fn on_ground(&self) -> bool;
}

/// The held weapon's sprite. Fully re-derived from the character every frame.
pub trait WeaponBody {
    fn set_position(&mut self, position: Vec2);

    /// Rotation in degrees, clockwise on screen
    fn set_angle(&mut self, degrees: f32);

    fn set_gravity_scale(&mut self, scale: f32);
}

/// Where the weapon sprite should be this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponTransform {
    pub position: Vec2,
    pub angle: f32,
    pub gravity_scale: f32,
}

impl Default for WeaponTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            gravity_scale: 0.0,
        }
    }
}

impl WeaponBody for WeaponTransform {
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }
}
