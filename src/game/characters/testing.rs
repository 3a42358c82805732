// Stand-in collaborators for exercising the controllers without an engine

use super::animation::Animator;
use super::body::{CharacterBody, WeaponBody};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct StubBody {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub flip: bool,
    pub grounded: bool,
}

impl StubBody {
    pub fn grounded_at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(32.0, 48.0),
            velocity: Vec2::ZERO,
            flip: false,
            grounded: true,
        }
    }
}

impl CharacterBody for StubBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    fn flip_x(&self) -> bool {
        self.flip
    }

    fn set_flip_x(&mut self, flip: bool) {
        self.flip = flip;
    }

    fn on_ground(&self) -> bool {
        self.grounded
    }
}

#[derive(Debug, Clone)]
pub struct StubWeapon {
    pub position: Vec2,
    pub angle: f32,
    pub gravity_scale: f32,
}

impl Default for StubWeapon {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            gravity_scale: 1.0,
        }
    }
}

impl WeaponBody for StubWeapon {
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

/// Records every play call
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub calls: Vec<(String, bool)>,
}

impl RecordingAnimator {
    pub fn count(&self, key: &str) -> usize {
        self.calls.iter().filter(|(k, _)| k == key).count()
    }
}

impl Animator for RecordingAnimator {
    fn play(&mut self, key: &str, ignore_if_playing: bool) {
        self.calls.push((key.to_string(), ignore_if_playing));
    }
}
