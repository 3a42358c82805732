// Math utilities and helper functions

use glam::Vec2;

/// Mirror an offset across the vertical axis when `flip` is set
pub fn mirror_x(offset: Vec2, flip: bool) -> Vec2 {
    if flip {
        Vec2::new(-offset.x, offset.y)
    } else {
        offset
    }
}

/// Heading in degrees for a horizontally facing sprite (0 = right, 180 = left)
pub fn facing_angle(flip: bool) -> f32 {
    if flip {
        180.0
    } else {
        0.0
    }
}

/// Axis-aligned rectangle described by its center and full size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build a rectangle anchored at its bottom-left corner (y grows downward)
    pub fn from_bottom_left(x: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(x + width / 2.0, bottom - height / 2.0),
            size: Vec2::new(width, height),
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }
}
