// Arena level: ground strip and floating platforms

use glam::Vec2;
use log::info;

use crate::core::math::Rect;
use crate::engine::physics::{body::presets, PhysicsWorld};
use crate::game::GameError;

/// World dimensions and physics settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    /// Downward acceleration in px/s²
    pub gravity: f32,
    /// Unscaled size of the platform texture
    pub platform_size: Vec2,
    pub spawn_point: Vec2,
}

pub const TEST_LEVEL_CONFIG: ArenaConfig = ArenaConfig {
    title: "Samurai Gunn Level Test",
    width: 1024.0,
    height: 768.0,
    gravity: 2100.0,
    platform_size: Vec2::new(400.0, 32.0),
    spawn_point: Vec2::new(120.0, 300.0),
};

impl Default for ArenaConfig {
    fn default() -> Self {
        TEST_LEVEL_CONFIG
    }
}

/// A platform placed by its bottom-left corner and texture scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub bottom: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl PlatformSpec {
    pub const fn new(x: f32, bottom: f32, scale_x: f32, scale_y: f32) -> Self {
        Self {
            x,
            bottom,
            scale_x,
            scale_y,
        }
    }
}

pub const TEST_LEVEL_PLATFORMS: [PlatformSpec; 6] = [
    PlatformSpec::new(0.0, 600.0, 0.4, 0.5),
    PlatformSpec::new(0.0, 360.0, 1.1, 0.5),
    PlatformSpec::new(270.0, 520.0, 0.6, 0.5),
    PlatformSpec::new(650.0, 460.0, 0.25, 0.5),
    PlatformSpec::new(625.0, 600.0, 0.8, 0.5),
    PlatformSpec::new(875.0, 370.0, 0.3, 0.5),
];

/// Static geometry of a level, inserted into the physics world
#[derive(Debug)]
pub struct Arena {
    config: ArenaConfig,
    ground: Rect,
    platforms: Vec<Rect>,
}

impl Arena {
    /// The test level
    pub fn test_level(physics: &mut PhysicsWorld) -> Result<Self, GameError> {
        Self::build(TEST_LEVEL_CONFIG, &TEST_LEVEL_PLATFORMS, physics)
    }

    /// Validate the layout and add the ground and platforms to `physics`
    pub fn build(
        config: ArenaConfig,
        platforms: &[PlatformSpec],
        physics: &mut PhysicsWorld,
    ) -> Result<Self, GameError> {
        for (field, value) in [("arena width", config.width), ("arena height", config.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidSetting { field, value });
            }
        }

        // Ground hugs the bottom edge, one fifteenth of the screen tall
        let ground = Rect::from_bottom_left(0.0, config.height, config.width, config.height / 15.0);

        let platforms = platforms
            .iter()
            .enumerate()
            .map(|(index, spec)| Self::platform_rect(&config, index, spec))
            .collect::<Result<Vec<_>, _>>()?;

        for rect in std::iter::once(&ground).chain(platforms.iter()) {
            let handle = physics.add_rigid_body(presets::platform_body(rect.center.x, rect.center.y));
            physics.add_collider(presets::platform_collider(rect.size.x, rect.size.y), handle);
        }
        physics.update_queries();

        info!(
            "Arena '{}' built: {}x{} with {} platforms",
            config.title,
            config.width,
            config.height,
            platforms.len()
        );

        Ok(Self {
            config,
            ground,
            platforms,
        })
    }

    fn platform_rect(config: &ArenaConfig, index: usize, spec: &PlatformSpec) -> Result<Rect, GameError> {
        if !(spec.scale_x > 0.0 && spec.scale_y > 0.0) {
            return Err(GameError::InvalidPlatform {
                index,
                reason: "scale must be positive",
            });
        }
        if !spec.x.is_finite() || !spec.bottom.is_finite() {
            return Err(GameError::InvalidPlatform {
                index,
                reason: "position must be finite",
            });
        }

        Ok(Rect::from_bottom_left(
            spec.x,
            spec.bottom,
            config.platform_size.x * spec.scale_x,
            config.platform_size.y * spec.scale_y,
        ))
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn title(&self) -> &'static str {
        self.config.title
    }

    pub fn ground(&self) -> Rect {
        self.ground
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.config.spawn_point
    }

    /// Whether a point has left the bottom of the world
    pub fn is_out_of_bounds(&self, position: Vec2) -> bool {
        position.y > self.config.height + self.config.height / 2.0
    }
}
