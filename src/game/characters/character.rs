// Character entity: wires the controllers to the physics world and animation players

use glam::Vec2;
use log::{info, warn};

use crate::engine::input::InputSnapshot;
use crate::engine::physics::{
    body::presets, nalgebra, ColliderHandle, CollisionGroups, PhysicsWorld, QueryFilter,
    RigidBodyHandle, Vector,
};
use crate::game::GameError;

use super::animation::AnimationPlayer;
use super::body::{CharacterBody, WeaponTransform};
use super::combat::CombatController;
use super::config::ControllerConfig;
use super::locomotion::LocomotionController;
use super::state::{CharacterState, WeaponState};

/// How far below the feet a platform still counts as ground
const GROUND_PROBE_DISTANCE: f32 = 2.0;

/// Horizontal inset of the foot rays from the body's side edges
const FOOT_INSET: f32 = 1.0;

/// Physics handles a spawned character owns
#[derive(Debug, Clone, Copy)]
struct BodyRig {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    weapon: RigidBodyHandle,
}

/// Rapier body seen through the controller's `CharacterBody` seam
struct PhysicsCharacterBody<'a> {
    physics: &'a mut PhysicsWorld,
    handle: RigidBodyHandle,
    size: Vec2,
    facing_left: &'a mut bool,
}

impl PhysicsCharacterBody<'_> {
    fn update_velocity(&mut self, apply: impl FnOnce(&mut Vector<f32>)) {
        if let Some(body) = self.physics.get_rigid_body_mut(self.handle) {
            let mut velocity = *body.linvel();
            apply(&mut velocity);
            body.set_linvel(velocity, true);
        }
    }
}

impl CharacterBody for PhysicsCharacterBody<'_> {
    fn position(&self) -> Vec2 {
        self.physics
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn velocity(&self) -> Vec2 {
        self.physics
            .get_rigid_body(self.handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.update_velocity(|velocity| velocity.x = vx);
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.update_velocity(|velocity| velocity.y = vy);
    }

    fn flip_x(&self) -> bool {
        *self.facing_left
    }

    fn set_flip_x(&mut self, flip: bool) {
        *self.facing_left = flip;
    }

    /// Cast short rays down from both bottom corners. Any support under the
    /// footprint counts, so a body hanging over a ledge is still standing.
    fn on_ground(&self) -> bool {
        let feet = self.position() + Vec2::new(0.0, self.size.y / 2.0 - 1.0);
        let reach = (self.size.x / 2.0 - FOOT_INSET).max(0.0);

        [-reach, reach].into_iter().any(|dx| {
            self.physics
                .raycast(
                    Vector::new(feet.x + dx, feet.y),
                    Vector::new(0.0, 1.0),
                    1.0 + GROUND_PROBE_DISTANCE,
                    true,
                    QueryFilter::default()
                        .exclude_rigid_body(self.handle)
                        .exclude_sensors(),
                )
                .is_some()
        })
    }
}

/// The playable samurai
#[derive(Debug)]
pub struct Character {
    pub name: String,
    config: ControllerConfig,
    rig: Option<BodyRig>,
    locomotion: LocomotionController,
    combat: CombatController,
    animation: AnimationPlayer,
    weapon_animation: AnimationPlayer,
    weapon: WeaponTransform,
    facing_left: bool,
    on_ground: bool,
    /// Other characters' colliders under the blade on the last update
    blade_contacts: Vec<ColliderHandle>,
    warned_unbound: bool,
}

impl Character {
    /// Create an unspawned character. It ignores updates until `spawn` binds
    /// it to the physics world.
    pub fn new(name: &str, config: ControllerConfig) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            name: name.to_string(),
            config,
            rig: None,
            locomotion: LocomotionController::new(config),
            combat: CombatController::new(config),
            animation: AnimationPlayer::character(),
            weapon_animation: AnimationPlayer::sword_trail(),
            weapon: WeaponTransform::default(),
            facing_left: false,
            on_ground: false,
            blade_contacts: Vec::new(),
            warned_unbound: false,
        })
    }

    /// Add the body and weapon to the physics world at (x, y)
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, x: f32, y: f32) {
        if self.rig.is_some() {
            self.despawn(physics);
        }

        let body = physics.add_rigid_body(presets::player_body(x, y));
        let collider =
            physics.add_collider(presets::player_collider(self.config.width, self.config.height), body);

        let weapon = physics.add_rigid_body(presets::weapon_body(x, y));
        physics.add_collider(
            presets::weapon_collider(self.config.weapon_size.x, self.config.weapon_size.y),
            weapon,
        );
        physics.update_queries();

        self.rig = Some(BodyRig {
            body,
            collider,
            weapon,
        });
        self.warned_unbound = false;
        info!("{} spawned at ({:.0}, {:.0})", self.name, x, y);
    }

    /// Remove the body and weapon from the physics world
    pub fn despawn(&mut self, physics: &mut PhysicsWorld) {
        if let Some(rig) = self.rig.take() {
            physics.remove_rigid_body(rig.body);
            physics.remove_rigid_body(rig.weapon);
        }
        self.blade_contacts.clear();
    }

    pub fn is_spawned(&self) -> bool {
        self.rig.is_some()
    }

    /// Per-frame entry point. Locomotion resolves first, then the weapon reads
    /// the state it produced. Without input or a spawned body this is a no-op.
    pub fn update(&mut self, input: Option<&InputSnapshot>, physics: &mut PhysicsWorld, dt: f32) {
        let (Some(input), Some(rig)) = (input, self.rig) else {
            if !self.warned_unbound {
                warn!("{}: skipping update, character not ready", self.name);
                self.warned_unbound = true;
            }
            return;
        };

        let mut body = PhysicsCharacterBody {
            physics: &mut *physics,
            handle: rig.body,
            size: self.config.size(),
            facing_left: &mut self.facing_left,
        };

        self.on_ground = body.on_ground();
        let state = self
            .locomotion
            .advance(input, self.on_ground, &mut body, &mut self.animation);
        self.combat.resolve_weapon(
            input.attack,
            state,
            &body,
            &mut self.weapon,
            &mut self.weapon_animation,
        );

        Self::sync_weapon(physics, rig.weapon, &self.weapon);
        self.blade_contacts = self.query_blade(physics, &rig);
        self.animation.set_flip_horizontal(self.facing_left);
        self.weapon_animation.set_flip_horizontal(self.facing_left);

        self.animation.update(dt);
        self.weapon_animation.update(dt);
    }

    /// Move the kinematic weapon body onto the derived transform
    fn sync_weapon(physics: &mut PhysicsWorld, handle: RigidBodyHandle, transform: &WeaponTransform) {
        if let Some(weapon) = physics.get_rigid_body_mut(handle) {
            weapon.set_gravity_scale(transform.gravity_scale, false);
            weapon.set_position(Self::weapon_isometry(transform), true);
        }
    }

    /// Player colliders the blade overlaps, not counting this character
    fn query_blade(&self, physics: &PhysicsWorld, rig: &BodyRig) -> Vec<ColliderHandle> {
        let filter = QueryFilter::default()
            .groups(CollisionGroups::Weapon.to_interaction_groups())
            .exclude_collider(rig.collider)
            .exclude_sensors();

        physics.intersecting_colliders(
            &Self::weapon_isometry(&self.weapon),
            Vector::new(self.config.weapon_size.x / 2.0, self.config.weapon_size.y / 2.0),
            filter,
        )
    }

    fn weapon_isometry(transform: &WeaponTransform) -> nalgebra::Isometry2<f32> {
        nalgebra::Isometry2::new(
            Vector::new(transform.position.x, transform.position.y),
            transform.angle.to_radians(),
        )
    }

    pub fn state(&self) -> CharacterState {
        self.locomotion.state()
    }

    pub fn weapon_state(&self) -> Option<WeaponState> {
        self.combat.state()
    }

    pub fn weapon(&self) -> &WeaponTransform {
        &self.weapon
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    pub fn weapon_animation(&self) -> &AnimationPlayer {
        &self.weapon_animation
    }

    pub fn is_facing_left(&self) -> bool {
        self.facing_left
    }

    /// Ground contact sampled on the last update
    pub fn is_grounded(&self) -> bool {
        self.on_ground
    }

    /// Whether the blade overlapped the body on the last update
    pub fn blade_touching_body(&self) -> bool {
        self.combat.touching_body()
    }

    /// Other characters the blade overlapped on the last update
    pub fn blade_contacts(&self) -> &[ColliderHandle] {
        &self.blade_contacts
    }

    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        let rig = self.rig?;
        physics
            .get_rigid_body(rig.body)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }

    pub fn velocity(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        let rig = self.rig?;
        physics
            .get_rigid_body(rig.body)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
    }

    /// Position of the weapon body as the physics world sees it
    pub fn weapon_body_position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        let rig = self.rig?;
        physics
            .get_rigid_body(rig.weapon)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }
}
