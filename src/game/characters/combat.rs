// Combat/weapon state machine: attack input + character state -> sword state and placement

use glam::Vec2;
use log::{debug, trace};
use parry2d::math::{Isometry, Vector};
use parry2d::query;
use parry2d::shape::Cuboid;

use super::animation::Animator;
use super::body::{CharacterBody, WeaponBody};
use super::config::ControllerConfig;
use super::state::{CharacterState, StateMachine, WeaponState};
use crate::core::math::{facing_angle, mirror_x};

/// Sword orientation for this frame, or `None` while attack is not held
pub fn weapon_state_for(attack_held: bool, character_state: CharacterState) -> Option<WeaponState> {
    if !attack_held {
        return None;
    }

    Some(match character_state {
        CharacterState::LookingUp => WeaponState::SwordUp,
        CharacterState::LookingDown => WeaponState::SwordDown,
        _ => WeaponState::SwordForward,
    })
}

/// Where the sword goes relative to the character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponPlacement {
    pub position: Vec2,
    /// Degrees, clockwise on screen
    pub angle: f32,
}

/// Place the sword from the character's transform. Looking up/down stacks the
/// blade above/below the body; everything else holds it out in front.
pub fn weapon_placement(
    character_state: CharacterState,
    position: Vec2,
    size: Vec2,
    flip: bool,
    config: &ControllerConfig,
) -> WeaponPlacement {
    match character_state {
        CharacterState::LookingUp => WeaponPlacement {
            position: Vec2::new(position.x, position.y - size.y - config.look_correction),
            angle: -90.0,
        },
        CharacterState::LookingDown => WeaponPlacement {
            position: Vec2::new(position.x, position.y + size.y + config.look_correction),
            angle: 90.0,
        },
        _ => WeaponPlacement {
            position: position + mirror_x(config.weapon_offset, flip),
            angle: facing_angle(flip),
        },
    }
}

/// Whether the placed blade touches a body box
pub fn blade_overlaps(
    placement: &WeaponPlacement,
    blade_size: Vec2,
    body_center: Vec2,
    body_size: Vec2,
) -> bool {
    let blade = Cuboid::new(Vector::new(blade_size.x / 2.0, blade_size.y / 2.0));
    let blade_pos = Isometry::new(
        Vector::new(placement.position.x, placement.position.y),
        placement.angle.to_radians(),
    );
    let body = Cuboid::new(Vector::new(body_size.x / 2.0, body_size.y / 2.0));
    let body_pos = Isometry::translation(body_center.x, body_center.y);

    query::intersection_test(&blade_pos, &blade, &body_pos, &body).unwrap_or(false)
}

/// Drives the sword from the resolved character state
#[derive(Debug)]
pub struct CombatController {
    machine: StateMachine<Option<WeaponState>>,
    config: ControllerConfig,
    touching_body: bool,
}

impl CombatController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            machine: StateMachine::new(None),
            config,
            touching_body: false,
        }
    }

    pub fn state(&self) -> Option<WeaponState> {
        self.machine.state()
    }

    /// Result of the last overlap probe between blade and body
    pub fn touching_body(&self) -> bool {
        self.touching_body
    }

    /// Run one frame. The weapon is placed every frame whether or not attack
    /// is held; the trail animation restarts when a new swing state begins.
    pub fn resolve_weapon<B, W, A>(
        &mut self,
        attack_held: bool,
        character_state: CharacterState,
        body: &B,
        weapon: &mut W,
        animator: &mut A,
    ) -> Option<WeaponState>
    where
        B: CharacterBody + ?Sized,
        W: WeaponBody + ?Sized,
        A: Animator + ?Sized,
    {
        let next = weapon_state_for(attack_held, character_state);
        let placement = weapon_placement(
            character_state,
            body.position(),
            body.size(),
            body.flip_x(),
            &self.config,
        );

        weapon.set_gravity_scale(0.0);
        weapon.set_position(placement.position);
        weapon.set_angle(placement.angle);

        // Hit detection hook; no gameplay effect yet
        self.touching_body =
            blade_overlaps(&placement, self.config.weapon_size, body.position(), body.size());
        trace!("Blade overlap with body: {}", self.touching_body);

        let previous = self.machine.state();
        if self.machine.transition(next) {
            debug!("Weapon state {:?} -> {:?}", previous, next);
            if let Some(state) = next {
                animator.play(state.animation_key(), false);
            }
        }

        self.machine.state()
    }
}
