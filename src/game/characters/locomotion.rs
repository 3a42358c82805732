// Locomotion state machine: input + ground contact -> movement state

use log::debug;

use super::animation::Animator;
use super::body::CharacterBody;
use super::config::ControllerConfig;
use super::state::{CharacterState, StateMachine};
use crate::engine::input::InputSnapshot;

/// Outcome of one locomotion decision. `None` fields leave the body untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    pub state: CharacterState,
    pub velocity_x: Option<f32>,
    pub velocity_y: Option<f32>,
    /// New facing (true = mirrored to the left)
    pub flip: Option<bool>,
}

/// Decide this frame's movement state and body changes.
///
/// The horizontal phase runs first; the vertical phase may override the
/// state it picked. Looking up wins over looking down when both are held.
pub fn resolve(input: &InputSnapshot, on_ground: bool, config: &ControllerConfig) -> LocomotionStep {
    let mut step = LocomotionStep {
        state: CharacterState::Idle,
        velocity_x: None,
        velocity_y: None,
        flip: None,
    };

    // Horizontal
    if input.move_left {
        step.velocity_x = Some(-config.speed_x);
        step.flip = Some(true);
        step.state = CharacterState::Running;
    } else if input.move_right {
        step.velocity_x = Some(config.speed_x);
        step.flip = Some(false);
        step.state = CharacterState::Running;
    } else if on_ground {
        step.velocity_x = Some(0.0);
        step.state = CharacterState::Idle;
    }
    // Airborne with no input keeps its horizontal momentum

    // Vertical
    let jumped = input.jump && on_ground;
    if jumped {
        step.velocity_y = Some(-config.speed_y);
        step.state = CharacterState::Jumping;
    } else if !on_ground {
        step.state = CharacterState::InAir;
    }

    if on_ground && !jumped && !input.has_horizontal() {
        if input.look_up {
            step.state = CharacterState::LookingUp;
        } else if input.look_down {
            step.state = CharacterState::LookingDown;
        }
    }

    step
}

/// Drives the character's movement state from frame to frame
#[derive(Debug)]
pub struct LocomotionController {
    machine: StateMachine<CharacterState>,
    config: ControllerConfig,
}

impl LocomotionController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            machine: StateMachine::new(CharacterState::Idle),
            config,
        }
    }

    pub fn state(&self) -> CharacterState {
        self.machine.state()
    }

    /// Run one frame: apply velocity and facing to `body`, and swap the
    /// animation if the state changed.
    pub fn advance<B, A>(
        &mut self,
        input: &InputSnapshot,
        on_ground: bool,
        body: &mut B,
        animator: &mut A,
    ) -> CharacterState
    where
        B: CharacterBody + ?Sized,
        A: Animator + ?Sized,
    {
        let step = resolve(input, on_ground, &self.config);

        if let Some(vx) = step.velocity_x {
            body.set_velocity_x(vx);
        }
        if let Some(vy) = step.velocity_y {
            body.set_velocity_y(vy);
        }
        if let Some(flip) = step.flip {
            body.set_flip_x(flip);
        }

        let previous = self.machine.state();
        if self.machine.transition(step.state) {
            debug!("Character state {:?} -> {:?}", previous, step.state);
            animator.play(step.state.animation_key(), true);
        }

        self.machine.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{Action, PlayerInput};
    use crate::game::characters::testing::{RecordingAnimator, StubBody};

    fn controller() -> LocomotionController {
        LocomotionController::new(ControllerConfig::default())
    }

    fn controller_in(state: CharacterState) -> LocomotionController {
        let mut controller = controller();
        controller.machine = StateMachine::new(state);
        controller
    }

    #[test]
    fn test_run_right_from_idle() {
        let mut controller = controller();
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();

        let state = controller.advance(
            &InputSnapshot::default().with_right(),
            true,
            &mut body,
            &mut animator,
        );

        assert_eq!(state, CharacterState::Running);
        assert_eq!(body.velocity.x, 300.0);
        assert!(!body.flip);
        assert_eq!(animator.count("running"), 1);
        assert_eq!(animator.calls.len(), 1);
    }

    #[test]
    fn test_run_left_flips() {
        let mut controller = controller();
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();

        controller.advance(
            &InputSnapshot::default().with_left(),
            true,
            &mut body,
            &mut animator,
        );

        assert_eq!(body.velocity.x, -300.0);
        assert!(body.flip);
        assert_eq!(controller.state(), CharacterState::Running);
    }

    #[test]
    fn test_release_stops_on_ground() {
        let mut controller = controller_in(CharacterState::Running);
        let mut body = StubBody::grounded_at(100.0, 100.0);
        body.velocity.x = 300.0;
        let mut animator = RecordingAnimator::default();

        let state = controller.advance(&InputSnapshot::default(), true, &mut body, &mut animator);

        assert_eq!(state, CharacterState::Idle);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(animator.count("idle"), 1);
    }

    #[test]
    fn test_left_wins_over_right() {
        let step = resolve(
            &InputSnapshot::default().with_left().with_right(),
            true,
            &ControllerConfig::default(),
        );
        assert_eq!(step.velocity_x, Some(-300.0));
        assert_eq!(step.flip, Some(true));
    }

    #[test]
    fn test_airborne_keeps_horizontal_momentum() {
        let step = resolve(&InputSnapshot::default(), false, &ControllerConfig::default());
        assert_eq!(step.velocity_x, None);
        assert_eq!(step.flip, None);
        assert_eq!(step.state, CharacterState::InAir);
    }

    #[test]
    fn test_air_steering_sets_velocity_but_not_running() {
        let step = resolve(
            &InputSnapshot::default().with_right(),
            false,
            &ControllerConfig::default(),
        );
        assert_eq!(step.velocity_x, Some(300.0));
        assert_eq!(step.state, CharacterState::InAir);
    }

    #[test]
    fn test_airborne_is_in_air_from_any_state() {
        let states = [
            CharacterState::Idle,
            CharacterState::Running,
            CharacterState::Jumping,
            CharacterState::LookingUp,
            CharacterState::LookingDown,
            CharacterState::Attacking,
        ];
        let inputs = [
            InputSnapshot::default(),
            InputSnapshot::default().with_left(),
            InputSnapshot::default().with_look_up(),
            InputSnapshot::default().with_look_down().with_attack(),
        ];

        for previous in states {
            for input in inputs {
                let mut controller = controller_in(previous);
                let mut body = StubBody::grounded_at(0.0, 0.0);
                body.grounded = false;
                let mut animator = RecordingAnimator::default();

                let state = controller.advance(&input, false, &mut body, &mut animator);
                assert_eq!(state, CharacterState::InAir, "from {:?} with {:?}", previous, input);
            }
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let mut controller = controller();
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();

        let state = controller.advance(
            &InputSnapshot::default().with_jump().with_right(),
            true,
            &mut body,
            &mut animator,
        );

        assert_eq!(state, CharacterState::Jumping);
        assert_eq!(body.velocity.y, -800.0);
        assert_eq!(body.velocity.x, 300.0);
        assert_eq!(animator.count("jumping"), 1);
        assert_eq!(animator.count("running"), 0);
    }

    #[test]
    fn test_no_jump_in_air() {
        let step = resolve(
            &InputSnapshot::default().with_jump(),
            false,
            &ControllerConfig::default(),
        );
        assert_eq!(step.velocity_y, None);
        assert_eq!(step.state, CharacterState::InAir);
    }

    #[test]
    fn test_jump_not_overridden_by_look() {
        let step = resolve(
            &InputSnapshot::default().with_jump().with_look_up(),
            true,
            &ControllerConfig::default(),
        );
        assert_eq!(step.state, CharacterState::Jumping);
    }

    #[test]
    fn test_held_jump_triggers_once() {
        let mut controller = controller();
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();
        let mut input = PlayerInput::new();

        input.press(Action::Jump);
        let mut jumps = 0;
        for _ in 0..10 {
            let state = controller.advance(&input.snapshot(), true, &mut body, &mut animator);
            if state == CharacterState::Jumping {
                jumps += 1;
            }
            input.update();
        }

        assert_eq!(jumps, 1);
        assert_eq!(animator.count("jumping"), 1);
    }

    #[test]
    fn test_look_up_and_down() {
        let config = ControllerConfig::default();

        let up = resolve(&InputSnapshot::default().with_look_up(), true, &config);
        assert_eq!(up.state, CharacterState::LookingUp);
        assert_eq!(up.velocity_x, Some(0.0));

        let down = resolve(&InputSnapshot::default().with_look_down(), true, &config);
        assert_eq!(down.state, CharacterState::LookingDown);
    }

    #[test]
    fn test_both_look_directions_up_wins() {
        let step = resolve(
            &InputSnapshot::default().with_look_up().with_look_down(),
            true,
            &ControllerConfig::default(),
        );
        assert_eq!(step.state, CharacterState::LookingUp);
    }

    #[test]
    fn test_moving_while_looking_just_runs() {
        let step = resolve(
            &InputSnapshot::default().with_look_up().with_right(),
            true,
            &ControllerConfig::default(),
        );
        assert_eq!(step.state, CharacterState::Running);
    }

    #[test]
    fn test_looking_needs_ground() {
        let step = resolve(
            &InputSnapshot::default().with_look_down(),
            false,
            &ControllerConfig::default(),
        );
        assert_eq!(step.state, CharacterState::InAir);
    }

    #[test]
    fn test_repeat_advance_plays_once() {
        let mut controller = controller();
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();
        let input = InputSnapshot::default().with_look_down();

        controller.advance(&input, true, &mut body, &mut animator);
        controller.advance(&input, true, &mut body, &mut animator);

        assert_eq!(animator.calls, vec![("looking_down".to_string(), true)]);
    }

    #[test]
    fn test_staying_idle_plays_nothing() {
        let mut controller = controller();
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();

        controller.advance(&InputSnapshot::default(), true, &mut body, &mut animator);
        assert!(animator.calls.is_empty());
    }

    #[test]
    fn test_landing_returns_to_idle() {
        let mut controller = controller_in(CharacterState::InAir);
        let mut body = StubBody::grounded_at(100.0, 100.0);
        let mut animator = RecordingAnimator::default();

        controller.advance(&InputSnapshot::default(), true, &mut body, &mut animator);
        assert_eq!(controller.state(), CharacterState::Idle);
        assert_eq!(animator.calls, vec![("idle".to_string(), true)]);
    }
}
