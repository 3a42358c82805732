// Character and weapon states, plus the transition tracker both machines share

use std::fmt::Debug;

/// Movement/combat state of the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Running,
    /// Took off this frame
    Jumping,
    /// Airborne without a fresh jump
    InAir,
    /// Holding up while standing still
    LookingUp,
    /// Holding down while standing still
    LookingDown,
    /// Reserved for a body attack pose; locomotion never enters it
    Attacking,
    /// Reserved; locomotion never enters it
    AttackingUp,
    /// Reserved; locomotion never enters it
    AttackingDown,
}

impl CharacterState {
    /// States that only occur while standing on something
    pub fn is_grounded(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::Running | Self::LookingUp | Self::LookingDown
        )
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping | Self::InAir)
    }

    pub fn is_looking(&self) -> bool {
        matches!(self, Self::LookingUp | Self::LookingDown)
    }

    /// Animation clip played when entering this state
    pub fn animation_key(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::InAir => "in_air",
            Self::LookingUp => "looking_up",
            Self::LookingDown => "looking_down",
            Self::Attacking => "attacking",
            Self::AttackingUp => "attacking_up",
            Self::AttackingDown => "attacking_down",
        }
    }
}

/// Orientation of the swing while attack is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponState {
    SwordForward,
    SwordUp,
    SwordDown,
}

impl WeaponState {
    /// Trail animation restarted when entering this state
    pub fn animation_key(&self) -> &'static str {
        match self {
            Self::SwordForward => "sword_forward",
            Self::SwordUp => "sword_up",
            Self::SwordDown => "sword_down",
        }
    }
}

/// Tracks the current value of a state variable and reports real changes.
///
/// Setting the current value again is a no-op, so callers can tie side
/// effects (animation swaps) to the return value of [`StateMachine::transition`].
#[derive(Debug, Clone)]
pub struct StateMachine<S> {
    current_state: S,
}

impl<S: Copy + PartialEq + Debug> StateMachine<S> {
    pub fn new(initial: S) -> Self {
        Self {
            current_state: initial,
        }
    }

    pub fn state(&self) -> S {
        self.current_state
    }

    /// Move to `new_state`. Returns true only if the value changed.
    pub fn transition(&mut self, new_state: S) -> bool {
        if self.current_state == new_state {
            return false;
        }
        self.current_state = new_state;
        true
    }
}

impl<S: Copy + PartialEq + Debug + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
