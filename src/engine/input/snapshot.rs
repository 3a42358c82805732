// Per-frame input record consumed by the character controllers

/// Immutable view of the character's controls for a single frame.
///
/// Everything is a held flag except `jump`, which is only set on the frame
/// the button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    pub jump: bool,
    pub attack: bool,
    pub dash: bool,
}

impl InputSnapshot {
    /// Whether either horizontal direction is held
    pub fn has_horizontal(&self) -> bool {
        self.move_left || self.move_right
    }
}

#[cfg(test)]
impl InputSnapshot {
    pub fn with_left(mut self) -> Self {
        self.move_left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.move_right = true;
        self
    }

    pub fn with_look_up(mut self) -> Self {
        self.look_up = true;
        self
    }

    pub fn with_look_down(mut self) -> Self {
        self.look_down = true;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }
}
