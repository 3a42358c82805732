// Character animation system

use std::collections::HashMap;

/// Anything that can be told to play a keyed animation
pub trait Animator {
    /// Switch to `key`. With `ignore_if_playing`, a clip that is already
    /// running is left alone instead of restarting.
    fn play(&mut self, key: &str, ignore_if_playing: bool);
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "running", "sword_up")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once and holds the last frame)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Manages animation playback for one sprite
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
    flip_horizontal: bool,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player preloaded with the character body clips, starting on idle
    pub fn character() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("running", 8, 14.0));
        player.add_animation(AnimationClip::one_shot("jumping", 4, 12.0));
        player.add_animation(AnimationClip::looping("in_air", 4, 10.0));
        player.add_animation(AnimationClip::looping("looking_up", 4, 8.0));
        player.add_animation(AnimationClip::looping("looking_down", 4, 8.0));
        player.add_animation(AnimationClip::one_shot("attacking", 6, 20.0));
        player.add_animation(AnimationClip::one_shot("attacking_up", 6, 20.0));
        player.add_animation(AnimationClip::one_shot("attacking_down", 6, 20.0));

        player.play("idle", true);
        player
    }

    /// Player preloaded with the sword trail clips. Nothing plays until the
    /// first swing.
    pub fn sword_trail() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::one_shot("sword_forward", 5, 24.0));
        player.add_animation(AnimationClip::one_shot("sword_up", 5, 24.0));
        player.add_animation(AnimationClip::one_shot("sword_down", 5, 24.0));

        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name
    pub fn play(&mut self, name: &str, ignore_if_playing: bool) {
        if ignore_if_playing && self.playing && self.current_animation == name {
            return;
        }
        if !self.animations.contains_key(name) {
            log::warn!("No animation clip named '{}'", name);
        }

        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Update the animation (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Check if the current animation has finished (for non-looping animations)
    pub fn is_finished(&self) -> bool {
        match self.animations.get(&self.current_animation) {
            Some(clip) => !clip.looping && !self.playing,
            None => true,
        }
    }
}

impl Animator for AnimationPlayer {
    fn play(&mut self, key: &str, ignore_if_playing: bool) {
        AnimationPlayer::play(self, key, ignore_if_playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_clip_creation() {
        let clip = AnimationClip::looping("idle", 4, 8.0);
        assert_eq!(clip.name, "idle");
        assert_eq!(clip.frame_count, 4);
        assert_eq!(clip.frame_duration, 0.125);
        assert!(clip.looping);
    }

    #[test]
    fn test_animation_clip_duration() {
        let clip = AnimationClip::one_shot("sword_up", 5, 25.0);
        approx::assert_relative_eq!(clip.total_duration(), 0.2);
    }

    #[test]
    fn test_character_player_starts_idle() {
        let player = AnimationPlayer::character();
        assert_eq!(player.current_animation(), "idle");
        assert!(player.is_playing());
    }

    #[test]
    fn test_sword_trail_starts_empty() {
        let player = AnimationPlayer::sword_trail();
        assert_eq!(player.current_animation(), "");
        assert!(!player.is_playing());
    }

    #[test]
    fn test_play_ignore_if_playing() {
        let mut player = AnimationPlayer::character();
        player.play("running", true);
        player.update(0.1);
        let frame = player.current_frame();
        assert!(frame > 0);

        player.play("running", true);
        assert_eq!(player.current_frame(), frame);
    }

    #[test]
    fn test_play_forced_restart() {
        let mut player = AnimationPlayer::sword_trail();
        player.play("sword_up", false);
        player.update(0.1);
        assert!(player.current_frame() > 0);

        player.play("sword_up", false);
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_finished_one_shot_replays_even_when_ignoring() {
        let mut player = AnimationPlayer::character();
        player.play("jumping", true);
        player.update(1.0);
        assert!(player.is_finished());

        player.play("jumping", true);
        assert!(player.is_playing());
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_animation_player_update() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 4, 10.0));
        player.play("test", false);

        player.update(0.15);
        assert_eq!(player.current_frame(), 1);

        player.update(0.1);
        assert_eq!(player.current_frame(), 2);
    }

    #[test]
    fn test_animation_looping() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 3, 10.0));
        player.play("test", false);

        player.update(0.35);
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_animation_one_shot() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("test", 3, 10.0));
        player.play("test", false);

        player.update(0.5);
        assert_eq!(player.current_frame(), 2);
        assert!(!player.is_playing());
        assert!(player.is_finished());
    }

    #[test]
    fn test_flip_horizontal() {
        let mut player = AnimationPlayer::character();
        assert!(!player.is_flipped_horizontal());

        player.set_flip_horizontal(true);
        assert!(player.is_flipped_horizontal());
    }

    #[test]
    fn test_animator_trait_dispatch() {
        let mut player = AnimationPlayer::character();
        let animator: &mut dyn Animator = &mut player;
        animator.play("looking_up", true);
        assert_eq!(player.current_animation(), "looking_up");
    }
}
