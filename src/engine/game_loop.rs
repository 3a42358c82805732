/// Frame clock driving the per-frame update.
///
/// Exactly one update runs per rendered frame. A long or dropped frame is not
/// compensated with extra catch-up updates; its delta is clamped instead.
use std::time::{Duration, Instant};

/// Nominal update rate (60 frames per second)
pub const TARGET_FRAME_TIME: f32 = 1.0 / 60.0;

/// Longest delta handed to a single update
pub const MAX_FRAME_TIME: f32 = 1.0 / 30.0;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame timing state
pub struct FrameClock {
    last_frame_time: Instant,
    paused: bool,
    frame_times: Vec<Duration>,
    frame_count: u64,
    update_count: u64,
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame. Returns the delta for this frame's update, or `None`
    /// while paused.
    pub fn begin_frame(&mut self) -> Option<f32> {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.record_frame(frame_time)
    }

    fn record_frame(&mut self, frame_time: Duration) -> Option<f32> {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return None;
        }

        self.update_count += 1;
        Some(frame_time.as_secs_f32().min(MAX_FRAME_TIME))
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of frames that ran an update
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Time spent paused must not show up as one huge delta
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.update_count(), 0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_one_update_per_frame() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            assert!(clock.record_frame(Duration::from_millis(16)).is_some());
        }
        assert_eq!(clock.frame_count(), 5);
        assert_eq!(clock.update_count(), 5);
    }

    #[test]
    fn test_long_frame_is_clamped_not_compensated() {
        let mut clock = FrameClock::new();
        let dt = clock.record_frame(Duration::from_millis(300)).unwrap();
        assert_eq!(dt, MAX_FRAME_TIME);
        assert_eq!(clock.update_count(), 1);
    }

    #[test]
    fn test_paused_no_updates() {
        let mut clock = FrameClock::new();
        clock.pause();

        assert!(clock.record_frame(Duration::from_millis(16)).is_none());
        assert_eq!(clock.frame_count(), 1);
        assert_eq!(clock.update_count(), 0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = FrameClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_fps_from_window() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            clock.record_frame(Duration::from_millis(20));
        }
        assert!((clock.fps() - 50.0).abs() < 0.5);
    }
}
