//! Frame scheduling for the GUI apps.
//!
//! egui repaints on input by default. While an animation runs (result
//! fade, glass background) the app flips the scheduler on and gets timed
//! repaints; when nothing moves, egui sleeps until the next input event.

use std::time::Duration;

/// Repaint interval while animating (~30 fps).
const ANIMATION_INTERVAL: Duration = Duration::from_millis(33);

pub struct FrameScheduler {
    animating: bool,
    interval: Duration,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            animating: false,
            interval: ANIMATION_INTERVAL,
        }
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            animating: false,
            interval,
        }
    }

    /// Turn timed repaints on or off.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Call at the end of `update()`. Schedules the next frame only while
    /// an animation is running.
    pub fn tick(&self, ctx: &egui::Context) {
        if self.animating {
            ctx.request_repaint_after(self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut scheduler = FrameScheduler::new();
        assert!(!scheduler.is_animating());
        scheduler.set_animating(true);
        assert!(scheduler.is_animating());
        scheduler.set_animating(false);
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_tick_idle_is_noop() {
        let scheduler = FrameScheduler::new();
        let ctx = egui::Context::default();
        // No animation: must not panic or schedule.
        scheduler.tick(&ctx);
    }
}
