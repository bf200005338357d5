//! Animation helpers: easing, interpolation, and a one-shot fade timer.

use std::time::{Duration, Instant};

use egui::Color32;

/// Linear interpolation between two values.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out for smooth deceleration.
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Interpolate between two colors. `t` is clamped to `0..=1`.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| lerp(x as f32, y as f32, t).round() as u8;
    Color32::from_rgba_unmultiplied(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}

/// One-shot fade timer. Progress runs 0 → 1 after [`Fade::begin`] and
/// reports 1 while idle, so renderers can always use the end color when
/// nothing is fading.
pub struct Fade {
    started: Option<Instant>,
    duration: Duration,
}

impl Fade {
    pub fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// Restart the fade from zero.
    pub fn begin(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Fade progress in `0..=1`; 1 when idle or finished.
    pub fn progress(&self) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                let t = started.elapsed().as_secs_f32() / self.duration.as_secs_f32();
                t.min(1.0)
            }
        }
    }

    /// Whether the fade still needs frames.
    pub fn active(&self) -> bool {
        self.progress() < 1.0
    }
}
