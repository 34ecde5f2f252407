//! Contains animation related utils

use eframe::egui::Color32;

pub fn color_lerp(color1: Color32, color2: Color32, factor: f32) -> Color32 {
    fn u8_lerp(v1: u8, v2: u8, factor: f32) -> u8 {
        (v1 as f32 * (1.0 - factor) + v2 as f32 * factor) as u8
    }

    Color32::from_rgba_premultiplied(
        u8_lerp(color1.r(), color2.r(), factor),
        u8_lerp(color1.g(), color2.g(), factor),
        u8_lerp(color1.b(), color2.b(), factor),
        u8_lerp(color1.a(), color2.a(), factor),
    )
}

/// Interpolation curve of a [`Tween`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Slow at both ends, fast in the middle
    InOutCubic,
}

impl Easing {
    /// Maps linear progress `t` to eased progress, `t` is clamped to `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A value moving from `from` to `to`, driven by an external clock in seconds
/// (usually `egui::InputState::time`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::Linear,
        }
    }

    #[inline]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start + self.duration
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }

        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn value_at(&self, now: f64) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[inline]
    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.end_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_out_cubic_is_symmetric() {
        let e = Easing::InOutCubic;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(0.5), 0.5);
        assert_eq!(e.apply(1.0), 1.0);
        assert!(e.apply(0.25) < 0.25);
        assert!(e.apply(0.75) > 0.75);
        assert!((e.apply(0.3) + e.apply(0.7) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::InOutCubic.apply(2.0), 1.0);
    }

    #[test]
    fn tween_follows_clock() {
        let tween = Tween::new(10.0, 20.0, 1.0, 0.25);
        assert_eq!(tween.value_at(0.5), 10.0);
        assert_eq!(tween.value_at(1.125), 15.0);
        assert_eq!(tween.value_at(5.0), 20.0);
        assert!(!tween.is_finished(1.2));
        assert!(tween.is_finished(1.25));
    }

    #[test]
    fn zero_duration_tween_jumps_to_end() {
        let tween = Tween::new(0.0, 1.0, 3.0, 0.0);
        assert_eq!(tween.value_at(3.0), 1.0);
        assert!(tween.is_finished(3.0));
    }

    #[test]
    fn color_lerp_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(color_lerp(a, b, 0.0), a);
        assert_eq!(color_lerp(a, b, 1.0), b);
    }
}
