//! Shared easing for animated bodies.
//!
//! Every interactive visual (scale, glow, emissive intensity, label opacity)
//! moves toward its target with the same exponential step:
//!
//! ```text
//! value += (target - value) * k
//! ```
//!
//! `k` is a per-attribute constant. The step is applied once per advancing
//! frame, so a rapid hover toggle bends the curve instead of snapping.

use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;

/// Anything that rewrites its own state once per frame.
///
/// `view` is the camera basis for this frame; billboards copy it, everything
/// else ignores it. Implementations must be pure in `frame.elapsed` apart
/// from `Smoothed` values, which only move on advancing frames.
pub trait Animated {
    fn update(&mut self, frame: &FrameContext, view: &Orientation);
}

/// One exponential step toward `target`.
#[inline(always)]
pub fn approach(value: f32, target: f32, k: f32) -> f32 {
    (target - value).mul_add(k, value)
}

/// `base + amplitude * sin(t * speed + phase)`
#[inline(always)]
pub fn oscillate(t: f32, speed: f32, phase: f32, base: f32, amplitude: f32) -> f32 {
    amplitude.mul_add((t * speed + phase).sin(), base)
}

/// A scalar that eases toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    value: f32,
    rate: f32,
}

impl Smoothed {
    pub fn new(initial: f32, rate: f32) -> Self {
        Self {
            value: initial,
            rate: rate.clamp(0.0, 1.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Step toward `target` if this frame advances time.
    pub fn step(&mut self, frame: &FrameContext, target: f32) -> f32 {
        if frame.advances() {
            self.value = approach(self.value, target, self.rate);
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(t: f32) -> FrameContext {
        FrameContext {
            elapsed: t,
            delta: 1.0 / 60.0,
            frame: 1,
        }
    }

    #[test]
    fn approach_moves_fraction_of_gap() {
        assert!((approach(0.0, 1.0, 0.1) - 0.1).abs() < 1e-6);
        assert!((approach(1.0, 1.0, 0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn smoothed_converges_without_overshoot() {
        let mut s = Smoothed::new(1.0, 0.12);
        let mut prev = s.value();
        for i in 0..200 {
            let v = s.step(&frame(i as f32), 1.8);
            assert!(v >= prev && v <= 1.8);
            prev = v;
        }
        assert!((s.value() - 1.8).abs() < 1e-3);
    }

    #[test]
    fn smoothed_holds_on_repeated_time() {
        let mut s = Smoothed::new(0.0, 0.1);
        s.step(&FrameContext::at(2.0), 1.0);
        s.step(&FrameContext::at(2.0), 1.0);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn oscillate_is_bounded() {
        for i in 0..100 {
            let v = oscillate(i as f32 * 0.37, 2.0, 1.7, 1.0, 0.08);
            assert!((0.92..=1.08).contains(&v));
        }
    }
}
