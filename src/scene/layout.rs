//! Deterministic placement of memory stars.
//!
//! Stars sit on three interleaved bands around the centre:
//! `angle = 2π·i/N`, `radius = base + (i mod 3)·step`,
//! `height = sin(i·k)·amplitude`.

use crate::math::{Vec3, TAU};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub base_radius: f32,
    pub band_step: f32,
    pub height_frequency: f32,
    pub height_amplitude: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 16.0,
            band_step: 5.0,
            height_frequency: 1.5,
            height_amplitude: 4.0,
        }
    }
}

pub fn orbit_angle(index: usize, count: usize) -> f32 {
    index as f32 / count.max(1) as f32 * TAU
}

pub fn orbit_radius(index: usize, cfg: &LayoutConfig) -> f32 {
    cfg.base_radius + (index % 3) as f32 * cfg.band_step
}

pub fn orbit_position(index: usize, count: usize, cfg: &LayoutConfig) -> Vec3 {
    let angle = orbit_angle(index, count);
    let radius = orbit_radius(index, cfg);
    let height = (index as f32 * cfg.height_frequency).sin() * cfg.height_amplitude;
    let (s, c) = angle.sin_cos();
    [c * radius, height, s * radius]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math;

    #[test]
    fn bands_repeat_every_three() {
        let cfg = LayoutConfig::default();
        for i in 0..9 {
            let a = math::radial_xz(orbit_position(i, 12, &cfg));
            let b = math::radial_xz(orbit_position(i + 3, 12, &cfg));
            assert!((a - b).abs() < 1e-4);
            assert_eq!(orbit_radius(i + 1, &cfg) - orbit_radius(i, &cfg), if i % 3 == 2 { -10.0 } else { 5.0 });
        }
    }

    #[test]
    fn angle_spacing_is_even() {
        for n in [5usize, 12, 31] {
            for i in 0..n - 1 {
                let gap = orbit_angle(i + 1, n) - orbit_angle(i, n);
                assert!((gap - TAU / n as f32).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let cfg = LayoutConfig::default();
        assert_eq!(orbit_position(4, 12, &cfg), orbit_position(4, 12, &cfg));
        let p = orbit_position(0, 12, &cfg);
        assert!((p[0] - 16.0).abs() < 1e-5);
        assert_eq!(p[1], 0.0);
    }
}
