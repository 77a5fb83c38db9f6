//! Sampling shapes for procedural point clouds and their bounding envelopes.
//!
//! Each `Distribution` knows how to draw one position and which `Envelope`
//! contains every position it can produce. Owners that displace points at
//! runtime either sample with a margin (`Volume`) or widen the envelope by
//! their displacement amplitude.

use rand::Rng;

use crate::math::{self, Vec3, TAU};

/// Radial banding applied by `TorusBand` (`sin(8r)` scaled by this).
const BAND_NOISE: f32 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Uniform direction, radius uniform in `[inner, outer]`.
    SphericalShell { inner: f32, outer: f32 },
    /// Warped annulus in the XZ plane. With `arm_amplitude == 0` this is a
    /// plain jittered annulus.
    SpiralArm {
        inner: f32,
        outer: f32,
        height: f32,
        arm_amplitude: f32,
        angle_offset: f32,
        jitter: f32,
        vertical_jitter: f32,
    },
    /// Thin band in the XZ plane with radial banding.
    TorusBand { inner: f32, outer: f32, thickness: f32 },
    /// Points evenly spaced around a circle by index.
    Ring { radius: f32, jitter: f32, thickness: f32 },
    /// Annulus in the XY plane with depth along Z.
    Disc { inner: f32, outer: f32, depth: f32 },
    /// Axis-aligned box, sampled inside `half_extents - margin`.
    Volume { half_extents: Vec3, margin: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Y,
    Z,
}

/// Region guaranteed to contain every point of a cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    Shell { inner: f32, outer: f32 },
    Cylinder {
        axis: Axis,
        min_radius: f32,
        max_radius: f32,
        half_length: f32,
    },
    Box { half_extents: Vec3 },
}

#[inline]
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>()
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, width: f32) -> f32 {
    (unit(rng) - 0.5) * width
}

impl Distribution {
    /// Draw the position of point `index` out of `count`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, index: usize, count: usize) -> Vec3 {
        match *self {
            Distribution::SphericalShell { inner, outer } => {
                let r = inner + unit(rng) * (outer - inner);
                let theta = unit(rng) * TAU;
                let phi = (2.0 * unit(rng) - 1.0).clamp(-1.0, 1.0).acos();
                let (sp, cp) = phi.sin_cos();
                let (st, ct) = theta.sin_cos();
                [r * sp * ct, r * sp * st, r * cp]
            }
            Distribution::SpiralArm {
                inner,
                outer,
                height,
                arm_amplitude,
                angle_offset,
                jitter,
                vertical_jitter,
            } => {
                let angle = unit(rng) * TAU + angle_offset;
                let radius = inner + unit(rng) * (outer - inner);
                let h = centered(rng, height);
                let arm = (angle * 2.0 + radius * 0.1).sin() * arm_amplitude;
                let (s, c) = angle.sin_cos();
                [
                    c * radius + centered(rng, jitter) + arm,
                    h + centered(rng, vertical_jitter),
                    s * radius + centered(rng, jitter),
                ]
            }
            Distribution::TorusBand {
                inner,
                outer,
                thickness,
            } => {
                let angle = unit(rng) * TAU;
                let r = inner + unit(rng) * (outer - inner);
                let r = r + (r * 8.0).sin() * BAND_NOISE;
                let (s, c) = angle.sin_cos();
                [c * r, centered(rng, thickness), s * r]
            }
            Distribution::Ring {
                radius,
                jitter,
                thickness,
            } => {
                let angle = index as f32 / count.max(1) as f32 * TAU;
                let (s, c) = angle.sin_cos();
                [
                    c * radius + centered(rng, jitter),
                    centered(rng, thickness),
                    s * radius + centered(rng, jitter),
                ]
            }
            Distribution::Disc { inner, outer, depth } => {
                let angle = unit(rng) * TAU;
                let r = inner + unit(rng) * (outer - inner);
                let (s, c) = angle.sin_cos();
                [c * r, s * r, centered(rng, depth)]
            }
            Distribution::Volume {
                half_extents,
                margin,
            } => {
                let mut p = [0.0; 3];
                for (axis, out) in p.iter_mut().enumerate() {
                    let reach = (half_extents[axis] - margin).max(0.0);
                    *out = (unit(rng) * 2.0 - 1.0) * reach;
                }
                p
            }
        }
    }

    /// Region containing every position `sample` can return.
    pub fn envelope(&self) -> Envelope {
        match *self {
            Distribution::SphericalShell { inner, outer } => Envelope::Shell { inner, outer },
            Distribution::SpiralArm {
                inner,
                outer,
                height,
                arm_amplitude,
                jitter,
                vertical_jitter,
                ..
            } => {
                let slack = jitter * 0.5 * std::f32::consts::SQRT_2 + arm_amplitude.abs();
                Envelope::Cylinder {
                    axis: Axis::Y,
                    min_radius: (inner - slack).max(0.0),
                    max_radius: outer + slack,
                    half_length: (height + vertical_jitter) * 0.5,
                }
            }
            Distribution::TorusBand {
                inner,
                outer,
                thickness,
            } => Envelope::Cylinder {
                axis: Axis::Y,
                min_radius: (inner - BAND_NOISE).max(0.0),
                max_radius: outer + BAND_NOISE,
                half_length: thickness * 0.5,
            },
            Distribution::Ring {
                radius,
                jitter,
                thickness,
            } => {
                let slack = jitter * 0.5 * std::f32::consts::SQRT_2;
                Envelope::Cylinder {
                    axis: Axis::Y,
                    min_radius: (radius - slack).max(0.0),
                    max_radius: radius + slack,
                    half_length: thickness * 0.5,
                }
            }
            Distribution::Disc { inner, outer, depth } => Envelope::Cylinder {
                axis: Axis::Z,
                min_radius: inner,
                max_radius: outer,
                half_length: depth * 0.5,
            },
            Distribution::Volume { half_extents, .. } => Envelope::Box { half_extents },
        }
    }
}

impl Envelope {
    pub fn contains(&self, p: Vec3) -> bool {
        match *self {
            Envelope::Shell { inner, outer } => {
                let tol = tolerance(outer);
                let r = math::length(p);
                r >= inner - tol && r <= outer + tol
            }
            Envelope::Cylinder {
                axis,
                min_radius,
                max_radius,
                half_length,
            } => {
                let tol = tolerance(max_radius);
                let (r, along) = match axis {
                    Axis::Y => (math::radial_xz(p), p[1]),
                    Axis::Z => (math::radial_xy(p), p[2]),
                };
                r >= min_radius - tol && r <= max_radius + tol && along.abs() <= half_length + tol
            }
            Envelope::Box { half_extents } => (0..3).all(|i| {
                p[i].abs() <= half_extents[i] + tolerance(half_extents[i])
            }),
        }
    }

    /// The same envelope widened by `margin` in every direction.
    pub fn grow(&self, margin: f32) -> Envelope {
        match *self {
            Envelope::Shell { inner, outer } => Envelope::Shell {
                inner: (inner - margin).max(0.0),
                outer: outer + margin,
            },
            Envelope::Cylinder {
                axis,
                min_radius,
                max_radius,
                half_length,
            } => Envelope::Cylinder {
                axis,
                min_radius: (min_radius - margin).max(0.0),
                max_radius: max_radius + margin,
                half_length: half_length + margin,
            },
            Envelope::Box { half_extents } => Envelope::Box {
                half_extents: [
                    half_extents[0] + margin,
                    half_extents[1] + margin,
                    half_extents[2] + margin,
                ],
            },
        }
    }
}

#[inline]
fn tolerance(extent: f32) -> f32 {
    1e-4 * extent.abs().max(1.0) + 1e-4
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_inside(d: Distribution, n: usize) {
        let mut rng = StdRng::seed_from_u64(7);
        let env = d.envelope();
        for i in 0..n {
            let p = d.sample(&mut rng, i, n);
            assert!(env.contains(p), "{:?} escaped {:?}", p, env);
        }
    }

    #[test]
    fn shapes_stay_in_their_envelopes() {
        all_inside(Distribution::SphericalShell { inner: 80.0, outer: 430.0 }, 2000);
        all_inside(
            Distribution::SpiralArm {
                inner: 15.0,
                outer: 60.0,
                height: 12.0,
                arm_amplitude: 8.0,
                angle_offset: 0.0,
                jitter: 8.0,
                vertical_jitter: 4.0,
            },
            2000,
        );
        all_inside(Distribution::TorusBand { inner: 3.8, outer: 5.8, thickness: 0.15 }, 2000);
        all_inside(Distribution::Ring { radius: 10.0, jitter: 0.3, thickness: 0.15 }, 500);
        all_inside(Distribution::Disc { inner: 0.5, outer: 3.3, depth: 1.5 }, 600);
        all_inside(
            Distribution::Volume { half_extents: [35.0, 25.0, 35.0], margin: 1.0 },
            500,
        );
    }

    #[test]
    fn shell_rejects_points_outside_radius() {
        let env = Envelope::Shell { inner: 20.0, outer: 30.0 };
        assert!(env.contains([25.0, 0.0, 0.0]));
        assert!(!env.contains([5.0, 0.0, 0.0]));
        assert!(!env.contains([0.0, 0.0, 40.0]));
    }

    #[test]
    fn ring_is_spaced_by_index() {
        let d = Distribution::Ring { radius: 10.0, jitter: 0.0, thickness: 0.0 };
        let mut rng = StdRng::seed_from_u64(1);
        let p = d.sample(&mut rng, 1, 4);
        assert!(p[0].abs() < 1e-4);
        assert!((p[2] - 10.0).abs() < 1e-4);
    }

    #[test]
    fn volume_margin_leaves_room() {
        let d = Distribution::Volume { half_extents: [2.0, 2.0, 2.0], margin: 1.0 };
        let mut rng = StdRng::seed_from_u64(3);
        for i in 0..200 {
            let p = d.sample(&mut rng, i, 200);
            assert!(p.iter().all(|c| c.abs() <= 1.0 + 1e-6));
        }
    }

    #[test]
    fn grow_widens_cylinder() {
        let env = Envelope::Cylinder { axis: Axis::Z, min_radius: 1.0, max_radius: 2.0, half_length: 0.5 };
        assert!(!env.contains([2.1, 0.0, 0.0]));
        assert!(env.grow(0.2).contains([2.1, 0.0, 0.0]));
    }
}
