//! Procedural point clouds.
//!
//! A cloud is generated exactly once from a `Distribution` and a set of
//! per-point `Attributes`, then animated for the rest of its life by its
//! owner:
//! - base points (`points()`) never change after generation
//! - live positions and opacities are rewritten in place every frame
//! - slow whole-cloud rotation lives in `transform`, not in the point data
//!
//! Point index is identity: index `i` of every buffer describes the same
//! point for the lifetime of the cloud.

pub mod hearts;
pub mod nebula;
pub mod ring;
pub mod shape;
pub mod starfield;

use rand::Rng;
use rayon::prelude::*;

use crate::math::{self, Transform, Vec3, TAU};
use crate::render::PointStyle;

pub use shape::{Distribution, Envelope};

/// Layers at least this large are generated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub color: Vec3,
    pub size: f32,
    pub brightness: f32,
    /// Twinkle / drift phase (radians).
    pub phase: f32,
    /// Twinkle / drift angular speed.
    pub speed: f32,
}

impl Point {
    /// `brightness · (0.65 + 0.35·sin(t·speed + phase))`
    #[inline]
    pub fn twinkle(&self, t: f32) -> f32 {
        self.brightness * 0.35f32.mul_add((t * self.speed + self.phase).sin(), 0.65)
    }
}

// ── Attributes ──

/// How point colours are drawn.
#[derive(Debug, Clone, Copy)]
pub enum Palette {
    Solid(Vec3),
    /// `base + span · u` with one `u` shared by all channels.
    Gradient { base: Vec3, span: Vec3 },
    /// `base + span · u` with an independent `u` per channel.
    Scatter { base: Vec3, span: Vec3 },
    /// Table lookup keyed by a uniform sample.
    Lookup(fn(f32) -> Vec3),
}

/// Per-point attribute ranges, each sampled uniformly as `(min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct Attributes {
    pub palette: Palette,
    pub size: (f32, f32),
    pub brightness: (f32, f32),
    pub speed: (f32, f32),
    /// When set, size and brightness share one sample `u^exponent`, so a few
    /// points are large and bright and most are faint.
    pub magnitude_exponent: Option<f32>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            palette: Palette::Solid([1.0, 1.0, 1.0]),
            size: (1.0, 1.0),
            brightness: (1.0, 1.0),
            speed: (0.0, 0.0),
            magnitude_exponent: None,
        }
    }
}

#[inline]
fn lerp(range: (f32, f32), u: f32) -> f32 {
    (range.1 - range.0).mul_add(u, range.0)
}

fn sample_color<R: Rng + ?Sized>(rng: &mut R, palette: &Palette) -> Vec3 {
    match *palette {
        Palette::Solid(c) => c,
        Palette::Gradient { base, span } => {
            let u = rng.gen::<f32>();
            math::add(base, math::scale(span, u))
        }
        Palette::Scatter { base, span } => [
            base[0] + span[0] * rng.gen::<f32>(),
            base[1] + span[1] * rng.gen::<f32>(),
            base[2] + span[2] * rng.gen::<f32>(),
        ],
        Palette::Lookup(table) => table(rng.gen()),
    }
}

fn sample_point<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    count: usize,
    distribution: &Distribution,
    attributes: &Attributes,
) -> Point {
    let position = distribution.sample(rng, index, count);
    let color = sample_color(rng, &attributes.palette);
    let (size, brightness) = match attributes.magnitude_exponent {
        Some(exp) => {
            let mag = rng.gen::<f32>().powf(exp);
            (lerp(attributes.size, mag), lerp(attributes.brightness, mag))
        }
        None => (
            lerp(attributes.size, rng.gen()),
            lerp(attributes.brightness, rng.gen()),
        ),
    };
    Point {
        position,
        color,
        size,
        brightness,
        speed: lerp(attributes.speed, rng.gen()),
        phase: rng.gen::<f32>() * TAU,
    }
}

/// Generate `n` points. Called once per object lifetime.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    distribution: &Distribution,
    attributes: &Attributes,
) -> PointCloud {
    let points = (0..n)
        .map(|i| sample_point(rng, i, n, distribution, attributes))
        .collect();
    PointCloud::new(points, distribution.envelope())
}

/// Same as `generate`, spread over the rayon pool with one RNG per worker.
pub fn generate_par(n: usize, distribution: &Distribution, attributes: &Attributes) -> PointCloud {
    let points = (0..n)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, i| {
            sample_point(rng, i, n, distribution, attributes)
        })
        .collect();
    PointCloud::new(points, distribution.envelope())
}

/// Parallel for large layers, sequential otherwise.
pub fn generate_auto(n: usize, distribution: &Distribution, attributes: &Attributes) -> PointCloud {
    if n >= PARALLEL_THRESHOLD {
        generate_par(n, distribution, attributes)
    } else {
        generate(&mut rand::thread_rng(), n, distribution, attributes)
    }
}

// ── Point cloud ──

#[derive(Debug, Clone)]
pub struct PointCloud {
    points: Vec<Point>,
    live: Vec<Vec3>,
    opacity: Vec<f32>,
    envelope: Envelope,
    /// Whole-cloud transform (rotation / tilt) relative to the owner.
    pub transform: Transform,
}

impl PointCloud {
    pub fn new(points: Vec<Point>, envelope: Envelope) -> Self {
        let live = points.iter().map(|p| p.position).collect();
        let opacity = points.iter().map(|p| p.brightness).collect();
        Self {
            points,
            live,
            opacity,
            envelope,
            transform: Transform::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn live_positions(&self) -> &[Vec3] {
        &self.live
    }

    pub fn opacities(&self) -> &[f32] {
        &self.opacity
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Widen the envelope for owners whose displacement reaches past the
    /// sampled shape.
    pub fn widen_envelope(&mut self, margin: f32) {
        self.envelope = self.envelope.grow(margin);
    }

    /// Rewrite every live position as `base + offset(i, point)`.
    pub fn displace<F>(&mut self, offset: F)
    where
        F: Fn(usize, &Point) -> Vec3,
    {
        for (i, (live, point)) in self.live.iter_mut().zip(&self.points).enumerate() {
            *live = math::add(point.position, offset(i, point));
        }
    }

    /// Rewrite every live position from scratch.
    pub fn reposition<F>(&mut self, place: F)
    where
        F: Fn(usize, &Point) -> Vec3,
    {
        for (i, (live, point)) in self.live.iter_mut().zip(&self.points).enumerate() {
            *live = place(i, point);
        }
    }

    /// Rewrite the opacity buffer with each point's twinkle at `t`.
    pub fn twinkle(&mut self, t: f32) {
        for (o, p) in self.opacity.iter_mut().zip(&self.points) {
            *o = p.twinkle(t);
        }
    }

    /// True when every live position lies inside the envelope.
    pub fn within_envelope(&self) -> bool {
        self.live.iter().all(|p| self.envelope.contains(*p))
    }
}

/// A cloud plus how the painter should draw it.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: &'static str,
    pub cloud: PointCloud,
    pub style: PointStyle,
}

impl Layer {
    pub fn new(name: &'static str, cloud: PointCloud, style: PointStyle) -> Self {
        log::debug!("field layer {}: {} points", name, cloud.len());
        Self { name, cloud, style }
    }
}

/// Anything that exposes point layers to the painter.
pub trait PointField {
    fn layers(&self) -> &[Layer];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shell() -> Distribution {
        Distribution::SphericalShell { inner: 30.0, outer: 210.0 }
    }

    #[test]
    fn generate_yields_exactly_n() {
        let mut rng = StdRng::seed_from_u64(11);
        let cloud = generate(&mut rng, 2000, &shell(), &Attributes::default());
        assert_eq!(cloud.len(), 2000);
        assert_eq!(cloud.live_positions().len(), 2000);
        assert_eq!(cloud.opacities().len(), 2000);
        assert!(cloud.within_envelope());
    }

    #[test]
    fn parallel_generation_keeps_guarantees() {
        let cloud = generate_par(PARALLEL_THRESHOLD + 17, &shell(), &Attributes::default());
        assert_eq!(cloud.len(), PARALLEL_THRESHOLD + 17);
        assert!(cloud.within_envelope());
    }

    #[test]
    fn attributes_respect_ranges() {
        let attrs = Attributes {
            size: (0.5, 2.3),
            brightness: (0.15, 0.65),
            speed: (1.0, 4.5),
            magnitude_exponent: Some(2.5),
            ..Attributes::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let cloud = generate(&mut rng, 500, &shell(), &attrs);
        for p in cloud.points() {
            assert!((0.5..=2.3).contains(&p.size));
            assert!((0.15..=0.65).contains(&p.brightness));
            assert!((1.0..=4.5).contains(&p.speed));
            assert!((0.0..TAU).contains(&p.phase));
        }
    }

    #[test]
    fn twinkle_stays_within_brightness_band() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut cloud = generate(&mut rng, 100, &shell(), &Attributes::default());
        for step in 0..50 {
            cloud.twinkle(step as f32 * 0.3);
            for (o, p) in cloud.opacities().iter().zip(cloud.points()) {
                assert!(*o >= p.brightness * 0.3 - 1e-6);
                assert!(*o <= p.brightness + 1e-6);
            }
        }
    }

    #[test]
    fn displace_is_relative_to_base() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut cloud = generate(&mut rng, 10, &shell(), &Attributes::default());
        cloud.displace(|_, _| [1.0, 0.0, 0.0]);
        cloud.displace(|_, _| [1.0, 0.0, 0.0]);
        for (live, p) in cloud.live_positions().iter().zip(cloud.points()) {
            assert!((live[0] - p.position[0] - 1.0).abs() < 1e-4);
        }
    }
}
