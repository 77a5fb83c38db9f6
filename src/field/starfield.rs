//! Four-layer star field: dust, background, mid-range and bright stars.
//!
//! Every layer is a spherical shell around the origin with its own size,
//! brightness and twinkle ranges. Opacities twinkle per point; the layers
//! rotate about Y at slightly different rates so the sky never looks frozen.

use rand::Rng;

use crate::field::{self, Attributes, Distribution, Layer, Palette, PointField};
use crate::math::Vec3;
use crate::render::animator::Animated;
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::PointStyle;

/// Natural star colours keyed by a uniform sample (O, B, A, F, G, K, M).
pub fn spectral_color(u: f32) -> Vec3 {
    match u {
        u if u < 0.01 => [0.65, 0.75, 1.0],
        u if u < 0.05 => [0.75, 0.85, 1.0],
        u if u < 0.12 => [0.92, 0.94, 1.0],
        u if u < 0.25 => [0.98, 0.97, 0.93],
        u if u < 0.42 => [1.0, 0.96, 0.84],
        u if u < 0.65 => [1.0, 0.88, 0.70],
        _ => [1.0, 0.80, 0.58],
    }
}

/// Coarser palette for the bright layer.
pub fn bright_color(u: f32) -> Vec3 {
    match u {
        u if u < 0.2 => [0.78, 0.87, 1.0],
        u if u < 0.45 => [0.95, 0.96, 1.0],
        u if u < 0.65 => [1.0, 0.96, 0.88],
        u if u < 0.80 => [1.0, 0.90, 0.72],
        _ => [1.0, 0.78, 0.55],
    }
}

/// One shell layer's parameters.
#[derive(Debug, Clone, Copy)]
pub struct StarLayerConfig {
    pub name: &'static str,
    pub count: usize,
    pub inner: f32,
    pub outer: f32,
    /// Rotation about Y (rad/s).
    pub rotation: f32,
    pub attributes: Attributes,
}

#[derive(Debug, Clone)]
pub struct StarFieldConfig {
    pub layers: Vec<StarLayerConfig>,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                StarLayerConfig {
                    name: "dust",
                    count: 14_000,
                    inner: 80.0,
                    outer: 430.0,
                    rotation: 0.0003,
                    attributes: Attributes {
                        palette: Palette::Gradient {
                            base: [0.85, 0.83, 0.80],
                            span: [0.15, 0.12, 0.20],
                        },
                        size: (0.3, 0.8),
                        brightness: (0.05, 0.20),
                        speed: (2.0, 7.0),
                        magnitude_exponent: None,
                    },
                },
                StarLayerConfig {
                    name: "background",
                    count: 6_000,
                    inner: 50.0,
                    outer: 300.0,
                    rotation: 0.0007,
                    attributes: Attributes {
                        palette: Palette::Lookup(spectral_color),
                        size: (0.5, 2.3),
                        brightness: (0.15, 0.65),
                        speed: (1.0, 4.5),
                        magnitude_exponent: Some(2.5),
                    },
                },
                StarLayerConfig {
                    name: "mid",
                    count: 2_000,
                    inner: 30.0,
                    outer: 210.0,
                    rotation: 0.001,
                    attributes: Attributes {
                        palette: Palette::Lookup(spectral_color),
                        size: (1.2, 2.7),
                        brightness: (0.35, 0.80),
                        speed: (0.6, 3.1),
                        magnitude_exponent: None,
                    },
                },
                StarLayerConfig {
                    name: "bright",
                    count: 150,
                    inner: 20.0,
                    outer: 220.0,
                    rotation: 0.0012,
                    attributes: Attributes {
                        palette: Palette::Lookup(bright_color),
                        size: (2.5, 5.5),
                        brightness: (0.65, 1.0),
                        speed: (0.3, 1.3),
                        magnitude_exponent: None,
                    },
                },
            ],
        }
    }
}

/// Index of the bright layer in the default config.
pub const BRIGHT_LAYER: usize = 3;

pub struct StarField {
    layers: Vec<Layer>,
    rotations: Vec<f32>,
    /// Diffraction spike angle per bright star, `[0, π/2)`.
    spikes: Vec<f32>,
}

impl StarField {
    pub fn new(cfg: &StarFieldConfig) -> Self {
        let mut layers = Vec::with_capacity(cfg.layers.len());
        let mut rotations = Vec::with_capacity(cfg.layers.len());
        for layer in &cfg.layers {
            let shape = Distribution::SphericalShell {
                inner: layer.inner,
                outer: layer.outer,
            };
            let cloud = field::generate_auto(layer.count, &shape, &layer.attributes);
            layers.push(Layer::new(layer.name, cloud, PointStyle::default()));
            rotations.push(layer.rotation);
        }
        let bright = cfg.layers.get(BRIGHT_LAYER).map_or(0, |l| l.count);
        let mut rng = rand::thread_rng();
        let spikes = (0..bright)
            .map(|_| rng.gen::<f32>() * std::f32::consts::FRAC_PI_2)
            .collect();
        Self {
            layers,
            rotations,
            spikes,
        }
    }

    pub fn spikes(&self) -> &[f32] {
        &self.spikes
    }
}

impl Animated for StarField {
    fn update(&mut self, frame: &FrameContext, _view: &Orientation) {
        let t = frame.elapsed;
        for (layer, rate) in self.layers.iter_mut().zip(&self.rotations) {
            layer.cloud.transform.rotation[1] = t * rate;
            layer.cloud.twinkle(t);
        }
    }
}

impl PointField for StarField {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> StarFieldConfig {
        let mut cfg = StarFieldConfig::default();
        for layer in &mut cfg.layers {
            layer.count = layer.count.min(300);
        }
        cfg
    }

    #[test]
    fn spectral_thresholds() {
        assert_eq!(spectral_color(0.0), [0.65, 0.75, 1.0]);
        assert_eq!(spectral_color(0.3), [1.0, 0.96, 0.84]);
        assert_eq!(spectral_color(0.99), [1.0, 0.80, 0.58]);
    }

    #[test]
    fn layer_counts_and_envelopes() {
        let cfg = small();
        let mut stars = StarField::new(&cfg);
        assert_eq!(stars.layers().len(), 4);
        for (layer, c) in stars.layers().iter().zip(&cfg.layers) {
            assert_eq!(layer.cloud.len(), c.count);
            assert!(layer.cloud.within_envelope());
        }
        assert_eq!(stars.spikes().len(), 150);
        stars.update(&FrameContext::at(120.0), &Orientation::default());
        for layer in stars.layers() {
            assert!(layer.cloud.within_envelope());
        }
    }

    #[test]
    fn default_counts_match_layers() {
        let cfg = StarFieldConfig::default();
        let counts: Vec<usize> = cfg.layers.iter().map(|l| l.count).collect();
        assert_eq!(counts, vec![14_000, 6_000, 2_000, 150]);
    }

    #[test]
    fn same_time_same_state() {
        let mut stars = StarField::new(&small());
        stars.update(&FrameContext::at(3.0), &Orientation::default());
        let a: Vec<f32> = stars.layers()[1].cloud.opacities().to_vec();
        let rot = stars.layers()[1].cloud.transform;
        stars.update(&FrameContext::at(3.0), &Orientation::default());
        assert_eq!(a, stars.layers()[1].cloud.opacities());
        assert_eq!(rot, stars.layers()[1].cloud.transform);
    }
}
