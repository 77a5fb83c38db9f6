//! Drifting rose and gold motes filling the near space.
//!
//! Each mote bobs around its base position with a bounded sinusoid keyed by
//! its own speed and phase. Base positions are sampled inside the box minus
//! the drift amplitude, so a mote never leaves its box.

use crate::field::{self, Attributes, Distribution, Layer, Palette, PointField};
use crate::math::Vec3;
use crate::render::animator::Animated;
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::material::hex_color;
use crate::render::PointStyle;

#[derive(Debug, Clone, Copy)]
pub struct DriftLayerConfig {
    pub name: &'static str,
    pub count: usize,
    /// Full box size.
    pub extent: Vec3,
    pub color: &'static str,
    pub speed: (f32, f32),
    /// Peak displacement `[x, y]`.
    pub drift: [f32; 2],
    pub spin: f32,
    pub style: PointStyle,
}

impl DriftLayerConfig {
    fn margin(&self) -> f32 {
        self.drift[0].max(self.drift[1])
    }
}

#[derive(Debug, Clone)]
pub struct HeartsConfig {
    pub layers: Vec<DriftLayerConfig>,
}

impl Default for HeartsConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                DriftLayerConfig {
                    name: "rose",
                    count: 150,
                    extent: [70.0, 50.0, 70.0],
                    color: "#ff69b4",
                    speed: (0.2, 0.7),
                    drift: [0.6, 1.0],
                    spin: 0.015,
                    style: PointStyle {
                        size: 0.2,
                        opacity: 0.35,
                        tint: None,
                    },
                },
                DriftLayerConfig {
                    name: "gold",
                    count: 80,
                    extent: [50.0, 30.0, 50.0],
                    color: "#ffd700",
                    speed: (0.1, 0.4),
                    drift: [0.0, 0.8],
                    spin: -0.01,
                    style: PointStyle {
                        size: 0.15,
                        opacity: 0.25,
                        tint: None,
                    },
                },
            ],
        }
    }
}

pub struct FloatingHearts {
    layers: Vec<Layer>,
    cfg: HeartsConfig,
}

impl FloatingHearts {
    pub fn new(cfg: &HeartsConfig) -> Self {
        let mut rng = rand::thread_rng();
        let layers = cfg
            .layers
            .iter()
            .map(|l| {
                let shape = Distribution::Volume {
                    half_extents: [l.extent[0] * 0.5, l.extent[1] * 0.5, l.extent[2] * 0.5],
                    margin: l.margin(),
                };
                let attrs = Attributes {
                    palette: Palette::Solid(hex_color(l.color)),
                    speed: l.speed,
                    ..Attributes::default()
                };
                Layer::new(l.name, field::generate(&mut rng, l.count, &shape, &attrs), l.style)
            })
            .collect();
        Self {
            layers,
            cfg: cfg.clone(),
        }
    }
}

impl Animated for FloatingHearts {
    fn update(&mut self, frame: &FrameContext, _view: &Orientation) {
        let t = frame.elapsed;
        for (layer, c) in self.layers.iter_mut().zip(&self.cfg.layers) {
            let [dx, dy] = c.drift;
            layer.cloud.displace(|_, p| {
                [
                    (t * p.speed * 0.5 + p.phase).cos() * dx,
                    (t * p.speed + p.phase).sin() * dy,
                    0.0,
                ]
            });
            layer.cloud.transform.rotation[1] = t * c.spin;
        }
    }
}

impl PointField for FloatingHearts {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }
}
