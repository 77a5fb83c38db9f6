//! Three translucent nebula layers around the scene centre.

use crate::field::{self, Attributes, Distribution, Layer, Palette, PointField};
use crate::render::animator::Animated;
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::PointStyle;

#[derive(Debug, Clone, Copy)]
pub struct NebulaLayerConfig {
    pub name: &'static str,
    pub count: usize,
    pub shape: Distribution,
    pub attributes: Attributes,
    pub style: PointStyle,
    /// Rotation about Y (rad/s).
    pub spin: f32,
    /// Amplitude of the slow X-axis wobble (radians), 0 for none.
    pub wobble: f32,
}

#[derive(Debug, Clone)]
pub struct NebulaConfig {
    pub layers: Vec<NebulaLayerConfig>,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                NebulaLayerConfig {
                    name: "violet arm",
                    count: 3000,
                    shape: Distribution::SpiralArm {
                        inner: 15.0,
                        outer: 60.0,
                        height: 12.0,
                        arm_amplitude: 8.0,
                        angle_offset: 0.0,
                        jitter: 8.0,
                        vertical_jitter: 4.0,
                    },
                    attributes: Attributes {
                        palette: Palette::Gradient {
                            base: [0.35, 0.05, 0.6],
                            span: [0.3, 0.15, 0.35],
                        },
                        size: (0.5, 2.5),
                        ..Attributes::default()
                    },
                    style: PointStyle {
                        size: 1.2,
                        opacity: 0.18,
                        tint: None,
                    },
                    spin: 0.008,
                    wobble: 0.0,
                },
                NebulaLayerConfig {
                    name: "blue haze",
                    count: 2000,
                    shape: Distribution::SpiralArm {
                        inner: 20.0,
                        outer: 70.0,
                        height: 6.0,
                        arm_amplitude: 0.0,
                        angle_offset: 1.5,
                        jitter: 12.0,
                        vertical_jitter: 3.0,
                    },
                    attributes: Attributes {
                        palette: Palette::Gradient {
                            base: [0.05, 0.15, 0.5],
                            span: [0.15, 0.3, 0.4],
                        },
                        size: (0.3, 1.8),
                        ..Attributes::default()
                    },
                    style: PointStyle {
                        size: 1.0,
                        opacity: 0.15,
                        tint: None,
                    },
                    spin: -0.006,
                    wobble: 0.02,
                },
                NebulaLayerConfig {
                    name: "rose dust",
                    count: 1500,
                    shape: Distribution::SpiralArm {
                        inner: 10.0,
                        outer: 45.0,
                        height: 20.0,
                        arm_amplitude: 0.0,
                        angle_offset: 0.0,
                        jitter: 15.0,
                        vertical_jitter: 0.0,
                    },
                    attributes: Attributes {
                        palette: Palette::Gradient {
                            base: [0.7, 0.3, 0.4],
                            span: [0.3, 0.3, 0.2],
                        },
                        size: (0.2, 1.2),
                        ..Attributes::default()
                    },
                    style: PointStyle {
                        size: 0.8,
                        opacity: 0.12,
                        tint: None,
                    },
                    spin: 0.004,
                    wobble: 0.0,
                },
            ],
        }
    }
}

pub struct Nebula {
    layers: Vec<Layer>,
    motion: Vec<(f32, f32)>,
}

impl Nebula {
    pub fn new(cfg: &NebulaConfig) -> Self {
        let mut rng = rand::thread_rng();
        let layers = cfg
            .layers
            .iter()
            .map(|l| {
                let cloud = field::generate(&mut rng, l.count, &l.shape, &l.attributes);
                Layer::new(l.name, cloud, l.style)
            })
            .collect();
        let motion = cfg.layers.iter().map(|l| (l.spin, l.wobble)).collect();
        Self { layers, motion }
    }
}

impl Animated for Nebula {
    fn update(&mut self, frame: &FrameContext, _view: &Orientation) {
        let t = frame.elapsed;
        for (layer, (spin, wobble)) in self.layers.iter_mut().zip(&self.motion) {
            let rotation = &mut layer.cloud.transform.rotation;
            rotation[1] = t * spin;
            rotation[0] = (t * 0.005).sin() * wobble;
        }
    }
}

impl PointField for Nebula {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }
}
