//! Ring-shaped particle fields: the orbit path around the centre and the
//! banded particle ring of the central planet.

use crate::field::{self, Attributes, Distribution, Layer, Palette, PointCloud, PointField};
use crate::render::animator::Animated;
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::PointStyle;

#[derive(Debug, Clone)]
pub struct OrbitPathConfig {
    pub count: usize,
    pub radius: f32,
    pub spin: f32,
}

impl Default for OrbitPathConfig {
    fn default() -> Self {
        Self {
            count: 500,
            radius: 10.0,
            spin: 0.005,
        }
    }
}

/// Dotted circle tracing the small planet's orbit.
pub struct OrbitPath {
    layers: [Layer; 1],
    spin: f32,
}

impl OrbitPath {
    pub fn new(cfg: &OrbitPathConfig) -> Self {
        let shape = Distribution::Ring {
            radius: cfg.radius,
            jitter: 0.3,
            thickness: 0.15,
        };
        let attrs = Attributes {
            palette: Palette::Scatter {
                base: [0.3, 0.4, 0.9],
                span: [0.2, 0.2, 0.1],
            },
            size: (0.03, 0.09),
            ..Attributes::default()
        };
        let cloud = field::generate(&mut rand::thread_rng(), cfg.count, &shape, &attrs);
        let style = PointStyle {
            size: 0.08,
            opacity: 0.4,
            tint: None,
        };
        Self {
            layers: [Layer::new("orbit path", cloud, style)],
            spin: cfg.spin,
        }
    }
}

impl Animated for OrbitPath {
    fn update(&mut self, frame: &FrameContext, _view: &Orientation) {
        self.layers[0].cloud.transform.rotation[1] = frame.elapsed * self.spin;
    }
}

impl PointField for OrbitPath {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

// ── Planet ring ──

#[derive(Debug, Clone)]
pub struct PlanetRingConfig {
    pub count: usize,
    pub inner: f32,
    pub outer: f32,
    /// Fixed tilt about X (radians).
    pub tilt: f32,
    /// Spin about the ring's own Z (rad/s).
    pub spin: f32,
}

impl Default for PlanetRingConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            inner: 3.8,
            outer: 5.8,
            tilt: 1.2,
            spin: 0.02,
        }
    }
}

/// Build the particle band. The owning body drives it with
/// [`spin_planet_ring`].
pub fn planet_ring(cfg: &PlanetRingConfig) -> Layer {
    let shape = Distribution::TorusBand {
        inner: cfg.inner,
        outer: cfg.outer,
        thickness: 0.15,
    };
    let attrs = Attributes {
        palette: Palette::Gradient {
            base: [0.9, 0.6, 0.7],
            span: [0.1, 0.3, 0.2],
        },
        size: (0.02, 0.07),
        ..Attributes::default()
    };
    let mut cloud = field::generate(&mut rand::thread_rng(), cfg.count, &shape, &attrs);
    cloud.transform.rotation[0] = cfg.tilt;
    let style = PointStyle {
        size: 0.06,
        opacity: 0.7,
        tint: None,
    };
    Layer::new("planet ring", cloud, style)
}

pub fn spin_planet_ring(cloud: &mut PointCloud, cfg: &PlanetRingConfig, t: f32) {
    cloud.transform.rotation = [cfg.tilt, 0.0, t * cfg.spin];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_path_is_on_its_circle() {
        let mut path = OrbitPath::new(&OrbitPathConfig::default());
        let cloud = &path.layers()[0].cloud;
        assert_eq!(cloud.len(), 500);
        assert!(cloud.within_envelope());
        path.update(&FrameContext::at(200.0), &Orientation::default());
        assert!((path.layers()[0].cloud.transform.rotation[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn planet_ring_keeps_tilt_while_spinning() {
        let cfg = PlanetRingConfig::default();
        let mut ring = planet_ring(&cfg);
        assert_eq!(ring.cloud.len(), 3000);
        assert!(ring.cloud.within_envelope());
        spin_planet_ring(&mut ring.cloud, &cfg, 50.0);
        let rot = ring.cloud.transform.rotation;
        assert_eq!(rot[0], 1.2);
        assert!((rot[2] - 1.0).abs() < 1e-5);
    }
}
