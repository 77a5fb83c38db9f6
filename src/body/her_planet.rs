//! The central planet: banded surface, cloud shell, rim glow, particle
//! ring and two thin hoops, gently bobbing at the origin.

use crate::body::{Hoop, Label};
use crate::field::ring::{self, PlanetRingConfig};
use crate::field::Layer;
use crate::math::{Transform, Vec3};
use crate::render::animator::{oscillate, Animated};
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::material::{hex_color, MaterialKind, Uniforms, U_COLOR, U_INTENSITY, U_TIME};

#[derive(Debug, Clone)]
pub struct HerPlanetConfig {
    pub name: String,
    pub radius: f32,
    pub cloud_radius: f32,
    pub atmosphere_radius: f32,
    pub atmosphere_color: &'static str,
    pub atmosphere_intensity: f32,
    pub label_height: f32,
    pub ring: PlanetRingConfig,
}

impl Default for HerPlanetConfig {
    fn default() -> Self {
        Self {
            name: "✨ Ghufran ✨".to_string(),
            radius: 2.5,
            cloud_radius: 2.58,
            atmosphere_radius: 2.8,
            atmosphere_color: "#ff69b4",
            atmosphere_intensity: 1.5,
            label_height: 4.2,
            ring: PlanetRingConfig::default(),
        }
    }
}

pub struct HerPlanet {
    cfg: HerPlanetConfig,
    group: Transform,
    surface: Transform,
    clouds: Transform,
    ring: Layer,
    hoops: [Hoop; 2],
    surface_uniforms: Uniforms,
    atmosphere: Uniforms,
    label: Label,
}

impl HerPlanet {
    pub fn new(cfg: HerPlanetConfig) -> Self {
        let ring = ring::planet_ring(&cfg.ring);
        let atmosphere = Uniforms::new(MaterialKind::AtmosphereRim)
            .with_color(U_COLOR, hex_color(cfg.atmosphere_color))
            .with_float(U_INTENSITY, cfg.atmosphere_intensity);
        let label = Label::new(
            cfg.name.clone(),
            [0.0, cfg.label_height, 0.0],
            hex_color("#ffd700"),
            0.7,
        );
        Self {
            group: Transform::default(),
            surface: Transform::default(),
            clouds: Transform::default(),
            ring,
            hoops: [
                Hoop {
                    radius: 4.5,
                    tube: 0.02,
                    rotation: [1.2, 0.0, 0.0],
                    color: hex_color("#ffb6c1"),
                    opacity: 0.3,
                },
                Hoop {
                    radius: 5.2,
                    tube: 0.015,
                    rotation: [1.25, 0.05, 0.0],
                    color: hex_color("#ffc0cb"),
                    opacity: 0.2,
                },
            ],
            surface_uniforms: Uniforms::new(MaterialKind::PlanetSurface).with_float(U_TIME, 0.0),
            atmosphere,
            label,
            cfg,
        }
    }

    pub fn config(&self) -> &HerPlanetConfig {
        &self.cfg
    }

    pub fn group(&self) -> &Transform {
        &self.group
    }

    pub fn surface(&self) -> &Transform {
        &self.surface
    }

    pub fn clouds(&self) -> &Transform {
        &self.clouds
    }

    pub fn ring(&self) -> &Layer {
        &self.ring
    }

    pub fn hoops(&self) -> &[Hoop] {
        &self.hoops
    }

    pub fn surface_uniforms(&self) -> &Uniforms {
        &self.surface_uniforms
    }

    pub fn atmosphere(&self) -> &Uniforms {
        &self.atmosphere
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn center(&self) -> Vec3 {
        self.group.position
    }
}

impl Animated for HerPlanet {
    fn update(&mut self, frame: &FrameContext, view: &Orientation) {
        let t = frame.elapsed;
        self.surface_uniforms.set_float(U_TIME, t);
        self.group.position[1] = oscillate(t, 0.3, 0.0, 0.0, 0.2);
        self.surface.rotation = [0.1, t * 0.08, 0.0];
        self.clouds.rotation = [0.15, t * 0.04, 0.0];
        ring::spin_planet_ring(&mut self.ring.cloud, &self.cfg.ring, t);
        self.label.billboard(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_is_bounded_and_spin_tracks_time() {
        let mut planet = HerPlanet::new(HerPlanetConfig::default());
        for i in 0..100 {
            planet.update(&FrameContext::at(i as f32 * 0.9), &Orientation::default());
            assert!(planet.group().position[1].abs() <= 0.2 + 1e-6);
        }
        planet.update(&FrameContext::at(10.0), &Orientation::default());
        assert!((planet.surface().rotation[1] - 0.8).abs() < 1e-5);
        assert_eq!(planet.surface().rotation[0], 0.1);
        assert!((planet.clouds().rotation[1] - 0.4).abs() < 1e-5);
        assert_eq!(planet.surface_uniforms().float(U_TIME), 10.0);
    }

    #[test]
    fn same_time_same_transforms() {
        let mut planet = HerPlanet::new(HerPlanetConfig::default());
        planet.update(&FrameContext::at(4.2), &Orientation::default());
        let a = (*planet.group(), *planet.surface(), planet.ring().cloud.transform);
        planet.update(&FrameContext::at(4.2), &Orientation::default());
        let b = (*planet.group(), *planet.surface(), planet.ring().cloud.transform);
        assert_eq!(a, b);
    }

    #[test]
    fn label_follows_camera() {
        let mut planet = HerPlanet::new(HerPlanetConfig::default());
        let view = Orientation {
            right: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            forward: [-1.0, 0.0, 0.0],
        };
        planet.update(&FrameContext::at(1.0), &view);
        assert_eq!(planet.label().orientation(), view);
        assert!((planet.atmosphere().float(U_INTENSITY) - 1.5).abs() < 1e-6);
    }
}
