//! The small planet orbiting the centre, with a fading trail.

use crate::body::Label;
use crate::math::{Transform, Vec3};
use crate::render::animator::Animated;
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::material::{hex_color, MaterialKind, Uniforms, U_COLOR, U_INTENSITY, U_TIME};

#[derive(Debug, Clone)]
pub struct MyPlanetConfig {
    pub name: String,
    pub radius: f32,
    pub orbit_radius: f32,
    /// Orbit angular speed (rad/s).
    pub orbit_speed: f32,
    /// Vertical swing of the orbit.
    pub orbit_lift: f32,
    pub spin: f32,
    pub tilt: f32,
    pub atmosphere_color: &'static str,
    pub atmosphere_intensity: f32,
    pub label_height: f32,
    pub trail_length: usize,
    /// Seconds between trail samples.
    pub trail_spacing: f32,
}

impl Default for MyPlanetConfig {
    fn default() -> Self {
        Self {
            name: "💙 Bilal 💙".to_string(),
            radius: 1.2,
            orbit_radius: 10.0,
            orbit_speed: 0.18,
            orbit_lift: 1.2,
            spin: 0.3,
            tilt: 0.2,
            atmosphere_color: "#4488ff",
            atmosphere_intensity: 1.2,
            label_height: 2.4,
            trail_length: 10,
            trail_spacing: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Vec3,
    /// Width factor in `(0, 1]`, quadratic falloff toward the tail.
    pub width: f32,
}

pub struct MyPlanet {
    cfg: MyPlanetConfig,
    group: Transform,
    surface: Transform,
    trail: Vec<TrailSample>,
    surface_uniforms: Uniforms,
    atmosphere: Uniforms,
    label: Label,
}

impl MyPlanet {
    pub fn new(cfg: MyPlanetConfig) -> Self {
        let atmosphere = Uniforms::new(MaterialKind::AtmosphereRim)
            .with_color(U_COLOR, hex_color(cfg.atmosphere_color))
            .with_float(U_INTENSITY, cfg.atmosphere_intensity);
        let label = Label::new(
            cfg.name.clone(),
            [0.0, cfg.label_height, 0.0],
            hex_color("#87ceeb"),
            0.45,
        );
        let mut planet = Self {
            group: Transform::default(),
            surface: Transform::default(),
            trail: Vec::with_capacity(cfg.trail_length),
            surface_uniforms: Uniforms::new(MaterialKind::PlanetSurface).with_float(U_TIME, 0.0),
            atmosphere,
            label,
            cfg,
        };
        planet.group.position = planet.orbit_position(0.0);
        planet
    }

    /// Where the planet is at time `t`.
    pub fn orbit_position(&self, t: f32) -> Vec3 {
        let a = t * self.cfg.orbit_speed;
        let (s, c) = a.sin_cos();
        [
            c * self.cfg.orbit_radius,
            (a * 2.0).sin() * self.cfg.orbit_lift,
            s * self.cfg.orbit_radius,
        ]
    }

    pub fn config(&self) -> &MyPlanetConfig {
        &self.cfg
    }

    pub fn group(&self) -> &Transform {
        &self.group
    }

    pub fn surface(&self) -> &Transform {
        &self.surface
    }

    pub fn trail(&self) -> &[TrailSample] {
        &self.trail
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
}

impl Animated for MyPlanet {
    fn update(&mut self, frame: &FrameContext, view: &Orientation) {
        let t = frame.elapsed;
        self.surface_uniforms.set_float(U_TIME, t);
        self.group.position = self.orbit_position(t);
        self.surface.rotation = [self.cfg.tilt, t * self.cfg.spin, 0.0];

        let n = self.cfg.trail_length;
        self.trail.clear();
        for k in 1..=n {
            let sample_t = (t - k as f32 * self.cfg.trail_spacing).max(0.0);
            let u = 1.0 - k as f32 / (n + 1) as f32;
            self.trail.push(TrailSample {
                position: self.orbit_position(sample_t),
                width: u * u,
            });
        }

        self.label.billboard(view);
    }
}
