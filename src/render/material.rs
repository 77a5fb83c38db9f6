//! Material parameters handed to the painter.
//!
//! Surface programs are opaque to the scene: a body only knows its
//! `MaterialKind` and writes named uniforms every frame. The painter reads
//! the same names back when shading.

use std::collections::BTreeMap;

use crate::math::Vec3;

pub const U_TIME: &str = "uTime";
pub const U_HOVERED: &str = "uHovered";
pub const U_COLOR: &str = "uColor";
pub const U_INTENSITY: &str = "uIntensity";
pub const U_PIXEL_RATIO: &str = "uPixelRatio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialKind {
    /// Banded, slowly swirling planet surface.
    PlanetSurface,
    /// Back-facing rim glow around a planet.
    AtmosphereRim,
    /// Memory star core glow.
    StarGlow,
    /// Point-sprite stars with twinkle.
    PointSprite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Float(f32),
    Color(Vec3),
}

/// Named uniform values for one material instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniforms {
    kind: MaterialKind,
    values: BTreeMap<&'static str, Uniform>,
}

impl Uniforms {
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            values: BTreeMap::new(),
        }
    }

    pub fn with_float(mut self, name: &'static str, value: f32) -> Self {
        self.set_float(name, value);
        self
    }

    pub fn with_color(mut self, name: &'static str, value: Vec3) -> Self {
        self.values.insert(name, Uniform::Color(value));
        self
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn set_float(&mut self, name: &'static str, value: f32) {
        self.values.insert(name, Uniform::Float(value));
    }

    /// Float uniform, or `0.0` when unset or of another type.
    pub fn float(&self, name: &str) -> f32 {
        match self.values.get(name) {
            Some(Uniform::Float(v)) => *v,
            _ => 0.0,
        }
    }

    /// Color uniform, or white when unset.
    pub fn color(&self, name: &str) -> Vec3 {
        match self.values.get(name) {
            Some(Uniform::Color(c)) => *c,
            _ => [1.0, 1.0, 1.0],
        }
    }
}

/// `#rrggbb` to linear-ish `[0, 1]` components. Malformed input yields white.
pub fn hex_color(hex: &str) -> Vec3 {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return [1.0, 1.0, 1.0];
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .unwrap_or(1.0)
    };
    [channel(0), channel(2), channel(4)]
}
