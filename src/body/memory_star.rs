//! A clickable star standing for one memory.
//!
//! The star floats around its layout position and pulses on its own; hover
//! and press only change the smoothed targets:
//! - core scale 1.0 idle, 1.8 hovered, 1.5 pressed
//! - glow factor 1.5 → 2.5, light 1.5 → 5
//! - lens rays 0.6 → 1.5, label fades in

use rand::Rng;

use crate::body::{HoverState, Interactive, Label};
use crate::content::Memory;
use crate::input::picking::PointerKind;
use crate::math::{Transform, Vec3};
use crate::render::animator::{oscillate, Animated, Smoothed};
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::material::{hex_color, MaterialKind, Uniforms, U_COLOR, U_HOVERED, U_TIME};

pub const PALETTE: [&str; 12] = [
    "#ffd700", "#ff6b6b", "#00ffcc", "#ff69b4", "#7b68ee", "#ff8c00", "#00ff7f", "#ff4500",
    "#da70d6", "#20b2aa", "#f0e68c", "#dda0dd",
];

pub const HIT_RADIUS: f32 = 1.5;
pub const CORE_RADIUS: f32 = 0.45;
const LABEL_HEIGHT: f32 = 1.8;
const RAY_COUNT: usize = 6;

/// One lens-flare spoke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensRay {
    /// Angle within the ray group (radians).
    pub angle: f32,
    pub length: f32,
}

/// Per-frame glow shells, written by `update`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glow {
    pub inner_scale: f32,
    pub inner_opacity: f32,
    pub outer_scale: f32,
    pub outer_opacity: f32,
}

pub struct MemoryStar {
    memory: Memory,
    base: Vec3,
    color: Vec3,
    hover: HoverState,
    group: Transform,
    core: Transform,
    glow: Glow,
    rays: Vec<LensRay>,
    rays_rotation: f32,
    uniforms: Uniforms,
    label: Label,
    light: f32,
    scale: Smoothed,
    hover_amount: Smoothed,
    glow_factor: Smoothed,
    ray_scale: Smoothed,
    label_fade: Smoothed,
    light_fade: Smoothed,
}

impl MemoryStar {
    pub fn new(memory: Memory, base: Vec3) -> Self {
        let color = hex_color(PALETTE[memory.id as usize % PALETTE.len()]);
        let mut rng = rand::thread_rng();
        let rays = (0..RAY_COUNT)
            .map(|i| LensRay {
                angle: i as f32 / RAY_COUNT as f32 * std::f32::consts::PI,
                length: 0.8 + rng.gen::<f32>() * 0.5,
            })
            .collect();
        let mut label = Label::new(memory.label(), [0.0, LABEL_HEIGHT, 0.0], color, 0.35);
        label.opacity = 0.0;
        Self {
            memory,
            base,
            color,
            hover: HoverState::Idle,
            group: Transform::at(base),
            core: Transform::default(),
            glow: Glow::default(),
            rays,
            rays_rotation: 0.0,
            uniforms: Uniforms::new(MaterialKind::StarGlow)
                .with_color(U_COLOR, color)
                .with_float(U_TIME, 0.0)
                .with_float(U_HOVERED, 0.0),
            label,
            light: 1.5,
            scale: Smoothed::new(1.0, 0.12),
            hover_amount: Smoothed::new(0.0, 0.1),
            glow_factor: Smoothed::new(1.5, 0.1),
            ray_scale: Smoothed::new(0.6, 0.08),
            label_fade: Smoothed::new(0.0, 0.1),
            light_fade: Smoothed::new(1.5, 0.1),
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn base(&self) -> Vec3 {
        self.base
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn group(&self) -> &Transform {
        &self.group
    }

    pub fn core(&self) -> &Transform {
        &self.core
    }

    pub fn glow(&self) -> &Glow {
        &self.glow
    }

    pub fn rays(&self) -> &[LensRay] {
        &self.rays
    }

    /// Rotation of the whole ray group about the view axis.
    pub fn rays_rotation(&self) -> f32 {
        self.rays_rotation
    }

    pub fn ray_scale(&self) -> f32 {
        self.ray_scale.value()
    }

    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn light_intensity(&self) -> f32 {
        self.light
    }
}

impl Animated for MemoryStar {
    fn update(&mut self, frame: &FrameContext, view: &Orientation) {
        let t = frame.elapsed;
        let id = self.memory.id as f32;
        let hovered = self.hover.is_hovered();
        let target = self.hover.hover_target();

        self.uniforms.set_float(U_TIME, t);
        let amount = self.hover_amount.step(frame, target);
        self.uniforms.set_float(U_HOVERED, amount);

        let pulse = oscillate(t, 2.0, id * 1.7, 1.0, 0.08);
        let hover_scale = match self.hover {
            HoverState::Idle => 1.0,
            HoverState::Hovered => 1.8,
            HoverState::Pressed => 1.5,
        };
        self.core.scale = self.scale.step(frame, pulse * hover_scale);
        self.core.rotation = [0.0, t * 0.3, 0.0];

        let glow_pulse = oscillate(t, 1.5, id * 0.8, 1.2, 0.15);
        let factor = self.glow_factor.step(frame, if hovered { 2.5 } else { 1.5 });
        self.glow = Glow {
            inner_scale: glow_pulse * factor,
            inner_opacity: 0.12 + 0.13 * amount,
            outer_scale: oscillate(t, 1.2, id, 2.5 + 1.5 * amount, 0.3),
            outer_opacity: 0.04 + 0.08 * amount,
        };

        self.rays_rotation = t * 0.2 + id;
        self.ray_scale.step(frame, if hovered { 1.5 } else { 0.6 });

        self.label.billboard(view);
        self.label.opacity = self.label_fade.step(frame, target);
        self.light = self.light_fade.step(frame, if hovered { 5.0 } else { 1.5 });

        self.group.position = [
            self.base[0],
            oscillate(t, 0.5, id * 2.0, self.base[1], 0.3),
            self.base[2],
        ];
    }
}

impl Interactive for MemoryStar {
    fn hit_sphere(&self) -> (Vec3, f32) {
        (self.group.position, HIT_RADIUS)
    }

    fn hover_state(&self) -> HoverState {
        self.hover
    }

    fn pointer(&mut self, kind: PointerKind) -> bool {
        self.hover = self.hover.apply(kind);
        kind == PointerKind::Click
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn star(id: u32) -> MemoryStar {
        let memory = *content::find(id).expect("memory");
        MemoryStar::new(memory, [16.0, 0.0, 0.0])
    }

    fn advancing(t: f32) -> FrameContext {
        FrameContext {
            elapsed: t,
            delta: 1.0 / 60.0,
            frame: 1,
        }
    }

    #[test]
    fn color_comes_from_palette() {
        assert_eq!(star(1).color(), hex_color("#ff6b6b"));
        assert_eq!(star(12).color(), hex_color("#ffd700"));
    }

    #[test]
    fn hover_grows_and_reset_shrinks() {
        let mut s = star(7);
        s.pointer(PointerKind::Enter);
        for i in 0..240 {
            s.update(&advancing(i as f32 / 60.0), &Orientation::default());
        }
        assert!(s.core().scale > 1.6);
        assert!(s.label().opacity > 0.99);
        assert!(s.light_intensity() > 4.9);

        s.pointer(PointerKind::Down);
        s.pointer(PointerKind::Leave);
        assert_eq!(s.hover_state(), HoverState::Idle);
        for i in 240..600 {
            s.update(&advancing(i as f32 / 60.0), &Orientation::default());
        }
        assert!(s.core().scale < 1.1);
        assert!(s.label().opacity < 0.01);
    }

    #[test]
    fn only_click_reports() {
        let mut s = star(7);
        assert!(!s.pointer(PointerKind::Enter));
        assert!(!s.pointer(PointerKind::Down));
        assert!(!s.pointer(PointerKind::Up));
        assert!(s.pointer(PointerKind::Click));
    }

    #[test]
    fn same_time_same_transform() {
        let mut s = star(3);
        s.pointer(PointerKind::Enter);
        s.update(&advancing(2.0), &Orientation::default());
        let before = (*s.group(), *s.core(), *s.glow());
        s.update(&FrameContext::at(2.0), &Orientation::default());
        assert_eq!(before, (*s.group(), *s.core(), *s.glow()));
    }

    #[test]
    fn float_stays_near_base() {
        let mut s = star(5);
        for i in 0..100 {
            s.update(&FrameContext::at(i as f32 * 0.77), &Orientation::default());
            assert!((s.group().position[1]).abs() <= 0.3 + 1e-6);
            assert_eq!(s.hit_sphere().1, HIT_RADIUS);
        }
    }
}
