//! The gateway portal: three counter-rotating hoops around a pulsing core
//! and a swirling particle vortex. Clicking it opens the reveal sequence.

use crate::body::{Hoop, HoverState, Interactive, Label};
use crate::field::{self, Attributes, Distribution, Layer, Palette};
use crate::input::picking::PointerKind;
use crate::math::{self, Transform, Vec3, TAU};
use crate::render::animator::{oscillate, Animated, Smoothed};
use crate::render::camera::Orientation;
use crate::render::clock::FrameContext;
use crate::render::material::hex_color;
use crate::render::PointStyle;

pub const HIT_RADIUS: f32 = 4.0;
pub const CORE_RADIUS: f32 = 1.3;
/// Radial breathing of the vortex particles.
const BREATHING: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub caption: String,
    pub anchor: Vec3,
    /// Vertical bob amplitude.
    pub bob: f32,
    pub vortex_count: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            caption: "✨ Tap to discover the secret of the universe ✨".to_string(),
            anchor: [0.0, 8.0, -15.0],
            bob: 0.5,
            vortex_count: 600,
        }
    }
}

pub struct GatewayPortal {
    cfg: PortalConfig,
    hover: HoverState,
    group: Transform,
    hoops: [Hoop; 3],
    core_scale: f32,
    core_opacity: f32,
    emissive: f32,
    light: f32,
    vortex: Layer,
    label: Label,
    hover_factor: Smoothed,
    emissive_fade: Smoothed,
    light_fade: Smoothed,
}

impl GatewayPortal {
    pub fn new(cfg: PortalConfig) -> Self {
        let shape = Distribution::Disc {
            inner: 0.5,
            outer: 3.3,
            depth: 1.5,
        };
        let attrs = Attributes {
            palette: Palette::Gradient {
                base: [1.0, 0.7, 0.3],
                span: [0.0, 0.3, 0.5],
            },
            ..Attributes::default()
        };
        let mut cloud = field::generate(&mut rand::thread_rng(), cfg.vortex_count, &shape, &attrs);
        cloud.widen_envelope(BREATHING);
        let vortex = Layer::new(
            "portal vortex",
            cloud,
            PointStyle {
                size: 0.08,
                opacity: 0.5,
                tint: None,
            },
        );
        let hoop = |radius: f32, tube: f32, color: &str, opacity: f32| Hoop {
            radius,
            tube,
            rotation: math::ZERO,
            color: hex_color(color),
            opacity,
        };
        let label = Label::new(
            cfg.caption.clone(),
            [0.0, -4.5, 0.0],
            hex_color("#ffd700"),
            0.5,
        );
        Self {
            hover: HoverState::Idle,
            group: Transform::at(cfg.anchor),
            hoops: [
                hoop(3.0, 0.08, "#ffd700", 0.9),
                hoop(2.3, 0.06, "#ff69b4", 0.8),
                hoop(1.6, 0.05, "#00ffff", 0.7),
            ],
            core_scale: 1.0,
            core_opacity: 0.15,
            emissive: 1.5,
            light: 5.0,
            vortex,
            label,
            hover_factor: Smoothed::new(1.0, 0.1),
            emissive_fade: Smoothed::new(1.5, 0.1),
            light_fade: Smoothed::new(5.0, 0.1),
            cfg,
        }
    }

    pub fn group(&self) -> &Transform {
        &self.group
    }

    pub fn hoops(&self) -> &[Hoop] {
        &self.hoops
    }

    pub fn core_scale(&self) -> f32 {
        self.core_scale
    }

    pub fn core_opacity(&self) -> f32 {
        self.core_opacity
    }

    /// Emissive intensity shared by the three hoops.
    pub fn emissive(&self) -> f32 {
        self.emissive
    }

    pub fn light_intensity(&self) -> f32 {
        self.light
    }

    pub fn vortex(&self) -> &Layer {
        &self.vortex
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Smoothed hover amount in `[0, 1]`.
    fn hover_amount(&self) -> f32 {
        ((self.hover_factor.value() - 1.0) / 0.3).clamp(0.0, 1.0)
    }
}

impl Animated for GatewayPortal {
    fn update(&mut self, frame: &FrameContext, view: &Orientation) {
        let t = frame.elapsed;
        let hovered = self.hover.is_hovered();

        self.group.position = [
            self.cfg.anchor[0],
            oscillate(t, 0.4, 0.0, self.cfg.anchor[1], self.cfg.bob),
            self.cfg.anchor[2],
        ];

        self.hoops[0].rotation = [t * 0.2, 0.0, t * 0.4];
        self.hoops[1].rotation = [0.0, t * 0.15, -t * 0.35];
        self.hoops[2].rotation = [t * 0.5, 0.0, t * 0.1];

        let factor = self.hover_factor.step(frame, if hovered { 1.3 } else { 1.0 });
        let amount = self.hover_amount();
        self.core_scale = oscillate(t, 2.0, 0.0, 1.0, 0.15) * factor;
        self.core_opacity = oscillate(t, 3.0, 0.0, 0.15, 0.08) + 0.15 * amount;
        self.emissive = self.emissive_fade.step(frame, if hovered { 3.0 } else { 1.5 });
        self.light = self.light_fade.step(frame, if hovered { 12.0 } else { 5.0 });

        let count = self.vortex.cloud.len().max(1) as f32;
        self.vortex.cloud.reposition(|i, p| {
            let i = i as f32;
            let angle = t * 0.5 + i / count * TAU + i * 0.02;
            let r = math::radial_xy(p.position) + (t + i * 0.1).sin() * BREATHING;
            let (s, c) = angle.sin_cos();
            [c * r, s * r, p.position[2]]
        });
        self.vortex.cloud.transform.rotation[2] = t * 0.3;
        self.vortex.style.opacity = 0.5 + 0.3 * amount;

        self.label.billboard(view);
    }
}

impl Interactive for GatewayPortal {
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

    fn advancing(t: f32) -> FrameContext {
        FrameContext {
            elapsed: t,
            delta: 1.0 / 60.0,
            frame: 1,
        }
    }

    #[test]
    fn group_bobs_around_anchor() {
        let mut portal = GatewayPortal::new(PortalConfig::default());
        for i in 0..100 {
            portal.update(&FrameContext::at(i as f32 * 0.61), &Orientation::default());
            let p = portal.group().position;
            assert!((p[1] - 8.0).abs() <= 0.5 + 1e-5);
            assert_eq!(p[2], -15.0);
        }
    }

    #[test]
    fn vortex_stays_in_its_disc() {
        let mut portal = GatewayPortal::new(PortalConfig::default());
        assert_eq!(portal.vortex().cloud.len(), 600);
        for i in 0..60 {
            portal.update(&FrameContext::at(i as f32 * 1.7), &Orientation::default());
            assert!(portal.vortex().cloud.within_envelope());
        }
    }

    #[test]
    fn hover_raises_emissive_and_core() {
        let mut portal = GatewayPortal::new(PortalConfig::default());
        portal.pointer(PointerKind::Enter);
        for i in 0..300 {
            portal.update(&advancing(i as f32 / 60.0), &Orientation::default());
        }
        assert!(portal.emissive() > 2.95);
        assert!(portal.light_intensity() > 11.9);
        assert!(portal.core_opacity() > 0.15 + 0.15 - 0.08 - 1e-3);

        portal.pointer(PointerKind::Leave);
        for i in 300..700 {
            portal.update(&advancing(i as f32 / 60.0), &Orientation::default());
        }
        assert!(portal.emissive() < 1.55);
    }

    #[test]
    fn same_time_same_state() {
        let mut portal = GatewayPortal::new(PortalConfig::default());
        portal.update(&advancing(3.3), &Orientation::default());
        let a = (*portal.group(), portal.hoops().to_vec(), portal.core_scale());
        let live = portal.vortex().cloud.live_positions().to_vec();
        portal.update(&FrameContext::at(3.3), &Orientation::default());
        assert_eq!(a, (*portal.group(), portal.hoops().to_vec(), portal.core_scale()));
        assert_eq!(live, portal.vortex().cloud.live_positions());
    }
}
