//! Animated scene bodies.
//!
//! Every body owns its transforms, uniforms and label, and rewrites them
//! from the frame time in `Animated::update`. Interactive bodies also expose
//! a pick sphere and consume routed pointer events.

pub mod her_planet;
pub mod interaction;
pub mod label;
pub mod memory_star;
pub mod my_planet;
pub mod portal;

use crate::input::picking::PointerKind;
use crate::math::Vec3;

pub use interaction::HoverState;
pub use label::Label;

/// A body the pointer can hover, press and click.
pub trait Interactive {
    /// World-space pick sphere `(center, radius)` for this frame.
    fn hit_sphere(&self) -> (Vec3, f32);

    fn hover_state(&self) -> HoverState;

    /// Apply a routed pointer event. Returns true on click.
    fn pointer(&mut self, kind: PointerKind) -> bool;
}

/// A thin decorative torus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hoop {
    pub radius: f32,
    pub tube: f32,
    pub rotation: Vec3,
    pub color: Vec3,
    pub opacity: f32,
}
