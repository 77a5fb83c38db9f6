//! Camera-facing text attached to a body.

use crate::math::{self, Transform, Vec3};
use crate::render::camera::Orientation;

#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    /// Offset from the owner's group origin.
    pub offset: Vec3,
    pub color: Vec3,
    /// Glyph height in world units.
    pub size: f32,
    pub opacity: f32,
    orientation: Orientation,
}

impl Label {
    pub fn new(text: impl Into<String>, offset: Vec3, color: Vec3, size: f32) -> Self {
        Self {
            text: text.into(),
            offset,
            color,
            size,
            opacity: 1.0,
            orientation: Orientation::default(),
        }
    }

    /// Copy the camera basis. The camera is read, never written.
    pub fn billboard(&mut self, view: &Orientation) {
        self.orientation = *view;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor in world space. Labels follow the group's position but not
    /// its rotation.
    pub fn world_position(&self, group: &Transform) -> Vec3 {
        math::add(group.position, self.offset)
    }
}
