//! Pointer input for the 3D scene.

pub mod picking;
