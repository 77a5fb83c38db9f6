pub mod animator;
pub mod camera;
pub mod clock;
pub mod material;

/// Additive point-sprite blending parameters shared by all point layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// Base sprite size in world units.
    pub size: f32,
    /// Layer opacity, multiplied with each point's own opacity.
    pub opacity: f32,
    /// Overrides per-point color when set.
    pub tint: Option<[f32; 3]>,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            size: 1.0,
            opacity: 1.0,
            tint: None,
        }
    }
}
