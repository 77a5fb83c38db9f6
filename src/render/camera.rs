//! Orbit camera: damped rotation around a target, perspective projection,
//! and picking rays.
//!
//! Screen coordinates are pixels relative to the top-left of the viewport.

use crate::input::picking::Ray;
use crate::math::{self, Vec3};

/// Camera tunables.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Initial eye position.
    pub position: Vec3,
    /// Orbit target.
    pub target: Vec3,
    /// Vertical field of view (degrees).
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle limits (radians from +Y).
    pub min_polar: f32,
    pub max_polar: f32,
    /// Auto-rotate speed; 1.0 is one revolution per minute.
    pub auto_rotate_speed: f32,
    /// Fraction of the pending rotation applied per frame.
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 25.0],
            target: [0.0, 0.0, 0.0],
            fov_deg: 60.0,
            near: 0.1,
            far: 600.0,
            min_distance: 6.0,
            max_distance: 55.0,
            min_polar: std::f32::consts::PI * 0.15,
            max_polar: std::f32::consts::PI * 0.85,
            auto_rotate_speed: 0.2,
            damping: 0.08,
            rotate_speed: 0.5,
            zoom_speed: 0.8,
        }
    }
}

/// Orthonormal camera basis. Billboards copy this to face the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            right: [1.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            forward: [0.0, 0.0, -1.0],
        }
    }
}

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

/// A world point mapped onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction.
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub pixels_per_unit: f32,
}

#[derive(Debug, Clone)]
pub struct Camera {
    cfg: CameraConfig,
    radius: f32,
    /// Azimuth around +Y, measured from +Z.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    eye: Vec3,
    orientation: Orientation,
}

impl Camera {
    pub fn new(cfg: CameraConfig) -> Self {
        let offset = math::sub(cfg.position, cfg.target);
        let radius = math::length(offset).clamp(cfg.min_distance, cfg.max_distance);
        let theta = offset[0].atan2(offset[2]);
        let phi = (offset[1] / math::length(offset).max(1e-6))
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(cfg.min_polar, cfg.max_polar);
        let mut cam = Self {
            cfg,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            eye: math::ZERO,
            orientation: Orientation::default(),
        };
        cam.rebuild();
        cam
    }

    pub fn config(&self) -> &CameraConfig {
        &self.cfg
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    /// Queue a drag rotation, in pixels.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport: Viewport) {
        let h = viewport.height.max(1.0);
        self.pending_theta -= math::TAU * dx / h * self.cfg.rotate_speed;
        self.pending_phi -= math::TAU * dy / h * self.cfg.rotate_speed;
    }

    /// Dolly in (positive) or out (negative) by scroll amount in points.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = 0.95_f32.powf(self.cfg.zoom_speed * scroll / 50.0);
        self.radius = (self.radius * factor).clamp(self.cfg.min_distance, self.cfg.max_distance);
        self.rebuild();
    }

    /// Apply auto-rotation and damped pending rotation for one frame.
    pub fn update(&mut self, dt: f32) {
        if self.cfg.auto_rotate_speed != 0.0 {
            self.pending_theta -= math::TAU / 60.0 * self.cfg.auto_rotate_speed * dt;
        }
        let d = self.cfg.damping.clamp(0.0, 1.0);
        self.theta += self.pending_theta * d;
        self.phi = (self.phi + self.pending_phi * d).clamp(self.cfg.min_polar, self.cfg.max_polar);
        self.pending_theta *= 1.0 - d;
        self.pending_phi *= 1.0 - d;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let (sp, cp) = self.phi.sin_cos();
        let (st, ct) = self.theta.sin_cos();
        let offset = [self.radius * sp * st, self.radius * cp, self.radius * sp * ct];
        self.eye = math::add(self.cfg.target, offset);

        let forward = math::normalize(math::sub(self.cfg.target, self.eye));
        let right = math::normalize(math::cross(forward, [0.0, 1.0, 0.0]));
        let up = math::cross(right, forward);
        self.orientation = Orientation { right, up, forward };
    }

    fn focal(&self) -> f32 {
        1.0 / (self.cfg.fov_deg.to_radians() * 0.5).tan()
    }

    /// Project a world point. `None` when outside the near/far range.
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Projected> {
        let v = math::sub(world, self.eye);
        let depth = math::dot(v, self.orientation.forward);
        if depth < self.cfg.near || depth > self.cfg.far {
            return None;
        }
        let f = self.focal();
        let inv_depth = 1.0 / depth;
        let ndc_x = math::dot(v, self.orientation.right) * f * inv_depth / viewport.aspect();
        let ndc_y = math::dot(v, self.orientation.up) * f * inv_depth;
        Some(Projected {
            x: (ndc_x + 1.0) * 0.5 * viewport.width,
            y: (1.0 - ndc_y) * 0.5 * viewport.height,
            depth,
            pixels_per_unit: f * viewport.height * 0.5 * inv_depth,
        })
    }

    /// Ray from the eye through a viewport pixel.
    pub fn ray(&self, x: f32, y: f32, viewport: Viewport) -> Ray {
        let ndc_x = x / viewport.width.max(1.0) * 2.0 - 1.0;
        let ndc_y = 1.0 - y / viewport.height.max(1.0) * 2.0;
        let f = self.focal();
        let o = self.orientation;
        let dir = math::add(
            o.forward,
            math::add(
                math::scale(o.right, ndc_x * viewport.aspect() / f),
                math::scale(o.up, ndc_y / f),
            ),
        );
        Ray::new(self.eye, dir)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn starts_at_configured_eye() {
        let cam = Camera::default();
        let eye = cam.eye();
        assert!((eye[0]).abs() < 1e-3);
        assert!((eye[1] - 5.0).abs() < 1e-3);
        assert!((eye[2] - 25.0).abs() < 1e-3);
    }

    #[test]
    fn target_projects_to_center() {
        let cam = Camera::default();
        let p = cam.project([0.0, 0.0, 0.0], VIEW).expect("target in front");
        assert!((p.x - 640.0).abs() < 0.5);
        assert!((p.y - 400.0).abs() < 0.5);
    }

    #[test]
    fn ray_through_projection_hits_point() {
        let cam = Camera::default();
        let world = [3.0, 1.0, -2.0];
        let p = cam.project(world, VIEW).expect("visible");
        let ray = cam.ray(p.x, p.y, VIEW);
        let to_point = math::normalize(math::sub(world, cam.eye()));
        assert!(math::dot(ray.direction, to_point) > 0.99999);
    }

    #[test]
    fn collapsed_viewport_still_projects() {
        let cam = Camera::default();
        let thin = Viewport {
            width: 0.0,
            height: 600.0,
        };
        let p = cam.project([1.0, 1.0, 0.0], thin).expect("in front");
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn points_behind_are_culled() {
        let cam = Camera::default();
        assert!(cam.project([0.0, 5.0, 40.0], VIEW).is_none());
    }

    #[test]
    fn zoom_and_polar_are_clamped() {
        let mut cam = Camera::default();
        for _ in 0..200 {
            cam.zoom(500.0);
        }
        assert!((cam.distance() - 6.0).abs() < 1e-4);
        cam.drag(0.0, -100_000.0, VIEW);
        for _ in 0..200 {
            cam.update(0.016);
        }
        let max = std::f32::consts::PI * 0.85;
        assert!(cam.polar_angle() <= max + 1e-5);
    }

    #[test]
    fn orientation_is_orthonormal() {
        let mut cam = Camera::default();
        cam.drag(120.0, 40.0, VIEW);
        cam.update(0.5);
        let o = cam.orientation();
        assert!(math::dot(o.right, o.up).abs() < 1e-5);
        assert!(math::dot(o.up, o.forward).abs() < 1e-5);
        assert!((math::length(o.right) - 1.0).abs() < 1e-5);
    }
}
