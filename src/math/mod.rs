//! Small vector helpers for `[f32; 3]`.
//!
//! The scene keeps every position as a plain array so point buffers stay
//! flat (`Vec<[f32; 3]>`) and can be handed to the painter without
//! conversion.
//!
//! ## Rotation order
//! Euler rotations are applied X, then Y, then Z in the parent frame,
//! i.e. `v' = Rx · Ry · Rz · v`. Bodies store their rotation as angles and
//! the composed transform is rebuilt every frame from those angles.

pub type Vec3 = [f32; 3];

pub const ZERO: Vec3 = [0.0, 0.0, 0.0];
pub const TAU: f32 = std::f32::consts::TAU;

#[inline(always)]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline(always)]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline(always)]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline(always)]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0].mul_add(b[0], a[1].mul_add(b[1], a[2] * b[2]))
}

#[inline(always)]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline(always)]
pub fn length_squared(a: Vec3) -> f32 {
    dot(a, a)
}

#[inline(always)]
pub fn length(a: Vec3) -> f32 {
    length_squared(a).sqrt()
}

/// Normalize; returns the input unchanged when it is (near) zero length.
#[inline]
pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len > 1e-6 {
        scale(a, 1.0 / len)
    } else {
        a
    }
}

/// Distance from the Y axis (radius in the XZ plane).
#[inline(always)]
pub fn radial_xz(a: Vec3) -> f32 {
    (a[0] * a[0] + a[2] * a[2]).sqrt()
}

/// Distance from the Z axis (radius in the XY plane).
#[inline(always)]
pub fn radial_xy(a: Vec3) -> f32 {
    (a[0] * a[0] + a[1] * a[1]).sqrt()
}

#[inline]
pub fn rotate_x(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c]
}

#[inline]
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [v[0] * c + v[2] * s, v[1], -v[0] * s + v[2] * c]
}

#[inline]
pub fn rotate_z(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [v[0] * c - v[1] * s, v[0] * s + v[1] * c, v[2]]
}

/// Apply an XYZ Euler rotation (see module docs for the order).
#[inline]
pub fn rotate_euler(v: Vec3, euler: Vec3) -> Vec3 {
    rotate_x(rotate_y(rotate_z(v, euler[2]), euler[1]), euler[0])
}

/// Local → parent transform: scale, rotate, translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: ZERO,
            rotation: ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn apply(&self, local: Vec3) -> Vec3 {
        add(self.position, rotate_euler(scale(local, self.scale), self.rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-5)
    }

    #[test]
    fn rotations_preserve_length() {
        let v = [1.0, 2.0, 3.0];
        let r = rotate_euler(v, [0.3, -1.2, 2.5]);
        assert!((length(v) - length(r)).abs() < 1e-5);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let r = rotate_y([1.0, 0.0, 0.0], std::f32::consts::FRAC_PI_2);
        assert!(approx(r, [0.0, 0.0, -1.0]));
    }

    #[test]
    fn transform_translates_after_rotation() {
        let t = Transform {
            position: [0.0, 5.0, 0.0],
            rotation: [0.0, 0.0, std::f32::consts::FRAC_PI_2],
            scale: 2.0,
        };
        assert!(approx(t.apply([1.0, 0.0, 0.0]), [0.0, 7.0, 0.0]));
    }

    #[test]
    fn normalize_zero_is_noop() {
        assert_eq!(normalize(ZERO), ZERO);
    }
}
