//! Minimal vector and affine-matrix types for the engine crates (no Raylib dependency).
#![forbid(unsafe_code)]

use core::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Column-major 4x4 matrix. Only affine transforms are ever built, so the
/// bottom row stays `[0, 0, 0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    #[inline]
    pub fn scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = s.x;
        m.cols[1][1] = s.y;
        m.cols[2][2] = s.z;
        m
    }

    /// Right-handed rotation about +X by `angle` radians.
    #[inline]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[1] = [0.0, c, s, 0.0];
        m.cols[2] = [0.0, -s, c, 0.0];
        m
    }

    /// Right-handed rotation about +Y by `angle` radians.
    #[inline]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0] = [c, 0.0, -s, 0.0];
        m.cols[2] = [s, 0.0, c, 0.0];
        m
    }

    pub fn mul_mat(&self, rhs: &Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Mat4 { cols: out }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0] * p.z + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1] * p.z + c[3][1],
            c[0][2] * p.x + c[1][2] * p.y + c[2][2] * p.z + c[3][2],
        )
    }

    /// Composes a chain of frames outermost-first: `chain(&[a, b, c])` is `a * b * c`.
    pub fn chain(frames: &[Mat4]) -> Mat4 {
        frames
            .iter()
            .fold(Mat4::IDENTITY, |acc, frame| acc.mul_mat(frame))
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        self.mul_mat(&rhs)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() <= 1e-5
    }

    #[test]
    fn quarter_turn_about_y_maps_z_to_x() {
        let m = Mat4::rotation_y(core::f32::consts::FRAC_PI_2);
        assert!(close(m.transform_point(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn quarter_turn_about_x_maps_z_to_neg_y() {
        let m = Mat4::rotation_x(core::f32::consts::FRAC_PI_2);
        assert!(close(m.transform_point(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn chain_applies_innermost_first() {
        let m = Mat4::chain(&[
            Mat4::translation(Vec3::new(0.0, 0.0, 1.0)),
            Mat4::scale(Vec3::new(1.0, 1.0, 2.0)),
        ]);
        assert!(close(m.transform_point(Vec3::new(0.0, 0.0, 0.5)), Vec3::new(0.0, 0.0, 2.0)));
    }

    proptest! {
        #[test]
        fn negation_is_additive_inverse(v in any::<Vec3>()) {
            prop_assume!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
            prop_assert_eq!(v + (-v), Vec3::ZERO);
        }
    }
}
