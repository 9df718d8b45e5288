#![warn(missing_docs)]

//! Math types for molgif.
//!
//! Thin aliases over nalgebra in single precision, plus the rotation
//! constructors the renderer and the animator need: rotations about the
//! coordinate axes and the Rodrigues alignment of one unit vector onto
//! another.

use nalgebra::{Matrix3, Vector3};

/// A vector (or point) in 3D space.
pub type Vec3 = Vector3<f32>;

/// A 3x3 matrix. Matrices built by this crate are rotations.
pub type Mat3 = Matrix3<f32>;

/// Magnitudes below this are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Rotation about the X axis by `angle` radians.
pub fn rotation_x(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Rotation about the Y axis by `angle` radians.
pub fn rotation_y(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Rotation about the Z axis by `angle` radians.
pub fn rotation_z(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Skew-symmetric cross-product matrix: `skew(v) * w == v.cross(&w)`.
pub fn skew(v: &Vec3) -> Mat3 {
    Mat3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Some unit vector perpendicular to `v`.
///
/// `v` must be non-zero.
pub fn any_perpendicular(v: &Vec3) -> Vec3 {
    // Cross with the coordinate axis least aligned with v.
    let a = v.abs();
    let other = if a.x <= a.y && a.x <= a.z {
        Vec3::x()
    } else if a.y <= a.z {
        Vec3::y()
    } else {
        Vec3::z()
    };
    v.cross(&other).normalize()
}

/// Rotation that maps unit vector `a` onto unit vector `b`.
///
/// Uses Rodrigues' formula `R = I + K + K² (1 - c) / s²` where `K` is the
/// skew matrix of `a × b`, `s = |a × b|` and `c = a · b`. When the vectors
/// are parallel the identity is returned; when they are anti-parallel the
/// result is a half turn about an axis perpendicular to `a`.
pub fn align_rotation(a: &Vec3, b: &Vec3) -> Mat3 {
    let v = a.cross(b);
    let s = v.norm();
    let c = a.dot(b);

    if s < EPSILON {
        if c > 0.0 {
            return Mat3::identity();
        }
        // Half turn about u: R = 2uuᵀ - I.
        let u = any_perpendicular(a);
        return 2.0 * u * u.transpose() - Mat3::identity();
    }

    let k = skew(&v);
    Mat3::identity() + k + (k * k) * ((1.0 - c) / (s * s))
}
