//! Ray representation and basic ray-geometry tests.

use molgif_math::Vec3;

/// Depth of a pixel that hit nothing.
pub const NO_HIT: f32 = f32::MAX;

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vec3,
    /// Unit direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized and must be non-zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Whether the infinite line through this ray passes within `radius`
    /// of `center`.
    ///
    /// Cheap rejection test; it ignores which side of the origin the
    /// sphere is on.
    #[inline]
    pub fn passes_within(&self, center: &Vec3, radius: f32) -> bool {
        let l = center - self.origin;
        let dl = self.direction.dot(&l);
        l.norm_squared() - dl * dl <= radius * radius
    }
}

/// Nearest intersection of a ray with a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter along the ray where intersection occurs.
    pub t: f32,
    /// 3D intersection point.
    pub point: Vec3,
    /// Unit surface normal at the intersection (pointing outward).
    pub normal: Vec3,
}
