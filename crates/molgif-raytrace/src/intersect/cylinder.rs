//! Ray-cylinder intersection (quadratic equation in the cylinder frame).

use molgif_math::{Vec3, EPSILON};

use crate::shape::Cylinder;
use crate::{Hit, Ray};

/// Intersect a ray with a finite, open-ended cylinder.
///
/// The ray is moved into the cylinder's local frame (axis along +Z,
/// centered at the origin) where the curved surface is `x² + y² = r²`.
/// Roots are tried nearest first; a root is accepted when `t >= 0` and the
/// hit lies within the half-length. End caps are not modeled.
pub fn intersect_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<Hit> {
    let dir = cylinder.to_local * ray.direction;
    let orig = cylinder.to_local * (ray.origin - cylinder.center);

    // Ray is parallel to the axis
    let a = dir.x * dir.x + dir.y * dir.y;
    if a < EPSILON {
        return None;
    }

    let b = 2.0 * (orig.x * dir.x + orig.y * dir.y);
    let c = orig.x * orig.x + orig.y * orig.y - cylinder.radius * cylinder.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    for t in [t1, t2] {
        if t < 0.0 {
            continue;
        }

        let local = orig + dir * t;
        if local.z.abs() > cylinder.half_length {
            continue;
        }

        let normal = cylinder.to_world * Vec3::new(local.x, local.y, 0.0);
        return Some(Hit {
            t,
            point: cylinder.to_world * local + cylinder.center,
            normal: normal.normalize(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Material;
    use approx::assert_relative_eq;
    use image::Rgb;

    fn cylinder(a: Vec3, b: Vec3, r: f32) -> Cylinder {
        Cylinder::new(a, b, r, Material::new(Rgb([200, 0, 0])))
    }

    #[test]
    fn test_ray_cylinder_perpendicular() {
        // Axis along z from -1 to 1, radius 0.5
        let cyl = cylinder(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::x());
        let hit = intersect_cylinder(&ray, &cyl).unwrap();
        assert_relative_eq!(hit.t, 9.5, epsilon = 1e-4);
        assert_relative_eq!(hit.point, Vec3::new(-0.5, 0.0, 0.0), epsilon = 1e-4);
        assert_relative_eq!(hit.normal, -Vec3::x(), epsilon = 1e-4);
    }

    #[test]
    fn test_ray_cylinder_oblique_axis() {
        // Axis along x; ray comes down -y onto the curved side.
        let cyl = cylinder(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), 0.25);
        let ray = Ray::new(Vec3::new(1.0, 5.0, 0.0), -Vec3::y());
        let hit = intersect_cylinder(&ray, &cyl).unwrap();
        assert_relative_eq!(hit.t, 4.75, epsilon = 1e-4);
        assert_relative_eq!(hit.point, Vec3::new(1.0, 0.25, 0.0), epsilon = 1e-4);
        assert_relative_eq!(hit.normal, Vec3::y(), epsilon = 1e-4);
    }

    #[test]
    fn test_ray_cylinder_miss() {
        let cyl = cylinder(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vec3::new(-10.0, 10.0, 0.0), Vec3::x());
        assert!(intersect_cylinder(&ray, &cyl).is_none());
    }

    #[test]
    fn test_ray_beyond_half_length_misses() {
        let cyl = cylinder(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vec3::new(-10.0, 0.0, 1.5), Vec3::x());
        assert!(intersect_cylinder(&ray, &cyl).is_none());
    }

    #[test]
    fn test_ray_parallel_axis() {
        let cyl = cylinder(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vec3::new(0.2, 0.0, -10.0), Vec3::z());
        assert!(intersect_cylinder(&ray, &cyl).is_none());
    }

    #[test]
    fn test_cylinder_behind_ray() {
        let cyl = cylinder(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::x());
        assert!(intersect_cylinder(&ray, &cyl).is_none());
    }

    #[test]
    fn test_anti_parallel_axis_is_finite() {
        // Axis pointing along -z exercises the half-turn alignment.
        let cyl = cylinder(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::new(0.0, -10.0, 0.3), Vec3::y());
        let hit = intersect_cylinder(&ray, &cyl).unwrap();
        assert_relative_eq!(hit.point, Vec3::new(0.0, -0.5, 0.3), epsilon = 1e-4);
        assert_relative_eq!(hit.normal, -Vec3::y(), epsilon = 1e-4);
    }

    #[test]
    fn test_origin_inside_hits_far_wall() {
        let cyl = cylinder(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vec3::zeros(), Vec3::x());
        let hit = intersect_cylinder(&ray, &cyl).unwrap();
        assert_relative_eq!(hit.t, 0.5, epsilon = 1e-4);
    }
}
