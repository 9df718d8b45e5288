//! Ray-sphere intersection (geometric quadratic solution).

use crate::shape::Sphere;
use crate::{Hit, Ray};

/// Intersect a ray with a sphere.
///
/// Returns the nearer root when it lies in front of the origin, otherwise
/// the farther one (origin inside the sphere), otherwise `None`.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<Hit> {
    let l = sphere.center - ray.origin;
    let tca = ray.direction.dot(&l);
    let d2 = l.norm_squared() - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t = if tca - thc >= 0.0 { tca - thc } else { tca + thc };
    if t < 0.0 {
        return None;
    }

    let point = ray.at(t);
    let normal = (point - sphere.center).normalize();
    Some(Hit { t, point, normal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Material;
    use approx::assert_relative_eq;
    use image::Rgb;
    use molgif_math::Vec3;

    fn unit_sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::new(Rgb([255, 255, 255])))
    }

    #[test]
    fn test_ray_sphere_through_center() {
        let sphere = unit_sphere_at(Vec3::zeros(), 5.0);
        let ray = Ray::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::x());
        let hit = intersect_sphere(&ray, &sphere).unwrap();
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point, Vec3::new(-5.0, 0.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(hit.normal, -Vec3::x(), epsilon = 1e-5);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::zeros(), 5.0);
        let ray = Ray::new(Vec3::new(-10.0, 10.0, 0.0), Vec3::x());
        assert!(intersect_sphere(&ray, &sphere).is_none());
    }

    #[test]
    fn test_ray_sphere_from_inside() {
        let sphere = unit_sphere_at(Vec3::zeros(), 5.0);
        let ray = Ray::new(Vec3::zeros(), Vec3::x());
        let hit = intersect_sphere(&ray, &sphere).unwrap();
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-5);
        assert_relative_eq!(hit.normal, Vec3::x(), epsilon = 1e-5);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let centers = [
            Vec3::zeros(),
            Vec3::new(3.0, -2.0, 1.0),
            Vec3::new(-7.5, 0.25, 4.0),
        ];
        let dirs = [
            Vec3::x(),
            Vec3::new(0.3, -1.0, 0.2),
            Vec3::new(-1.0, -1.0, -1.0),
        ];
        for center in centers {
            for dir in dirs {
                let sphere = unit_sphere_at(center, 1.5);
                // Start outside the sphere on the far side of `dir`.
                let origin = center + dir.normalize() * 4.0;
                let ray = Ray::new(origin, dir);
                assert!(intersect_sphere(&ray, &sphere).is_none());
            }
        }
    }

    #[test]
    fn test_reversed_ray_sees_same_chord() {
        let sphere = unit_sphere_at(Vec3::new(0.5, -0.25, 0.0), 2.0);
        let a = Vec3::new(-6.0, 0.4, -3.0);
        let b = Vec3::new(7.0, -0.9, 2.0);
        let span = (b - a).norm();

        let forward = intersect_sphere(&Ray::new(a, b - a), &sphere).unwrap();
        let backward = intersect_sphere(&Ray::new(b, a - b), &sphere).unwrap();

        // Entry of one ray is the exit of the other.
        let chord = span - forward.t - backward.t;
        assert!(chord > 0.0);
        let exit_forward = Ray::new(a, b - a).at(forward.t + chord);
        assert_relative_eq!(exit_forward, backward.point, epsilon = 1e-4);
        let exit_backward = Ray::new(b, a - b).at(backward.t + chord);
        assert_relative_eq!(exit_backward, forward.point, epsilon = 1e-4);
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = unit_sphere_at(Vec3::zeros(), 1.0);
        let ray = Ray::new(Vec3::new(1.0, -5.0, 0.0), Vec3::y());
        let hit = intersect_sphere(&ray, &sphere).unwrap();
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-3);
    }
}
