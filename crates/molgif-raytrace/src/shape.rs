//! Renderable primitives.
//!
//! [`Shape`] is a closed set of primitive kinds dispatched by `match`; each
//! kind exposes the same capabilities (exact intersection, a cheap
//! bounding-sphere pre-test, center and material).

use image::Rgb;
use molgif_math::{align_rotation, Mat3, Vec3, EPSILON};

use crate::intersect::{intersect_cylinder, intersect_sphere};
use crate::{Hit, Ray};

/// Diffuse surface color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// Base color, scaled by the lighting factor when shaded.
    pub diffuse: Rgb<u8>,
}

impl Material {
    /// Create a material from its diffuse color.
    pub fn new(diffuse: Rgb<u8>) -> Self {
        Self { diffuse }
    }
}

/// A sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
    /// Surface material.
    pub material: Material,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A finite cylinder with open ends, spanning two endpoints.
///
/// The alignment matrices between world space and the local frame (axis
/// along +Z, centered at the midpoint) are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub(crate) center: Vec3,
    pub(crate) axis: Vec3,
    pub(crate) radius: f32,
    pub(crate) half_length: f32,
    pub(crate) bound_radius: f32,
    pub(crate) to_local: Mat3,
    pub(crate) to_world: Mat3,
    pub(crate) material: Material,
}

impl Cylinder {
    /// Create a cylinder of `radius` from `a` to `b`.
    ///
    /// Coincident endpoints give a zero-length cylinder that is never hit.
    pub fn new(a: Vec3, b: Vec3, radius: f32, material: Material) -> Self {
        let span = b - a;
        let length = span.norm();
        let axis = if length > EPSILON {
            span / length
        } else {
            Vec3::z()
        };
        let half_length = length / 2.0;
        Self {
            center: (a + b) * 0.5,
            axis,
            radius,
            half_length,
            bound_radius: (radius * radius + half_length * half_length).sqrt(),
            to_local: align_rotation(&axis, &Vec3::z()),
            to_world: align_rotation(&Vec3::z(), &axis),
            material,
        }
    }

    /// Midpoint of the axis.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit axis direction, from the first endpoint towards the second.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Half the distance between the endpoints.
    pub fn half_length(&self) -> f32 {
        self.half_length
    }

    /// Radius of the smallest sphere around the center enclosing the
    /// cylinder.
    pub fn bound_radius(&self) -> f32 {
        self.bound_radius
    }
}

/// A renderable primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Atom sphere.
    Sphere(Sphere),
    /// Bond half.
    Cylinder(Cylinder),
}

impl Shape {
    /// Nearest intersection with `ray` at non-negative `t`.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(s) => intersect_sphere(ray, s),
            Shape::Cylinder(c) => intersect_cylinder(ray, c),
        }
    }

    /// Bounding-sphere pre-test. `false` guarantees [`Shape::intersect`]
    /// returns `None`.
    pub fn fast_intersect(&self, ray: &Ray) -> bool {
        match self {
            Shape::Sphere(s) => ray.passes_within(&s.center, s.radius),
            Shape::Cylinder(c) => ray.passes_within(&c.center, c.bound_radius),
        }
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.center,
            Shape::Cylinder(c) => c.center,
        }
    }

    /// Surface material.
    pub fn material(&self) -> Material {
        match self {
            Shape::Sphere(s) => s.material,
            Shape::Cylinder(c) => c.material,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Shape::Cylinder(c)
    }
}
