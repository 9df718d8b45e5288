//! Ray-primitive intersection algorithms.
//!
//! Each intersector returns the nearest hit at non-negative `t`, or `None`
//! when the ray misses.

mod cylinder;
mod sphere;

pub use cylinder::intersect_cylinder;
pub use sphere::intersect_sphere;
