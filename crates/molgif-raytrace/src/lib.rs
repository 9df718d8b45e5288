#![warn(missing_docs)]

//! Analytic ray tracing of molecular scenes.
//!
//! Scenes are flat lists of spheres (atoms) and open cylinders (bond
//! halves) lit by a single point light plus a constant ambient term.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`Hit`] - Nearest intersection with a primitive
//! - [`intersect`] - Ray-sphere and ray-cylinder intersection
//! - [`Shape`] - Sphere/cylinder primitives with a diffuse [`Material`]
//! - [`View`] - Fixed pinhole camera fitted to the scene radius
//! - [`Scene`] - Primitives, camera and light; per-pixel shading
//! - [`Renderer`] - Tile-parallel full-frame rasterizer
//!
//! # Example
//!
//! ```
//! use image::Rgb;
//! use molgif_math::Vec3;
//! use molgif_raytrace::{Material, PointLight, Renderer, Scene, Shape, Sphere, View};
//!
//! let white = Material::new(Rgb([255, 255, 255]));
//! let shapes = vec![Shape::Sphere(Sphere::new(Vec3::zeros(), 0.4, white))];
//! let scene = Scene::new(shapes, View::fit(64, 64, 0.0), PointLight::default(), Rgb([0, 0, 0]));
//!
//! let renderer = Renderer::new(2, 16)?;
//! let frame = renderer.render(&scene);
//! assert_ne!(*frame.get_pixel(32, 32), Rgb([0, 0, 0]));
//! # Ok::<(), molgif_raytrace::RenderError>(())
//! ```

mod error;
mod ray;
pub mod intersect;
pub mod render;
pub mod scene;
pub mod shape;
pub mod view;

pub use error::{RenderError, Result};
pub use ray::{Hit, Ray, NO_HIT};
pub use render::{render_tile, tiles, Renderer, Tile, DEFAULT_TILE_SIZE};
pub use scene::{shade, PointLight, Scene, DEFAULT_AMBIENT};
pub use shape::{Cylinder, Material, Shape, Sphere};
pub use view::View;
