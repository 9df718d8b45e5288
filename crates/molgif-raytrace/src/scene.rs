//! Scene description and per-pixel shading.

use image::Rgb;
use molgif_math::Vec3;

use crate::{Hit, Material, Shape, View, NO_HIT};

/// Ambient term added to the diffuse factor.
pub const DEFAULT_AMBIENT: f32 = 0.2;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
}

impl PointLight {
    /// Light at `position`.
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(1000.0, 500.0, -1000.0))
    }
}

/// Shade a hit: Lambert factor against the light, plus ambient, clamped to
/// `[0, 1]` and applied to each channel with truncation.
pub fn shade(material: &Material, hit: &Hit, light: &PointLight, ambient: f32) -> Rgb<u8> {
    let to_light = (light.position - hit.point).normalize();
    let diffuse = to_light.dot(&hit.normal).max(0.0);
    let factor = (diffuse + ambient).clamp(0.0, 1.0);
    let Rgb([r, g, b]) = material.diffuse;
    Rgb([
        (f32::from(r) * factor) as u8,
        (f32::from(g) * factor) as u8,
        (f32::from(b) * factor) as u8,
    ])
}

/// Everything needed to render one frame. Read-only while rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Primitives to intersect.
    pub shapes: Vec<Shape>,
    /// Camera.
    pub view: View,
    /// The single light source.
    pub light: PointLight,
    /// Color of pixels that hit nothing.
    pub background: Rgb<u8>,
    /// Ambient lighting term.
    pub ambient: f32,
}

impl Scene {
    /// Scene with the default ambient term.
    pub fn new(shapes: Vec<Shape>, view: View, light: PointLight, background: Rgb<u8>) -> Self {
        Self {
            shapes,
            view,
            light,
            background,
            ambient: DEFAULT_AMBIENT,
        }
    }

    /// Override the ambient term.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    /// Color of pixel `(x, y)`: the shaded nearest hit, or the background.
    pub fn compute_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        let ray = self.view.ray(x, y);
        let mut pixel = self.background;
        let mut z_min = NO_HIT;

        for shape in &self.shapes {
            if !shape.fast_intersect(&ray) {
                continue;
            }
            if let Some(hit) = shape.intersect(&ray) {
                if hit.t < z_min {
                    z_min = hit.t;
                    pixel = shade(&shape.material(), &hit, &self.light, self.ambient);
                }
            }
        }

        pixel
    }
}
