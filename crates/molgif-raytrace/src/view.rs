//! Fixed pinhole camera.

use molgif_math::Vec3;

use crate::Ray;

/// Minimum distance kept between the camera and the edge of the fitted
/// sphere.
pub const CAMERA_MARGIN: f32 = 8.0;

/// Camera position, orientation and raster size.
///
/// The camera sits on the -Z axis looking towards +Z. Screen-right is +X and
/// screen-up is -Y, so raster rows advance along +Y and the image is a
/// proper (unmirrored) view of a right-handed scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    width: u32,
    height: u32,
    position: Vec3,
    look: Vec3,
    right: Vec3,
    up: Vec3,
}

impl View {
    /// Camera for a `width` x `height` raster that keeps a sphere of
    /// `radius` centered on the origin entirely in frame.
    ///
    /// `radius` must cover the drawn primitives, not just atom centers.
    /// The camera never comes closer than `radius + CAMERA_MARGIN`; larger
    /// structures and narrow rasters push it back until the sphere fits
    /// inside the narrower half of the field of view.
    pub fn fit(width: u32, height: u32, radius: f32) -> Self {
        Self {
            width,
            height,
            position: Vec3::new(0.0, 0.0, -fit_distance(width, height, radius)),
            look: Vec3::z(),
            right: Vec3::x(),
            up: -Vec3::y(),
        }
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Primary ray through pixel `(x, y)`.
    ///
    /// Offsets from the raster center are divided by the height on both
    /// axes, so pixels are square regardless of aspect ratio.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let scale = self.height as f32;
        let dx = (x as f32 - (self.width / 2) as f32) / scale;
        let dy = ((self.height / 2) as f32 - y as f32) / scale;
        Ray::new(self.position, self.look + self.right * dx + self.up * dy)
    }

    /// Raster coordinates of a world point, or `None` when it is not in
    /// front of the camera. Inverse of [`View::ray`] up to pixel rounding.
    pub fn project(&self, point: &Vec3) -> Option<(f32, f32)> {
        let v = point - self.position;
        let depth = v.dot(&self.look);
        if depth <= 0.0 {
            return None;
        }
        let scale = self.height as f32;
        let dx = v.dot(&self.right) / depth;
        let dy = v.dot(&self.up) / depth;
        Some((
            (self.width / 2) as f32 + dx * scale,
            (self.height / 2) as f32 - dy * scale,
        ))
    }
}

/// Distance from the origin at which a sphere of `radius` fits the view.
///
/// With offsets scaled by the height, the half-angle tangent of the
/// narrower axis is `min(w, h) / 2h`; the sphere fits once the camera is
/// `radius / sin(half_angle)` away.
fn fit_distance(width: u32, height: u32, radius: f32) -> f32 {
    let near = radius + CAMERA_MARGIN;
    if width == 0 || height == 0 {
        return near;
    }
    let tan = width.min(height) as f32 / (2.0 * height as f32);
    let fitted = radius * (1.0 + tan * tan).sqrt() / tan;
    near.max(fitted)
}
