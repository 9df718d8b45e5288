//! Tile-parallel frame rendering.
//!
//! The raster is cut into square tiles which a fixed-size rayon pool
//! renders independently against the shared, read-only [`Scene`]. Tiles
//! are disjoint, so the frame buffer is only touched after every tile has
//! finished, by a plain blit.

use image::{imageops, RgbImage};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{RenderError, Result};
use crate::Scene;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// A rectangular region of the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Cover a `width` x `height` raster with tiles of `tile_size`, row-major.
/// Tiles on the right and bottom edges are clipped to the raster.
///
/// `tile_size` must be non-zero.
pub fn tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let mut out = Vec::new();
    for y in (0..height).step_by(tile_size as usize) {
        for x in (0..width).step_by(tile_size as usize) {
            out.push(Tile {
                x,
                y,
                width: tile_size.min(width - x),
                height: tile_size.min(height - y),
            });
        }
    }
    out
}

/// Render one tile into its own tile-sized image.
pub fn render_tile(scene: &Scene, tile: &Tile) -> RgbImage {
    RgbImage::from_fn(tile.width, tile.height, |x, y| {
        scene.compute_pixel(tile.x + x, tile.y + y)
    })
}

/// Full-frame renderer owning the tile worker pool.
pub struct Renderer {
    pool: ThreadPool,
    tile_size: u32,
}

impl Renderer {
    /// Create a renderer with `threads` workers (0 means one per CPU).
    pub fn new(threads: usize, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(RenderError::InvalidTileSize);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("molgif-tile-{i}"))
            .build()?;
        log::debug!(
            "render pool: {} threads, {}px tiles",
            pool.current_num_threads(),
            tile_size
        );
        Ok(Self { pool, tile_size })
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Render a full frame in parallel.
    ///
    /// A panic in any worker propagates to the caller.
    pub fn render(&self, scene: &Scene) -> RgbImage {
        let (width, height) = (scene.view.width(), scene.view.height());
        let work = tiles(width, height, self.tile_size);

        // collect() returns only once every tile is done.
        let rendered: Vec<(Tile, RgbImage)> = self.pool.install(|| {
            work.par_iter()
                .map(|tile| (*tile, render_tile(scene, tile)))
                .collect()
        });

        compose(width, height, &rendered)
    }

    /// Render a full frame on the calling thread, tile by tile.
    pub fn render_sequential(&self, scene: &Scene) -> RgbImage {
        let (width, height) = (scene.view.width(), scene.view.height());
        let rendered: Vec<(Tile, RgbImage)> = tiles(width, height, self.tile_size)
            .into_iter()
            .map(|tile| (tile, render_tile(scene, &tile)))
            .collect();
        compose(width, height, &rendered)
    }
}

fn compose(width: u32, height: u32, rendered: &[(Tile, RgbImage)]) -> RgbImage {
    let mut frame = RgbImage::new(width, height);
    for (tile, pixels) in rendered {
        imageops::replace(&mut frame, pixels, i64::from(tile.x), i64::from(tile.y));
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cylinder, Material, PointLight, Shape, Sphere, View};
    use image::Rgb;
    use molgif_math::Vec3;

    fn two_atom_scene(width: u32, height: u32) -> Scene {
        let white = Material::new(Rgb([255, 255, 255]));
        let red = Material::new(Rgb([240, 0, 0]));
        let a = Vec3::new(-0.6, 0.1, 0.0);
        let b = Vec3::new(0.6, -0.1, 0.2);
        let mid = (a + b) * 0.5;
        let shapes = vec![
            Shape::from(Sphere::new(a, 0.4, white)),
            Shape::from(Sphere::new(b, 0.4, red)),
            Shape::from(Cylinder::new(a, mid, 0.2, white)),
            Shape::from(Cylinder::new(b, mid, 0.2, red)),
        ];
        Scene::new(
            shapes,
            View::fit(width, height, 0.8),
            PointLight::default(),
            Rgb([10, 20, 30]),
        )
    }

    #[test]
    fn test_tiles_cover_raster_exactly() {
        let (w, h) = (150, 70);
        let ts = tiles(w, h, 64);
        assert_eq!(ts.len(), 3 * 2);
        let area: u32 = ts.iter().map(|t| t.width * t.height).sum();
        assert_eq!(area, w * h);
        assert_eq!(ts[2], Tile { x: 128, y: 0, width: 22, height: 64 });
        assert_eq!(ts[5], Tile { x: 128, y: 64, width: 22, height: 6 });
    }

    #[test]
    fn test_tiles_of_small_raster() {
        assert_eq!(tiles(10, 5, 64), vec![Tile { x: 0, y: 0, width: 10, height: 5 }]);
        assert!(tiles(0, 5, 64).is_empty());
    }

    #[test]
    fn test_zero_tile_size_is_rejected() {
        assert!(matches!(Renderer::new(1, 0), Err(RenderError::InvalidTileSize)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = two_atom_scene(97, 61);
        let renderer = Renderer::new(4, 16).unwrap();
        let parallel = renderer.render(&scene);
        let sequential = renderer.render_sequential(&scene);
        assert_eq!(parallel.dimensions(), (97, 61));
        assert_eq!(parallel.as_raw(), sequential.as_raw());
    }

    #[test]
    fn test_tile_size_does_not_change_output() {
        let scene = two_atom_scene(80, 80);
        let a = Renderer::new(2, 7).unwrap().render(&scene);
        let b = Renderer::new(3, 64).unwrap().render(&scene);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_frame_matches_per_pixel_evaluation() {
        let scene = two_atom_scene(40, 30);
        let frame = Renderer::new(2, 8).unwrap().render(&scene);
        for (x, y, pixel) in frame.enumerate_pixels() {
            assert_eq!(*pixel, scene.compute_pixel(x, y));
        }
    }

    #[test]
    fn test_thread_count() {
        let renderer = Renderer::new(3, 32).unwrap();
        assert_eq!(renderer.threads(), 3);
        assert_eq!(renderer.tile_size(), 32);
    }
}
