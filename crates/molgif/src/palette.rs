//! Reduction of full-color frames to a fixed 256-color palette.
//!
//! GIF frames reference at most 256 colors. Every frame uses the same
//! palette: a 6x6x6 color cube plus a ramp of 40 grays, with
//! Floyd-Steinberg error diffusion spreading the quantization error.

use image::imageops::{self, ColorMap};
use image::{GrayImage, Rgb, RgbImage, Rgba, RgbaImage};

const CUBE_LEVELS: usize = 6;
const CUBE_STEP: u8 = 51;
const CUBE_SIZE: usize = CUBE_LEVELS * CUBE_LEVELS * CUBE_LEVELS;
const GRAY_LEVELS: usize = 40;

/// A fixed palette of 256 colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Number of entries.
    pub const SIZE: usize = CUBE_SIZE + GRAY_LEVELS;

    /// The color cube followed by the gray ramp.
    pub fn new() -> Self {
        let mut colors = Vec::with_capacity(Self::SIZE);
        for r in 0..CUBE_LEVELS as u8 {
            for g in 0..CUBE_LEVELS as u8 {
                for b in 0..CUBE_LEVELS as u8 {
                    colors.push(Rgb([r * CUBE_STEP, g * CUBE_STEP, b * CUBE_STEP]));
                }
            }
        }
        for i in 1..=GRAY_LEVELS {
            let v = gray_value(i);
            colors.push(Rgb([v, v, v]));
        }
        Self { colors }
    }

    /// Palette entries in index order.
    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Color at `index`.
    pub fn color(&self, index: u8) -> Rgb<u8> {
        self.colors[usize::from(index)]
    }

    /// Index of the entry nearest to `color` in squared RGB distance.
    pub fn nearest(&self, color: &Rgb<u8>) -> u8 {
        let cube = cube_index(color);
        let gray = nearest_gray(color);
        let index = if distance(color, &self.colors[gray]) < distance(color, &self.colors[cube]) {
            gray
        } else {
            cube
        };
        index as u8
    }
}

fn gray_value(i: usize) -> u8 {
    (i * 255 / (GRAY_LEVELS + 1)) as u8
}

fn cube_level(c: u8) -> usize {
    (usize::from(c) + usize::from(CUBE_STEP) / 2) / usize::from(CUBE_STEP)
}

fn cube_index(color: &Rgb<u8>) -> usize {
    let Rgb([r, g, b]) = *color;
    (cube_level(r) * CUBE_LEVELS + cube_level(g)) * CUBE_LEVELS + cube_level(b)
}

/// Closest gray ramp entry to the channel mean, which minimizes the squared
/// distance among grays.
fn nearest_gray(color: &Rgb<u8>) -> usize {
    let Rgb([r, g, b]) = *color;
    let sum = u32::from(r) + u32::from(g) + u32::from(b);
    // Compare 3 * gray against the channel sum to stay in integers.
    let offset = |i: usize| (3 * u32::from(gray_value(i))).abs_diff(sum);
    let best = (2..=GRAY_LEVELS).fold(1, |best, i| if offset(i) < offset(best) { i } else { best });
    CUBE_SIZE + best - 1
}

fn distance(a: &Rgb<u8>, b: &Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            (d * d) as u32
        })
        .sum()
}

impl ColorMap for Palette {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Rgb<u8>) -> usize {
        usize::from(self.nearest(color))
    }

    fn lookup(&self, index: usize) -> Option<Rgb<u8>> {
        self.colors.get(index).copied()
    }

    fn has_lookup(&self) -> bool {
        true
    }

    fn map_color(&self, color: &mut Rgb<u8>) {
        *color = self.color(self.nearest(color));
    }
}

/// A frame whose pixels are indices into a [`Palette`].
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    indices: GrayImage,
    palette: Palette,
}

impl IndexedImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.indices.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.indices.height()
    }

    /// The palette the indices refer to.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of pixel `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> u8 {
        self.indices.get_pixel(x, y).0[0]
    }

    /// Row-major palette indices.
    pub fn indices(&self) -> &[u8] {
        self.indices.as_raw()
    }

    /// Resolve the indices back to opaque colors.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let Rgb([r, g, b]) = self.palette.color(self.index(x, y));
            Rgba([r, g, b, 255])
        })
    }
}

/// Dither `frame` onto `palette`.
pub fn palettize(frame: &RgbImage, palette: &Palette) -> IndexedImage {
    let mut dithered = frame.clone();
    imageops::dither(&mut dithered, palette);
    IndexedImage {
        indices: imageops::index_colors(&dithered, palette),
        palette: palette.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_256_distinct_colors() {
        let p = Palette::new();
        assert_eq!(p.colors().len(), 256);
        let unique: HashSet<_> = p.colors().iter().map(|c| c.0).collect();
        assert_eq!(unique.len(), 256);
    }

    #[test]
    fn test_palette_colors_map_to_themselves() {
        let p = Palette::new();
        for (i, c) in p.colors().iter().enumerate() {
            assert_eq!(usize::from(p.nearest(c)), i, "color {c:?}");
        }
    }

    #[test]
    fn test_nearest_prefers_gray_for_grays() {
        let p = Palette::new();
        let c = Rgb([130, 130, 130]);
        let Rgb([r, g, b]) = p.color(p.nearest(&c));
        assert_eq!((r, g), (g, b));
        assert!((i32::from(r) - 130).abs() <= 4);
    }

    #[test]
    fn test_gray_ramp_ends() {
        assert_eq!(nearest_gray(&Rgb([0, 0, 0])), CUBE_SIZE);
        assert_eq!(nearest_gray(&Rgb([255, 255, 255])), CUBE_SIZE + GRAY_LEVELS - 1);
        assert_eq!(nearest_gray(&Rgb([120, 130, 125])), nearest_gray(&Rgb([125, 125, 125])));
    }

    #[test]
    fn test_nearest_is_brute_force_nearest() {
        let p = Palette::new();
        for &c in &[[200u8, 30, 90], [12, 250, 1], [99, 100, 101], [255, 128, 0]] {
            let c = Rgb(c);
            let best = p
                .colors()
                .iter()
                .map(|e| distance(&c, e))
                .min()
                .unwrap();
            assert_eq!(distance(&c, &p.color(p.nearest(&c))), best);
        }
    }

    #[test]
    fn test_flat_palette_color_is_exact() {
        let p = Palette::new();
        let frame = RgbImage::from_pixel(16, 8, Rgb([255, 0, 0]));
        let indexed = palettize(&frame, &p);
        assert_eq!((indexed.width(), indexed.height()), (16, 8));
        assert!(indexed.to_rgba().pixels().all(|px| *px == Rgba([255, 0, 0, 255])));
    }

    #[test]
    fn test_dithering_preserves_average() {
        // An off-palette flat color dithers to a mix whose mean is close.
        let p = Palette::new();
        let frame = RgbImage::from_pixel(32, 32, Rgb([100, 40, 170]));
        let rgba = palettize(&frame, &p).to_rgba();
        let n = (32 * 32) as f32;
        let mean = |ch: usize| rgba.pixels().map(|px| f32::from(px.0[ch])).sum::<f32>() / n;
        assert!((mean(0) - 100.0).abs() < 6.0);
        assert!((mean(1) - 40.0).abs() < 6.0);
        assert!((mean(2) - 170.0).abs() < 6.0);
    }
}
