//! Pixel-font watermark.

use image::{Rgb, RgbImage};

/// Watermark color.
pub const BANNER_COLOR: Rgb<u8> = Rgb([200, 200, 200]);

/// Gap between the watermark and the image edges.
const MARGIN: u32 = 2;

const GLYPHS: [&str; 4] = [
    "oo.oo.oooo.o....ooo.ooo.ooo",
    "o.o.o.o..o.o...o.....o..o..",
    "o...o.o..o.o...o.oo..o..oo.",
    "o...o.oooo.ooo..ooo.ooo.o..",
];

/// Watermark size as `(width, height)`.
pub fn banner_size() -> (u32, u32) {
    (GLYPHS[0].len() as u32, GLYPHS.len() as u32)
}

/// Stamp "molgif" into the bottom-right corner. Pixels that would fall
/// outside a small image are skipped.
pub fn draw_banner(img: &mut RgbImage) {
    let (bw, bh) = banner_size();
    let left = i64::from(img.width()) - i64::from(bw + MARGIN);
    let top = i64::from(img.height()) - i64::from(bh + MARGIN);

    for (dy, row) in GLYPHS.iter().enumerate() {
        for (dx, c) in row.bytes().enumerate() {
            if c != b'o' {
                continue;
            }
            let (x, y) = (left + dx as i64, top + dy as i64);
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                if x < img.width() && y < img.height() {
                    img.put_pixel(x, y, BANNER_COLOR);
                }
            }
        }
    }
}
