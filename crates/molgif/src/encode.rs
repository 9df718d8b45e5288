//! GIF and PNG output.

use std::io::Write;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::png::PngEncoder;
use image::{Delay, ExtendedColorType, Frame, ImageEncoder, RgbImage};

use crate::error::Result;
use crate::sequence::Animation;

/// Output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Looping animated GIF.
    Gif,
    /// Single full-color PNG still.
    Png,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Gif => "gif",
            OutputFormat::Png => "png",
        }
    }

    /// Format implied by a path's extension, if recognized.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("gif") {
            Some(OutputFormat::Gif)
        } else if ext.eq_ignore_ascii_case("png") {
            Some(OutputFormat::Png)
        } else {
            None
        }
    }
}

/// Write an endlessly looping GIF.
///
/// Every frame already uses at most 256 colors, so the encoder keeps them
/// exactly.
pub fn write_gif<W: Write>(writer: W, animation: &Animation) -> Result<()> {
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    for frame in &animation.frames {
        let delay = Delay::from_numer_denom_ms(u32::from(frame.delay_cs) * 10, 1);
        encoder.encode_frame(Frame::from_parts(frame.image.to_rgba(), 0, 0, delay))?;
    }
    log::debug!("encoded {} GIF frames", animation.len());
    Ok(())
}

/// Write a full-color PNG.
pub fn write_png<W: Write>(writer: W, image: &RgbImage) -> Result<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
