#![warn(missing_docs)]

//! Ray-traced animated GIFs of molecules.
//!
//! Loads an XYZ coordinate file, infers bonds, and renders a loop of the
//! molecule spinning about one or more axes. Atoms are drawn as spheres in
//! their element's color and each bond as two cylinder halves colored like
//! the atom at that end.
//!
//! # Pipeline
//!
//! - [`RenderSettings`] - Validated configuration, loadable from TOML
//! - [`geometry`] - Spheres and bond cylinders for the current orientation
//! - [`animate`] - Per-frame rotation
//! - [`FrameSequencer`] - Render, watermark and palettize each frame
//! - [`encode`] - GIF and PNG writers
//!
//! # Example
//!
//! ```
//! use molgif::{FrameSequencer, RenderSettings};
//! use molgif_mol::Molecule;
//!
//! let settings = RenderSettings {
//!     width: 32,
//!     height: 32,
//!     loop_seconds: 1,
//!     fps: 4,
//!     ..Default::default()
//! };
//! let mut mol = Molecule::from_records(
//!     [("C", [0.0, 0.0, 0.0]), ("O", [1.13, 0.0, 0.0])],
//!     settings.bond_policy(),
//! )?;
//!
//! let sequencer = FrameSequencer::new(settings)?;
//! let animation = sequencer.render_animation(&mut mol, |_, _| {});
//! assert_eq!(animation.len(), 4);
//!
//! let mut gif = Vec::new();
//! molgif::write_gif(&mut gif, &animation)?;
//! # Ok::<(), molgif::MolgifError>(())
//! ```

use std::path::Path;

pub mod animate;
pub mod banner;
pub mod encode;
mod error;
pub mod geometry;
pub mod palette;
pub mod sequence;
pub mod settings;

pub use animate::{frame_count, step_rotation, Animator, RotationAxes, Spin};
pub use banner::draw_banner;
pub use encode::{write_gif, write_png, OutputFormat};
pub use error::{MolgifError, Result};
pub use geometry::build_geometry;
pub use palette::{palettize, IndexedImage, Palette};
pub use sequence::{Animation, AnimationFrame, FrameSequencer};
pub use settings::RenderSettings;

/// Render the XYZ file at `input` and write it to `output`.
///
/// Settings are validated before the file is read, and `output` is only
/// written once the image is fully encoded, so a failed run leaves any
/// existing file untouched. `progress` receives `(done, total)` frame
/// counts; a still reports a single frame.
pub fn render_file<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    format: OutputFormat,
    settings: RenderSettings,
    mut progress: F,
) -> Result<()>
where
    F: FnMut(usize, usize),
{
    let output = output.as_ref();
    let sequencer = FrameSequencer::new(settings)?;
    let mut molecule = molgif_mol::xyz::load_xyz(input, sequencer.settings().bond_policy())?;

    let mut bytes = Vec::new();
    match format {
        OutputFormat::Png => {
            let still = sequencer.render_still(&molecule);
            progress(1, 1);
            write_png(&mut bytes, &still)?;
        }
        OutputFormat::Gif => {
            let animation = sequencer.render_animation(&mut molecule, progress);
            write_gif(&mut bytes, &animation)?;
        }
    }
    std::fs::write(output, &bytes)?;

    log::info!("wrote {}", output.display());
    Ok(())
}
