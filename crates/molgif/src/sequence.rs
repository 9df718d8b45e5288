//! Frame sequencing: geometry, rendering and palettization per frame.

use image::RgbImage;
use molgif_mol::Molecule;
use molgif_raytrace::{Renderer, Scene, View};

use crate::animate::Animator;
use crate::banner::draw_banner;
use crate::error::Result;
use crate::geometry::build_geometry;
use crate::palette::{palettize, IndexedImage, Palette};
use crate::settings::RenderSettings;

/// One palettized animation frame.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// Indexed pixels.
    pub image: IndexedImage,
    /// Time to show this frame, in centiseconds.
    pub delay_cs: u16,
}

/// Ordered frames of one animation loop.
#[derive(Debug, Clone, Default)]
pub struct Animation {
    /// Frames in display order.
    pub frames: Vec<AnimationFrame>,
}

impl Animation {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the animation has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total loop duration in centiseconds.
    pub fn duration_cs(&self) -> u32 {
        self.frames.iter().map(|f| u32::from(f.delay_cs)).sum()
    }
}

/// Drives the renderer over a molecule, frame after frame.
pub struct FrameSequencer {
    settings: RenderSettings,
    bond_radius: f32,
    renderer: Renderer,
    palette: Palette,
}

impl FrameSequencer {
    /// Validate `settings` and spin up the render pool.
    pub fn new(settings: RenderSettings) -> Result<Self> {
        settings.validate()?;
        let bond_radius = settings.effective_bond_radius();
        if bond_radius < settings.bond_radius {
            log::warn!(
                "bond size {} exceeds atom size {}, clamping",
                settings.bond_radius,
                settings.atom_radius
            );
        }
        let renderer = Renderer::new(settings.threads, settings.tile_size)?;
        Ok(Self {
            settings,
            bond_radius,
            renderer,
            palette: Palette::new(),
        })
    }

    /// The settings in use.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Bond radius actually drawn.
    pub fn bond_radius(&self) -> f32 {
        self.bond_radius
    }

    /// The underlying tile renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Scene for the molecule's current orientation.
    ///
    /// `radius` is the largest atom-center distance from the origin and
    /// fixes the camera distance; pass the same value for every frame of an
    /// animation so the camera does not move. The atom spheres are added
    /// on top so they stay in frame too.
    pub fn scene(&self, molecule: &Molecule, radius: f32) -> Scene {
        let s = &self.settings;
        let shapes = build_geometry(molecule, s.atom_radius, self.bond_radius);
        Scene::new(
            shapes,
            View::fit(s.width, s.height, radius + s.atom_radius),
            s.light(),
            s.background_rgb(),
        )
        .with_ambient(s.ambient)
    }

    /// Render one full-color frame of the molecule as it is now, with the
    /// watermark if enabled.
    pub fn render_still(&self, molecule: &Molecule) -> RgbImage {
        self.render_frame(molecule, molecule.bounding_radius())
    }

    fn render_frame(&self, molecule: &Molecule, radius: f32) -> RgbImage {
        let scene = self.scene(molecule, radius);
        let mut frame = self.renderer.render(&scene);
        if self.settings.banner {
            draw_banner(&mut frame);
        }
        frame
    }

    /// Render one full loop, rotating `molecule` after every frame.
    ///
    /// The first frame shows the molecule's current orientation. After a
    /// single-axis loop the molecule is back where it started, up to
    /// rounding. `progress` is called with `(done, total)` after each
    /// frame.
    pub fn render_animation<F>(&self, molecule: &mut Molecule, mut progress: F) -> Animation
    where
        F: FnMut(usize, usize),
    {
        let nframes = self.settings.frame_count();
        let delay_cs = self.settings.frame_delay_cs();
        let animator = Animator::new(&self.settings.rotation, nframes);
        // Rotation about the centroid keeps this radius for every frame.
        let radius = molecule.bounding_radius();

        log::info!(
            "rendering {} frames at {}x{} ({} threads)",
            nframes,
            self.settings.width,
            self.settings.height,
            self.renderer.threads()
        );

        let mut frames = Vec::with_capacity(nframes);
        for i in 0..nframes {
            let raster = self.render_frame(molecule, radius);
            frames.push(AnimationFrame {
                image: palettize(&raster, &self.palette),
                delay_cs,
            });
            animator.advance(molecule);
            log::debug!("frame {}/{} done", i + 1, nframes);
            progress(i + 1, nframes);
        }

        Animation { frames }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molgif_mol::BondPolicy;

    fn small_settings() -> RenderSettings {
        RenderSettings {
            width: 24,
            height: 16,
            loop_seconds: 1,
            fps: 5,
            threads: 2,
            tile_size: 8,
            banner: false,
            ..Default::default()
        }
    }

    fn water() -> Molecule {
        Molecule::from_records(
            [
                ("O", [0.0, 0.0, 0.0]),
                ("H", [0.76, 0.59, 0.0]),
                ("H", [-0.76, 0.59, 0.0]),
            ],
            BondPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_settings_rejected_up_front() {
        let s = RenderSettings {
            height: 0,
            ..Default::default()
        };
        assert!(FrameSequencer::new(s).is_err());
    }

    #[test]
    fn test_animation_frame_count_and_progress() {
        let seq = FrameSequencer::new(small_settings()).unwrap();
        let mut mol = water();
        let mut calls = Vec::new();
        let anim = seq.render_animation(&mut mol, |done, total| calls.push((done, total)));
        assert_eq!(anim.len(), 5);
        assert!(anim.frames.iter().all(|f| f.delay_cs == 20));
        assert_eq!(anim.duration_cs(), 100);
        assert_eq!(calls, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
        assert_eq!((anim.frames[0].image.width(), anim.frames[0].image.height()), (24, 16));
    }

    #[test]
    fn test_scene_uses_clamped_bond_radius() {
        let seq = FrameSequencer::new(RenderSettings {
            atom_radius: 0.1,
            bond_radius: 0.5,
            ..small_settings()
        })
        .unwrap();
        let scene = seq.scene(&water(), 1.0);
        // Three atoms plus two O-H bonds of two halves each.
        assert_eq!(scene.shapes.len(), 3 + 4);
        for shape in &scene.shapes[3..] {
            let molgif_raytrace::Shape::Cylinder(c) = shape else {
                panic!("expected a bond cylinder");
            };
            assert_eq!(c.radius(), 0.1);
        }
        assert_eq!(seq.bond_radius(), 0.1);
    }

    #[test]
    fn test_unclamped_bond_radius_is_kept() {
        let seq = FrameSequencer::new(small_settings()).unwrap();
        assert_eq!(seq.bond_radius(), 0.2);
    }

    #[test]
    fn test_camera_fits_atom_spheres() {
        // Centers alone would fit at the margin distance; the spheres
        // around them must fit as well.
        let seq = FrameSequencer::new(RenderSettings {
            width: 64,
            height: 256,
            atom_radius: 0.4,
            ..small_settings()
        })
        .unwrap();
        let mol = Molecule::from_records(
            [("C", [-4.0, 0.0, 0.0]), ("C", [4.0, 0.0, 0.0])],
            BondPolicy::default(),
        )
        .unwrap();
        let scene = seq.scene(&mol, mol.bounding_radius());
        for atom in mol.atoms() {
            for offset in [-0.4f32, 0.4] {
                let edge = atom.position + molgif_math::Vec3::x() * offset;
                let (px, _) = scene.view.project(&edge).unwrap();
                assert!((0.0..=64.0).contains(&px), "x = {px}");
            }
        }
    }

    #[test]
    fn test_banner_toggle() {
        let mol = water();
        let with = FrameSequencer::new(RenderSettings {
            width: 64,
            height: 32,
            banner: true,
            ..small_settings()
        })
        .unwrap()
        .render_still(&mol);
        let without = FrameSequencer::new(RenderSettings {
            width: 64,
            height: 32,
            ..small_settings()
        })
        .unwrap()
        .render_still(&mol);
        assert_ne!(with, without);
        assert_eq!(*with.get_pixel(64 - 29, 32 - 6), crate::banner::BANNER_COLOR);
    }
}
