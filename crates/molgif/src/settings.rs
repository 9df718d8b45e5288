//! Render configuration.

use std::path::Path;

use image::Rgb;
use molgif_math::Vec3;
use molgif_mol::{BondPolicy, BOND_THRESHOLD};
use molgif_raytrace::{PointLight, DEFAULT_AMBIENT, DEFAULT_TILE_SIZE};
use serde::{Deserialize, Serialize};

use crate::animate::{frame_count, RotationAxes};
use crate::error::{MolgifError, Result};

/// Frames per second of the animation.
pub const DEFAULT_FPS: u32 = 50;

/// Everything that controls how a molecule is rendered.
///
/// Every field has a default, so a settings file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Sphere radius drawn for every atom.
    pub atom_radius: f32,
    /// Bond cylinder radius. Clamped to the atom radius.
    pub bond_radius: f32,
    /// Duration of one animation loop in seconds.
    pub loop_seconds: u32,
    /// Animation frame rate.
    pub fps: u32,
    /// Render tile edge length in pixels.
    pub tile_size: u32,
    /// Worker threads; 0 uses one per CPU.
    pub threads: usize,
    /// Spin direction per axis.
    pub rotation: RotationAxes,
    /// Background color components, each 0-255.
    pub background: [u16; 3],
    /// Point light position.
    pub light_position: [f32; 3],
    /// Ambient lighting term.
    pub ambient: f32,
    /// Draw the watermark in the bottom-right corner.
    pub banner: bool,
    /// Bond hydrogens that are close to each other.
    pub bond_hydrogen_pairs: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let light = PointLight::default().position;
        Self {
            width: 256,
            height: 256,
            atom_radius: 0.4,
            bond_radius: 0.2,
            loop_seconds: 3,
            fps: DEFAULT_FPS,
            tile_size: DEFAULT_TILE_SIZE,
            threads: 0,
            rotation: RotationAxes::default(),
            background: [0, 0, 0],
            light_position: [light.x, light.y, light.z],
            ambient: DEFAULT_AMBIENT,
            banner: true,
            bond_hydrogen_pairs: false,
        }
    }
}

impl RenderSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MolgifError::InvalidSettings(
                "image width and height must be positive".into(),
            ));
        }
        if self.loop_seconds == 0 {
            return Err(MolgifError::InvalidSettings(
                "loop time must be positive".into(),
            ));
        }
        if self.fps == 0 {
            return Err(MolgifError::InvalidSettings("fps must be positive".into()));
        }
        // GIF delays count whole centiseconds.
        if self.fps > 100 {
            return Err(MolgifError::InvalidSettings("fps must be at most 100".into()));
        }
        if self.tile_size == 0 {
            return Err(MolgifError::InvalidSettings(
                "tile_size must be positive".into(),
            ));
        }
        if self.background.iter().any(|&c| c > 255) {
            return Err(MolgifError::InvalidSettings(
                "color component must be in the [0, 255] range".into(),
            ));
        }
        if !self.atom_radius.is_finite() || self.atom_radius < 0.0 {
            return Err(MolgifError::InvalidSettings(
                "atom size must not be negative".into(),
            ));
        }
        if !self.bond_radius.is_finite() || self.bond_radius < 0.0 {
            return Err(MolgifError::InvalidSettings(
                "bond size must not be negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.ambient) {
            return Err(MolgifError::InvalidSettings(
                "ambient must be between 0 and 1".into(),
            ));
        }
        if self.light_position.iter().any(|c| !c.is_finite()) {
            return Err(MolgifError::InvalidSettings(
                "light position must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Bond radius actually drawn: never thicker than the atoms.
    pub fn effective_bond_radius(&self) -> f32 {
        self.bond_radius.min(self.atom_radius)
    }

    /// Background as a pixel. Components above 255 saturate; [`validate`]
    /// rejects them beforehand.
    ///
    /// [`validate`]: RenderSettings::validate
    pub fn background_rgb(&self) -> Rgb<u8> {
        let [r, g, b] = self.background.map(|c| c.min(255) as u8);
        Rgb([r, g, b])
    }

    /// The configured light.
    pub fn light(&self) -> PointLight {
        let [x, y, z] = self.light_position;
        PointLight::new(Vec3::new(x, y, z))
    }

    /// Bonding rules for loading molecules.
    pub fn bond_policy(&self) -> BondPolicy {
        BondPolicy {
            threshold: BOND_THRESHOLD,
            bond_hydrogen_pairs: self.bond_hydrogen_pairs,
        }
    }

    /// Frames in one animation loop.
    pub fn frame_count(&self) -> usize {
        frame_count(self.loop_seconds, self.fps)
    }

    /// Delay between frames in centiseconds.
    pub fn frame_delay_cs(&self) -> u16 {
        u16::try_from(100 / self.fps.max(1)).map_or(u16::MAX, |cs| cs.max(1))
    }

    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize settings to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&text)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
