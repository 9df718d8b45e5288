//! Error types for the molgif pipeline.

use molgif_mol::MolError;
use molgif_raytrace::RenderError;
use thiserror::Error;

/// Errors surfaced by the render pipeline.
#[derive(Error, Debug)]
pub enum MolgifError {
    /// The molecule could not be loaded.
    #[error(transparent)]
    Input(#[from] MolError),

    /// The renderer could not be set up.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A configuration value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A settings file is not valid TOML.
    #[error("settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("settings serialization: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    /// Image encoding failed.
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Output or settings file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, MolgifError>;
