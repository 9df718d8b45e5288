//! Per-frame rotation of the molecule.

use std::f32::consts::TAU;

use molgif_math::{rotation_x, rotation_y, rotation_z, Mat3};
use molgif_mol::Molecule;
use serde::{Deserialize, Serialize};

/// Rotation request for a single axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    /// No rotation about this axis.
    #[default]
    None,
    /// Counter-clockwise (positive angle).
    Forward,
    /// Clockwise (negative angle).
    Reverse,
}

impl Spin {
    /// Signed weight: 0, +1 or -1.
    pub fn weight(self) -> f32 {
        match self {
            Spin::None => 0.0,
            Spin::Forward => 1.0,
            Spin::Reverse => -1.0,
        }
    }

    /// Resolve a pair of forward/reverse flags; reverse wins.
    pub fn from_flags(forward: bool, reverse: bool) -> Self {
        if reverse {
            Spin::Reverse
        } else if forward {
            Spin::Forward
        } else {
            Spin::None
        }
    }
}

/// Requested spin about each of the three axes.
///
/// Axes missing from a settings table do not spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationAxes {
    /// Spin about X.
    #[serde(default)]
    pub x: Spin,
    /// Spin about Y.
    #[serde(default)]
    pub y: Spin,
    /// Spin about Z.
    #[serde(default)]
    pub z: Spin,
}

impl Default for RotationAxes {
    fn default() -> Self {
        Self {
            x: Spin::None,
            y: Spin::Forward,
            z: Spin::None,
        }
    }
}

impl RotationAxes {
    /// No rotation at all.
    pub const NONE: Self = Self {
        x: Spin::None,
        y: Spin::None,
        z: Spin::None,
    };

    /// Whether no axis is requested.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// The axes actually used: an empty request falls back to Y forward.
    pub fn effective(&self) -> Self {
        if self.is_empty() {
            Self::default()
        } else {
            *self
        }
    }

    /// Weights as `[x, y, z]`.
    pub fn weights(&self) -> [f32; 3] {
        [self.x.weight(), self.y.weight(), self.z.weight()]
    }
}

/// Number of frames in a loop of `loop_seconds` at `fps`.
pub fn frame_count(loop_seconds: u32, fps: u32) -> usize {
    loop_seconds as usize * fps as usize
}

/// Incremental rotation applied between consecutive frames.
///
/// Each active axis turns by `weight * 2π / (nframes * sqrt(Σ|weight|))`,
/// so a single axis makes exactly one revolution over `nframes` steps and
/// combined axes keep a comparable angular rate. The matrix is
/// `Rz · Ry · Rx`.
pub fn step_rotation(axes: &RotationAxes, nframes: usize) -> Mat3 {
    let axes = axes.effective();
    let [wx, wy, wz] = axes.weights();
    let total = wx.abs() + wy.abs() + wz.abs();
    if nframes == 0 {
        return Mat3::identity();
    }
    let angle = TAU / (nframes as f32 * total.sqrt());
    rotation_z(angle * wz) * rotation_y(angle * wy) * rotation_x(angle * wx)
}

/// Steps a molecule through one animation loop.
#[derive(Debug, Clone)]
pub struct Animator {
    step: Mat3,
    nframes: usize,
}

impl Animator {
    /// Animator for `nframes` frames spinning about `axes`.
    pub fn new(axes: &RotationAxes, nframes: usize) -> Self {
        Self {
            step: step_rotation(axes, nframes),
            nframes,
        }
    }

    /// Frames in one loop.
    pub fn frames(&self) -> usize {
        self.nframes
    }

    /// The per-frame rotation matrix.
    pub fn step(&self) -> &Mat3 {
        &self.step
    }

    /// Rotate the molecule to the next frame's orientation.
    pub fn advance(&self, molecule: &mut Molecule) {
        molecule.rotate(&self.step);
    }
}
