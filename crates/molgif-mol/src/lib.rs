#![warn(missing_docs)]

//! Molecule model for molgif.
//!
//! - [`Element`] - handle into the static periodic table (symbol, color)
//! - [`Molecule`] - atoms plus distance-derived bonds, centered on the origin
//! - [`xyz`] - reader for the XYZ coordinate format
//!
//! # Example
//!
//! ```
//! use molgif_mol::{BondPolicy, Molecule};
//!
//! let mol = Molecule::from_records(
//!     [("O", [0.0, 0.0, 0.0]), ("H", [0.96, 0.0, 0.0]), ("H", [-0.24, 0.93, 0.0])],
//!     BondPolicy::default(),
//! )?;
//! assert_eq!(mol.bonds().len(), 2);
//! # Ok::<(), molgif_mol::MolError>(())
//! ```

pub mod element;
pub mod error;
pub mod molecule;
pub mod xyz;

pub use element::Element;
pub use error::{MolError, Result};
pub use molecule::{Atom, Bond, BondPolicy, Molecule, BOND_THRESHOLD};
