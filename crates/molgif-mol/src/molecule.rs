//! Atoms, distance-derived bonds, and rigid-body updates.

use molgif_math::{Mat3, Vec3};

use crate::element::Element;
use crate::error::{MolError, Result};

/// Interatomic distance below which two atoms are bonded.
pub const BOND_THRESHOLD: f32 = 1.6;

/// An atom with its element and current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// Element of the atom.
    pub element: Element,
    /// Current position.
    pub position: Vec3,
}

impl Atom {
    /// Create an atom.
    pub fn new(element: Element, position: Vec3) -> Self {
        Self { element, position }
    }
}

/// A bond between two atoms, stored as indices into the owning molecule's
/// atom list. Always `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Index of the first atom.
    pub a: usize,
    /// Index of the second atom.
    pub b: usize,
}

/// Rules for inferring bonds from geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondPolicy {
    /// Maximum bond length (exclusive).
    pub threshold: f32,
    /// Whether two hydrogens closer than the threshold are bonded.
    pub bond_hydrogen_pairs: bool,
}

impl Default for BondPolicy {
    fn default() -> Self {
        Self {
            threshold: BOND_THRESHOLD,
            bond_hydrogen_pairs: false,
        }
    }
}

impl BondPolicy {
    fn allows(&self, a: &Atom, b: &Atom) -> bool {
        if !self.bond_hydrogen_pairs && a.element.is_hydrogen() && b.element.is_hydrogen() {
            return false;
        }
        (a.position - b.position).norm_squared() < self.threshold * self.threshold
    }
}

/// A molecule: owned atoms plus the bond list derived from them.
///
/// Bond topology is fixed at construction; [`Molecule::rotate`] only moves
/// atoms.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    policy: BondPolicy,
}

impl Molecule {
    /// Build a molecule from atoms: infer bonds, then center on the origin.
    pub fn new(atoms: Vec<Atom>, policy: BondPolicy) -> Result<Self> {
        if atoms.is_empty() {
            return Err(MolError::Empty);
        }
        let mut mol = Self {
            atoms,
            bonds: Vec::new(),
            policy,
        };
        mol.make_bonds();
        mol.move_to_origin();
        log::debug!(
            "molecule: {} atoms, {} bonds",
            mol.atoms.len(),
            mol.bonds.len()
        );
        Ok(mol)
    }

    /// Build a molecule from `(symbol, [x, y, z])` records.
    pub fn from_records<S, I>(records: I, policy: BondPolicy) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, [f32; 3])>,
    {
        let atoms = records
            .into_iter()
            .map(|(symbol, [x, y, z])| {
                let symbol = symbol.as_ref();
                Element::from_symbol(symbol)
                    .map(|element| Atom::new(element, Vec3::new(x, y, z)))
                    .ok_or_else(|| MolError::UnknownElement(symbol.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(atoms, policy)
    }

    /// Atoms in input order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds, each with `a < b`.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Bonding rules this molecule was built with.
    pub fn policy(&self) -> &BondPolicy {
        &self.policy
    }

    /// The two atoms joined by `bond`.
    pub fn bond_atoms(&self, bond: &Bond) -> (&Atom, &Atom) {
        (&self.atoms[bond.a], &self.atoms[bond.b])
    }

    /// Recompute bonds from current positions.
    ///
    /// O(n²) scan over unordered atom pairs.
    pub fn make_bonds(&mut self) {
        self.bonds.clear();
        for (i, a) in self.atoms.iter().enumerate() {
            for (j, b) in self.atoms.iter().enumerate().skip(i + 1) {
                if self.policy.allows(a, b) {
                    self.bonds.push(Bond { a: i, b: j });
                }
            }
        }
    }

    /// Arithmetic mean of all atom positions.
    pub fn centroid(&self) -> Vec3 {
        let sum = self
            .atoms
            .iter()
            .fold(Vec3::zeros(), |acc, atom| acc + atom.position);
        sum / self.atoms.len() as f32
    }

    /// Translate all atoms so the centroid sits at the origin.
    pub fn move_to_origin(&mut self) {
        let c = self.centroid();
        for atom in &mut self.atoms {
            atom.position -= c;
        }
    }

    /// Apply `rot` to every atom position in place. Bonds are unchanged.
    pub fn rotate(&mut self, rot: &Mat3) {
        for atom in &mut self.atoms {
            atom.position = rot * atom.position;
        }
    }

    /// Largest distance of any atom from the origin.
    pub fn bounding_radius(&self) -> f32 {
        self.atoms
            .iter()
            .map(|atom| atom.position.norm())
            .fold(0.0, f32::max)
    }
}
