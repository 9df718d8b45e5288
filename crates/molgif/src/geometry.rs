//! Turns a molecule into renderable shapes.

use image::Rgb;
use molgif_mol::{Element, Molecule};
use molgif_raytrace::{Cylinder, Material, Shape, Sphere};

/// Bond radii at or below this are not drawn.
pub const MIN_BOND_RADIUS: f32 = 0.001;

/// Material for an element's CPK color.
pub fn element_material(element: Element) -> Material {
    Material::new(Rgb(element.color()))
}

/// Shapes for the molecule's current atom positions.
///
/// One sphere per atom, followed by two cylinders per bond: each runs from
/// an atom to the bond midpoint in that atom's color. The shapes copy the
/// positions, so this must be called again after the molecule moves.
pub fn build_geometry(molecule: &Molecule, atom_radius: f32, bond_radius: f32) -> Vec<Shape> {
    let draw_bonds = bond_radius > MIN_BOND_RADIUS;
    let capacity = molecule.atoms().len() + if draw_bonds { 2 * molecule.bonds().len() } else { 0 };
    let mut shapes = Vec::with_capacity(capacity);

    for atom in molecule.atoms() {
        shapes.push(Shape::from(Sphere::new(
            atom.position,
            atom_radius,
            element_material(atom.element),
        )));
    }

    if draw_bonds {
        for bond in molecule.bonds() {
            let (a, b) = molecule.bond_atoms(bond);
            let mid = (a.position + b.position) * 0.5;
            shapes.push(Shape::from(Cylinder::new(
                a.position,
                mid,
                bond_radius,
                element_material(a.element),
            )));
            shapes.push(Shape::from(Cylinder::new(
                b.position,
                mid,
                bond_radius,
                element_material(b.element),
            )));
        }
    }

    shapes
}
