//! Static periodic table of element symbols and display colors.
//!
//! The table is immutable for the life of the process, so element handles
//! can be shared freely between rendering threads.

use std::fmt;

/// Symbol and diffuse RGB color per element, indexed by atomic number - 1.
static ELEMENTS: &[(&str, [u8; 3])] = &[
    ("H", [255, 255, 255]),
    ("He", [217, 255, 255]),
    ("Li", [205, 126, 255]),
    ("Be", [197, 255, 0]),
    ("B", [255, 183, 183]),
    ("C", [146, 146, 146]),
    ("N", [143, 143, 255]),
    ("O", [240, 0, 0]),
    ("F", [179, 255, 255]),
    ("Ne", [175, 227, 244]),
    ("Na", [170, 94, 242]),
    ("Mg", [137, 255, 0]),
    ("Al", [210, 165, 165]),
    ("Si", [129, 154, 154]),
    ("P", [255, 128, 0]),
    ("S", [255, 200, 50]),
    ("Cl", [32, 240, 32]),
    ("Ar", [129, 209, 228]),
    ("K", [143, 65, 211]),
    ("Ca", [61, 255, 0]),
    ("Sc", [230, 230, 228]),
    ("Ti", [192, 195, 198]),
    ("V", [167, 165, 172]),
    ("Cr", [139, 153, 198]),
    ("Mn", [156, 123, 198]),
    ("Fe", [129, 123, 198]),
    ("Co", [112, 123, 195]),
    ("Ni", [93, 123, 195]),
    ("Cu", [255, 123, 98]),
    ("Zn", [124, 129, 175]),
    ("Ga", [195, 146, 145]),
    ("Ge", [102, 146, 146]),
    ("As", [190, 129, 227]),
    ("Se", [255, 162, 0]),
    ("Br", [165, 42, 42]),
    ("Kr", [93, 186, 209]),
    ("Rb", [113, 46, 178]),
    ("Sr", [0, 254, 0]),
    ("Y", [150, 253, 255]),
    ("Zr", [150, 225, 225]),
    ("Nb", [116, 195, 203]),
    ("Mo", [85, 181, 183]),
    ("Tc", [60, 159, 168]),
    ("Ru", [35, 142, 151]),
    ("Rh", [11, 124, 140]),
    ("Pd", [0, 104, 134]),
    ("Ag", [153, 198, 255]),
    ("Cd", [255, 216, 145]),
    ("In", [167, 118, 115]),
    ("Sn", [102, 129, 129]),
    ("Sb", [159, 101, 181]),
    ("Te", [213, 123, 0]),
    ("I", [147, 0, 147]),
    ("Xe", [66, 159, 176]),
    ("Cs", [87, 25, 143]),
    ("Ba", [0, 202, 0]),
    ("La", [112, 222, 255]),
    ("Ce", [255, 255, 200]),
    ("Pr", [217, 255, 200]),
    ("Nd", [198, 255, 200]),
    ("Pm", [164, 255, 200]),
    ("Sm", [146, 255, 200]),
    ("Eu", [99, 255, 200]),
    ("Gd", [71, 255, 200]),
    ("Tb", [50, 255, 200]),
    ("Dy", [31, 255, 183]),
    ("Ho", [0, 254, 157]),
    ("Er", [0, 230, 118]),
    ("Tm", [0, 210, 83]),
    ("Yb", [0, 191, 57]),
    ("Lu", [0, 172, 35]),
    ("Hf", [77, 194, 255]),
    ("Ta", [77, 167, 255]),
    ("W", [39, 148, 214]),
    ("Re", [39, 126, 172]),
    ("Os", [39, 104, 151]),
    ("Ir", [24, 85, 135]),
    ("Pt", [24, 91, 145]),
    ("Au", [255, 209, 36]),
    ("Hg", [181, 181, 195]),
    ("Tl", [167, 85, 77]),
    ("Pb", [87, 90, 96]),
    ("Bi", [159, 79, 181]),
    ("Po", [172, 93, 0]),
    ("At", [118, 79, 69]),
    ("Rn", [66, 132, 151]),
    ("Fr", [66, 0, 102]),
    ("Ra", [0, 123, 0]),
    ("Ac", [113, 170, 252]),
    ("Th", [0, 186, 255]),
    ("Pa", [0, 160, 255]),
    ("U", [0, 145, 255]),
    ("Np", [0, 128, 242]),
    ("Pu", [0, 106, 242]),
    ("Am", [85, 91, 242]),
    ("Cm", [120, 91, 227]),
    ("Bk", [137, 79, 227]),
    ("Cf", [161, 55, 213]),
    ("Es", [179, 31, 213]),
    ("Fm", [179, 31, 186]),
    ("Md", [179, 13, 167]),
    ("No", [189, 13, 135]),
    ("Lr", [201, 0, 102]),
];

/// A chemical element, as a handle into the static element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element(u8);

impl Element {
    /// Hydrogen.
    pub const HYDROGEN: Self = Self(0);
    /// Carbon.
    pub const CARBON: Self = Self(5);
    /// Nitrogen.
    pub const NITROGEN: Self = Self(6);
    /// Oxygen.
    pub const OXYGEN: Self = Self(7);

    /// Look up an element by symbol.
    ///
    /// Symbols are matched case-insensitively (`"CL"`, `"cl"` and `"Cl"`
    /// all resolve to chlorine). Returns `None` for unknown symbols.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        ELEMENTS
            .iter()
            .position(|(s, _)| s.eq_ignore_ascii_case(symbol))
            .map(|idx| Self(idx as u8))
    }

    /// Canonical (title-case) symbol.
    pub fn symbol(self) -> &'static str {
        ELEMENTS[self.0 as usize].0
    }

    /// Atomic number.
    pub fn atomic_number(self) -> u8 {
        self.0 + 1
    }

    /// Display color as `[r, g, b]`.
    pub fn color(self) -> [u8; 3] {
        ELEMENTS[self.0 as usize].1
    }

    /// Whether this is hydrogen.
    pub fn is_hydrogen(self) -> bool {
        self == Self::HYDROGEN
    }

    /// Number of elements in the table.
    pub fn count() -> usize {
        ELEMENTS.len()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
