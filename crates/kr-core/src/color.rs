use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::{CODE_MASK, Cell};

/// Couleurs standard de l'API de peinture du robot.
///
/// # Example
/// ```
/// use kr_core::color::ColorName;
/// assert_eq!(ColorName::Blue.as_str(), "blue");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    /// Explicit white paint. Not the same thing as an uncolored cell.
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Orange,
    Black,
    Gray,
    Purple,
}

impl ColorName {
    /// All colors, in standard code order.
    pub const ALL: [Self; 10] = [
        Self::White,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Cyan,
        Self::Orange,
        Self::Black,
        Self::Gray,
        Self::Purple,
    ];

    /// Name understood by the host paint call.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Black => "black",
            Self::Gray => "gray",
            Self::Purple => "purple",
        }
    }

    /// Display color (RGB) used by the terminal view and PNG export.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::White => (255, 255, 255),
            Self::Red => (220, 40, 40),
            Self::Blue => (40, 80, 220),
            Self::Green => (40, 170, 70),
            Self::Yellow => (240, 220, 50),
            Self::Cyan => (0, 200, 220),
            Self::Orange => (245, 150, 30),
            Self::Black => (15, 15, 15),
            Self::Gray => (128, 128, 128),
            Self::Purple => (140, 60, 180),
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table code couleur → nom, indexée par les 4 bits bas d'une cellule.
///
/// Remplace un dictionnaire dynamique : 16 entrées fixes, les codes
/// non mappés valent `None`.
///
/// # Example
/// ```
/// use kr_core::color::{ColorName, ColorTable};
/// let table = ColorTable::standard();
/// assert_eq!(table.get(2), Some(ColorName::Blue));
/// assert_eq!(table.get(12), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
    entries: [Option<ColorName>; 16],
}

impl ColorTable {
    /// Table with no mapped code.
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: [None; 16] }
    }

    /// Standard table: codes 0–9 map to [`ColorName::ALL`] in order.
    #[must_use]
    pub fn standard() -> Self {
        ColorName::ALL
            .iter()
            .enumerate()
            .fold(Self::empty(), |table, (code, &name)| {
                table.with(code as u8, name)
            })
    }

    /// Returns the table with `code` mapped to `name`.
    ///
    /// Only the low 4 bits of `code` are used.
    #[must_use]
    pub fn with(mut self, code: u8, name: ColorName) -> Self {
        self.entries[usize::from(code & CODE_MASK)] = Some(name);
        self
    }

    /// Look a color code up.
    #[inline]
    #[must_use]
    pub fn get(&self, code: u8) -> Option<ColorName> {
        self.entries.get(usize::from(code)).copied().flatten()
    }

    /// Resolve a decoded cell to its paint color.
    #[inline]
    #[must_use]
    pub fn resolve(&self, cell: Cell) -> Option<ColorName> {
        self.get(cell.code)
    }

    /// Number of mapped codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// `true` if no code is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First packed value in `data` whose code has no entry, as `(index, code)`.
    ///
    /// # Example
    /// ```
    /// use kr_core::color::ColorTable;
    /// let table = ColorTable::standard();
    /// assert_eq!(table.first_unmapped(&[2, 18, 0]), None);
    /// assert_eq!(table.first_unmapped(&[2, 27, 0]), Some((1, 11)));
    /// ```
    #[must_use]
    pub fn first_unmapped(&self, data: &[u8]) -> Option<(usize, u8)> {
        data.iter().enumerate().find_map(|(i, &v)| {
            let cell = Cell::unpack(v);
            self.resolve(cell).is_none().then_some((i, cell.code))
        })
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_codes_and_marker_variants() {
        let table = ColorTable::standard();
        assert_eq!(table.len(), 10);
        for v in (0..=9).chain(16..=25) {
            assert!(table.resolve(Cell::unpack(v)).is_some(), "valeur {v}");
        }
        assert_eq!(table.get(0), Some(ColorName::White));
        assert_eq!(table.get(9), Some(ColorName::Purple));
        assert_eq!(table.resolve(Cell::unpack(16)), Some(ColorName::White));
    }

    #[test]
    fn codes_ten_and_above_are_unmapped() {
        let table = ColorTable::standard();
        for code in 10..16 {
            assert_eq!(table.get(code), None);
        }
        assert_eq!(table.get(200), None);
    }

    #[test]
    fn with_overrides_single_entry() {
        let table = ColorTable::empty().with(3, ColorName::Red);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(3), Some(ColorName::Red));
        assert!(ColorTable::empty().is_empty());
    }
}
