/// Bits 0–3 of a packed value: color code.
pub const CODE_MASK: u8 = 0x0F;

/// Bit 4 of a packed value: a marker sits on the cell.
pub const MARKER_BIT: u8 = 0x10;

/// Forme décodée d'une valeur de buffer : code couleur + drapeau marqueur.
///
/// Le bit-packing est confiné à `unpack` / `pack` ; le reste du code ne
/// manipule jamais les bits bruts.
///
/// # Example
/// ```
/// use kr_core::cell::Cell;
/// let cell = Cell::unpack(18);
/// assert_eq!(cell.code, 2);
/// assert!(cell.marker);
/// assert_eq!(cell.pack(), 18);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Index into the color table [0, 15].
    pub code: u8,
    /// Place a marker in addition to painting.
    pub marker: bool,
}

impl Cell {
    /// Decode a packed buffer value.
    #[inline]
    #[must_use]
    pub fn unpack(value: u8) -> Self {
        Self {
            code: value & CODE_MASK,
            marker: value & MARKER_BIT != 0,
        }
    }

    /// Re-encode into the packed form. Codes above 15 are truncated.
    #[inline]
    #[must_use]
    pub fn pack(self) -> u8 {
        (self.code & CODE_MASK) | if self.marker { MARKER_BIT } else { 0 }
    }
}
