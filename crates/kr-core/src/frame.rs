use crate::cell::Cell;
use crate::error::CoreError;

/// Buffer carré de valeurs couleur packées, row-major.
///
/// `index = row * side + col`, `data.len() == side²`. Construit une fois
/// au démarrage, remplacé au plus une fois par l'upscaler.
///
/// # Example
/// ```
/// use kr_core::frame::ColorBuffer;
/// let buf = ColorBuffer::from_rows(&[&[1, 2], &[3, 18]]).unwrap();
/// assert_eq!(buf.side(), 2);
/// assert_eq!(buf.get(1, 0), 3);
/// assert!(buf.cell(1, 1).marker);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorBuffer {
    data: Vec<u8>,
    side: usize,
}

impl ColorBuffer {
    /// Wrap flat row-major data.
    ///
    /// # Errors
    /// Returns [`CoreError::Load`] if `side` is zero or `data.len() != side²`.
    pub fn new(data: Vec<u8>, side: usize) -> Result<Self, CoreError> {
        if side == 0 {
            return Err(CoreError::Load("buffer vide".into()));
        }
        if data.len() != side * side {
            return Err(CoreError::Load(format!(
                "{} valeurs pour un côté de {side} (attendu {})",
                data.len(),
                side * side
            )));
        }
        Ok(Self { data, side })
    }

    /// Build from a list of rows, checking that the image is square.
    ///
    /// # Errors
    /// Returns [`CoreError::Load`] on empty input, ragged rows, or a
    /// non-square shape.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, CoreError> {
        let side = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(CoreError::Load(format!(
                "ligne {row} : {} colonnes, attendu {side}",
                r.len()
            )));
        }
        Self::new(rows.concat(), side)
    }

    /// Build from a fixed-size square array. Cannot fail: the shape is
    /// checked by the type.
    ///
    /// # Example
    /// ```
    /// use kr_core::frame::ColorBuffer;
    /// let buf = ColorBuffer::from_square(&[[0, 1], [2, 3]]);
    /// assert_eq!(buf.get(1, 0), 2);
    /// ```
    #[must_use]
    pub fn from_square<const N: usize>(rows: &[[u8; N]; N]) -> Self {
        const { assert!(N > 0, "empty frame") };
        Self {
            data: rows.concat(),
            side: N,
        }
    }

    /// Build a `side`×`side` buffer by calling `f(row, col)` for each cell,
    /// in row-major order.
    ///
    /// # Panics
    /// Panics if `side` is zero.
    ///
    /// # Example
    /// ```
    /// use kr_core::frame::ColorBuffer;
    /// let buf = ColorBuffer::from_fn(3, |row, col| (row * 3 + col) as u8);
    /// assert_eq!(buf.get(2, 2), 8);
    /// ```
    #[must_use]
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        assert!(side > 0, "empty frame");
        let mut data = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                data.push(f(row, col));
            }
        }
        Self { data, side }
    }

    /// Edge length in cells.
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (`side²`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a buffer has at least one cell.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw packed values, row-major.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Row-major index of (row, col).
    #[inline(always)]
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side && col < self.side, "cell out of bounds");
        row * self.side + col
    }

    /// Packed value at (row, col).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[self.index(row, col)]
    }

    /// Packed value at a flat index, `None` past the end.
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Decoded cell at (row, col).
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell::unpack(self.get(row, col))
    }

    /// Number of cells flagged with a marker.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.data.iter().filter(|&&v| Cell::unpack(v).marker).count()
    }
}
