use kr_core::config::RasterConfig;
use kr_core::{ColorName, CoreError, Heading, Robot, RobotError};

/// État d'une case du monde.
///
/// `paint == None` = case jamais peinte, distincte d'une case peinte en blanc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldCell {
    /// Dernière couleur peinte, `None` si jamais peinte.
    pub paint: Option<ColorName>,
    /// Nombre de marqueurs posés sur la case.
    pub markers: u32,
}

/// Un appel `paint` enregistré, dans l'ordre d'émission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintEvent {
    /// Row of the painted cell (0 = north edge).
    pub row: usize,
    /// Column of the painted cell (0 = west edge).
    pub col: usize,
    /// Color passed to `paint`.
    pub color: ColorName,
}

/// Compteurs d'opérations du robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Successful forward moves.
    pub moves: usize,
    /// Left and right turns.
    pub turns: usize,
    /// Paint calls.
    pub paints: usize,
    /// Markers placed.
    pub markers_put: usize,
    /// Markers picked up.
    pub markers_taken: usize,
}

/// Monde en grille bordé de murs, avec un robot.
///
/// Le robot démarre au coin sud-ouest, face à l'est. Les lignes sont
/// numérotées depuis le bord nord.
///
/// # Example
/// ```
/// use kr_core::{Heading, Robot};
/// use kr_world::GridWorld;
/// let mut world = GridWorld::new(3, 3).unwrap();
/// assert_eq!(world.position(), (2, 0));
/// assert!(world.facing(Heading::East));
/// assert!(world.right_is_blocked());
/// world.move_forward().unwrap();
/// assert_eq!(world.position(), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    cells: Vec<WorldCell>,
    row: usize,
    col: usize,
    heading: Heading,
    paint_log: Vec<PaintEvent>,
    counts: OpCounts,
}

impl GridWorld {
    /// Crée un monde vierge de `rows`×`cols` cases.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, CoreError> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![WorldCell::default(); rows * cols],
            row: rows - 1,
            col: 0,
            heading: Heading::East,
            paint_log: Vec::new(),
            counts: OpCounts::default(),
        })
    }

    /// Monde aux dimensions de la config.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero.
    pub fn from_config(config: &RasterConfig) -> Result<Self, CoreError> {
        Self::new(config.world_rows, config.world_cols)
    }

    /// Replace le robot.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if (row, col) is outside the world.
    pub fn with_robot(mut self, row: usize, col: usize, heading: Heading) -> Result<Self, CoreError> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::Config(format!(
                "robot hors du monde : ({row}, {col}) dans {}×{}",
                self.rows, self.cols
            )));
        }
        self.row = row;
        self.col = col;
        self.heading = heading;
        Ok(self)
    }

    /// Nombre de lignes.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Nombre de colonnes.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Position (row, col) du robot.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Direction du robot.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Case (row, col).
    ///
    /// # Panics
    /// Panics if (row, col) is outside the world.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &WorldCell {
        &self.cells[row * self.cols + col]
    }

    /// Toutes les cases, row-major.
    #[must_use]
    pub fn cells(&self) -> &[WorldCell] {
        &self.cells
    }

    /// Appels `paint` dans l'ordre.
    #[must_use]
    pub fn paint_log(&self) -> &[PaintEvent] {
        &self.paint_log
    }

    /// Compteurs d'opérations.
    #[must_use]
    pub fn counts(&self) -> OpCounts {
        self.counts
    }

    /// Nombre de cases peintes au moins une fois.
    #[must_use]
    pub fn painted_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.paint.is_some()).count()
    }

    /// Case voisine dans la direction `heading`, `None` si un mur bloque.
    fn neighbor(&self, heading: Heading) -> Option<(usize, usize)> {
        let (dr, dc) = heading.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    fn here(&mut self) -> &mut WorldCell {
        &mut self.cells[self.row * self.cols + self.col]
    }
}

impl Robot for GridWorld {
    fn move_forward(&mut self) -> Result<(), RobotError> {
        let Some((row, col)) = self.neighbor(self.heading) else {
            log::error!(
                "Robot crash : mur en ({}, {}) face {}",
                self.row,
                self.col,
                self.heading
            );
            return Err(RobotError::Crashed {
                row: self.row,
                col: self.col,
                heading: self.heading,
            });
        };
        self.row = row;
        self.col = col;
        self.counts.moves += 1;
        Ok(())
    }

    fn turn_left(&mut self) {
        self.heading = self.heading.left();
        self.counts.turns += 1;
    }

    fn turn_right(&mut self) {
        self.heading = self.heading.right();
        self.counts.turns += 1;
    }

    fn front_is_clear(&self) -> bool {
        self.neighbor(self.heading).is_some()
    }

    fn left_is_blocked(&self) -> bool {
        self.neighbor(self.heading.left()).is_none()
    }

    fn right_is_blocked(&self) -> bool {
        self.neighbor(self.heading.right()).is_none()
    }

    fn facing(&self, heading: Heading) -> bool {
        self.heading == heading
    }

    fn paint(&mut self, color: ColorName) -> Result<(), RobotError> {
        self.here().paint = Some(color);
        self.paint_log.push(PaintEvent {
            row: self.row,
            col: self.col,
            color,
        });
        self.counts.paints += 1;
        Ok(())
    }

    fn put_marker(&mut self) -> Result<(), RobotError> {
        self.here().markers += 1;
        self.counts.markers_put += 1;
        Ok(())
    }

    fn markers_present(&self) -> bool {
        self.cell(self.row, self.col).markers > 0
    }

    fn take_marker(&mut self) -> Result<(), RobotError> {
        let (row, col) = (self.row, self.col);
        let cell = self.here();
        if cell.markers == 0 {
            return Err(RobotError::NoMarker { row, col });
        }
        cell.markers -= 1;
        self.counts.markers_taken += 1;
        Ok(())
    }
}
