use kr_core::{ColorBuffer, ColorTable, Heading, Robot};

use crate::error::RasterError;
use crate::pixel::render_pixel;

/// Sens de balayage de la ligne courante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// West to east, cursor +1 per step.
    Forward,
    /// East to west, cursor -1 per step.
    Backward,
}

impl Sweep {
    /// Signed cursor increment for one step along the row.
    #[inline]
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Bilan d'un rendu terminé.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Side of the rendered buffer.
    pub side: usize,
    /// `true` if the buffer was upscaled to fit the world.
    pub upscaled: bool,
    /// Cells painted.
    pub visited: usize,
    /// Markers placed.
    pub markers: usize,
    /// Row changes performed.
    pub row_changes: usize,
}

/// Session de rendu : possède le buffer, la table, le curseur et le sens.
///
/// Invariant central : `cursor` est toujours l'index row-major de la case
/// sous le robot.
///
/// # Example
/// ```
/// use kr_core::{ColorBuffer, ColorTable};
/// use kr_raster::{RenderSession, Sweep};
/// let session = RenderSession::new(ColorBuffer::from_rows(&[&[2]]).unwrap(), ColorTable::standard());
/// assert_eq!(session.cursor(), 0);
/// assert_eq!(session.sweep(), Sweep::Forward);
/// ```
pub struct RenderSession {
    buffer: ColorBuffer,
    table: ColorTable,
    cursor: usize,
    sweep: Sweep,
    report: RenderReport,
}

impl RenderSession {
    /// Nouvelle session, curseur en 0, balayage vers l'est.
    #[must_use]
    pub fn new(buffer: ColorBuffer, table: ColorTable) -> Self {
        let side = buffer.side();
        Self {
            buffer,
            table,
            cursor: 0,
            sweep: Sweep::Forward,
            report: RenderReport {
                side,
                ..RenderReport::default()
            },
        }
    }

    /// Index of the buffer cell under the robot.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current sweep direction.
    #[must_use]
    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    /// Buffer being rendered.
    #[must_use]
    pub fn buffer(&self) -> &ColorBuffer {
        &self.buffer
    }

    /// Parcours boustrophédon complet du monde.
    ///
    /// Le robot doit être au coin nord-ouest, face à l'est (postcondition de
    /// [`crate::probe`]). Chaque case est peinte exactement une fois ; chaque
    /// pas est précédé d'un test « voie libre ».
    ///
    /// # Errors
    /// Any [`RasterError`] aborts the render; cells already painted stay
    /// painted.
    pub fn run<R: Robot + ?Sized>(mut self, robot: &mut R) -> Result<RenderReport, RasterError> {
        self.render_here(robot)?;
        loop {
            self.sweep_row(robot)?;
            if at_last_cell(robot)? {
                break;
            }
            self.next_row(robot)?;
            self.render_here(robot)?;
        }
        log::info!(
            "Rendu terminé : {} cases, {} marqueurs",
            self.report.visited,
            self.report.markers
        );
        Ok(self.report)
    }

    /// Balaye la ligne jusqu'au mur.
    fn sweep_row<R: Robot + ?Sized>(&mut self, robot: &mut R) -> Result<(), RasterError> {
        while robot.front_is_clear() {
            robot.move_forward()?;
            self.advance(self.sweep.step())?;
            self.render_here(robot)?;
        }
        Ok(())
    }

    /// Demi-tour en U vers la ligne suivante (au sud).
    fn next_row<R: Robot + ?Sized>(&mut self, robot: &mut R) -> Result<(), RasterError> {
        if robot.facing(Heading::East) {
            robot.turn_right();
            step_into_next_row(robot)?;
            robot.turn_right();
            self.sweep = Sweep::Backward;
        } else {
            robot.turn_left();
            step_into_next_row(robot)?;
            robot.turn_left();
            self.sweep = Sweep::Forward;
        }
        self.advance(self.buffer.side() as isize)?;
        self.report.row_changes += 1;
        log::debug!("Ligne {} ({:?})", self.cursor / self.buffer.side(), self.sweep);
        Ok(())
    }

    fn advance(&mut self, delta: isize) -> Result<(), RasterError> {
        let len = self.buffer.len();
        self.cursor = self
            .cursor
            .checked_add_signed(delta)
            .filter(|&c| c < len)
            .ok_or(RasterError::CursorOutOfRange {
                cursor: self.cursor,
                len,
            })?;
        Ok(())
    }

    fn render_here<R: Robot + ?Sized>(&mut self, robot: &mut R) -> Result<(), RasterError> {
        let cell = render_pixel(robot, &self.buffer, self.cursor, &self.table)?;
        self.report.visited += 1;
        if cell.marker {
            self.report.markers += 1;
        }
        Ok(())
    }
}

/// Fin du parcours : le mur latéral côté sud est bloqué dans le sens du
/// balayage (droite vers l'est, gauche vers l'ouest).
fn at_last_cell<R: Robot + ?Sized>(robot: &R) -> Result<bool, RasterError> {
    if robot.facing(Heading::East) {
        Ok(robot.right_is_blocked())
    } else if robot.facing(Heading::West) {
        Ok(robot.left_is_blocked())
    } else {
        Err(RasterError::Disoriented(Heading::East))
    }
}

fn step_into_next_row<R: Robot + ?Sized>(robot: &mut R) -> Result<(), RasterError> {
    if robot.move_checked()? {
        Ok(())
    } else {
        Err(RasterError::Blocked {
            during: "changement de ligne",
        })
    }
}

#[cfg(test)]
mod tests {
    use kr_core::{Cell, ColorName};
    use kr_world::GridWorld;

    use super::*;
    use crate::probe::probe;
    use crate::scripted::Scripted;

    /// World of `side`, robot parked on the traversal start.
    fn ready_world(side: usize) -> GridWorld {
        let mut world = GridWorld::new(side, side).unwrap();
        probe(&mut world).unwrap();
        world
    }

    fn pattern(side: usize) -> ColorBuffer {
        ColorBuffer::from_fn(side, |row, col| ((row * 7 + col * 3) % 10) as u8)
    }

    #[test]
    fn visits_every_cell_once_in_snake_order() {
        let side = 4;
        let mut world = ready_world(side);
        let report = RenderSession::new(pattern(side), ColorTable::standard())
            .run(&mut world)
            .unwrap();

        let visited: Vec<(usize, usize)> =
            world.paint_log().iter().map(|e| (e.row, e.col)).collect();
        let expected: Vec<(usize, usize)> = (0..side)
            .flat_map(|row| {
                let cols: Vec<usize> = if row % 2 == 0 {
                    (0..side).collect()
                } else {
                    (0..side).rev().collect()
                };
                cols.into_iter().map(move |col| (row, col))
            })
            .collect();
        assert_eq!(visited, expected);
        assert_eq!(report.visited, side * side);
        assert_eq!(report.row_changes, side - 1);
        assert_eq!(world.painted_cells(), side * side);
    }

    /// Value unique modulo 20 along the row-major index: code is `index % 10`,
    /// marker set on odd tens.
    fn indexed(side: usize) -> ColorBuffer {
        ColorBuffer::from_fn(side, |row, col| {
            let index = row * side + col;
            (index % 10) as u8 | if (index / 10) % 2 == 1 { 0x10 } else { 0 }
        })
    }

    #[test]
    fn cursor_tracks_the_robot_position() {
        for side in [1, 2, 3, 4, 5, 8] {
            let buffer = indexed(side);
            let table = ColorTable::standard();
            let mut world = ready_world(side);
            RenderSession::new(buffer.clone(), table.clone())
                .run(&mut world)
                .unwrap();
            assert_eq!(world.paint_log().len(), side * side);
            for event in world.paint_log() {
                let cell = buffer.cell(event.row, event.col);
                assert_eq!(
                    Some(event.color),
                    table.resolve(cell),
                    "side {side} ({}, {})",
                    event.row,
                    event.col
                );
                assert_eq!(
                    world.cell(event.row, event.col).markers > 0,
                    cell.marker,
                    "side {side} ({}, {})",
                    event.row,
                    event.col
                );
            }
        }
    }

    #[test]
    fn indexed_pattern_tells_diagonal_neighbours_apart() {
        for side in [2, 3, 4, 5, 8] {
            let buffer = indexed(side);
            for row in 0..side - 1 {
                for col in 0..side - 1 {
                    assert_ne!(buffer.get(row, col), buffer.get(row + 1, col + 1));
                    assert_ne!(buffer.get(row, col + 1), buffer.get(row + 1, col));
                }
            }
        }
    }

    #[test]
    fn blocked_row_change_is_reported() {
        let mut robot = Scripted::new(ready_world(3));
        robot.wall_ahead_when = Some(Heading::South);
        let err = RenderSession::new(pattern(3), ColorTable::standard())
            .run(&mut robot)
            .unwrap_err();
        assert_eq!(
            err,
            RasterError::Blocked {
                during: "changement de ligne"
            }
        );
        assert_eq!(robot.world.counts().paints, 3);
        assert_eq!(robot.world.position(), (0, 2));
    }

    #[test]
    fn world_larger_than_buffer_runs_the_cursor_out() {
        // Row 0 of a 3-wide world covers buffer indices 0..=2; the next row would be 4.
        let mut world = ready_world(3);
        let err = RenderSession::new(pattern(2), ColorTable::standard())
            .run(&mut world)
            .unwrap_err();
        assert_eq!(err, RasterError::CursorOutOfRange { cursor: 2, len: 4 });
        assert_eq!(world.counts().paints, 3);
    }

    #[test]
    fn ends_on_the_last_row() {
        let mut world = ready_world(3);
        RenderSession::new(pattern(3), ColorTable::standard())
            .run(&mut world)
            .unwrap();
        // Odd side: last row is swept eastward.
        assert_eq!(world.position(), (2, 2));
        assert!(world.facing(Heading::East));

        let mut world = ready_world(4);
        RenderSession::new(pattern(4), ColorTable::standard())
            .run(&mut world)
            .unwrap();
        assert_eq!(world.position(), (3, 0));
        assert!(world.facing(Heading::West));
    }

    #[test]
    fn markers_follow_the_flag() {
        let buffer = ColorBuffer::from_rows(&[&[18, 2], &[3, 0x10]]).unwrap();
        let mut world = ready_world(2);
        let report = RenderSession::new(buffer, ColorTable::standard())
            .run(&mut world)
            .unwrap();
        assert_eq!(report.markers, 2);
        assert_eq!(world.cell(0, 0).markers, 1);
        assert_eq!(world.cell(0, 1).markers, 0);
        assert_eq!(world.cell(1, 1).markers, 1);
        assert_eq!(world.cell(1, 1).paint, Some(ColorName::White));
    }

    #[test]
    fn unknown_color_aborts_before_painting_that_cell() {
        // Index 5 is (1, 2). Row 1 runs east to west, so it is the 4th cell visited.
        let mut values = vec![2u8; 9];
        values[5] = 11;
        let buffer = ColorBuffer::new(values, 3).unwrap();
        let mut world = ready_world(3);
        let err = RenderSession::new(buffer, ColorTable::standard())
            .run(&mut world)
            .unwrap_err();
        assert_eq!(err, RasterError::UnknownColor { code: 11, index: 5 });
        assert_eq!(world.paint_log().len(), 3);
        assert_eq!(world.cell(1, 2).paint, None);
    }

    #[test]
    fn wrong_start_heading_is_reported() {
        let mut world = GridWorld::new(2, 2)
            .unwrap()
            .with_robot(0, 1, Heading::North)
            .unwrap();
        let err = RenderSession::new(pattern(2), ColorTable::standard())
            .run(&mut world)
            .unwrap_err();
        assert_eq!(err, RasterError::Disoriented(Heading::East));
    }

    #[test]
    fn sweep_steps() {
        assert_eq!(Sweep::Forward.step(), 1);
        assert_eq!(Sweep::Backward.step(), -1);
        let session = RenderSession::new(pattern(2), ColorTable::standard());
        assert_eq!(session.buffer().cell(0, 0), Cell::unpack(0));
    }
}
