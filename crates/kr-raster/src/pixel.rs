use kr_core::{Cell, ColorBuffer, ColorTable, Robot};

use crate::error::RasterError;

/// Peint la cellule `buffer[cursor]` sous le robot.
///
/// Décode la valeur packée, résout la couleur, dépose un marqueur si le
/// drapeau est levé, puis peint. La couleur est résolue avant toute action :
/// un code inconnu n'émet ni marqueur ni peinture.
///
/// # Errors
/// - [`RasterError::UnknownColor`] if the code has no table entry.
/// - [`RasterError::CursorOutOfRange`] if `cursor` is past the buffer.
/// - [`RasterError::Robot`] if the host rejects the marker or paint call.
pub fn render_pixel<R: Robot + ?Sized>(
    robot: &mut R,
    buffer: &ColorBuffer,
    cursor: usize,
    table: &ColorTable,
) -> Result<Cell, RasterError> {
    let value = buffer.at(cursor).ok_or(RasterError::CursorOutOfRange {
        cursor,
        len: buffer.len(),
    })?;
    let cell = Cell::unpack(value);
    let color = table.resolve(cell).ok_or(RasterError::UnknownColor {
        code: cell.code,
        index: cursor,
    })?;

    if cell.marker {
        robot.put_marker()?;
    }
    robot.paint(color)?;
    log::trace!("cellule {cursor} : {color}{}", if cell.marker { " + marqueur" } else { "" });
    Ok(cell)
}
