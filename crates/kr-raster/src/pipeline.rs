use kr_core::{ColorBuffer, ColorTable, Robot};
use kr_source::upscale::{SCALE, upscale};

use crate::error::RasterError;
use crate::probe::probe;
use crate::traversal::{RenderReport, RenderSession};

/// Adapte le buffer au côté du monde.
///
/// Même côté : buffer inchangé. Côté double : upscale 2×. Sinon erreur.
///
/// # Errors
/// Returns [`RasterError::SizeMismatch`] if `side` is neither the buffer's
/// side nor twice it.
///
/// # Example
/// ```
/// use kr_core::ColorBuffer;
/// use kr_raster::fit_to_world;
/// let buf = ColorBuffer::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
/// assert_eq!(fit_to_world(buf.clone(), 2).unwrap(), buf);
/// assert_eq!(fit_to_world(buf.clone(), 4).unwrap().side(), 4);
/// assert!(fit_to_world(buf, 3).is_err());
/// ```
pub fn fit_to_world(buffer: ColorBuffer, side: usize) -> Result<ColorBuffer, RasterError> {
    if side == buffer.side() {
        Ok(buffer)
    } else if side == buffer.side() * SCALE {
        Ok(upscale(&buffer))
    } else {
        Err(RasterError::SizeMismatch {
            buffer: buffer.side(),
            world: side,
        })
    }
}

/// Pipeline complet : validation de la table, sonde, ajustement, parcours.
///
/// La table est validée contre tout le buffer avant que le robot ne bouge.
///
/// # Errors
/// Any [`RasterError`]; see [`probe`], [`fit_to_world`] and
/// [`RenderSession::run`].
pub fn rasterize<R: Robot + ?Sized>(
    robot: &mut R,
    buffer: ColorBuffer,
    table: ColorTable,
) -> Result<RenderReport, RasterError> {
    if let Some((index, code)) = table.first_unmapped(buffer.data()) {
        return Err(RasterError::UnknownColor { code, index });
    }

    let dims = probe(robot)?;
    let native = buffer.side();
    let buffer = fit_to_world(buffer, dims.side)?;
    let upscaled = buffer.side() != native;

    let report = RenderSession::new(buffer, table).run(robot)?;
    Ok(RenderReport { upscaled, ..report })
}

/// Rend l'image embarquée sur le monde du robot.
///
/// # Errors
/// See [`rasterize`].
pub fn rasterize_embedded<R: Robot + ?Sized>(robot: &mut R) -> Result<RenderReport, RasterError> {
    let (buffer, table) = kr_source::load();
    rasterize(robot, buffer, table)
}
