use kr_core::Robot;

use crate::error::RasterError;

/// Affiche une valeur dans le monde : `value` marqueurs sur la case derrière
/// le robot.
///
/// Demi-tour, un pas (si possible), vide la case de ses marqueurs, en
/// dépose `value`, puis revient à la position et à la direction initiales.
/// Sans voie libre derrière, la valeur est déposée sur place.
///
/// # Errors
/// Propagates robot faults.
pub fn dump_value<R: Robot + ?Sized>(robot: &mut R, value: usize) -> Result<(), RasterError> {
    robot.turn_around();
    let moved = robot.move_checked()?;

    while robot.markers_present() {
        robot.take_marker()?;
    }
    for _ in 0..value {
        robot.put_marker()?;
    }

    robot.turn_around();
    if moved {
        robot.move_forward()?;
    }
    log::debug!("Valeur {value} déposée");
    Ok(())
}
