use kr_core::{Heading, Robot};

use crate::error::RasterError;

/// Dimensions du monde mesurées par le robot. Immuables après la sonde.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldDimensions {
    /// Edge length in cells.
    pub side: usize,
}

/// Mesure le monde en le longeant, puis place le robot au départ du balayage.
///
/// Le robot doit être au coin sud-ouest. Il s'oriente vers l'est, monte
/// jusqu'au mur nord en comptant les lignes, revient face à l'est, puis
/// compte les colonnes en aller-retour. Postcondition : coin nord-ouest,
/// face à l'est. La direction de départ n'est pas restaurée : le robot
/// finit toujours face à l'est, prêt pour le balayage.
///
/// # Errors
/// - [`RasterError::NotAtCorner`] if the start is not the south-west corner.
/// - [`RasterError::NonSquareWorld`] if rows and columns differ.
/// - [`RasterError::Disoriented`] if the robot never reports facing east.
///
/// # Example
/// ```
/// use kr_raster::probe;
/// # use kr_core::{ColorName, Heading, Robot, RobotError};
/// # struct Post;
/// # impl Robot for Post {
/// #     fn move_forward(&mut self) -> Result<(), RobotError> { Ok(()) }
/// #     fn turn_left(&mut self) {}
/// #     fn turn_right(&mut self) {}
/// #     fn front_is_clear(&self) -> bool { false }
/// #     fn left_is_blocked(&self) -> bool { true }
/// #     fn right_is_blocked(&self) -> bool { true }
/// #     fn facing(&self, _: Heading) -> bool { true }
/// #     fn paint(&mut self, _: ColorName) -> Result<(), RobotError> { Ok(()) }
/// #     fn put_marker(&mut self) -> Result<(), RobotError> { Ok(()) }
/// #     fn markers_present(&self) -> bool { false }
/// #     fn take_marker(&mut self) -> Result<(), RobotError> { Ok(()) }
/// # }
/// let dims = probe(&mut Post).unwrap();
/// assert_eq!(dims.side, 1);
/// ```
pub fn probe<R: Robot + ?Sized>(robot: &mut R) -> Result<WorldDimensions, RasterError> {
    if !robot.face(Heading::East) {
        return Err(RasterError::Disoriented(Heading::East));
    }
    if !robot.right_is_blocked() {
        return Err(RasterError::NotAtCorner);
    }

    robot.turn_left();
    if !robot.left_is_blocked() {
        return Err(RasterError::NotAtCorner);
    }
    let rows = walk_to_wall(robot)? + 1;
    robot.turn_right();

    let cols = walk_to_wall(robot)? + 1;
    robot.turn_around();
    walk_back(robot, cols - 1)?;
    robot.turn_around();

    if rows != cols {
        log::warn!("Monde non carré : {rows}×{cols}");
        return Err(RasterError::NonSquareWorld { rows, cols });
    }
    log::info!("Monde sondé : {rows}×{cols}");
    Ok(WorldDimensions { side: rows })
}

/// Avance jusqu'au mur, retourne le nombre de pas.
fn walk_to_wall<R: Robot + ?Sized>(robot: &mut R) -> Result<usize, RasterError> {
    let mut steps = 0;
    while robot.move_checked()? {
        steps += 1;
    }
    Ok(steps)
}

fn walk_back<R: Robot + ?Sized>(robot: &mut R, steps: usize) -> Result<(), RasterError> {
    for _ in 0..steps {
        if !robot.move_checked()? {
            return Err(RasterError::Blocked {
                during: "retour de la sonde",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use kr_world::GridWorld;

    use super::*;
    use crate::scripted::Scripted;

    #[test]
    fn measures_square_world_and_parks_north_west() {
        let mut world = GridWorld::new(5, 5).unwrap();
        assert_eq!(probe(&mut world), Ok(WorldDimensions { side: 5 }));
        assert_eq!(world.position(), (0, 0));
        assert_eq!(world.heading(), Heading::East);
        assert_eq!(world.counts().paints, 0);
    }

    #[test]
    fn single_cell_world() {
        let mut world = GridWorld::new(1, 1).unwrap();
        assert_eq!(probe(&mut world), Ok(WorldDimensions { side: 1 }));
        assert_eq!(world.counts().moves, 0);
    }

    #[test]
    fn rectangular_world_is_rejected() {
        let mut world = GridWorld::new(3, 5).unwrap();
        assert_eq!(
            probe(&mut world),
            Err(RasterError::NonSquareWorld { rows: 3, cols: 5 })
        );
        let mut world = GridWorld::new(6, 2).unwrap();
        assert_eq!(
            probe(&mut world),
            Err(RasterError::NonSquareWorld { rows: 6, cols: 2 })
        );
    }

    #[test]
    fn any_initial_heading_is_accepted() {
        let mut world = GridWorld::new(4, 4)
            .unwrap()
            .with_robot(3, 0, Heading::West)
            .unwrap();
        assert_eq!(probe(&mut world), Ok(WorldDimensions { side: 4 }));
        assert_eq!(world.position(), (0, 0));
    }

    #[test]
    fn start_away_from_corner_is_rejected() {
        let mut world = GridWorld::new(4, 4)
            .unwrap()
            .with_robot(2, 0, Heading::East)
            .unwrap();
        assert_eq!(probe(&mut world), Err(RasterError::NotAtCorner));

        let mut world = GridWorld::new(4, 4)
            .unwrap()
            .with_robot(3, 1, Heading::East)
            .unwrap();
        assert_eq!(probe(&mut world), Err(RasterError::NotAtCorner));
    }

    #[test]
    fn start_heading_is_not_restored() {
        let mut world = GridWorld::new(3, 3)
            .unwrap()
            .with_robot(2, 0, Heading::South)
            .unwrap();
        probe(&mut world).unwrap();
        assert_eq!(world.heading(), Heading::East);
    }

    #[test]
    fn robot_that_never_faces_east_is_disoriented() {
        let mut robot = Scripted::new(GridWorld::new(3, 3).unwrap());
        robot.lost = true;
        assert_eq!(probe(&mut robot), Err(RasterError::Disoriented(Heading::East)));
        assert_eq!(robot.world.counts().moves, 0);
        assert_eq!(robot.world.counts().paints, 0);
    }

    #[test]
    fn blocked_return_walk_is_reported() {
        let mut robot = Scripted::new(GridWorld::new(3, 3).unwrap());
        robot.wall_ahead_when = Some(Heading::West);
        assert_eq!(
            probe(&mut robot),
            Err(RasterError::Blocked {
                during: "retour de la sonde"
            })
        );
        // Stuck on the north-east corner after the column count.
        assert_eq!(robot.world.position(), (0, 2));
        assert_eq!(robot.world.counts().paints, 0);
    }
}
