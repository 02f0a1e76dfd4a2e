use crate::color::ColorName;
use crate::error::RobotError;
use crate::heading::Heading;

/// API du robot hôte : primitives de déplacement, capteurs, peinture.
///
/// Implémenté par : `GridWorld` (monde simulé en mémoire). Le rasterizer
/// n'utilise que des mouvements relatifs et des capteurs locaux ; il ne
/// connaît jamais la position absolue du robot.
///
/// Tous les appels sont synchrones et bloquants.
///
/// # Example
/// ```
/// use kr_core::traits::Robot;
/// use kr_core::{ColorName, Heading, RobotError};
///
/// struct Post;
/// impl Robot for Post {
///     fn move_forward(&mut self) -> Result<(), RobotError> { Ok(()) }
///     fn turn_left(&mut self) {}
///     fn turn_right(&mut self) {}
///     fn front_is_clear(&self) -> bool { false }
///     fn left_is_blocked(&self) -> bool { true }
///     fn right_is_blocked(&self) -> bool { true }
///     fn facing(&self, heading: Heading) -> bool { heading == Heading::East }
///     fn paint(&mut self, _color: ColorName) -> Result<(), RobotError> { Ok(()) }
///     fn put_marker(&mut self) -> Result<(), RobotError> { Ok(()) }
///     fn markers_present(&self) -> bool { false }
///     fn take_marker(&mut self) -> Result<(), RobotError> { Ok(()) }
/// }
/// ```
pub trait Robot {
    /// Avance d'une case. Échoue (faute hôte) si un mur bloque.
    ///
    /// # Errors
    /// Returns [`RobotError::Crashed`] if the front is blocked.
    fn move_forward(&mut self) -> Result<(), RobotError>;

    /// Rotation de 90° anti-horaire.
    fn turn_left(&mut self);

    /// Rotation de 90° horaire.
    fn turn_right(&mut self);

    /// `true` si la case devant est libre.
    fn front_is_clear(&self) -> bool;

    /// `true` si un mur borde la gauche du robot.
    fn left_is_blocked(&self) -> bool;

    /// `true` si un mur borde la droite du robot.
    fn right_is_blocked(&self) -> bool;

    /// `true` si le robot regarde dans la direction donnée.
    fn facing(&self, heading: Heading) -> bool;

    /// Peint la case courante.
    ///
    /// # Errors
    /// Host-specific; the simulator never fails here.
    fn paint(&mut self, color: ColorName) -> Result<(), RobotError>;

    /// Dépose un marqueur sur la case courante.
    ///
    /// # Errors
    /// Host-specific; the simulator never fails here.
    fn put_marker(&mut self) -> Result<(), RobotError>;

    /// `true` si au moins un marqueur est sur la case courante.
    fn markers_present(&self) -> bool;

    /// Ramasse un marqueur sur la case courante.
    ///
    /// # Errors
    /// Returns [`RobotError::NoMarker`] if the cell holds none.
    fn take_marker(&mut self) -> Result<(), RobotError>;

    /// Demi-tour sur place.
    fn turn_around(&mut self) {
        self.turn_left();
        self.turn_left();
    }

    /// Tourne à gauche jusqu'à regarder `heading`.
    ///
    /// Returns `false` if four turns were not enough (broken host).
    fn face(&mut self, heading: Heading) -> bool {
        for _ in 0..4 {
            if self.facing(heading) {
                return true;
            }
            self.turn_left();
        }
        self.facing(heading)
    }

    /// Avance seulement si la voie est libre. Ne plante jamais.
    ///
    /// Returns whether the robot moved.
    ///
    /// # Errors
    /// Propagates a host fault from [`Robot::move_forward`].
    fn move_checked(&mut self) -> Result<bool, RobotError> {
        if self.front_is_clear() {
            self.move_forward()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
