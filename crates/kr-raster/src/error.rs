use kr_core::{Heading, RobotError};
use thiserror::Error;

/// Erreurs du rendu. Toutes sont fatales pour le rendu en cours :
/// pas de reprise, pas de résultat partiel.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// A buffer cell's color code has no entry in the color table.
    #[error("Code couleur {code} sans entrée dans la table (cellule {index})")]
    UnknownColor {
        /// The unmapped 4-bit code.
        code: u8,
        /// Row-major index of the offending cell.
        index: usize,
    },

    /// The probed world is not square.
    #[error("Monde non carré : {rows} lignes × {cols} colonnes")]
    NonSquareWorld {
        /// Probed number of rows.
        rows: usize,
        /// Probed number of columns.
        cols: usize,
    },

    /// The robot did not start on the south-west corner.
    #[error("Le robot doit démarrer au coin sud-ouest")]
    NotAtCorner,

    /// The robot cannot be turned towards a heading the algorithm needs.
    #[error("Le robot ne parvient pas à s'orienter ({0})")]
    Disoriented(Heading),

    /// The world is neither the buffer's side nor twice it.
    #[error("Image {buffer}×{buffer} incompatible avec un monde {world}×{world}")]
    SizeMismatch {
        /// Native side of the buffer.
        buffer: usize,
        /// Probed side of the world.
        world: usize,
    },

    /// A step the algorithm relies on was blocked. Indicates a bug or a
    /// world that changed under the robot.
    #[error("Voie bloquée pendant : {during}")]
    Blocked {
        /// Phase that needed the step.
        during: &'static str,
    },

    /// The traversal cursor left the buffer. Indicates a bug.
    #[error("Curseur {cursor} hors du buffer ({len} cellules)")]
    CursorOutOfRange {
        /// Cursor value that was rejected.
        cursor: usize,
        /// Buffer length.
        len: usize,
    },

    /// Fault raised by the robot runtime.
    #[error(transparent)]
    Robot(#[from] RobotError),
}
