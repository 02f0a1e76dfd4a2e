use thiserror::Error;

use crate::heading::Heading;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Image data is missing or malformed.
    #[error("Image invalide : {0}")]
    Load(String),

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Invalid world dimensions.
    #[error("Dimensions invalides : {rows}×{cols}")]
    InvalidDimensions {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}

/// Faults raised by the host robot runtime.
///
/// The rasterizer never triggers these when it respects the check-then-move
/// discipline; seeing one means a bug in the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RobotError {
    /// The robot tried to walk through a wall.
    #[error("Collision avec un mur en ({row}, {col}) face {heading}")]
    Crashed {
        /// Row the robot was standing on.
        row: usize,
        /// Column the robot was standing on.
        col: usize,
        /// Heading at the time of the move.
        heading: Heading,
    },

    /// The robot tried to pick up a marker from an empty cell.
    #[error("Aucun marqueur en ({row}, {col})")]
    NoMarker {
        /// Row of the empty cell.
        row: usize,
        /// Column of the empty cell.
        col: usize,
    },
}
