/// Types, traits, and configuration shared across karel-raster.
///
/// This crate contains the packed cell format, the color table, the
/// color buffer, the robot API trait, and configuration loading.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod heading;
pub mod traits;

pub use cell::Cell;
pub use color::{ColorName, ColorTable};
pub use config::RasterConfig;
pub use error::{CoreError, RobotError};
pub use frame::ColorBuffer;
pub use heading::Heading;
pub use traits::Robot;
