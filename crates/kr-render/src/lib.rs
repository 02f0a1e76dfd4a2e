/// TUI rendering module for karel-raster.
///
/// Draws the simulated world into a ratatui buffer.

pub mod canvas;
pub mod ui;
