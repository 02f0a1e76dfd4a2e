/// In-memory grid world implementing the robot API.
///
/// Stands in for the host runtime when running the rasterizer from the
/// command line and in tests.

pub mod grid;

pub use grid::{GridWorld, OpCounts, PaintEvent, WorldCell};
