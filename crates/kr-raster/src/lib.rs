/// Rasterization engine for karel-raster.
///
/// Probes the world, fits the image to it, then walks every cell in a
/// boustrophedon sweep while painting from the color buffer.

pub mod debug;
pub mod error;
pub mod pipeline;
pub mod pixel;
pub mod probe;
#[cfg(test)]
mod scripted;
pub mod traversal;

pub use error::RasterError;
pub use pipeline::{fit_to_world, rasterize, rasterize_embedded};
pub use probe::{WorldDimensions, probe};
pub use traversal::{RenderReport, RenderSession, Sweep};
