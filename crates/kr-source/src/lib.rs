/// Image sources for karel-raster: the embedded frame and the 2x upscaler.

pub mod embedded;
pub mod upscale;

pub use embedded::load;
pub use upscale::upscale;
