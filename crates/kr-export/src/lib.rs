/// PNG export of a rendered world.

pub mod png;

pub use png::{export_png, world_image};
