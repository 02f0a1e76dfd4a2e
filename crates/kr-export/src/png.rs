use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use kr_world::GridWorld;

/// Couleur du point dessiné sur les cases à marqueur.
const MARKER_RGBA: Rgba<u8> = Rgba([30, 30, 30, 255]);

/// Pixels d'une case jamais peinte : transparents.
const BLANK_RGBA: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rasterise le monde en image RGBA, `cell_px`×`cell_px` pixels par case.
///
/// Les cases jamais peintes restent transparentes ; une case peinte en
/// blanc est blanc opaque.
///
/// # Example
/// ```
/// use kr_export::world_image;
/// use kr_world::GridWorld;
/// let world = GridWorld::new(3, 4).unwrap();
/// let img = world_image(&world, 5);
/// assert_eq!(img.dimensions(), (20, 15));
/// ```
#[must_use]
pub fn world_image(world: &GridWorld, cell_px: u32) -> RgbaImage {
    let cell_px = cell_px.max(1);
    let width = world.cols() as u32 * cell_px;
    let height = world.rows() as u32 * cell_px;

    // Disc radius for marker cells, at least one pixel.
    let radius = (cell_px / 4).max(1);
    let center = cell_px / 2;

    RgbaImage::from_fn(width, height, |x, y| {
        let cell = world.cell((y / cell_px) as usize, (x / cell_px) as usize);
        let (dx, dy) = ((x % cell_px).abs_diff(center), (y % cell_px).abs_diff(center));
        if cell.markers > 0 && dx * dx + dy * dy <= radius * radius {
            return MARKER_RGBA;
        }
        match cell.paint {
            Some(color) => {
                let (r, g, b) = color.rgb();
                Rgba([r, g, b, 255])
            }
            None => BLANK_RGBA,
        }
    })
}

/// Écrit le monde au format PNG.
///
/// # Errors
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn export_png(world: &GridWorld, path: &Path, cell_px: u32) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer {}", parent.display()))?;
    }
    let img = world_image(world, cell_px);
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!(
        "PNG exporté : {} ({}×{} px)",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(())
}
