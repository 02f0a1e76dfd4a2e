use kr_core::ColorBuffer;

/// Facteur d'agrandissement fixe.
pub const SCALE: usize = 2;

/// Agrandissement 2× au plus proche voisin.
///
/// Chaque cellule source `(r, c)` devient le bloc `(2r, 2c)`, `(2r, 2c+1)`,
/// `(2r+1, 2c)`, `(2r+1, 2c+1)`, avec la valeur packée intacte (code et
/// marqueur). Fonction pure, aucun état caché.
///
/// # Example
/// ```
/// use kr_core::ColorBuffer;
/// use kr_source::upscale;
/// let src = ColorBuffer::from_rows(&[&[1, 2], &[3, 20]]).unwrap();
/// let dst = upscale(&src);
/// assert_eq!(dst.side(), 4);
/// assert_eq!(dst.data(), &[1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 20, 20, 3, 3, 20, 20]);
/// ```
#[must_use]
pub fn upscale(src: &ColorBuffer) -> ColorBuffer {
    let side = src.side() * SCALE;
    log::info!("Upscale {0}×{0} → {1}×{1}", src.side(), side);
    ColorBuffer::from_fn(side, |row, col| src.get(row / SCALE, col / SCALE))
}
