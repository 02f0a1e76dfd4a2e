use kr_core::ColorName;
use kr_world::{GridWorld, WorldCell};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Largeur d'une case en colonnes terminal (les glyphes font ~1:2).
pub const CELL_WIDTH: u16 = 2;

/// Glyphe d'une case portant au moins un marqueur.
pub const MARKER_GLYPH: char = '●';

/// Glyphe d'une case jamais peinte.
pub const BLANK_GLYPH: char = '·';

/// Écrit directement le monde dans un `ratatui::Buffer`.
///
/// Deux colonnes par case, fond = couleur peinte. Une case jamais peinte
/// garde le fond du terminal (`Color::Reset`), ce qui la distingue d'une
/// case peinte en blanc. Ce qui dépasse de `area` est tronqué.
pub fn render_world(buf: &mut Buffer, area: Rect, world: &GridWorld) {
    let rows = u16::try_from(world.rows()).unwrap_or(u16::MAX).min(area.height);
    let cols = u16::try_from(world.cols())
        .unwrap_or(u16::MAX)
        .min(area.width / CELL_WIDTH);
    for cy in 0..rows {
        for cx in 0..cols {
            let cell = world.cell(usize::from(cy), usize::from(cx));
            let (glyph, fg, bg) = style_for(cell);
            for dx in 0..CELL_WIDTH {
                let pos = (area.x + cx * CELL_WIDTH + dx, area.y + cy);
                if let Some(buf_cell) = buf.cell_mut(pos) {
                    buf_cell.set_char(if dx == 0 { glyph } else { ' ' });
                    buf_cell.set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}

/// Glyphe, couleur de premier plan et fond d'une case.
fn style_for(cell: &WorldCell) -> (char, Color, Color) {
    match cell.paint {
        None => {
            let glyph = if cell.markers > 0 { MARKER_GLYPH } else { BLANK_GLYPH };
            (glyph, Color::DarkGray, Color::Reset)
        }
        Some(color) => {
            let glyph = if cell.markers > 0 { MARKER_GLYPH } else { ' ' };
            (glyph, contrast_fg(color), to_term(color))
        }
    }
}

/// Couleur terminal truecolor d'une peinture.
#[must_use]
pub fn to_term(color: ColorName) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Noir sur fond clair, blanc sur fond sombre.
fn contrast_fg(color: ColorName) -> Color {
    let (r, g, b) = color.rgb();
    let lum = (u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722) / 10000;
    if lum > 128 { Color::Black } else { Color::White }
}
