use kr_world::GridWorld;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::canvas::{self, CELL_WIDTH};

/// Résumé affiché sous le monde.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    /// Free text, e.g. the render report.
    pub message: String,
    /// `true` if the render failed.
    pub failed: bool,
}

/// Draw the world framed by a border, with a status line below.
pub fn draw(frame: &mut Frame, world: &GridWorld, status: &StatusLine) {
    let area = frame.area();
    let [world_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    // Border eats one cell on each side.
    let inner_w = usize::from(world_area.width.saturating_sub(2) / CELL_WIDTH);
    let inner_h = usize::from(world_area.height.saturating_sub(2));
    let truncated = inner_w < world.cols() || inner_h < world.rows();
    let title = format!(
        " karel-raster {}×{}{} ",
        world.rows(),
        world.cols(),
        if truncated { " (tronqué)" } else { "" }
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(world_area);
    frame.render_widget(block, world_area);
    canvas::render_world(frame.buffer_mut(), inner, world);

    let color = if status.failed { Color::Red } else { Color::Green };
    let line = Line::from(vec![
        Span::styled(status.message.clone(), Style::default().fg(color)),
        Span::raw("  (q pour quitter)"),
    ]);
    frame.render_widget(Paragraph::new(line), status_area);
}
