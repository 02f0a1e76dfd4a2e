use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use kr_render::ui::{self, StatusLine};
use kr_world::GridWorld;
use ratatui::DefaultTerminal;

/// Affiche le monde final plein écran jusqu'à `q`, `Esc` ou `Entrée`.
///
/// Le terminal est toujours restauré, même en cas d'erreur.
///
/// # Errors
/// Returns an error if drawing or reading terminal events fails.
pub fn show(world: &GridWorld, status: &StatusLine) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = wait_for_quit(&mut terminal, world, status);
    ratatui::restore();
    result
}

fn wait_for_quit(terminal: &mut DefaultTerminal, world: &GridWorld, status: &StatusLine) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, world, status))?;
        // Any other event (resize included) just redraws.
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
            {
                return Ok(());
            }
        }
    }
}
