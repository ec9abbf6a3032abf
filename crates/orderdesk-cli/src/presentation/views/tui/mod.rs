mod components;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};

use crate::presentation::view_models::{BoardViewModel, OverlayViewModel};
use components::{
    CardsComponent, Component, ConfirmComponent, FooterComponent, FormComponent, HeaderComponent,
    TableComponent,
};

pub type BoardTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<BoardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

pub fn restore_terminal(terminal: &mut BoardTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw one frame: title bar, table and card projections, footer, and the
/// active overlay (form or confirm prompt) above everything else.
pub fn draw(f: &mut Frame, vm: &BoardViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar + notice
            Constraint::Min(6),    // Table projection
            Constraint::Length(8), // Card projection
            Constraint::Length(2), // Footer (rule + key hints)
        ])
        .split(f.area());

    HeaderComponent.render(f, chunks[0], vm);
    TableComponent.render(f, chunks[1], vm);
    CardsComponent.render(f, chunks[2], vm);
    FooterComponent.render(f, chunks[3], vm);

    match &vm.overlay {
        OverlayViewModel::Form(_) => FormComponent.render(f, f.area(), vm),
        OverlayViewModel::Confirm(_) => ConfirmComponent.render(f, f.area(), vm),
        OverlayViewModel::None => {}
    }
}
