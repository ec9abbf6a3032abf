use ratatui::{
    layout::Rect,
    style::{Color, Style},
    Frame,
};

use crate::presentation::view_models::BoardViewModel;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel);
}

pub(crate) mod cards;
pub(crate) mod confirm;
pub(crate) mod footer;
pub(crate) mod form;
pub(crate) mod header;
pub(crate) mod table;

pub(crate) use cards::CardsComponent;
pub(crate) use confirm::ConfirmComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use form::FormComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use table::TableComponent;

/// Badge color per lowercase status key: known statuses get distinct
/// colors, unknown ones stay neutral.
pub(crate) fn badge_style(key: Option<&str>) -> Style {
    match key {
        Some("pending") => Style::default().fg(Color::Yellow),
        Some("confirmed") => Style::default().fg(Color::Green),
        Some("cancelled") => Style::default().fg(Color::Red),
        Some(_) => Style::default().fg(Color::Gray),
        None => Style::default().fg(Color::DarkGray),
    }
}

/// Rect of the given size centered inside `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
