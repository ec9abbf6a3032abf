use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::view_models::{BoardViewModel, OverlayViewModel};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel) {
        let hints = match &vm.overlay {
            OverlayViewModel::Form(_) => {
                "Tab next field  Shift-Tab previous  Space cycle status  Enter save  Esc cancel"
            }
            OverlayViewModel::Confirm(_) => "y delete  n keep",
            OverlayViewModel::None => {
                "a add  e edit  d delete  r refresh  f status  v vendor  x clear  q quit"
            }
        };

        let mut spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];

        let mut filters = Vec::new();
        if let Some(status) = &vm.status_filter {
            filters.push(format!("status={}", status));
        }
        if let Some(vendor) = &vm.vendor_filter {
            filters.push(format!("vendor={}", vendor));
        }
        if !filters.is_empty() {
            spans.push(Span::raw("  │  "));
            spans.push(Span::styled(
                format!("filter: {}", filters.join(" ")),
                Style::default().fg(Color::Yellow),
            ));
        }

        let footer = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}
