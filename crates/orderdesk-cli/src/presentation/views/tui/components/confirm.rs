use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Component};
use crate::presentation::view_models::{BoardViewModel, OverlayViewModel};

pub(crate) struct ConfirmComponent;

impl Component for ConfirmComponent {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel) {
        let OverlayViewModel::Confirm(confirm) = &vm.overlay else {
            return;
        };

        let popup = centered_rect(44, 5, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed))
            .title(Span::styled(
                " Delete order ",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        // Name the target so the user sees what is about to go.
        let subject = match (&confirm.client, &confirm.company) {
            (Some(client), Some(company)) => {
                format!("{} ({}, {})", confirm.short_id, client, company)
            }
            _ => confirm.short_id.clone(),
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("Delete {}?", subject),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)),
                Span::styled(" delete   ", Style::default().fg(Color::Gray)),
                Span::styled("n", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" keep", Style::default().fg(Color::Gray)),
            ]),
        ];

        f.render_widget(Paragraph::new(lines), inner);
    }
}
