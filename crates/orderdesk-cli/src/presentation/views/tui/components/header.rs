use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::presentation::view_models::BoardViewModel;

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel) {
        let title = Line::from(vec![
            Span::styled(
                "━━ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "orderdesk",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" → {}", vm.api_url),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                " ━━",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        f.render_widget(Paragraph::new(title), layout[0]);
        f.render_widget(
            Paragraph::new(right_side(vm)).alignment(Alignment::Right),
            layout[1],
        );
    }
}

/// The right side shows the visible notice; with none visible it falls
/// back to the busy indicator.
fn right_side(vm: &BoardViewModel) -> Line<'_> {
    if let Some(notice) = &vm.notice {
        let color = if notice.success {
            Color::Green
        } else {
            Color::LightRed
        };
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if notice.fading {
            style = style.add_modifier(Modifier::DIM);
        }
        return Line::from(Span::styled(notice.message.as_str(), style));
    }

    if vm.busy {
        return Line::from(Span::styled(
            "working...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from("")
}
