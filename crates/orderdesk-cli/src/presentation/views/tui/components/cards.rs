use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{badge_style, Component};
use crate::presentation::formatters::{brl, or_dash, truncate};
use crate::presentation::view_models::{BoardViewModel, OrderRowViewModel};

const CARD_WIDTH: u16 = 26;

pub(crate) struct CardsComponent;

impl Component for CardsComponent {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel) {
        if vm.empty || area.width < CARD_WIDTH {
            return;
        }

        // Slide the card window so the selected order stays visible.
        let fit = (area.width / CARD_WIDTH).max(1) as usize;
        let selected = vm.selected.unwrap_or(0);
        let start = if selected >= fit { selected + 1 - fit } else { 0 };
        let shown = &vm.rows[start..vm.rows.len().min(start + fit)];

        let constraints: Vec<Constraint> = shown
            .iter()
            .map(|_| Constraint::Length(CARD_WIDTH))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, row) in shown.iter().enumerate() {
            let is_selected = vm.selected == Some(start + i);
            render_card(f, chunks[i], row, is_selected);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, row: &OrderRowViewModel, selected: bool) {
    let border = if selected {
        Style::default().fg(Color::LightCyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" {} ", row.short_id),
            Style::default().fg(Color::Gray),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate(&row.client, width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            brl(row.amount),
            Style::default().fg(Color::LightGreen),
        )),
        Line::from(Span::styled(
            row.date.display(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate(&row.company, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate(&or_dash(row.salesperson.as_deref()), width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            or_dash(row.status.as_deref()),
            badge_style(row.badge_key.as_deref()),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
