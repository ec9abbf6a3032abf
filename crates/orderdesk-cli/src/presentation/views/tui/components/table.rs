use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{badge_style, Component};
use crate::presentation::formatters::{brl, or_dash, truncate};
use crate::presentation::view_models::{BoardViewModel, OrderRowViewModel};

pub(crate) struct TableComponent;

impl Component for TableComponent {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" Orders ({}/{}) ", vm.rows.len(), vm.total),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        f.render_widget(block, area);

        if vm.empty {
            render_empty_state(f, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let header = Line::from(Span::styled(
            format!(
                "{:<9} {:<18} {:>12}  {:<10} {:<18} {:<14} STATUS",
                "ID", "CLIENT", "AMOUNT", "DATE", "COMPANY", "VENDOR"
            ),
            Style::default().fg(Color::Gray),
        ));
        f.render_widget(Paragraph::new(header), chunks[0]);

        let items: Vec<ListItem> = vm.rows.iter().map(row_item).collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(vm.selected);
        f.render_stateful_widget(list, chunks[1], &mut list_state);
    }
}

fn row_item(row: &OrderRowViewModel) -> ListItem<'_> {
    let line = Line::from(vec![
        Span::raw(format!(
            "{:<9} {:<18} {:>12}  {:<10} {:<18} {:<14} ",
            row.short_id,
            truncate(&row.client, 18),
            brl(row.amount),
            row.date.display(),
            truncate(&row.company, 18),
            truncate(&or_dash(row.salesperson.as_deref()), 14),
        )),
        Span::styled(
            or_dash(row.status.as_deref()),
            badge_style(row.badge_key.as_deref()),
        ),
    ]);
    ListItem::new(line)
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "No orders found.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
}
