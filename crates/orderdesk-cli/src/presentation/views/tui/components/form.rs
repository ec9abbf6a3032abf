use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Component};
use crate::presentation::view_models::{BoardViewModel, FormFieldViewModel, OverlayViewModel};

pub(crate) struct FormComponent;

impl Component for FormComponent {
    fn render(&self, f: &mut Frame, area: Rect, vm: &BoardViewModel) {
        let OverlayViewModel::Form(form) = &vm.overlay else {
            return;
        };

        let popup = centered_rect(48, (form.fields.len() + 2) as u16, area);
        f.render_widget(Clear, popup);

        let title = match &form.target {
            Some(short) => format!(" Edit order {} ", short),
            None => " New order ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightCyan))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let lines: Vec<Line> = form.fields.iter().map(field_line).collect();
        f.render_widget(Paragraph::new(lines), inner);
    }
}

fn field_line(field: &FormFieldViewModel) -> Line<'_> {
    let label = Span::styled(
        format!("{:<13}", field.label),
        Style::default().fg(Color::Gray),
    );

    let value = if field.choice {
        // Pick field: arrows mark the cycling affordance when focused.
        if field.focused {
            format!("◂ {} ▸", pick_display(&field.value))
        } else {
            pick_display(&field.value)
        }
    } else if field.focused {
        format!("{}_", field.value)
    } else {
        field.value.clone()
    };

    let value_style = if field.focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![label, Span::styled(value, value_style)])
}

fn pick_display(value: &str) -> String {
    if value.is_empty() {
        "(pick one)".to_string()
    } else {
        value.to_string()
    }
}
