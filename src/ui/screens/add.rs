use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::titled_block;
use crate::ui::app::{App, EntryField};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Description
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Date
            Constraint::Length(1), // Validation message
            Constraint::Min(3),    // Recorded transactions
        ])
        .split(area);

    for (field, chunk) in EntryField::all().iter().zip(chunks.iter()) {
        render_field(f, *chunk, app, *field);
    }

    let message = match &app.form.error {
        Some(err) => Line::from(Span::styled(format!(" {err}"), theme::error_style())),
        None => Line::from(Span::styled(
            " Enter adds the transaction; fields are cleared on success",
            theme::dim_style(),
        )),
    };
    f.render_widget(Paragraph::new(message), chunks[3]);

    render_transactions(f, chunks[4], app);
}

fn render_field(f: &mut Frame, area: Rect, app: &App, field: EntryField) {
    let focused = app.form.focus == field;
    let value = app.form.value(field);
    let widget = Paragraph::new(Line::from(Span::styled(value, theme::normal_style())))
        .block(titled_block(field.label(), focused));
    f.render_widget(widget, area);

    if focused {
        let x = area.x + 1 + value.chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_transactions(f: &mut Frame, area: Rect, app: &App) {
    let title = format!("Transactions ({})", app.transactions.len());
    if app.transactions.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No transactions recorded yet", theme::dim_style())),
        ])
        .centered()
        .block(titled_block(&title, false));
        f.render_widget(msg, area);
        return;
    }

    let page = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(page)
        .map(|(i, line)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(format!(" {line}"))).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(titled_block(&title, false)), area);
}
