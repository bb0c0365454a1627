use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::{centered_column, titled_block};
use crate::ui::app::{App, InputMode, MenuItem};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area, 48);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Budget field
            Constraint::Min(3),    // Menu
        ])
        .split(column);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Personal Expense Tracker",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .centered();
    f.render_widget(title, chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let budget_text = if app.budget_input.is_empty() && !editing {
        Span::styled("not set (counts as $0.00)", theme::dim_style())
    } else {
        Span::styled(app.budget_input.as_str(), theme::normal_style())
    };
    let budget = Paragraph::new(Line::from(budget_text))
        .block(titled_block(
            MenuItem::SetBudget.label(),
            editing || app.menu_index == 0,
        ));
    f.render_widget(budget, chunks[1]);

    if editing {
        let x = chunks[1].x + 1 + app.budget_input.chars().count() as u16;
        f.set_cursor_position((x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
    }

    let items: Vec<ListItem> = MenuItem::all()
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, item)| {
            let style = if i == app.menu_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(format!("  {}  ", item.label()))).style(style)
        })
        .collect();

    let menu = List::new(items).block(titled_block("Main Menu", !editing));
    f.render_widget(menu, chunks[2]);
}
