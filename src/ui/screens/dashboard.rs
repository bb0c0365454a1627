use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::titled_block;
use crate::tracker::Dashboard;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

const MAX_SHOWN_RATIO: f64 = 10.0;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(dash) = &app.dashboard else {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Dashboard unavailable. Press r to retry.",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(titled_block("Dashboard", false));
        f.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Length(3), // Budget used
            Constraint::Min(0),
        ])
        .split(area);

    render_summary_cards(f, chunks[0], dash);
    render_budget_gauge(f, chunks[1], dash);
}

fn render_summary_cards(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let overspent = dash.remaining_budget < Decimal::ZERO;

    render_card(f, cards[0], "Budget", dash.budget, theme::ACCENT, None);
    render_card(
        f,
        cards[1],
        "Total Expenses",
        dash.total_expense,
        theme::YELLOW,
        None,
    );
    render_card(
        f,
        cards[2],
        "Remaining Budget",
        dash.remaining_budget,
        theme::balance_color(overspent),
        overspent.then(|| "over budget".to_string()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: Option<String>,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(titled_block(title, false));

    f.render_widget(text, area);
}

fn render_budget_gauge(f: &mut Frame, area: Rect, dash: &Dashboard) {
    if dash.budget <= Decimal::ZERO {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Set a budget on the main menu to track how much of it is used",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block("Budget Used", false));
        f.render_widget(hint, area);
        return;
    }

    // A tiny budget against a large total overflows the quotient.
    let used = dash
        .total_expense
        .checked_div(dash.budget)
        .and_then(|q| q.to_f64())
        .unwrap_or(f64::INFINITY);
    let color = theme::balance_color(used > 1.0);
    let label = if used > MAX_SHOWN_RATIO {
        format!(">{:.0}%", MAX_SHOWN_RATIO * 100.0)
    } else {
        format!("{:.1}%", used * 100.0)
    };
    let gauge = Gauge::default()
        .block(titled_block("Budget Used", false))
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(used.clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, area);
}
