use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use super::titled_block;
use crate::summary;
use crate::tracker::Breakdown;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_value, format_amount, format_percent, truncate};

const MAX_LEGEND_ROWS: u16 = 12;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let groups = match &app.breakdown {
        Breakdown::NoData => {
            render_no_data(f, area);
            return;
        }
        Breakdown::Groups(groups) => groups,
    };
    let pct = summary::shares(groups);

    let legend_height = (groups.len() as u16).min(MAX_LEGEND_ROWS) + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(legend_height)])
        .split(area);

    render_chart(f, chunks[0], groups, &pct);
    render_legend(f, chunks[1], groups, &pct);
}

fn render_no_data(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "There are no expense data to display.",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Add a transaction from the main menu first",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(titled_block("Spending by Description", false));
    f.render_widget(msg, area);
}

fn render_chart(f: &mut Frame, area: Rect, groups: &[(String, Decimal)], pct: &[f64]) {
    let bars: Vec<Bar> = groups
        .iter()
        .zip(pct)
        .enumerate()
        .map(|(i, ((name, amount), share))| {
            let color = theme::chart_color(i);
            Bar::default()
                .value(bar_value(*amount))
                .text_value(format_percent(*share))
                .label(Line::from(truncate(name, 10)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block("Spending by Description", false))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_legend(f: &mut Frame, area: Rect, groups: &[(String, Decimal)], pct: &[f64]) {
    let header = Row::new(
        ["Description", "Amount", "Share"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let rows: Vec<Row> = groups
        .iter()
        .zip(pct)
        .enumerate()
        .take(MAX_LEGEND_ROWS as usize)
        .map(|(i, ((name, amount), share))| {
            Row::new(vec![
                Cell::from(Span::styled(
                    format!("■ {}", truncate(name, 36)),
                    Style::default().fg(theme::chart_color(i)),
                )),
                Cell::from(format_amount(*amount)),
                Cell::from(format_percent(*share)),
            ])
            .style(theme::normal_style())
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(&format!("Legend ({} groups)", groups.len()), false));
    f.render_widget(table, area);
}
