pub(crate) mod add;
pub(crate) mod dashboard;
pub(crate) mod graph;
pub(crate) mod menu;

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::ui::theme;

/// Bordered block with the dim bold title used across screens.
pub(crate) fn titled_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

/// A `width`-wide column centered in `area`.
pub(crate) fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
