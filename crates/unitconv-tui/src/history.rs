//! History panel listing recent conversions, newest first.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use unitconv_core::DISPLAY_PRECISION;
use unitconv_session::{ConversionRecord, History};

use crate::styles::ColorTheme;

/// One history line, without the color swatch.
#[must_use]
pub fn history_text(record: &ConversionRecord) -> String {
    format!(
        "{}: {} {} -> {:.DISPLAY_PRECISION$} {}",
        record.time, record.from_value, record.from_unit, record.to_value, record.to_unit
    )
}

fn history_item(record: &ConversionRecord) -> ListItem<'static> {
    let swatch = Color::Rgb(record.color.r, record.color.g, record.color.b);
    ListItem::new(Line::from(vec![
        Span::styled("\u{25a0} ", Style::default().fg(swatch)),
        Span::raw(history_text(record)),
    ]))
}

/// Render the history panel.
pub fn render_history(frame: &mut Frame, area: Rect, history: &History, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" History ({}/{}) ", history.len(), history.capacity()));

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Span::styled(
            "No conversions yet",
            theme.muted_style(),
        ))]
    } else {
        history.recent().map(history_item).collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}
