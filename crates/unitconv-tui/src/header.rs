//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use unitconv_core::Category;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, category: Category, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled("Unit Converter", theme.header_style()),
        Span::raw(format!(" | Category: {category}")),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
