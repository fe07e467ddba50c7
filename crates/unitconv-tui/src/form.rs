//! Conversion form: category, source unit, target unit, and value.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Field;
use crate::styles::ColorTheme;

/// What the form shows; borrowed from the model on each render.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub category: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub input: &'a str,
    pub focus: Field,
}

const LABEL_WIDTH: usize = 10;

fn field_line<'a>(
    label: &'a str,
    value: String,
    focused: bool,
    theme: &ColorTheme,
) -> Line<'a> {
    let style = if focused {
        theme.focused_style()
    } else {
        theme.text_style()
    };
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), theme.muted_style()),
        Span::styled(value, style),
    ])
}

/// Build the four form lines.
#[must_use]
pub fn form_lines<'a>(view: &FormView<'a>, theme: &ColorTheme) -> Vec<Line<'a>> {
    let selector = |name: &str| format!("< {name} >");
    let value = if view.input.is_empty() {
        "0".to_string()
    } else {
        view.input.to_string()
    };
    let value = if view.focus == Field::Value {
        format!("{value}_")
    } else {
        value
    };

    vec![
        field_line(
            "Category",
            selector(view.category),
            view.focus == Field::Category,
            theme,
        ),
        field_line("From", selector(view.source), view.focus == Field::Source, theme),
        field_line("To", selector(view.target), view.focus == Field::Target, theme),
        field_line("Value", value, view.focus == Field::Value, theme),
    ]
}

/// Render the conversion form.
pub fn render_form(frame: &mut Frame, area: Rect, view: &FormView<'_>, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Convert ");
    let paragraph = Paragraph::new(form_lines(view, theme)).block(block);
    frame.render_widget(paragraph, area);
}
