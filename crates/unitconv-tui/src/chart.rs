//! Result gauge widget.

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use unitconv_core::DISPLAY_PRECISION;
use unitconv_session::ConversionRecord;

use crate::styles::ColorTheme;

/// Fill ratio of `value` on an axis running from zero to `axis_max`.
///
/// Non-finite input or an empty axis yields an empty gauge.
#[must_use]
pub fn gauge_ratio(value: f64, axis_max: f64) -> f64 {
    if !value.is_finite() || !axis_max.is_finite() || axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max).clamp(0.0, 1.0)
}

/// Upper bound of the gauge axis for a result.
#[must_use]
pub fn axis_max(result: f64) -> f64 {
    result * 2.0
}

/// Render the latest result as a gauge, or a placeholder/status line.
pub fn render_result(
    frame: &mut Frame,
    area: Rect,
    result: Option<&ConversionRecord>,
    status: Option<&str>,
    theme: &ColorTheme,
) {
    if let Some(message) = status {
        let paragraph = Paragraph::new(message.to_string())
            .style(theme.error_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title(" Result "),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(record) = result else {
        let paragraph = Paragraph::new("Press Enter to convert")
            .style(theme.muted_style())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title(" Result "),
            );
        frame.render_widget(paragraph, area);
        return;
    };

    let value = record.to_value;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(format!(" Result in {} ", record.to_unit)),
        )
        .gauge_style(theme.gauge_style())
        .label(format!(
            "{value:.DISPLAY_PRECISION$} {}",
            record.to_unit
        ))
        .ratio(gauge_ratio(value, axis_max(value)));

    frame.render_widget(gauge, area);
}
