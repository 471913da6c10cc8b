//! TUI header panel.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use calcroi_core::constants::FORM_TITLE;
use calcroi_core::Action;

use crate::styles::ColorTheme;

/// Render the title and request status.
///
/// `pending` carries the in-flight action and how long it has been waiting.
pub fn render_header(frame: &mut Frame, area: Rect, api_url: &str, pending: Option<(Action, Duration)>) {
    let theme = ColorTheme::default();
    let status = match pending {
        Some((action, elapsed)) => Span::styled(
            format!(" | {}… {:.1}s", action.label(), elapsed.as_secs_f64()),
            theme.warning_style(),
        ),
        None => Span::styled(" | Listo", theme.muted_style()),
    };
    let text = vec![Line::from(vec![
        Span::styled(FORM_TITLE, theme.header_style()),
        status,
        Span::styled(format!(" | {api_url}"), theme.muted_style()),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" calcroi ");
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
