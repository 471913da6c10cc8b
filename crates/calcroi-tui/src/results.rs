//! Results panel: error, comparison table or single-bank sentence.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use calcroi_core::View;

use crate::styles::ColorTheme;

/// Render a [`View`] into `area`.
pub fn render_results(frame: &mut Frame, area: Rect, view: &View) {
    let theme = ColorTheme::default();
    match view {
        View::Empty => {
            let hint = Paragraph::new(Line::styled(
                "Complete el formulario y presione F2 o F3",
                theme.muted_style(),
            ))
            .block(Block::default().borders(Borders::ALL).title(" Resultados "));
            frame.render_widget(hint, area);
        }
        View::Error(_) => {
            let lines: Vec<Line> = view
                .error_lines()
                .into_iter()
                .map(|line| Line::styled(line, theme.error_style()))
                .collect();
            let error = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error ")
                        .border_style(theme.error_style()),
                );
            frame.render_widget(error, area);
        }
        View::Table(table) => {
            let header = Row::new([table.bank_header, table.value_header]).style(theme.header_style());
            let rows = table
                .rows
                .iter()
                .map(|row| Row::new([row.bank.clone(), row.value.clone()]));
            let widget = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
                .header(header)
                .block(Block::default().borders(Borders::ALL).title(" Resultados "));
            frame.render_widget(widget, area);
        }
        View::Sentence(sentence) => {
            let paragraph = Paragraph::new(sentence.as_str())
                .wrap(Wrap { trim: true })
                .style(theme.text_style())
                .block(Block::default().borders(Borders::ALL).title(" Resultado: "));
            frame.render_widget(paragraph, area);
        }
    }
}
