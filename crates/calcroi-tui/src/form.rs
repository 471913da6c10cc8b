//! Form panel: the three inputs and the two action buttons.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use calcroi_core::constants::{AMOUNT_LABEL, BANK_LABEL, TERM_LABEL};
use calcroi_core::{Action, FormState, RequestPhase};

use crate::styles::ColorTheme;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Amount,
    Term,
    Bank,
    ComputeButton,
    RatesButton,
}

impl Focus {
    const ORDER: [Self; 5] = [
        Self::Amount,
        Self::Term,
        Self::Bank,
        Self::ComputeButton,
        Self::RatesButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The action a focused button triggers.
    #[must_use]
    pub fn button_action(self) -> Option<Action> {
        match self {
            Self::ComputeButton => Some(Action::ComputeReturn),
            Self::RatesButton => Some(Action::LookupRates),
            _ => None,
        }
    }
}

fn text_field<'a>(label: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let theme = ColorTheme::default();
    let content = if value.is_empty() && !focused {
        Span::styled(placeholder, theme.muted_style())
    } else if focused {
        Span::styled(format!("{value}▏"), theme.text_style())
    } else {
        Span::styled(value, theme.text_style())
    };
    Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(theme.border_style(focused)),
    )
}

fn button(action: Action, focused: bool, pending: bool) -> Paragraph<'static> {
    let theme = ColorTheme::default();
    let label = if pending {
        format!("{}…", action.label())
    } else {
        action.label().to_string()
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(theme.button_style(action, focused))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(focused)))
}

/// Render the form controls into `area`.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState, focus: Focus) {
    let theme = ColorTheme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(16),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    frame.render_widget(
        text_field(AMOUNT_LABEL, form.amount(), "Monto", focus == Focus::Amount),
        columns[0],
    );
    frame.render_widget(
        text_field(TERM_LABEL, form.term_days(), "Plazo en días", focus == Focus::Term),
        columns[1],
    );

    let bank_focused = focus == Focus::Bank;
    let bank = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", theme.muted_style()),
        Span::styled(form.bank().to_string(), theme.text_style()),
        Span::styled(" ▶", theme.muted_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(BANK_LABEL)
            .border_style(theme.border_style(bank_focused)),
    );
    frame.render_widget(bank, columns[2]);

    let pending = match form.phase() {
        RequestPhase::Pending { action, .. } => Some(action),
        RequestPhase::Idle => None,
    };
    frame.render_widget(
        button(
            Action::ComputeReturn,
            focus == Focus::ComputeButton,
            pending == Some(Action::ComputeReturn),
        ),
        columns[3],
    );
    frame.render_widget(
        button(
            Action::LookupRates,
            focus == Focus::RatesButton,
            pending == Some(Action::LookupRates),
        ),
        columns[4],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcroi_core::{BankSelector, QueryInput};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn focus_cycles_in_tab_order() {
        let mut focus = Focus::Amount;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(focus);
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Amount);
        assert_eq!(seen, Focus::ORDER.to_vec());
        assert_eq!(Focus::Amount.prev(), Focus::RatesButton);
    }

    #[test]
    fn only_buttons_trigger_actions() {
        assert_eq!(Focus::ComputeButton.button_action(), Some(Action::ComputeReturn));
        assert_eq!(Focus::RatesButton.button_action(), Some(Action::LookupRates));
        assert_eq!(Focus::Bank.button_action(), None);
    }

    #[test]
    fn render_form_shows_values_and_labels() {
        let form = FormState::with_input(QueryInput::new("1500", "90", BankSelector::Bank(4)));
        let backend = TestBackend::new(120, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_form(frame, area, &form, Focus::Term);
            })
            .unwrap();
        let top: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect();
        let middle: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(top.contains("Monto:"));
        assert!(top.contains("Banco:"));
        assert!(middle.contains("1500"));
        assert!(middle.contains("90"));
        assert!(middle.contains('4'));
        assert!(middle.contains("Calcular ROI"));
        assert!(middle.contains("Buscar Tasas"));
    }

    #[test]
    fn pending_button_is_marked() {
        let mut form = FormState::new();
        form.begin(Action::LookupRates);
        let backend = TestBackend::new(120, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_form(frame, area, &form, Focus::Amount);
            })
            .unwrap();
        let middle: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(middle.contains("Buscar Tasas…"));
        assert!(!middle.contains("Calcular ROI…"));
    }

    #[test]
    fn empty_fields_show_placeholders() {
        let form = FormState::new();
        let backend = TestBackend::new(120, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_form(frame, area, &form, Focus::Bank);
            })
            .unwrap();
        let middle: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(middle.contains("Monto"));
        assert!(middle.contains("Todos"));
    }
}
