//! Result renderer: a pure function from state to [`View`].

use crate::constants::BANK_HEADER;
use crate::format::{display_scalar, parse_numeric};
use crate::input::ResultKind;
use crate::result::{AggregateRow, ResultBody, ResultSet, SingleResult};
use crate::state::FormState;

/// One table row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub bank: String,
    pub value: String,
}

/// Two-column comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub bank_header: &'static str,
    pub value_header: &'static str,
    pub rows: Vec<TableRow>,
}

/// What to show below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Nothing requested yet.
    Empty,
    /// Error message, possibly multi-line.
    Error(String),
    /// Per-bank comparison.
    Table(TableView),
    /// Single-bank narrative sentence.
    Sentence(String),
}

impl View {
    /// Lines of an error view; empty for other views.
    #[must_use]
    pub fn error_lines(&self) -> Vec<&str> {
        match self {
            Self::Error(message) => message.lines().collect(),
            _ => Vec::new(),
        }
    }
}

/// Render the current state. An error takes precedence over results.
#[must_use]
pub fn render(state: &FormState) -> View {
    if let Some(error) = state.error() {
        return View::Error(error.to_string());
    }
    state.results().map_or(View::Empty, render_results)
}

/// Render a result set on its own.
#[must_use]
pub fn render_results(results: &ResultSet) -> View {
    match &results.body {
        ResultBody::Aggregate(rows) => View::Table(table(results.kind, rows)),
        ResultBody::Single(single) => View::Sentence(sentence(results.kind, single)),
    }
}

/// Build the comparison table, keeping row order.
#[must_use]
pub fn table(kind: ResultKind, rows: &[AggregateRow]) -> TableView {
    TableView {
        bank_header: BANK_HEADER,
        value_header: kind.value_header(),
        rows: rows
            .iter()
            .map(|row| TableRow {
                bank: row.bank.clone(),
                value: kind.format_value(row.value),
            })
            .collect(),
    }
}

/// Build the single-bank sentence.
#[must_use]
pub fn sentence(kind: ResultKind, single: &SingleResult) -> String {
    let bank = display_scalar(single.bank.as_ref());
    let amount = display_scalar(single.amount.as_ref());
    let term = display_scalar(single.term_days.as_ref());
    let value = single.value.as_ref().map_or(f64::NAN, parse_numeric);

    let prefix = format!("El banco {bank} con el monto {amount} COP y un plazo de {term} días");
    match kind {
        ResultKind::Roi => format!("{prefix} tiene un ROI de {}.", kind.format_value(value)),
        ResultKind::Rate => format!("{prefix} tiene una tasa de {}.", kind.format_value(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestFailure;
    use crate::input::Action;
    use serde_json::json;

    fn rows() -> Vec<AggregateRow> {
        vec![
            AggregateRow {
                bank: "Banco Z".into(),
                value: 5.0,
            },
            AggregateRow {
                bank: "Banco A".into(),
                value: 1234.567,
            },
        ]
    }

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(render(&FormState::new()), View::Empty);
    }

    #[test]
    fn roi_table() {
        let view = render_results(&ResultSet::aggregate(ResultKind::Roi, rows()));
        let View::Table(table) = view else {
            panic!("expected a table");
        };
        assert_eq!(table.bank_header, "Banco");
        assert_eq!(table.value_header, "ROI (COP)");
        assert_eq!(table.rows[0].bank, "Banco Z");
        assert_eq!(table.rows[0].value, "$5.00 COP");
        assert_eq!(table.rows[1].value, "$1234.57 COP");
    }

    #[test]
    fn rate_table() {
        let table = table(ResultKind::Rate, &rows());
        assert_eq!(table.value_header, "Tasa (%)");
        assert_eq!(table.rows[0].value, "5.00%");
    }

    #[test]
    fn roi_sentence() {
        let single = SingleResult {
            bank: Some(json!("3")),
            amount: Some(json!("1000000")),
            term_days: Some(json!("90")),
            value: Some(json!(12345.678)),
        };
        assert_eq!(
            sentence(ResultKind::Roi, &single),
            "El banco 3 con el monto 1000000 COP y un plazo de 90 días tiene un ROI de $12345.68 COP."
        );
    }

    #[test]
    fn rate_sentence() {
        let single = SingleResult {
            bank: Some(json!(7)),
            amount: Some(json!(500)),
            term_days: Some(json!(30)),
            value: Some(json!("9.5")),
        };
        assert_eq!(
            sentence(ResultKind::Rate, &single),
            "El banco 7 con el monto 500 COP y un plazo de 30 días tiene una tasa de 9.50%."
        );
    }

    #[test]
    fn sentence_with_missing_value() {
        let single = SingleResult {
            bank: None,
            amount: None,
            term_days: None,
            value: None,
        };
        let text = sentence(ResultKind::Rate, &single);
        assert!(text.contains("El banco N/A"));
        assert!(text.ends_with("tasa de NaN%."));
    }

    #[test]
    fn error_takes_precedence() {
        let mut state = FormState::new();
        state.set_results(Some(ResultSet::aggregate(ResultKind::Roi, rows())));
        state.set_error(Some("X\n- a\n- b".into()));
        let view = render(&state);
        assert_eq!(view.error_lines(), ["X", "- a", "- b"]);
    }

    #[test]
    fn failure_hides_previous_table() {
        let mut state = FormState::new();
        let first = state.begin(Action::ComputeReturn);
        state.resolve(first.seq, Ok(ResultSet::aggregate(ResultKind::Roi, rows())));
        assert!(matches!(render(&state), View::Table(_)));

        let second = state.begin(Action::ComputeReturn);
        state.resolve(second.seq, Err(RequestFailure::Unrecognized { status: 500 }));
        assert!(matches!(render(&state), View::Error(_)));
    }
}
