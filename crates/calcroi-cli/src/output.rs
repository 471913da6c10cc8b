//! CLI output formatting.

use serde_json::{json, Value};

use calcroi_core::{FormState, TableView};

use crate::ui::column_header;

/// Lay out a comparison table as aligned text columns.
///
/// Widths are measured in characters, so accented labels stay aligned.
#[must_use]
pub fn format_table(table: &TableView, styled: bool) -> String {
    let bank_width = table
        .rows
        .iter()
        .map(|r| r.bank.chars().count())
        .chain(std::iter::once(table.bank_header.chars().count()))
        .max()
        .unwrap_or(0);
    let value_width = table
        .rows
        .iter()
        .map(|r| r.value.chars().count())
        .chain(std::iter::once(table.value_header.chars().count()))
        .max()
        .unwrap_or(0);

    let head = format!(
        "{:<bank_width$}  {:>value_width$}",
        table.bank_header, table.value_header
    );
    let mut out = if styled { column_header(&head) } else { head };
    out.push('\n');
    out.push_str(&"-".repeat(bank_width + 2 + value_width));
    for row in &table.rows {
        out.push('\n');
        out.push_str(&format!(
            "{:<bank_width$}  {:>value_width$}",
            row.bank, row.value
        ));
    }
    out
}

/// Machine-readable snapshot of the state after a request.
#[must_use]
pub fn state_json(state: &FormState) -> Value {
    json!({
        "input": state.input(),
        "result": state.results(),
        "error": state.error(),
    })
}
