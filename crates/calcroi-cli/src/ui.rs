//! Styled text helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A section header such as `Resultado:`.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().cyan().to_string()
    }
}

/// Table column headers.
#[must_use]
pub fn column_header(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// One line of an error message.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn styled_text_keeps_content() {
        assert!(header("Resultado:").contains("Resultado:"));
        assert!(column_header("Banco").contains("Banco"));
        assert!(error_line("Error al procesar la solicitud").contains("Error al procesar"));
    }

    #[test]
    fn empty_and_unicode_text() {
        let _ = header("");
        assert!(error_line("Plazo en días").contains("días"));
    }
}
