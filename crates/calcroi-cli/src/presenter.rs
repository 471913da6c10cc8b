//! CLI result presenter.

use std::io::{self, Write};

use calcroi_core::{render, FormState, View};

use crate::output::{format_table, state_json};
use crate::ui::{error_line, header};

/// Output format of the one-shot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table or sentence, as in the form.
    #[default]
    Text,
    /// JSON snapshot of input, result and error.
    Json,
}

/// Writes the rendered view of a [`FormState`].
pub struct CliPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Write the current view. Results go to `out`, errors to `err`; in JSON
    /// mode everything goes to `out`.
    pub fn present(
        &self,
        state: &FormState,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(&state_json(state))?;
            return writeln!(out, "{json}");
        }

        let styled = !self.quiet;
        match render(state) {
            View::Empty => Ok(()),
            View::Error(message) => {
                for line in message.lines() {
                    if styled {
                        writeln!(err, "{}", error_line(line))?;
                    } else {
                        writeln!(err, "{line}")?;
                    }
                }
                Ok(())
            }
            View::Table(table) => writeln!(out, "{}", format_table(&table, styled)),
            View::Sentence(sentence) => {
                if styled {
                    writeln!(out, "{}", header("Resultado:"))?;
                }
                writeln!(out, "{sentence}")
            }
        }
    }
}
