//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use calcroi_cli::OutputFormat;
use calcroi_core::constants::DEFAULT_API_URL;
use calcroi_core::{Action, BankSelector, QueryInput};

/// Action selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    /// Calcular ROI.
    Roi,
    /// Buscar Tasas.
    Rates,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Roi => Self::ComputeReturn,
            ActionArg::Rates => Self::LookupRates,
        }
    }
}

/// calcroi: projected ROI and interest rates per bank.
#[derive(Parser, Debug)]
#[command(name = "calcroi", version, about)]
pub struct AppConfig {
    /// Amount to invest (COP), sent as typed.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// Term in days, sent as typed.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub term: String,

    /// Bank: "Todos" or a number from 1 to 23.
    #[arg(short, long, default_value = "Todos")]
    pub bank: BankSelector,

    /// Which lookup to run.
    #[arg(long, value_enum, default_value = "roi")]
    pub action: ActionArg,

    /// Launch the interactive form, pre-filled from the flags.
    #[arg(long)]
    pub tui: bool,

    /// Origin of the rates API.
    #[arg(long, env = "CALCROI_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Output format of the one-shot mode.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (no spinner, no decorations).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Form inputs carried by the flags.
    #[must_use]
    pub fn input(&self) -> QueryInput {
        QueryInput::new(self.amount.clone(), self.term.clone(), self.bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("calcroi").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.amount, "");
        assert_eq!(config.term, "");
        assert_eq!(config.bank, BankSelector::All);
        assert_eq!(config.action, ActionArg::Roi);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.tui);
    }

    #[test]
    fn full_flags() {
        let config = parse(&[
            "-a", "1000000", "-t", "90", "-b", "7", "--action", "rates", "--format", "json", "-q",
        ])
        .unwrap();
        let input = config.input();
        assert_eq!(input.amount, "1000000");
        assert_eq!(input.term_days, "90");
        assert_eq!(input.bank, BankSelector::Bank(7));
        assert_eq!(Action::from(config.action), Action::LookupRates);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.quiet);
    }

    #[test]
    fn raw_amount_is_kept() {
        let config = parse(&["--amount", "-5", "--term", "abc"]).unwrap();
        assert_eq!(config.amount, "-5");
        assert_eq!(config.term, "abc");
    }

    #[test]
    fn bank_out_of_range_rejected() {
        assert!(parse(&["--bank", "0"]).is_err());
        assert!(parse(&["--bank", "24"]).is_err());
        assert!(parse(&["--bank", "todos"]).is_err());
    }

    #[test]
    fn api_url_flag() {
        let config = parse(&["--api-url", "http://127.0.0.1:8080"]).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn command_is_consistent() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
