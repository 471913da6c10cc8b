//! Query input: amount, term, bank selector, and the two user actions.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::constants::{ALL_BANKS, BANK_COUNT};
use crate::error::RatesError;
use crate::format::fixed2;

/// Which bank(s) a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BankSelector {
    /// Every bank (`Todos`); answered by the `-all` endpoints.
    #[default]
    All,
    /// A single bank, numbered `1..=BANK_COUNT`.
    Bank(u8),
}

impl BankSelector {
    /// Select a single bank by number.
    pub fn bank(n: u8) -> Result<Self, RatesError> {
        if (1..=BANK_COUNT).contains(&n) {
            Ok(Self::Bank(n))
        } else {
            Err(RatesError::InvalidBank(n.to_string()))
        }
    }

    #[must_use]
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Every selector option in display order: `Todos`, then 1 to 23.
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain((1..=BANK_COUNT).map(Self::Bank))
    }

    /// The following option, wrapping from the last bank back to `Todos`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Bank(1),
            Self::Bank(n) if n >= BANK_COUNT => Self::All,
            Self::Bank(n) => Self::Bank(n + 1),
        }
    }

    /// The preceding option, wrapping from `Todos` to the last bank.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Bank(BANK_COUNT),
            Self::Bank(n) if n <= 1 => Self::All,
            Self::Bank(n) => Self::Bank(n - 1),
        }
    }
}

impl fmt::Display for BankSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_BANKS),
            Self::Bank(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for BankSelector {
    type Err = RatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL_BANKS {
            return Ok(Self::All);
        }
        let n: u8 = s
            .parse()
            .map_err(|_| RatesError::InvalidBank(s.to_string()))?;
        Self::bank(n)
    }
}

impl Serialize for BankSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw form input. Amount and term are held exactly as typed; the remote
/// API is the only validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryInput {
    pub amount: String,
    pub term_days: String,
    pub bank: BankSelector,
}

impl QueryInput {
    #[must_use]
    pub fn new(amount: impl Into<String>, term_days: impl Into<String>, bank: BankSelector) -> Self {
        Self {
            amount: amount.into(),
            term_days: term_days.into(),
            bank,
        }
    }
}

/// What a result set holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResultKind {
    /// Projected return on investment, in COP.
    #[serde(rename = "roi")]
    Roi,
    /// Interest rate, in percent.
    #[serde(rename = "tasa")]
    Rate,
}

impl ResultKind {
    /// Header of the value column in the comparison table.
    #[must_use]
    pub fn value_header(self) -> &'static str {
        match self {
            Self::Roi => "ROI (COP)",
            Self::Rate => "Tasa (%)",
        }
    }

    /// Name of the value field in a single-bank reply.
    #[must_use]
    pub fn value_field(self) -> &'static str {
        match self {
            Self::Roi => "roi",
            Self::Rate => "tasa",
        }
    }

    /// Format a value to two decimals with the kind's unit.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Roi => format!("${} COP", fixed2(value)),
            Self::Rate => format!("{}%", fixed2(value)),
        }
    }
}

/// The two user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Calcular ROI.
    ComputeReturn,
    /// Buscar Tasas.
    LookupRates,
}

impl Action {
    #[must_use]
    pub fn kind(self) -> ResultKind {
        match self {
            Self::ComputeReturn => ResultKind::Roi,
            Self::LookupRates => ResultKind::Rate,
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ComputeReturn => "Calcular ROI",
            Self::LookupRates => "Buscar Tasas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_banks() {
        assert_eq!("Todos".parse::<BankSelector>(), Ok(BankSelector::All));
        assert_eq!(" Todos ".parse::<BankSelector>(), Ok(BankSelector::All));
    }

    #[test]
    fn parse_bank_numbers() {
        assert_eq!("1".parse::<BankSelector>(), Ok(BankSelector::Bank(1)));
        assert_eq!("23".parse::<BankSelector>(), Ok(BankSelector::Bank(23)));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!("0".parse::<BankSelector>().is_err());
        assert!("24".parse::<BankSelector>().is_err());
        assert!("todos".parse::<BankSelector>().is_err());
        assert!("".parse::<BankSelector>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for option in BankSelector::options() {
            assert_eq!(option.to_string().parse::<BankSelector>(), Ok(option));
        }
    }

    #[test]
    fn options_count() {
        assert_eq!(BankSelector::options().count(), 24);
        assert_eq!(BankSelector::options().next(), Some(BankSelector::All));
    }

    #[test]
    fn next_prev_wrap() {
        assert_eq!(BankSelector::All.next(), BankSelector::Bank(1));
        assert_eq!(BankSelector::Bank(23).next(), BankSelector::All);
        assert_eq!(BankSelector::All.prev(), BankSelector::Bank(23));
        assert_eq!(BankSelector::Bank(1).prev(), BankSelector::All);
        assert_eq!(BankSelector::Bank(5).next().prev(), BankSelector::Bank(5));
    }

    #[test]
    fn kind_headers() {
        assert_eq!(ResultKind::Roi.value_header(), "ROI (COP)");
        assert_eq!(ResultKind::Rate.value_header(), "Tasa (%)");
    }

    #[test]
    fn kind_format_value() {
        assert_eq!(ResultKind::Roi.format_value(5.0), "$5.00 COP");
        assert_eq!(ResultKind::Rate.format_value(9.876), "9.88%");
        assert_eq!(ResultKind::Roi.format_value(1234.125), "$1234.13 COP");
    }

    #[test]
    fn action_kinds() {
        assert_eq!(Action::ComputeReturn.kind(), ResultKind::Roi);
        assert_eq!(Action::LookupRates.kind(), ResultKind::Rate);
        assert_eq!(Action::ComputeReturn.label(), "Calcular ROI");
        assert_eq!(Action::LookupRates.label(), "Buscar Tasas");
    }

    #[test]
    fn bank_selector_serializes_as_label() {
        assert_eq!(serde_json::to_string(&BankSelector::All).unwrap(), "\"Todos\"");
        assert_eq!(serde_json::to_string(&BankSelector::Bank(7)).unwrap(), "\"7\"");
    }
}
