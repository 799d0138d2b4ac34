//! Catalog of the available calculators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use fincalc_core::FincalcError;

/// Identifies one of the ten calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    /// Monthly payment and totals for an installment loan.
    LoanPayment,
    /// Savings with monthly contributions.
    SavingsGrowth,
    /// Lump-sum growth with periodic compounding.
    CompoundInterest,
    /// Maximum mortgage from income and debts.
    MortgageAffordability,
    /// Nest egg at retirement.
    Retirement,
    /// Months to pay off a debt with a fixed payment.
    DebtPayoff,
    /// Return on investment.
    Roi,
    /// Units and revenue to cover fixed costs.
    BreakEven,
    /// Cash reserve target.
    EmergencyFund,
    /// Today's versus future money.
    InflationAdjuster,
}

impl CalculatorKind {
    /// All calculators in display order.
    pub const ALL: [CalculatorKind; 10] = [
        CalculatorKind::LoanPayment,
        CalculatorKind::SavingsGrowth,
        CalculatorKind::CompoundInterest,
        CalculatorKind::MortgageAffordability,
        CalculatorKind::Retirement,
        CalculatorKind::DebtPayoff,
        CalculatorKind::Roi,
        CalculatorKind::BreakEven,
        CalculatorKind::EmergencyFund,
        CalculatorKind::InflationAdjuster,
    ];

    /// Returns all calculators in display order.
    pub fn all() -> &'static [CalculatorKind] {
        &Self::ALL
    }

    /// Stable kebab-case identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::LoanPayment => "loan-payment",
            Self::SavingsGrowth => "savings-growth",
            Self::CompoundInterest => "compound-interest",
            Self::MortgageAffordability => "mortgage-affordability",
            Self::Retirement => "retirement",
            Self::DebtPayoff => "debt-payoff",
            Self::Roi => "roi",
            Self::BreakEven => "break-even",
            Self::EmergencyFund => "emergency-fund",
            Self::InflationAdjuster => "inflation-adjuster",
        }
    }

    /// Short human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoanPayment => "Loan payment",
            Self::SavingsGrowth => "Savings growth",
            Self::CompoundInterest => "Compound interest",
            Self::MortgageAffordability => "Mortgage affordability",
            Self::Retirement => "Retirement",
            Self::DebtPayoff => "Debt payoff",
            Self::Roi => "ROI",
            Self::BreakEven => "Break-even",
            Self::EmergencyFund => "Emergency fund",
            Self::InflationAdjuster => "Inflation adjuster",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::LoanPayment => "Monthly payment and totals for any installment loan",
            Self::SavingsGrowth => "Project savings with monthly contributions",
            Self::CompoundInterest => "Growth without additional contributions",
            Self::MortgageAffordability => {
                "Estimate the maximum loan based on income and debts"
            }
            Self::Retirement => "Project your nest egg at retirement",
            Self::DebtPayoff => "Estimate months to zero with a fixed payment",
            Self::Roi => "Return on investment and profit",
            Self::BreakEven => "Units and revenue to cover fixed costs",
            Self::EmergencyFund => "How much cash to keep for safety",
            Self::InflationAdjuster => "Convert between today's and future dollars",
        }
    }

    /// Parses an identifier. Accepts the kebab-case id, snake_case, and a
    /// few short aliases (`loan`, `debt`, `inflation`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(kind) = Self::ALL.into_iter().find(|k| k.id() == normalized) {
            return Some(kind);
        }
        match normalized.as_str() {
            "loan" => Some(Self::LoanPayment),
            "savings" => Some(Self::SavingsGrowth),
            "compound" => Some(Self::CompoundInterest),
            "mortgage" => Some(Self::MortgageAffordability),
            "debt" => Some(Self::DebtPayoff),
            "emergency" => Some(Self::EmergencyFund),
            "inflation" => Some(Self::InflationAdjuster),
            _ => None,
        }
    }
}

impl FromStr for CalculatorKind {
    type Err = FincalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FincalcError::unknown_calculator(s))
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for kind in CalculatorKind::all() {
            assert!(seen.insert(kind.id()));
            assert_eq!(CalculatorKind::parse(kind.id()), Some(*kind));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(CalculatorKind::parse("loan"), Some(CalculatorKind::LoanPayment));
        assert_eq!(CalculatorKind::parse("DEBT_PAYOFF"), Some(CalculatorKind::DebtPayoff));
        assert_eq!(CalculatorKind::parse("inflation"), Some(CalculatorKind::InflationAdjuster));
        assert_eq!(CalculatorKind::parse("pricing"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "tax".parse::<CalculatorKind>().unwrap_err();
        assert_eq!(err, FincalcError::unknown_calculator("tax"));
    }

    #[test]
    fn test_serde_matches_id() {
        for kind in CalculatorKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
