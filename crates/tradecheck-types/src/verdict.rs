//! Matching bands and legality verdicts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Amount, RuleConstants};

/// One of the three outgoing-salary ranges, each with its own formula for
/// the maximum incoming salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchingBand {
    /// `outgoing <= T1`: `outgoing × 2 + flat allowance`.
    Low,
    /// `T1 < outgoing <= T2`: `outgoing + middle allowance`.
    Middle,
    /// `outgoing > T2`: `outgoing × 1.25 + flat allowance`.
    High,
}

impl MatchingBand {
    /// Select the band for an outgoing salary. Bands are mutually exclusive
    /// and checked from lowest to highest; the first match wins.
    ///
    /// Returns `None` for a zero outgoing salary, which no band covers.
    #[must_use]
    pub fn for_outgoing(outgoing: Amount, rules: &RuleConstants) -> Option<Self> {
        if outgoing.is_zero() {
            None
        } else if outgoing <= rules.low_band_ceiling {
            Some(Self::Low)
        } else if outgoing <= rules.middle_band_ceiling {
            Some(Self::Middle)
        } else {
            Some(Self::High)
        }
    }
}

impl std::fmt::Display for MatchingBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Middle => write!(f, "MIDDLE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// What one side of a trade sends and receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryPosition {
    /// Salary sent out.
    pub outgoing: Amount,
    /// Salary taken back.
    pub incoming: Amount,
}

impl SalaryPosition {
    /// `incoming - outgoing`; positive when the team adds salary.
    #[must_use]
    pub fn net_change(&self) -> Decimal {
        self.incoming.value() - self.outgoing.value()
    }
}

/// Outcome of judging one team's incoming salary against its matching limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityVerdict {
    /// `incoming <= limit`.
    pub legal: bool,
    /// Maximum incoming salary allowed for the outgoing salary.
    pub limit: Amount,
    /// Human-readable statement of the band rule applied.
    pub rule_description: String,
    /// How much incoming salary must be cut; zero when legal.
    pub shortfall: Amount,
    /// Band that produced `limit`; `None` for the invalid verdict.
    pub band: Option<MatchingBand>,
    /// The salaries that were judged.
    pub position: SalaryPosition,
}

impl LegalityVerdict {
    /// The verdict for an outgoing salary no band can judge: not legal,
    /// zero limit, no rule, zero shortfall.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            legal: false,
            limit: Amount::ZERO,
            rule_description: String::new(),
            shortfall: Amount::ZERO,
            band: None,
            position: SalaryPosition::default(),
        }
    }

    /// Net salary change for the judged team.
    #[must_use]
    pub fn net_change(&self) -> Decimal {
        self.position.net_change()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_on_the_ceiling() {
        let rules = RuleConstants::default();
        let band = |cents| MatchingBand::for_outgoing(Amount::from_cents(cents), &rules);

        assert_eq!(band(750_181_773), Some(MatchingBand::Low));
        assert_eq!(band(750_181_774), Some(MatchingBand::Middle));
        assert_eq!(band(3_000_727_094), Some(MatchingBand::Middle));
        assert_eq!(band(3_000_727_095), Some(MatchingBand::High));
    }

    #[test]
    fn zero_outgoing_has_no_band() {
        let rules = RuleConstants::default();
        assert_eq!(MatchingBand::for_outgoing(Amount::ZERO, &rules), None);
    }

    #[test]
    fn net_change_is_signed() {
        let adds = SalaryPosition {
            outgoing: Amount::from_dollars(7_000_000),
            incoming: Amount::from_dollars(9_000_000),
        };
        let saves = SalaryPosition {
            outgoing: adds.incoming,
            incoming: adds.outgoing,
        };
        assert_eq!(adds.net_change(), Decimal::new(2_000_000, 0));
        assert_eq!(saves.net_change(), Decimal::new(-2_000_000, 0));
    }

    #[test]
    fn invalid_verdict_is_zeroed() {
        let verdict = LegalityVerdict::invalid();
        assert!(!verdict.legal);
        assert!(verdict.limit.is_zero());
        assert!(verdict.shortfall.is_zero());
        assert!(verdict.rule_description.is_empty());
        assert_eq!(verdict.band, None);
    }

    #[test]
    fn band_display() {
        assert_eq!(MatchingBand::Low.to_string(), "LOW");
        assert_eq!(MatchingBand::High.to_string(), "HIGH");
    }
}
