//! Season rule configuration.
//!
//! [`RuleConstants`] carries every league-year number the matching bands and
//! the absorption allocator need. It is loaded once at process start and
//! passed explicitly into each evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Amount, Result, TradeCheckError, constants};

/// How the absorption pool behaves once the per-salary tolerance has pushed
/// it below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsorptionPolicy {
    /// Floor the remaining pool at zero after every absorption.
    #[default]
    Clamped,
    /// Let the remaining pool go negative; later salaries must then fit
    /// inside `tolerance - deficit`.
    Unclamped,
}

impl std::fmt::Display for AbsorptionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamped => write!(f, "clamped"),
            Self::Unclamped => write!(f, "unclamped"),
        }
    }
}

/// Per-season salary-matching constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConstants {
    /// Season label (e.g., "2024-25").
    pub season: String,
    /// Inclusive upper bound on outgoing salary for the low band (T1).
    pub low_band_ceiling: Amount,
    /// Inclusive upper bound on outgoing salary for the middle band (T2).
    pub middle_band_ceiling: Amount,
    /// Low band multiplier on outgoing salary.
    pub low_band_multiplier: Decimal,
    /// Middle band allowance added to outgoing salary.
    pub middle_band_allowance: Amount,
    /// High band multiplier on outgoing salary.
    pub high_band_multiplier: Decimal,
    /// Flat add-on for the low and high bands.
    pub flat_allowance: Amount,
    /// Per-salary cushion when absorbing into a TPE or cap space.
    pub absorption_tolerance: Amount,
    /// Pool behavior after the tolerance has been used.
    pub absorption_policy: AbsorptionPolicy,
}

impl Default for RuleConstants {
    fn default() -> Self {
        Self {
            season: constants::DEFAULT_SEASON.to_string(),
            low_band_ceiling: Amount(constants::LOW_BAND_CEILING),
            middle_band_ceiling: Amount(constants::MIDDLE_BAND_CEILING),
            low_band_multiplier: constants::LOW_BAND_MULTIPLIER,
            middle_band_allowance: Amount(constants::MIDDLE_BAND_ALLOWANCE),
            high_band_multiplier: constants::HIGH_BAND_MULTIPLIER,
            flat_allowance: Amount(constants::FLAT_ALLOWANCE),
            absorption_tolerance: Amount(constants::ABSORPTION_TOLERANCE),
            absorption_policy: AbsorptionPolicy::default(),
        }
    }
}

impl RuleConstants {
    /// Check that the bands are ordered and the formulas never shrink salary.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| -> Result<()> {
            Err(TradeCheckError::InvalidRuleConstants { reason })
        };

        if self.season.trim().is_empty() {
            return invalid("season label cannot be empty".into());
        }
        if self.low_band_ceiling.is_zero() {
            return invalid("low_band_ceiling must be greater than zero".into());
        }
        if self.low_band_ceiling >= self.middle_band_ceiling {
            return invalid(format!(
                "low_band_ceiling {} must be below middle_band_ceiling {}",
                self.low_band_ceiling, self.middle_band_ceiling,
            ));
        }
        if self.low_band_multiplier < Decimal::ONE {
            return invalid(format!(
                "low_band_multiplier {} must be at least 1",
                self.low_band_multiplier
            ));
        }
        if self.high_band_multiplier < Decimal::ONE {
            return invalid(format!(
                "high_band_multiplier {} must be at least 1",
                self.high_band_multiplier
            ));
        }
        Ok(())
    }
}
