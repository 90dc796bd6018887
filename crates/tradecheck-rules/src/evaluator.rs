//! Salary-matching evaluator.
//!
//! Computes the most incoming salary a team may take back for what it sends
//! out, and judges a proposed incoming salary against that ceiling.
//!
//! ```text
//! evaluate_legality(outgoing, incoming, rules) -> LegalityVerdict
//! ```
//!
//! ## Bands
//!
//! | Band   | Outgoing salary        | Limit                          |
//! |--------|------------------------|--------------------------------|
//! | Low    | `<= T1`                | `outgoing × 2 + 250,000`       |
//! | Middle | `T1 < outgoing <= T2`  | `outgoing + 7,751,817.73`      |
//! | High   | `> T2`                 | `outgoing × 1.25 + 250,000`    |
//!
//! Thresholds and coefficients come from [`RuleConstants`].

use rust_decimal::Decimal;
use tradecheck_types::{
    Amount, LegalityVerdict, MatchingBand, Result, RuleConstants, SalaryPosition, TradeCheckError,
};

/// Judge `incoming` against the matching limit for `outgoing`.
///
/// ## Algorithm
///
/// 1. Reject a zero outgoing salary (no band applies)
/// 2. Pick the band for `outgoing`, lowest first
/// 3. `limit` from the band formula
/// 4. `legal = incoming <= limit`, `shortfall = max(0, incoming - limit)`
///
/// # Errors
/// - `InvalidOutgoingSalary` if `outgoing` is zero; callers that need a
///   record for this case use [`LegalityVerdict::invalid`]
/// - `ArithmeticOverflow` if the limit leaves the decimal range
pub fn evaluate_legality(
    outgoing: Amount,
    incoming: Amount,
    rules: &RuleConstants,
) -> Result<LegalityVerdict> {
    let Some(band) = MatchingBand::for_outgoing(outgoing, rules) else {
        tracing::warn!(
            outgoing = %outgoing,
            incoming = %incoming,
            "Outgoing salary must be positive to apply a matching band"
        );
        return Err(TradeCheckError::InvalidOutgoingSalary {
            outgoing: outgoing.value(),
        });
    };

    let limit = band_limit(band, outgoing, rules)?;
    let legal = incoming <= limit;
    let shortfall = incoming.saturating_sub(limit);

    tracing::debug!(
        season = %rules.season,
        band = %band,
        outgoing = %outgoing,
        incoming = %incoming,
        limit = %limit,
        legal,
        "Evaluated salary matching"
    );

    Ok(LegalityVerdict {
        legal,
        limit,
        rule_description: rule_description(band, rules)?,
        shortfall,
        band: Some(band),
        position: SalaryPosition { outgoing, incoming },
    })
}

/// The most incoming salary allowed for `outgoing`.
///
/// # Errors
/// Same as [`evaluate_legality`].
pub fn matching_limit(outgoing: Amount, rules: &RuleConstants) -> Result<Amount> {
    let band = MatchingBand::for_outgoing(outgoing, rules).ok_or(
        TradeCheckError::InvalidOutgoingSalary {
            outgoing: outgoing.value(),
        },
    )?;
    band_limit(band, outgoing, rules)
}

/// Plain-language statement of a band's rule.
///
/// # Errors
/// `ArithmeticOverflow` if a multiplier cannot be shown as a percentage.
pub fn rule_description(band: MatchingBand, rules: &RuleConstants) -> Result<String> {
    let text = match band {
        MatchingBand::Low => format!(
            "Can take back up to {}% of outgoing salary + {}",
            percent(rules.low_band_multiplier)?,
            rules.flat_allowance.to_dollars(),
        ),
        MatchingBand::Middle => format!(
            "Can take back up to outgoing salary + {}",
            rules.middle_band_allowance.to_dollars(),
        ),
        MatchingBand::High => format!(
            "Can take back up to {}% of outgoing salary + {}",
            percent(rules.high_band_multiplier)?,
            rules.flat_allowance.to_dollars(),
        ),
    };
    Ok(text)
}

/// The band formula with `outgoing` filled in, e.g.
/// `($7,000,000.00 × 2) + $250,000.00`.
#[must_use]
pub fn formula_description(band: MatchingBand, outgoing: Amount, rules: &RuleConstants) -> String {
    match band {
        MatchingBand::Low => format!(
            "({} × {}) + {}",
            outgoing.to_dollars(),
            rules.low_band_multiplier.normalize(),
            rules.flat_allowance.to_dollars(),
        ),
        MatchingBand::Middle => format!(
            "{} + {}",
            outgoing.to_dollars(),
            rules.middle_band_allowance.to_dollars(),
        ),
        MatchingBand::High => format!(
            "({} × {}) + {}",
            outgoing.to_dollars(),
            rules.high_band_multiplier.normalize(),
            rules.flat_allowance.to_dollars(),
        ),
    }
}

fn band_limit(band: MatchingBand, outgoing: Amount, rules: &RuleConstants) -> Result<Amount> {
    let out = outgoing.value();
    let limit = match band {
        MatchingBand::Low => scaled_plus(out, rules.low_band_multiplier, rules.flat_allowance),
        MatchingBand::Middle => out.checked_add(rules.middle_band_allowance.value()),
        MatchingBand::High => scaled_plus(out, rules.high_band_multiplier, rules.flat_allowance),
    }
    .ok_or(TradeCheckError::ArithmeticOverflow {
        operation: "matching limit",
    })?;
    Amount::new(limit)
}

fn scaled_plus(outgoing: Decimal, multiplier: Decimal, allowance: Amount) -> Option<Decimal> {
    outgoing
        .checked_mul(multiplier)?
        .checked_add(allowance.value())
}

fn percent(multiplier: Decimal) -> Result<Decimal> {
    multiplier
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|p| p.normalize())
        .ok_or(TradeCheckError::ArithmeticOverflow {
            operation: "rule percentage",
        })
}
