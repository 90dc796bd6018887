//! Two-sided trade assessment.
//!
//! Each team is judged on what it sends against what it takes back. A team
//! with a TPE or cap space first absorbs what it can of the incoming
//! package; only the remainder has to satisfy the matching bands.

use serde::{Deserialize, Serialize};
use tradecheck_rules::{absorb_with_policy, evaluate_legality};
use tradecheck_types::{
    AllocationResult, Amount, LegalityVerdict, Result, RuleConstants, TeamDirectory,
    TradeCheckError,
};

use crate::{TradeProposal, TradeSide};

/// How one side of the trade fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "verdict", rename_all = "snake_case")]
pub enum SideOutcome {
    /// No incoming salary is left after absorption, so no matching applies.
    NothingToMatch,
    /// The matching bands were applied.
    Evaluated(LegalityVerdict),
    /// Incoming salary needs matching but the side sends none out.
    InvalidOutgoing(LegalityVerdict),
}

impl SideOutcome {
    /// Whether this side satisfies the matching rules.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        match self {
            Self::NothingToMatch => true,
            Self::Evaluated(verdict) => verdict.legal,
            Self::InvalidOutgoing(_) => false,
        }
    }

    /// The verdict behind this outcome, if any.
    #[must_use]
    pub fn verdict(&self) -> Option<&LegalityVerdict> {
        match self {
            Self::NothingToMatch => None,
            Self::Evaluated(verdict) | Self::InvalidOutgoing(verdict) => Some(verdict),
        }
    }

    /// How much incoming salary this side must shed.
    #[must_use]
    pub fn shortfall(&self) -> Amount {
        self.verdict().map_or(Amount::ZERO, |v| v.shortfall)
    }
}

/// One team's view of the trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePerspective {
    /// Team code as given.
    pub team: String,
    /// Name resolved through the team directory.
    pub team_name: String,
    /// Total salary sent out.
    pub outgoing: Amount,
    /// Total salary received before absorption.
    pub gross_incoming: Amount,
    /// Absorption split, when the team has a pool.
    pub allocation: Option<AllocationResult>,
    /// Incoming salary that had to be matched.
    pub matched_incoming: Amount,
    pub outcome: SideOutcome,
}

/// Verdicts for both teams of a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAssessment {
    /// Season whose constants were applied.
    pub season: String,
    pub first: SidePerspective,
    pub second: SidePerspective,
}

impl TradeAssessment {
    /// The trade works only if it works for both teams.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.first.outcome.is_legal() && self.second.outcome.is_legal()
    }

    #[must_use]
    pub fn sides(&self) -> [&SidePerspective; 2] {
        [&self.first, &self.second]
    }
}

/// Assess a trade from both teams' perspectives.
///
/// ## Per side
///
/// 1. Incoming = counterparty's `sends`
/// 2. If the side has a pool, absorb incoming salaries into it (tolerance
///    and policy from `rules`); a side without a pool absorbs nothing
/// 3. Evaluate own outgoing total against the remaining incoming total
///
/// # Errors
/// `ArithmeticOverflow` if a salary total or limit leaves the decimal range.
/// A side that sends nothing but must match salary is reported as
/// [`SideOutcome::InvalidOutgoing`], not as an error.
pub fn assess_trade(
    proposal: &TradeProposal,
    rules: &RuleConstants,
    teams: &dyn TeamDirectory,
) -> Result<TradeAssessment> {
    let [first, second] = proposal.perspectives();
    let assessment = TradeAssessment {
        season: rules.season.clone(),
        first: assess_side(first.0, first.1, rules, teams)?,
        second: assess_side(second.0, second.1, rules, teams)?,
    };

    tracing::info!(
        season = %assessment.season,
        first = %assessment.first.team,
        second = %assessment.second.team,
        first_legal = assessment.first.outcome.is_legal(),
        second_legal = assessment.second.outcome.is_legal(),
        legal = assessment.is_legal(),
        "Trade assessed"
    );

    Ok(assessment)
}

fn assess_side(
    side: &TradeSide,
    counterparty: &TradeSide,
    rules: &RuleConstants,
    teams: &dyn TeamDirectory,
) -> Result<SidePerspective> {
    let outgoing = side.outgoing_total()?;
    let gross_incoming = counterparty.outgoing_total()?;

    let allocation = side.absorption_pool.map(|pool| {
        absorb_with_policy(
            &counterparty.sends,
            pool,
            rules.absorption_tolerance,
            rules.absorption_policy,
        )
    });
    let matched_incoming = match &allocation {
        Some(split) => split.remaining_salary()?,
        None => gross_incoming,
    };

    let outcome = if matched_incoming.is_zero() {
        SideOutcome::NothingToMatch
    } else {
        match evaluate_legality(outgoing, matched_incoming, rules) {
            Ok(verdict) => SideOutcome::Evaluated(verdict),
            Err(TradeCheckError::InvalidOutgoingSalary { .. }) => {
                SideOutcome::InvalidOutgoing(LegalityVerdict::invalid())
            }
            Err(err) => return Err(err),
        }
    };

    Ok(SidePerspective {
        team: side.team.clone(),
        team_name: teams.display_name(&side.team),
        outgoing,
        gross_incoming,
        allocation,
        matched_incoming,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use tradecheck_types::{AbsorptionPolicy, LeagueTeams, MatchingBand};

    use super::*;

    fn dollars(n: u64) -> Amount {
        Amount::from_dollars(n)
    }

    fn assess(proposal: &TradeProposal) -> TradeAssessment {
        assess_trade(proposal, &RuleConstants::default(), &LeagueTeams).unwrap()
    }

    #[test]
    fn straight_swap_is_judged_from_both_sides() {
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![dollars(7_000_000)]),
            TradeSide::new("BOS", vec![dollars(14_000_000)]),
        );
        let result = assess(&proposal);

        assert_eq!(result.first.team_name, "Charlotte Hornets");
        assert_eq!(result.second.team_name, "Boston Celtics");

        let cha = result.first.outcome.verdict().unwrap();
        assert!(cha.legal);
        assert_eq!(cha.limit, dollars(14_250_000));

        // Boston sends 14M and takes back 7M: saves salary.
        let bos = result.second.outcome.verdict().unwrap();
        assert!(bos.legal);
        assert_eq!(bos.band, Some(MatchingBand::Middle));
        assert!(result.is_legal());
    }

    #[test]
    fn one_illegal_side_makes_the_trade_illegal() {
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![dollars(7_000_000)]),
            TradeSide::new("BOS", vec![dollars(15_000_000)]),
        );
        let result = assess(&proposal);
        assert!(!result.first.outcome.is_legal());
        assert_eq!(result.first.outcome.shortfall(), dollars(750_000));
        assert!(result.second.outcome.is_legal());
        assert!(!result.is_legal());
    }

    #[test]
    fn pool_absorbs_before_matching() {
        // CHA has a 4M TPE: the 3M salary is absorbed, only 9M must match 5M out.
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![dollars(5_000_000)])
                .with_absorption_pool(dollars(4_000_000)),
            TradeSide::new("BOS", vec![dollars(9_000_000), dollars(3_000_000)]),
        );
        let result = assess(&proposal);

        let allocation = result.first.allocation.as_ref().unwrap();
        assert_eq!(allocation.absorbed, vec![dollars(3_000_000)]);
        assert_eq!(allocation.remaining, vec![dollars(9_000_000)]);
        assert_eq!(result.first.gross_incoming, dollars(12_000_000));
        assert_eq!(result.first.matched_incoming, dollars(9_000_000));
        assert!(result.first.outcome.is_legal());

        // BOS has no pool: nothing absorbed, sends 12M and takes 5M.
        assert!(result.second.allocation.is_none());
        assert_eq!(result.second.matched_incoming, dollars(5_000_000));
    }

    #[test]
    fn fully_absorbed_side_needs_no_matching() {
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![]).with_absorption_pool(dollars(10_000_000)),
            TradeSide::new("BOS", vec![dollars(6_000_000)]),
        );
        let result = assess(&proposal);
        assert_eq!(result.first.outcome, SideOutcome::NothingToMatch);
        assert_eq!(result.first.outgoing, Amount::ZERO);
        // BOS sends 6M, receives nothing.
        assert_eq!(result.second.outcome, SideOutcome::NothingToMatch);
        assert!(result.is_legal());
    }

    #[test]
    fn sending_nothing_without_a_pool_is_invalid() {
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![]),
            TradeSide::new("BOS", vec![dollars(6_000_000)]),
        );
        let result = assess(&proposal);
        assert_eq!(
            result.first.outcome,
            SideOutcome::InvalidOutgoing(LegalityVerdict::invalid())
        );
        assert!(!result.is_legal());
    }

    #[test]
    fn unknown_team_code_is_labelled() {
        let proposal = TradeProposal::new(
            TradeSide::new("zzz", vec![dollars(1_000_000)]),
            TradeSide::new("LAL", vec![dollars(1_000_000)]),
        );
        let result = assess(&proposal);
        assert_eq!(result.first.team_name, "[Unknown: ZZZ]");
        assert_eq!(result.second.team_name, "L.A. Lakers");
    }

    #[test]
    fn policy_comes_from_rules() {
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![dollars(1_000_000)])
                .with_absorption_pool(dollars(4_000_000)),
            TradeSide::new("BOS", vec![dollars(4_200_000), dollars(200_000)]),
        );
        let unclamped = RuleConstants {
            absorption_policy: AbsorptionPolicy::Unclamped,
            ..RuleConstants::default()
        };
        let result = assess_trade(&proposal, &unclamped, &LeagueTeams).unwrap();
        let allocation = result.first.allocation.unwrap();
        assert_eq!(allocation.remaining, vec![dollars(200_000)]);
        assert_eq!(result.first.matched_incoming, dollars(200_000));
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_string(&SideOutcome::NothingToMatch).unwrap();
        assert_eq!(json, r#"{"outcome":"nothing_to_match"}"#);
    }
}
