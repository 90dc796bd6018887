//! Season-bound facade over the engine.

use tradecheck_rules::{absorb_with_policy, evaluate_legality};
use tradecheck_types::{
    AllocationResult, Amount, LeagueTeams, LegalityVerdict, Result, RuleConstants, TeamDirectory,
};

use crate::{EngineConfig, TradeAssessment, TradeProposal, assess_trade};

/// Holds one season's [`RuleConstants`] and a team directory, so callers
/// validate the constants once and then run any number of checks.
pub struct TradeChecker {
    rules: RuleConstants,
    teams: Box<dyn TeamDirectory>,
}

impl TradeChecker {
    /// Create a checker for `rules`, resolving names with [`LeagueTeams`].
    ///
    /// # Errors
    /// `InvalidRuleConstants` if `rules` fail validation.
    pub fn new(rules: RuleConstants) -> Result<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            teams: Box::new(LeagueTeams),
        })
    }

    /// Create a checker from a loaded config.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(config.rules.clone())
    }

    /// Replace the team directory.
    #[must_use]
    pub fn with_team_directory(mut self, teams: Box<dyn TeamDirectory>) -> Self {
        self.teams = teams;
        self
    }

    /// The season constants in use.
    #[must_use]
    pub fn rules(&self) -> &RuleConstants {
        &self.rules
    }

    /// Judge `incoming` against the matching limit for `outgoing`.
    pub fn evaluate(&self, outgoing: Amount, incoming: Amount) -> Result<LegalityVerdict> {
        evaluate_legality(outgoing, incoming, &self.rules)
    }

    /// Absorb `salaries` into `pool` with the season's tolerance and policy.
    #[must_use]
    pub fn absorb(&self, salaries: &[Amount], pool: Amount) -> AllocationResult {
        absorb_with_policy(
            salaries,
            pool,
            self.rules.absorption_tolerance,
            self.rules.absorption_policy,
        )
    }

    /// Assess a two-team trade.
    pub fn assess(&self, proposal: &TradeProposal) -> Result<TradeAssessment> {
        assess_trade(proposal, &self.rules, self.teams.as_ref())
    }
}

impl std::fmt::Debug for TradeChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeChecker")
            .field("season", &self.rules.season)
            .finish_non_exhaustive()
    }
}
